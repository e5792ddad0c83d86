pub mod admin_controller;
pub mod feedback_controller;
pub mod home_controller;
