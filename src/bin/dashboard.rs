//! Terminal dashboard for the feedback API: stats tiles, filtered listing,
//! submission, and CSV export, all driven through `client::ApiClient`.

use std::path::PathBuf;
use std::process::exit;

use chrono::Utc;
use clap::{Parser, Subcommand};
use dotenv::dotenv;

use feedback_board::client::{ApiClient, ClientError};
use feedback_board::export::feedback_csv;
use feedback_board::models::feedback::{FeedbackFilter, FeedbackRecord};

#[derive(Debug, Parser)]
#[command(
    name = "feedback-dashboard",
    about = "Terminal dashboard for the feedback API",
    version
)]
struct Cli {
    /// API base URL. Falls back to FEEDBACK_API_URL, then localhost.
    #[arg(long, value_name = "url")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show aggregate statistics
    Stats,
    /// List feedback, optionally filtered
    List {
        /// Only show entries with this exact rating (1-5)
        #[arg(long)]
        rating: Option<i64>,
        /// Case-insensitive search over name, email and message
        #[arg(long, short)]
        query: Option<String>,
        /// Sort by creation time: "asc" or "desc"
        #[arg(long, default_value = "desc")]
        sort: String,
    },
    /// Submit a feedback entry
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        message: String,
        /// Rating from 1 to 5
        #[arg(long)]
        rating: i64,
    },
    /// Export the current result set as CSV
    Export {
        #[arg(long)]
        rating: Option<i64>,
        #[arg(long, short)]
        query: Option<String>,
        /// Output path; defaults to feedbacks_<timestamp>.csv
        #[arg(long, short, value_name = "path")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let base_url = cli
        .api_url
        .clone()
        .or_else(|| std::env::var("FEEDBACK_API_URL").ok())
        .unwrap_or_else(|| "http://localhost:5000/api".to_string());
    let client = ApiClient::new(base_url);

    if let Err(e) = run(&client, cli.command).await {
        eprintln!("Error: {e}");
        exit(1);
    }
}

async fn run(client: &ApiClient, command: Command) -> Result<(), ClientError> {
    match command {
        Command::Stats => {
            let stats = client.fetch_stats().await?;
            println!("Total feedbacks : {}", stats.total);
            println!("Average rating  : {}", stats.avg_rating);
            println!("Positive (4+)   : {}", stats.positive);
            println!("Negative (<3)   : {}", stats.negative);
        }
        Command::List {
            rating,
            query,
            sort,
        } => {
            let filter = FeedbackFilter {
                rating,
                q: query,
                sort: Some(sort),
            };
            let records = client.fetch_feedbacks(&filter).await?;
            print_table(&records);
        }
        Command::Submit {
            name,
            email,
            message,
            rating,
        } => {
            let record = client
                .post_feedback(&name, email.as_deref(), &message, rating)
                .await?;
            println!("Feedback submitted — thank you! (id {})", record.id);
        }
        Command::Export {
            rating,
            query,
            output,
        } => {
            let filter = FeedbackFilter {
                rating,
                q: query,
                sort: None,
            };
            let records = client.fetch_feedbacks(&filter).await?;
            match feedback_csv(&records) {
                None => println!("No feedback to export"),
                Some(csv) => {
                    let path = output.unwrap_or_else(|| {
                        PathBuf::from(format!(
                            "feedbacks_{}.csv",
                            Utc::now().format("%Y%m%dT%H%M%SZ")
                        ))
                    });
                    if let Err(e) = std::fs::write(&path, csv) {
                        eprintln!("Failed to write {}: {e}", path.display());
                        exit(1);
                    }
                    println!("Exported {} records to {}", records.len(), path.display());
                }
            }
        }
    }
    Ok(())
}

fn print_table(records: &[FeedbackRecord]) {
    if records.is_empty() {
        println!("No feedbacks yet.");
        return;
    }

    println!(
        "{:<20} {:<25} {:>6}  {:<16}  Message",
        "Name", "Email", "Rating", "Created At"
    );
    for record in records {
        println!(
            "{:<20} {:<25} {:>6}  {:<16}  {}",
            record.name,
            record.email.as_deref().unwrap_or("-"),
            record.rating,
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.message.replace('\n', " ")
        );
    }
    println!("\n{} record(s)", records.len());
}
