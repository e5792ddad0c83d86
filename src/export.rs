use chrono::SecondsFormat;

use crate::models::feedback::FeedbackRecord;

/// Renders the loaded result set as CSV, one row per record. Every cell is
/// quoted with embedded quotes doubled; message newlines are flattened to
/// spaces; timestamps are ISO-8601. Returns `None` for an empty set so the
/// caller can tell the user there is nothing to export.
pub fn feedback_csv(records: &[FeedbackRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(csv_row(&["Name", "Email", "Rating", "Message", "CreatedAt"]));

    for record in records {
        let rating = record.rating.to_string();
        let message = record.message.replace('\n', " ");
        let created = record
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        lines.push(csv_row(&[
            &record.name,
            record.email.as_deref().unwrap_or(""),
            &rating,
            &message,
            &created,
        ]));
    }

    Some(lines.join("\n"))
}

fn csv_row(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|cell| csv_cell(cell))
        .collect::<Vec<_>>()
        .join(",")
}

fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(name: &str, email: Option<&str>, message: &str, rating: i64) -> FeedbackRecord {
        FeedbackRecord {
            id: "fb-1".to_string(),
            name: name.to_string(),
            email: email.map(str::to_string),
            message: message.to_string(),
            rating,
            created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_set_exports_nothing() {
        assert_eq!(feedback_csv(&[]), None);
    }

    #[test]
    fn renders_header_and_quoted_cells() {
        let csv = feedback_csv(&[record("Alice", Some("a@example.com"), "Loved it", 5)]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"Name\",\"Email\",\"Rating\",\"Message\",\"CreatedAt\""
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"Alice\",\"a@example.com\",\"5\",\"Loved it\",\"2026-08-30T12:00:00.000Z\""
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn doubles_embedded_quotes() {
        let csv = feedback_csv(&[record("Al \"Big\" Co", None, "ok", 3)]).unwrap();
        assert!(csv.contains("\"Al \"\"Big\"\" Co\""));
    }

    #[test]
    fn flattens_message_newlines() {
        let csv = feedback_csv(&[record("Bob", None, "line one\nline two", 2)]).unwrap();
        assert!(csv.contains("\"line one line two\""));
        assert!(!csv.contains("one\nline"));
    }

    #[test]
    fn missing_email_renders_empty_cell() {
        let csv = feedback_csv(&[record("Bob", None, "ok", 4)]).unwrap();
        assert!(csv.contains("\"Bob\",\"\",\"4\""));
    }
}
