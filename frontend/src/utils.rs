use chrono::{DateTime, Local, Utc};

pub fn format_fetched_at(fetched_at: &DateTime<Utc>) -> String {
    fetched_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
