use chrono::{DateTime, NaiveDate};

/// A video record as the backend owns it.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntity {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub visibility: String,
    #[serde(alias = "video", default)]
    pub media_url: String,
    #[serde(default)]
    pub date: String,
    #[serde(alias = "duration", default)]
    pub duration_minutes: f64,
    #[serde(alias = "views", default)]
    pub view_count: u64,
}

impl VideoEntity {
    /// Whole minutes without a fraction, otherwise as sent.
    pub fn display_duration(&self) -> String {
        format!("{} Mins", self.duration_minutes)
    }

    /// Upload date as `YYYY-MM-DD` if it parses, the raw value otherwise.
    pub fn display_date(&self) -> String {
        if let Ok(datetime) = DateTime::parse_from_rfc3339(&self.date) {
            return datetime.date_naive().format("%Y-%m-%d").to_string();
        }

        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_or_else(|_| self.date.clone(), |date| date.format("%Y-%m-%d").to_string())
    }
}
