use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    pub title: String,
    pub company: String,
    pub location: String,
    pub required_skills: Vec<String>,
    pub keywords: Vec<String>,
}

/// A job card on the dashboard's "suggested for you" rail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestion {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub match_score: u8,
    pub salary_range: String,
    pub posted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    pub content: String,
    pub generated_at: DateTime<Utc>,
}
