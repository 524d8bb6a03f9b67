use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scores at or above this are a "Great Fit".
pub const GREAT_FIT_THRESHOLD: u8 = 85;
/// Scores at or above this (and below `GREAT_FIT_THRESHOLD`) are a "Possible Fit".
pub const POSSIBLE_FIT_THRESHOLD: u8 = 70;

/// Three-valued classification of how well a résumé matches a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitLevel {
    #[serde(rename = "Not Fit")]
    NotFit,
    #[serde(rename = "Possible Fit")]
    PossibleFit,
    #[serde(rename = "Great Fit")]
    GreatFit,
}

impl FitLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= GREAT_FIT_THRESHOLD => FitLevel::GreatFit,
            s if s >= POSSIBLE_FIT_THRESHOLD => FitLevel::PossibleFit,
            _ => FitLevel::NotFit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FitLevel::NotFit => "Not Fit",
            FitLevel::PossibleFit => "Possible Fit",
            FitLevel::GreatFit => "Great Fit",
        }
    }
}

/// A scored résumé/job pairing.
///
/// Scores are clamped to `0..=100` and the fit level is derived from the match
/// score at construction, so the two can never disagree. There are no setters:
/// an analysis is immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub id: Uuid,
    pub resume_name: String,
    pub job_title: String,
    match_score: u8,
    ats_score: u8,
    fit_level: FitLevel,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ResumeAnalysis {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        resume_name: impl Into<String>,
        job_title: impl Into<String>,
        match_score: u8,
        ats_score: u8,
        missing_keywords: Vec<String>,
        suggestions: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let match_score = match_score.min(100);
        Self {
            id,
            resume_name: resume_name.into(),
            job_title: job_title.into(),
            match_score,
            ats_score: ats_score.min(100),
            fit_level: FitLevel::from_score(match_score),
            missing_keywords,
            suggestions,
            created_at,
        }
    }

    pub fn match_score(&self) -> u8 {
        self.match_score
    }

    pub fn ats_score(&self) -> u8 {
        self.ats_score
    }

    pub fn fit_level(&self) -> FitLevel {
        self.fit_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(match_score: u8, ats_score: u8) -> ResumeAnalysis {
        ResumeAnalysis::new(
            Uuid::new_v4(),
            "resume.pdf",
            "Backend Engineer",
            match_score,
            ats_score,
            vec![],
            vec![],
            Utc::now(),
        )
    }

    #[test]
    fn test_fit_level_boundaries() {
        assert_eq!(FitLevel::from_score(0), FitLevel::NotFit);
        assert_eq!(FitLevel::from_score(69), FitLevel::NotFit);
        assert_eq!(FitLevel::from_score(70), FitLevel::PossibleFit);
        assert_eq!(FitLevel::from_score(84), FitLevel::PossibleFit);
        assert_eq!(FitLevel::from_score(85), FitLevel::GreatFit);
        assert_eq!(FitLevel::from_score(100), FitLevel::GreatFit);
    }

    #[test]
    fn test_fit_level_serializes_with_display_labels() {
        for level in [FitLevel::NotFit, FitLevel::PossibleFit, FitLevel::GreatFit] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.label()));
        }
    }

    #[test]
    fn test_constructor_derives_fit_level() {
        assert_eq!(analysis(91, 95).fit_level(), FitLevel::GreatFit);
        assert_eq!(analysis(72, 80).fit_level(), FitLevel::PossibleFit);
        assert_eq!(analysis(65, 70).fit_level(), FitLevel::NotFit);
    }

    #[test]
    fn test_constructor_clamps_scores() {
        let a = analysis(250, 101);
        assert_eq!(a.match_score(), 100);
        assert_eq!(a.ats_score(), 100);
        assert_eq!(a.fit_level(), FitLevel::GreatFit);
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let value = serde_json::to_value(analysis(78, 88)).unwrap();
        assert_eq!(value["matchScore"], 78);
        assert_eq!(value["atsScore"], 88);
        assert_eq!(value["fitLevel"], "Possible Fit");
        assert!(value.get("resumeName").is_some());
        assert!(value.get("missingKeywords").is_some());
    }
}
