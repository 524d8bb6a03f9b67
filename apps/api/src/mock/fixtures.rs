//! Canned records returned by the mock service.
//!
//! These are fixtures for UI development. None of them are derived from
//! user input and none of them say anything about a real résumé or job.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::analysis::ResumeAnalysis;
use crate::models::job::{JobDescription, JobSuggestion};
use crate::models::user::User;

pub const DEMO_EMAIL: &str = "demo@hiremate.me";
pub const DEMO_PASSWORD: &str = "password";
pub const DEMO_AVATAR_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=hiremate-demo";
const DEMO_USER_ID: u128 = 0x6f1c_2d3e_4a5b_4c6d_8e7f_9a0b_1c2d_3e4f;

pub const RESET_PASSWORD_MESSAGE: &str =
    "If an account exists for that email, a password reset link has been sent.";

/// Display name given to the résumé a fresh match-score run refers to.
pub const CURRENT_RESUME_NAME: &str = "My Resume";

/// 2024-01-15T10:30:00Z
const DEMO_CREATED_AT: i64 = 1_705_314_600;

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn demo_user() -> User {
    User {
        id: Uuid::from_u128(DEMO_USER_ID),
        email: DEMO_EMAIL.to_string(),
        full_name: "Demo User".to_string(),
        avatar_url: Some(DEMO_AVATAR_URL.to_string()),
        created_at: at(DEMO_CREATED_AT),
    }
}

/// The three postings the job parser picks from.
pub fn job_catalog() -> Vec<JobDescription> {
    vec![
        JobDescription {
            title: "Senior Frontend Developer".to_string(),
            company: "TechCorp Inc.".to_string(),
            location: "San Francisco, CA (Remote)".to_string(),
            required_skills: strings(&["React", "TypeScript", "Node.js", "GraphQL", "AWS"]),
            keywords: strings(&[
                "frontend",
                "react",
                "typescript",
                "performance",
                "accessibility",
                "testing",
            ]),
        },
        JobDescription {
            title: "Full Stack Engineer".to_string(),
            company: "StartupXYZ".to_string(),
            location: "New York, NY".to_string(),
            required_skills: strings(&["Python", "Django", "React", "PostgreSQL", "Docker"]),
            keywords: strings(&[
                "full stack",
                "python",
                "api design",
                "databases",
                "startup",
                "agile",
            ]),
        },
        JobDescription {
            title: "Product Designer".to_string(),
            company: "DesignStudio".to_string(),
            location: "Austin, TX".to_string(),
            required_skills: strings(&[
                "Figma",
                "User Research",
                "Prototyping",
                "Design Systems",
                "Adobe Creative Suite",
            ]),
            keywords: strings(&[
                "ux",
                "ui",
                "user research",
                "wireframes",
                "usability testing",
                "collaboration",
            ]),
        },
    ]
}

pub fn missing_keywords() -> Vec<String> {
    strings(&["GraphQL", "Docker", "Kubernetes", "CI/CD", "Agile methodology"])
}

pub fn match_suggestions() -> Vec<String> {
    strings(&[
        "Add quantifiable achievements to your experience section",
        "Include more keywords from the job description",
        "Highlight your experience with cloud platforms",
        "Add a professional summary tailored to this role",
    ])
}

pub fn job_suggestions() -> Vec<JobSuggestion> {
    let rows: [(u128, &str, &str, &str, u8, &str, &str); 5] = [
        (1, "Frontend Engineer", "Vercel", "Remote", 92, "$130k - $160k", "2 days ago"),
        (2, "React Developer", "Shopify", "Toronto, ON", 88, "$110k - $140k", "1 week ago"),
        (3, "Software Engineer II", "Stripe", "Seattle, WA", 85, "$150k - $190k", "3 days ago"),
        (4, "UI Engineer", "Airbnb", "San Francisco, CA", 81, "$140k - $175k", "5 days ago"),
        (5, "Full Stack Developer", "Notion", "New York, NY", 77, "$125k - $155k", "Just now"),
    ];
    rows.into_iter()
        .map(
            |(n, title, company, location, match_score, salary_range, posted)| JobSuggestion {
                id: Uuid::from_u128(0x5000 + n),
                title: title.to_string(),
                company: company.to_string(),
                location: location.to_string(),
                match_score,
                salary_range: salary_range.to_string(),
                posted: posted.to_string(),
            },
        )
        .collect()
}

pub fn analysis_history() -> Vec<ResumeAnalysis> {
    let rows: [(u128, &str, &str, u8, u8, i64); 4] = [
        (1, "Resume_2024_Frontend.pdf", "Senior Frontend Developer", 91, 94, 1_705_314_600),
        (2, "Resume_2024_Frontend.pdf", "Full Stack Engineer", 78, 85, 1_705_055_400),
        (3, "Resume_General.docx", "Product Designer", 65, 72, 1_704_709_800),
        (4, "Resume_General.docx", "React Developer", 84, 90, 1_704_364_200),
    ];
    rows.into_iter()
        .map(|(n, resume_name, job_title, match_score, ats_score, created)| {
            ResumeAnalysis::new(
                Uuid::from_u128(0xA000 + n),
                resume_name,
                job_title,
                match_score,
                ats_score,
                missing_keywords(),
                match_suggestions(),
                at(created),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::FitLevel;

    #[test]
    fn test_catalog_has_three_distinct_jobs() {
        let jobs = job_catalog();
        assert_eq!(jobs.len(), 3);
        assert_ne!(jobs[0], jobs[1]);
        assert_ne!(jobs[1], jobs[2]);
        assert!(jobs.iter().all(|j| j.required_skills.len() >= 2));
    }

    #[test]
    fn test_five_suggestions_with_unique_ids() {
        let suggestions = job_suggestions();
        assert_eq!(suggestions.len(), 5);
        let mut ids: Vec<Uuid> = suggestions.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_history_has_four_consistent_records() {
        let history = analysis_history();
        assert_eq!(history.len(), 4);
        for analysis in &history {
            assert_eq!(
                analysis.fit_level(),
                FitLevel::from_score(analysis.match_score())
            );
            assert!(analysis.ats_score() <= 100);
        }
    }

    #[test]
    fn test_history_is_newest_first() {
        let history = analysis_history();
        assert!(history
            .windows(2)
            .all(|pair| pair[0].created_at > pair[1].created_at));
    }

    #[test]
    fn test_demo_user_is_stable() {
        assert_eq!(demo_user(), demo_user());
        assert_eq!(demo_user().email, DEMO_EMAIL);
    }
}
