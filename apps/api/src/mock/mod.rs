//! Mock service layer. Stands in for the HireMate backend during UI development.
//!
//! `HireMateService` is the seam: handlers only see `Arc<dyn HireMateService>`,
//! so a real backend can replace `MockService` without touching them.
//!
//! Everything `MockService` returns is a fixture. Scores, parsed jobs and
//! résumé text are canned or drawn at random and say nothing about the input.
//! Only `login` and `upload_resume` can fail.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub mod fixtures;
pub mod latency;
pub mod scoring;
pub mod templates;

use crate::models::analysis::ResumeAnalysis;
use crate::models::file::{AvatarRef, FileDescriptor, ResumeText};
use crate::models::job::{CoverLetter, JobDescription, JobSuggestion};
use crate::models::onboarding::OnboardingData;
use crate::models::user::{ProfileUpdate, User};
use crate::validation::rules::{check_resume_file, FileRejection};

use self::fixtures::{DEMO_EMAIL, DEMO_PASSWORD, RESET_PASSWORD_MESSAGE};
use self::latency::{Latency, Operation};

/// The two failures the mock can report. Display strings go to the UI as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    FileRejected(#[from] FileRejection),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Operations the UI calls. Success-only operations still return
/// `ServiceResult` so a real implementation can add failure modes later.
#[async_trait]
pub trait HireMateService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> ServiceResult<User>;

    async fn register(&self, email: &str, password: &str, full_name: &str) -> ServiceResult<User>;

    async fn reset_password(&self, email: &str) -> ServiceResult<String>;

    async fn save_onboarding_data(&self, data: &OnboardingData) -> ServiceResult<()>;

    async fn upload_resume(&self, file: &FileDescriptor) -> ServiceResult<ResumeText>;

    async fn parse_job_description(
        &self,
        text: &str,
        linkedin_url: Option<&str>,
    ) -> ServiceResult<JobDescription>;

    async fn get_match_score(
        &self,
        resume_text: &str,
        job: &JobDescription,
    ) -> ServiceResult<ResumeAnalysis>;

    async fn generate_cover_letter(
        &self,
        job: &JobDescription,
        resume_text: &str,
    ) -> ServiceResult<CoverLetter>;

    async fn get_job_suggestions(&self) -> ServiceResult<Vec<JobSuggestion>>;

    async fn get_analysis_history(&self) -> ServiceResult<Vec<ResumeAnalysis>>;

    async fn update_profile(&self, data: &ProfileUpdate) -> ServiceResult<()>;

    async fn upload_avatar(&self, file: &FileDescriptor) -> ServiceResult<AvatarRef>;
}

/// Fixture-backed implementation. Holds no mutable state; concurrent calls
/// never observe each other.
#[derive(Debug, Clone)]
pub struct MockService {
    latency: Latency,
    avatar_ttl: Duration,
}

impl MockService {
    pub fn new(latency: Latency, avatar_ttl: Duration) -> Self {
        Self {
            latency,
            avatar_ttl,
        }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }
}

#[async_trait]
impl HireMateService for MockService {
    async fn login(&self, email: &str, password: &str) -> ServiceResult<User> {
        self.latency.wait(Operation::Login).await;
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            info!("Demo login accepted");
            Ok(fixtures::demo_user())
        } else {
            warn!(email, "Login rejected");
            Err(ServiceError::InvalidCredentials)
        }
    }

    async fn register(&self, email: &str, _password: &str, full_name: &str) -> ServiceResult<User> {
        self.latency.wait(Operation::Register).await;
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            avatar_url: None,
            created_at: Utc::now(),
        };
        info!(user_id = %user.id, "Registered mock user");
        Ok(user)
    }

    async fn reset_password(&self, _email: &str) -> ServiceResult<String> {
        self.latency.wait(Operation::ResetPassword).await;
        Ok(RESET_PASSWORD_MESSAGE.to_string())
    }

    async fn save_onboarding_data(&self, data: &OnboardingData) -> ServiceResult<()> {
        self.latency.wait(Operation::SaveOnboarding).await;
        debug!(
            industry = %data.industry,
            goals = data.user_goals.len(),
            "Onboarding data acknowledged, not stored"
        );
        Ok(())
    }

    async fn upload_resume(&self, file: &FileDescriptor) -> ServiceResult<ResumeText> {
        self.latency.wait(Operation::UploadResume).await;
        if let Err(rejection) = check_resume_file(file) {
            warn!(file = %file.name, size = file.size, mime = %file.mime_type, "Resume rejected: {rejection}");
            return Err(rejection.into());
        }
        info!(file = %file.name, size = file.size, "Resume accepted");
        Ok(ResumeText {
            file_name: file.name.clone(),
            text: templates::synthesize_resume_text(&file.name),
        })
    }

    async fn parse_job_description(
        &self,
        _text: &str,
        _linkedin_url: Option<&str>,
    ) -> ServiceResult<JobDescription> {
        self.latency.wait(Operation::ParseJobDescription).await;
        let catalog = fixtures::job_catalog();
        let job = catalog
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| catalog[0].clone());
        debug!(title = %job.title, "Picked job fixture");
        Ok(job)
    }

    async fn get_match_score(
        &self,
        _resume_text: &str,
        job: &JobDescription,
    ) -> ServiceResult<ResumeAnalysis> {
        self.latency.wait(Operation::MatchScore).await;
        let analysis = scoring::fixture_analysis(&mut rand::thread_rng(), job);
        debug!(
            match_score = analysis.match_score(),
            ats_score = analysis.ats_score(),
            fit = analysis.fit_level().label(),
            "Drew match score fixture"
        );
        Ok(analysis)
    }

    async fn generate_cover_letter(
        &self,
        job: &JobDescription,
        _resume_text: &str,
    ) -> ServiceResult<CoverLetter> {
        self.latency.wait(Operation::CoverLetter).await;
        Ok(CoverLetter {
            content: templates::render_cover_letter(job),
            generated_at: Utc::now(),
        })
    }

    async fn get_job_suggestions(&self) -> ServiceResult<Vec<JobSuggestion>> {
        self.latency.wait(Operation::JobSuggestions).await;
        Ok(fixtures::job_suggestions())
    }

    async fn get_analysis_history(&self) -> ServiceResult<Vec<ResumeAnalysis>> {
        self.latency.wait(Operation::AnalysisHistory).await;
        Ok(fixtures::analysis_history())
    }

    async fn update_profile(&self, _data: &ProfileUpdate) -> ServiceResult<()> {
        self.latency.wait(Operation::UpdateProfile).await;
        Ok(())
    }

    async fn upload_avatar(&self, file: &FileDescriptor) -> ServiceResult<AvatarRef> {
        self.latency.wait(Operation::UploadAvatar).await;
        let issued_at = Utc::now();
        Ok(AvatarRef {
            url: format!("session://avatars/{}/{}", Uuid::new_v4(), file.name),
            issued_at,
            expires_at: issued_at + self.avatar_ttl,
        })
    }
}
