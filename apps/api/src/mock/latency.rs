//! Artificial per-operation delay so the UI exercises its loading states.

use std::time::Duration;

use tracing::debug;

/// One variant per mock operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Register,
    ResetPassword,
    SaveOnboarding,
    UploadResume,
    ParseJobDescription,
    MatchScore,
    CoverLetter,
    JobSuggestions,
    AnalysisHistory,
    UpdateProfile,
    UploadAvatar,
}

impl Operation {
    #[cfg(test)]
    pub const ALL: [Operation; 12] = [
        Operation::Login,
        Operation::Register,
        Operation::ResetPassword,
        Operation::SaveOnboarding,
        Operation::UploadResume,
        Operation::ParseJobDescription,
        Operation::MatchScore,
        Operation::CoverLetter,
        Operation::JobSuggestions,
        Operation::AnalysisHistory,
        Operation::UpdateProfile,
        Operation::UploadAvatar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::Register => "register",
            Operation::ResetPassword => "reset_password",
            Operation::SaveOnboarding => "save_onboarding_data",
            Operation::UploadResume => "upload_resume",
            Operation::ParseJobDescription => "parse_job_description",
            Operation::MatchScore => "get_match_score",
            Operation::CoverLetter => "generate_cover_letter",
            Operation::JobSuggestions => "get_job_suggestions",
            Operation::AnalysisHistory => "get_analysis_history",
            Operation::UpdateProfile => "update_profile",
            Operation::UploadAvatar => "upload_avatar",
        }
    }

    /// Unscaled delay. Each operation has its own value between 1 and 3 seconds.
    pub fn base_delay(self) -> Duration {
        let millis = match self {
            Operation::Login => 1000,
            Operation::Register => 1500,
            Operation::ResetPassword => 1200,
            Operation::SaveOnboarding => 1100,
            Operation::UploadResume => 2000,
            Operation::ParseJobDescription => 1800,
            Operation::MatchScore => 3000,
            Operation::CoverLetter => 2500,
            Operation::JobSuggestions => 1300,
            Operation::AnalysisHistory => 1400,
            Operation::UpdateProfile => 1600,
            Operation::UploadAvatar => 1700,
        };
        Duration::from_millis(millis)
    }
}

/// Multiplier applied to every base delay. `0.0` turns the delays off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    scale: f64,
}

impl Default for Latency {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Latency {
    /// Non-finite or negative scales are treated as zero.
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            0.0
        };
        Self { scale }
    }

    #[cfg(test)]
    pub fn none() -> Self {
        Self { scale: 0.0 }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Saturates at `Duration::MAX` instead of overflowing.
    pub fn delay_for(&self, op: Operation) -> Duration {
        Duration::try_from_secs_f64(op.base_delay().as_secs_f64() * self.scale)
            .unwrap_or(Duration::MAX)
    }

    pub async fn wait(&self, op: Operation) {
        let delay = self.delay_for(op);
        if !delay.is_zero() {
            debug!(
                operation = op.name(),
                delay_ms = delay.as_millis() as u64,
                "Simulating backend latency"
            );
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_delays_are_distinct_and_in_range() {
        let delays: HashSet<Duration> = Operation::ALL.iter().map(|op| op.base_delay()).collect();
        assert_eq!(delays.len(), Operation::ALL.len());
        for delay in delays {
            assert!(delay >= Duration::from_secs(1) && delay <= Duration::from_secs(3));
        }
    }

    #[test]
    fn test_scale_applies_to_every_operation() {
        let half = Latency::new(0.5);
        assert_eq!(half.delay_for(Operation::Login), Duration::from_millis(500));
        assert_eq!(half.delay_for(Operation::MatchScore), Duration::from_millis(1500));
    }

    #[test]
    fn test_invalid_scales_disable_delay() {
        for scale in [-1.0, f64::NAN, f64::INFINITY, 0.0] {
            assert!(Latency::new(scale).delay_for(Operation::Login).is_zero());
        }
    }

    #[test]
    fn test_oversized_scale_saturates() {
        let delay = Latency::new(1e20).delay_for(Operation::Login);
        assert_eq!(delay, Duration::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_sleeps_for_scaled_delay() {
        let start = tokio::time::Instant::now();
        Latency::default().wait(Operation::CoverLetter).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2500) && elapsed < Duration::from_millis(2510));
    }

    #[tokio::test(start_paused = true)]
    async fn test_none_returns_immediately() {
        let start = tokio::time::Instant::now();
        Latency::none().wait(Operation::MatchScore).await;
        assert!(start.elapsed().is_zero());
    }
}
