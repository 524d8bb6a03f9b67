//! Match-score fixture generator.
//!
//! This is NOT a scoring model. It draws a score from a fixed set so the
//! results screen can be exercised at every fit level. The résumé text is
//! never looked at.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::mock::fixtures::{match_suggestions, missing_keywords, CURRENT_RESUME_NAME};
use crate::models::analysis::ResumeAnalysis;
use crate::models::job::JobDescription;

/// Possible match scores: one NotFit, three PossibleFit, one GreatFit.
pub const MATCH_SCORES: [u8; 5] = [65, 72, 78, 84, 91];
/// Largest bonus the ATS score gets over the match score.
pub const ATS_BONUS_MAX: u8 = 14;
pub const ATS_CEILING: u8 = 95;

pub fn ats_score_for(match_score: u8, bonus: u8) -> u8 {
    match_score
        .saturating_add(bonus.min(ATS_BONUS_MAX))
        .min(ATS_CEILING)
}

/// Returns `(match_score, ats_score)`.
pub fn draw_scores<R: Rng>(rng: &mut R) -> (u8, u8) {
    let match_score = *MATCH_SCORES.choose(rng).unwrap_or(&MATCH_SCORES[0]);
    let bonus = rng.gen_range(0..=ATS_BONUS_MAX);
    (match_score, ats_score_for(match_score, bonus))
}

pub fn fixture_analysis<R: Rng>(rng: &mut R, job: &JobDescription) -> ResumeAnalysis {
    let (match_score, ats_score) = draw_scores(rng);
    ResumeAnalysis::new(
        Uuid::new_v4(),
        CURRENT_RESUME_NAME,
        job.title.clone(),
        match_score,
        ats_score,
        missing_keywords(),
        match_suggestions(),
        Utc::now(),
    )
}
