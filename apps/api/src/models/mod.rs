pub mod analysis;
pub mod file;
pub mod job;
pub mod onboarding;
pub mod user;
