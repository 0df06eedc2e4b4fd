pub mod analysis;
pub mod auth;
pub mod health;
pub mod jobs;
pub mod recruiter;
