//! Market Research Analyst self-assessment: question bank, section runners, scoring
//! and the stage machine that ties them together.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
