// AI draft generation pipeline.
// Implements: prompt assembly, section parsing, keyword extraction, orchestration.
// All provider calls go through the capability traits in `providers` — no
// direct vendor calls here.

pub mod generator;
pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod sections;
pub mod tone;
