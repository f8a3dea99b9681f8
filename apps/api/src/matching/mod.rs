// Candidate–job matching: the shared compatibility scorer and its consumers.
// Every consumer scores through `compatibility::CompatibilityScorer`.

pub mod compatibility;
pub mod handlers;
pub mod ranking;
pub mod strength;
