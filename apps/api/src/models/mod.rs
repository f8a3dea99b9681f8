pub mod job;
pub mod lenient;
pub mod profile;

pub use job::JobPosting;
pub use profile::{AiProfile, CandidateProfile};
