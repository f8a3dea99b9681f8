//! JobMatch: candidate–job compatibility scoring for the job-seeker dashboard.
//!
//! The scorer in [`matching::compatibility`] is the one shared implementation;
//! ranking and the HTTP handlers are thin consumers of it.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod routes;
pub mod state;
