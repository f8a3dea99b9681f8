//! Compatibility scoring: how well a candidate's AI-derived profile fits a job posting.
//!
//! This is the single shared scorer behind both the ranking pass and the detail
//! endpoint. It is pure and never fails: missing data degrades to fixed partial
//! credit instead of an error.
//!
//! Score composition (max 100):
//! - skills overlap      40  (flat 25 when either skill list is empty)
//! - experience band     30  (flat 15 when level or experience is missing)
//! - work style          20  (flat 10 when either side is missing)
//! - goal resonance      10  (no fallback credit)
//!
//! A candidate with no AI profile yet scores the neutral 50.

use serde::{Deserialize, Serialize};

use crate::models::{AiProfile, CandidateProfile, JobPosting};

/// Score returned when the profile is unknown or the arithmetic goes wrong.
pub const NEUTRAL_SCORE: u32 = 50;
pub const MAX_SCORE: u32 = 100;

const SKILLS_WEIGHT: f64 = 40.0;
const SKILLS_FALLBACK: f64 = 25.0;
const EXPERIENCE_WEIGHT: f64 = 30.0;
const EXPERIENCE_FALLBACK: f64 = 15.0;
const WORK_STYLE_WEIGHT: f64 = 20.0;
const WORK_STYLE_FALLBACK: f64 = 10.0;
const GOALS_WEIGHT: f64 = 10.0;

/// Work-style buckets. Both sides must land in the same one.
const WORK_STYLE_SIGNALS: &[&str] = &["remote", "office"];

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Per-component view of a compatibility score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub overall_score: u32, // 0 – 100
    /// False when the candidate had no AI profile and the neutral score was used.
    pub profile_present: bool,
    pub skills: f64,
    pub experience: f64,
    pub work_style: f64,
    pub goals: f64,
    /// Job skills covered by at least one candidate skill.
    pub matched_skills: Vec<String>,
    /// Job skills no candidate skill covers.
    pub missing_skills: Vec<String>,
}

impl ScoreBreakdown {
    fn neutral() -> Self {
        Self {
            overall_score: NEUTRAL_SCORE,
            profile_present: false,
            skills: 0.0,
            experience: 0.0,
            work_style: 0.0,
            goals: 0.0,
            matched_skills: vec![],
            missing_skills: vec![],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The compatibility scorer trait. A higher-fidelity matcher (taxonomy or
/// embedding based) can replace the heuristic one behind this seam without
/// touching the ranking code or the handlers.
///
/// Carried in `AppState` as `Arc<dyn CompatibilityScorer>`.
pub trait CompatibilityScorer: Send + Sync {
    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> ScoreBreakdown;

    /// Short label identifying the implementation, surfaced in API responses.
    fn backend(&self) -> &'static str;
}

/// Case-insensitive substring heuristics. Fast, deterministic, no external calls.
pub struct HeuristicScorer;

impl CompatibilityScorer for HeuristicScorer {
    fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> ScoreBreakdown {
        score_breakdown(candidate, job)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring
// ────────────────────────────────────────────────────────────────────────────

/// Returns the 0–100 compatibility score for a candidate against a posting.
pub fn compatibility_score(candidate: &CandidateProfile, job: &JobPosting) -> u32 {
    score_breakdown(candidate, job).overall_score
}

/// Scores a candidate against a posting and keeps every component.
pub fn score_breakdown(candidate: &CandidateProfile, job: &JobPosting) -> ScoreBreakdown {
    let Some(profile) = candidate.ai_profile.as_ref() else {
        return ScoreBreakdown::neutral();
    };

    let (skills, matched_skills, missing_skills) = skills_component(profile, job);
    let experience = experience_component(profile, job);
    let work_style = work_style_component(profile, job);
    let goals = goals_component(profile, job);

    ScoreBreakdown {
        overall_score: finalize(skills + experience + work_style + goals),
        profile_present: true,
        skills,
        experience,
        work_style,
        goals,
        matched_skills,
        missing_skills,
    }
}

/// Rounds the raw sum, caps it at 100 and replaces NaN with the neutral score.
fn finalize(raw: f64) -> u32 {
    if raw.is_nan() {
        return NEUTRAL_SCORE;
    }
    raw.round().clamp(0.0, MAX_SCORE as f64) as u32
}

fn skills_component(profile: &AiProfile, job: &JobPosting) -> (f64, Vec<String>, Vec<String>) {
    // Blank skills neither count toward the total nor match anything.
    let job_skills: Vec<&String> = job.skills.iter().filter(|s| !is_blank(s)).collect();
    let candidate_skills: Vec<String> = profile
        .skills
        .iter()
        .filter(|s| !is_blank(s))
        .map(|s| s.to_lowercase())
        .collect();

    if job_skills.is_empty() || candidate_skills.is_empty() {
        return (SKILLS_FALLBACK, vec![], vec![]);
    }

    let total = job_skills.len();
    let (matched, missing): (Vec<String>, Vec<String>) = job_skills
        .into_iter()
        .cloned()
        .partition(|skill| skill_covered(&skill.to_lowercase(), &candidate_skills));

    let fraction = matched.len() as f64 / total as f64;
    (fraction * SKILLS_WEIGHT, matched, missing)
}

/// A job skill is covered when it and some candidate skill contain one another,
/// so "react" covers "react.js" and vice versa. Inputs are lower-cased.
fn skill_covered(job_skill: &str, candidate_skills: &[String]) -> bool {
    candidate_skills
        .iter()
        .any(|cs| cs.contains(job_skill) || job_skill.contains(cs.as_str()))
}

fn experience_component(profile: &AiProfile, job: &JobPosting) -> f64 {
    let years = profile.experience_years();
    match present(&job.experience_level) {
        Some(level) if years > 0 => {
            if experience_band_holds(level, years) {
                EXPERIENCE_WEIGHT
            } else {
                0.0
            }
        }
        _ => EXPERIENCE_FALLBACK,
    }
}

/// True when the level label names a band whose year range contains `years`.
fn experience_band_holds(level: &str, years: usize) -> bool {
    let level = level.to_lowercase();
    (level.contains("entry") && years <= 2)
        || (level.contains("junior") && years <= 3)
        || (level.contains("mid") && (2..=5).contains(&years))
        || (level.contains("senior") && years >= 5)
}

fn work_style_component(profile: &AiProfile, job: &JobPosting) -> f64 {
    match (present(&job.employment_type), present(&profile.work_style)) {
        (Some(employment), Some(style)) => {
            let employment = employment.to_lowercase();
            let style = style.to_lowercase();
            let aligned = WORK_STYLE_SIGNALS
                .iter()
                .any(|signal| employment.contains(signal) && style.contains(signal));
            if aligned {
                WORK_STYLE_WEIGHT
            } else {
                0.0
            }
        }
        _ => WORK_STYLE_FALLBACK,
    }
}

fn goals_component(profile: &AiProfile, job: &JobPosting) -> f64 {
    let (Some(description), Some(goals)) =
        (present(&job.description), present(&profile.career_goals))
    else {
        return 0.0;
    };

    let description = description.to_lowercase();
    let goals = goals.to_lowercase();

    let goal_in_description = first_token(&goals).is_some_and(|token| description.contains(token));
    let title_in_goals = present(&job.title).is_some_and(|title| {
        let title = title.to_lowercase();
        first_token(&title).is_some_and(|token| goals.contains(token))
    });

    if goal_in_description || title_in_goals {
        GOALS_WEIGHT
    } else {
        0.0
    }
}

fn first_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Optional text counts only when it holds something other than whitespace.
fn present(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|s| !is_blank(s))
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
