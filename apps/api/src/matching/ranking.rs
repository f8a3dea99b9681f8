//! Ranking pass. Scores a loaded list of postings for one candidate, filters
//! by a minimum score and orders best-first.

use serde::Serialize;
use tracing::debug;

use crate::matching::compatibility::CompatibilityScorer;
use crate::matching::strength::{MatchStrength, GOOD_MATCH_THRESHOLD};
use crate::models::{CandidateProfile, JobPosting};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankOptions {
    /// Postings scoring below this are dropped. `None` keeps everything.
    pub min_score: Option<u32>,
    /// Maximum number of results after filtering and sorting.
    pub limit: Option<usize>,
}

impl RankOptions {
    /// Only postings that would carry a badge (score ≥ 60).
    pub fn badged_only() -> Self {
        Self {
            min_score: Some(GOOD_MATCH_THRESHOLD),
            limit: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedPosting {
    pub job: JobPosting,
    pub score: u32,
    pub strength: MatchStrength,
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedPostings {
    pub results: Vec<RankedPosting>,
    /// Postings scored.
    pub total_considered: usize,
    /// Postings that passed `min_score`, before `limit` was applied.
    pub total_matched: usize,
}

/// Scores every posting, filters by `min_score`, sorts by score descending and
/// truncates to `limit`. Postings with equal scores keep their input order.
pub fn rank_postings(
    scorer: &dyn CompatibilityScorer,
    candidate: &CandidateProfile,
    postings: Vec<JobPosting>,
    options: &RankOptions,
) -> RankedPostings {
    let total_considered = postings.len();
    let min_score = options.min_score.unwrap_or(0);

    let mut results: Vec<RankedPosting> = postings
        .into_iter()
        .filter_map(|job| {
            let score = scorer.score(candidate, &job).overall_score;
            if score < min_score {
                return None;
            }
            let strength = MatchStrength::from_score(score);
            Some(RankedPosting {
                job,
                score,
                strength,
                badge: strength.badge(),
            })
        })
        .collect();

    // sort_by is stable: ties stay in listing order
    results.sort_by(|a, b| b.score.cmp(&a.score));

    let total_matched = results.len();
    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    debug!(
        total_considered,
        total_matched,
        returned = results.len(),
        min_score,
        backend = scorer.backend(),
        "Ranked job postings"
    );

    RankedPostings {
        results,
        total_considered,
        total_matched,
    }
}
