use anyhow::{bail, Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_RANK_BATCH: usize = 500;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Default `min_score` for rank requests that don't send one.
    pub min_match_score: Option<u32>,
    /// Upper bound on postings accepted by a single rank request.
    pub max_rank_batch: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            min_match_score: None,
            max_rank_batch: DEFAULT_MAX_RANK_BATCH,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            min_match_score: parse_min_match_score(std::env::var("MIN_MATCH_SCORE").ok().as_deref())?,
            max_rank_batch: parse_max_rank_batch(std::env::var("MAX_RANK_BATCH").ok().as_deref())?,
        })
    }
}

fn parse_min_match_score(raw: Option<&str>) -> Result<Option<u32>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let score = raw
        .parse::<u32>()
        .with_context(|| format!("MIN_MATCH_SCORE must be an integer, got '{raw}'"))?;
    if score > 100 {
        bail!("MIN_MATCH_SCORE must be between 0 and 100, got {score}");
    }
    Ok(Some(score))
}

fn parse_max_rank_batch(raw: Option<&str>) -> Result<usize> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_MAX_RANK_BATCH);
    };
    let batch = raw
        .parse::<usize>()
        .with_context(|| format!("MAX_RANK_BATCH must be a valid number, got '{raw}'"))?;
    if batch == 0 {
        bail!("MAX_RANK_BATCH must be greater than zero");
    }
    Ok(batch)
}
