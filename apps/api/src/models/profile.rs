use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::lenient::{optional_text, string_list, value_list};

/// A job seeker as seen by the matcher.
///
/// `ai_profile` is produced upstream by the profile-analysis service and is
/// `None` until that analysis has run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(
        rename = "aiProfile",
        default,
        deserialize_with = "lenient_ai_profile",
        skip_serializing_if = "Option::is_none"
    )]
    pub ai_profile: Option<AiProfile>,
}

/// AI-derived profile fields consumed by the compatibility scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiProfile {
    #[serde(default, deserialize_with = "string_list")]
    pub skills: Vec<String>,
    /// Experience entries. Only the count is read by the scorer.
    #[serde(default, deserialize_with = "value_list")]
    pub experience: Vec<Value>,
    #[serde(default, deserialize_with = "optional_text")]
    pub work_style: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub career_goals: Option<String>,
}

impl CandidateProfile {
    pub fn with_ai_profile(ai_profile: AiProfile) -> Self {
        Self {
            ai_profile: Some(ai_profile),
        }
    }
}

impl AiProfile {
    /// Coarse years-of-experience proxy: one year per experience entry.
    pub fn experience_years(&self) -> usize {
        self.experience.len()
    }
}

/// An `aiProfile` that is not an object (e.g. a string left by a failed
/// analysis) is treated as not yet computed.
fn lenient_ai_profile<'de, D>(deserializer: D) -> Result<Option<AiProfile>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}
