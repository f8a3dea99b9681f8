use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::lenient::{optional_text, string_list};

/// A job listing as supplied by the job-listing service.
///
/// Only the fields the scorer reads are typed. Everything else on the listing
/// (id, company, salary, …) is carried through untouched in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub experience_level: Option<String>,
    /// Employment / workplace type, e.g. "Remote", "On-site office".
    #[serde(default, deserialize_with = "optional_text")]
    pub employment_type: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
