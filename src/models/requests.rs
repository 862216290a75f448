use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::domain::{MatchRequest, StudentProfile};

/// Query string of `GET /api/match`
///
/// Every parameter is optional and defaults to an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchQuery {
    pub title: String,
    pub degree: String,
    pub language: String,
    pub skill: String,
    pub specialisation: String,
    pub domain: String,
}

impl From<MatchQuery> for MatchRequest {
    /// The selected search fields double as both the filter list and the
    /// profile being matched.
    fn from(query: MatchQuery) -> Self {
        let filters = [
            &query.degree,
            &query.language,
            &query.skill,
            &query.specialisation,
            &query.domain,
        ]
        .into_iter()
        .filter(|value| !value.is_empty())
        .cloned()
        .collect();

        MatchRequest {
            query: query.title,
            filters,
            profile: StudentProfile {
                degree: query.degree,
                languages: query.language,
                skills: query.skill,
                specialisation: query.specialisation,
                domain: query.domain,
                ..StudentProfile::default()
            },
        }
    }
}

/// Body of `POST /api/allocate`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AllocateRequest {
    #[serde(deserialize_with = "lenient_text")]
    pub query: String,
    #[serde(rename = "selectedFilters", deserialize_with = "lenient_strings")]
    pub selected_filters: Vec<String>,
    pub profile: Option<ProfilePayload>,
}

/// Student profile as submitted by the client
///
/// Text fields of the wrong type become empty and counts that are not numeric
/// become zero, so a sloppy payload degrades the score instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfilePayload {
    #[serde(deserialize_with = "lenient_text")]
    pub degree: String,
    #[serde(deserialize_with = "lenient_text")]
    pub languages: String,
    #[serde(deserialize_with = "lenient_text")]
    pub skills: String,
    #[serde(deserialize_with = "lenient_text")]
    pub specialisation: String,
    #[serde(deserialize_with = "lenient_text")]
    pub specialization: String,
    #[serde(deserialize_with = "lenient_text")]
    pub domain: String,
    #[serde(deserialize_with = "lenient_count")]
    pub projects: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub experience: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub competitions: u32,
}

impl From<ProfilePayload> for StudentProfile {
    fn from(payload: ProfilePayload) -> Self {
        let specialisation = if payload.specialisation.is_empty() {
            payload.specialization
        } else {
            payload.specialisation
        };

        StudentProfile {
            degree: payload.degree,
            languages: payload.languages,
            skills: payload.skills,
            specialisation,
            domain: payload.domain,
            projects: payload.projects,
            experience: payload.experience,
            competitions: payload.competitions,
        }
    }
}

impl From<AllocateRequest> for MatchRequest {
    fn from(req: AllocateRequest) -> Self {
        MatchRequest {
            query: req.query,
            filters: req.selected_filters,
            profile: req.profile.map(StudentProfile::from).unwrap_or_default(),
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                _ => String::new(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_count(&value))
}

/// Coerce a JSON value into a non-negative whole count, or 0.
pub fn coerce_count(value: &Value) -> u32 {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        // `as` saturates at u32::MAX
        Some(n) if n.is_finite() && n > 0.0 => n.floor() as u32,
        _ => 0,
    }
}
