use serde::{Deserialize, Serialize};

/// Envelope shared by both match endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse<T> {
    pub matches: Vec<T>,
}

/// Match reported as a percentage (`GET /api/match`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentMatch {
    pub company: String,
    pub role: String,
    #[serde(rename = "matchPercent")]
    pub match_percent: u8,
    #[serde(rename = "matchedOn")]
    pub matched_on: Vec<String>,
    pub degree: String,
    pub languages: String,
    pub skills: String,
    pub specialisation: String,
    pub domain: String,
}

/// Match reported with its raw score (`POST /api/allocate`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatch {
    pub company: String,
    pub role: String,
    pub score: u32,
    #[serde(rename = "matchedOn")]
    pub matched_on: Vec<String>,
    pub degree: String,
    pub languages: String,
    pub skills: String,
    pub specialisation: String,
    pub domain: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    #[serde(rename = "remoteConfigured")]
    pub remote_configured: bool,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status_code: u16,
}
