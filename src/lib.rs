//! Intern Match - internship matching service
//!
//! This library ranks company/role postings against a student profile. Each
//! posting is scored by a fixed list of additive rules (query, filters, exact
//! degree/specialisation/domain matches, skill and language overlap, and
//! experience boosts) and the best matches are returned with the reasons they
//! matched.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, Field, Matcher, MatchResult};
pub use crate::models::{MatchRequest, OpportunityRecord, ScoredMatch, ScoringWeights, StudentProfile};
pub use crate::services::{RecordProvider, SourceError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let record: OpportunityRecord = [("Role", "Rust Intern")].into_iter().collect();
        let request = MatchRequest {
            query: "rust".to_string(),
            ..MatchRequest::default()
        };

        let scored = calculate_match_score(&record, &request, &ScoringWeights::default());
        assert_eq!(scored.score, 25);
    }
}
