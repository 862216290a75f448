// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Contribution, MatchRequest, OpportunityRecord, ScoredMatch, ScoringWeights, SoftBoost, StudentProfile};
pub use requests::{AllocateRequest, MatchQuery, ProfilePayload};
pub use responses::{ErrorResponse, HealthResponse, MatchesResponse, PercentMatch, RawMatch};
