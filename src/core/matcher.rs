use crate::core::scoring::calculate_match_score;
use crate::models::{MatchRequest, OpportunityRecord, ScoredMatch, ScoringWeights};

/// Default number of ranked postings returned per request
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// A scored posting alongside the record it came from
#[derive(Debug, Clone)]
pub struct RankedMatch<'a> {
    pub record: &'a OpportunityRecord,
    pub scored: ScoredMatch,
}

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub matches: Vec<RankedMatch<'a>>,
    pub total_candidates: usize,
}

/// Main matching orchestrator: scores, filters, sorts and truncates.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    max_results: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, max_results: usize) -> Self {
        Self { weights, max_results }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_MAX_RESULTS)
    }

    /// Rank postings for a request
    ///
    /// Postings that score zero are dropped. The sort is stable, so postings
    /// with equal scores keep their order in `records`.
    pub fn rank<'a>(&self, records: &'a [OpportunityRecord], request: &MatchRequest) -> MatchResult<'a> {
        let total_candidates = records.len();

        let mut matches: Vec<RankedMatch<'a>> = records
            .iter()
            .filter_map(|record| {
                let scored = calculate_match_score(record, request, &self.weights);
                (scored.score > 0).then_some(RankedMatch { record, scored })
            })
            .collect();

        matches.sort_by(|a, b| b.scored.score.cmp(&a.scored.score));
        matches.truncate(self.max_results);

        tracing::debug!(
            "Ranked {} of {} postings (query: {:?}, {} filters)",
            matches.len(),
            total_candidates,
            request.query,
            request.filters.len()
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
