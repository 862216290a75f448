// Core algorithm exports
pub mod fields;
pub mod matcher;
pub mod scoring;
pub mod shaper;
pub mod text;

pub use fields::{resolve_field, resolve_text, Field, OpportunityFields};
pub use matcher::{MatchResult, Matcher, RankedMatch, DEFAULT_MAX_RESULTS};
pub use scoring::{calculate_match_score, ScoringContext, ScoringRule, RULES};
pub use shaper::{match_percent, to_percent_matches, to_raw_matches};
pub use text::{lower, split_list, words};
