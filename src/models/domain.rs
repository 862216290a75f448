use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One company/role posting as delivered by a record source.
///
/// Key names are not normalised: remote tables and CSV headers disagree on
/// casing, spacing and synonyms, so fields are looked up through
/// [`crate::core::fields::Field`] rather than accessed directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpportunityRecord(Map<String, Value>);

impl OpportunityRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterate over entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for OpportunityRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OpportunityRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Student attributes the matcher scores postings against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentProfile {
    pub degree: String,
    /// Delimited list of spoken languages
    pub languages: String,
    /// Delimited list of skills
    pub skills: String,
    pub specialisation: String,
    pub domain: String,
    pub projects: u32,
    /// Experience in months
    pub experience: u32,
    pub competitions: u32,
}

/// Everything the scorer needs besides the record itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchRequest {
    pub query: String,
    pub filters: Vec<String>,
    pub profile: StudentProfile,
}

/// Scored posting with the reasons it matched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub score: u32,
    #[serde(rename = "matchedOn")]
    pub matched_on: Vec<String>,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub role: String,
    pub degree: String,
    pub languages: String,
    pub skills: String,
    pub specialisation: String,
    pub domain: String,
}

/// Points awarded by a single scoring rule and, optionally, why
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contribution {
    pub points: u32,
    pub reason: Option<String>,
}

impl Contribution {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn tagged(points: u32, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: Some(reason.into()),
        }
    }

    pub fn untagged(points: u32) -> Self {
        Self {
            points,
            reason: None,
        }
    }
}

/// Floor-divided boost capped at `cap`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftBoost {
    pub per: u32,
    pub cap: u32,
}

impl SoftBoost {
    pub const fn new(per: u32, cap: u32) -> Self {
        Self { per, cap }
    }

    pub fn apply(&self, count: u32) -> u32 {
        if self.per == 0 {
            return 0;
        }
        (count / self.per).min(self.cap)
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub query_base: u32,
    pub query_per_token: u32,
    pub filter_per_hit: u32,
    pub degree: u32,
    pub specialisation: u32,
    pub domain: u32,
    pub skill_per_term: u32,
    pub skill_cap: u32,
    pub language_per_term: u32,
    pub language_cap: u32,
    pub projects: SoftBoost,
    pub experience: SoftBoost,
    pub competitions: SoftBoost,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            query_base: 20,
            query_per_token: 5,
            filter_per_hit: 6,
            degree: 12,
            specialisation: 10,
            domain: 10,
            skill_per_term: 6,
            skill_cap: 30,
            language_per_term: 4,
            language_cap: 12,
            projects: SoftBoost::new(2, 8),
            experience: SoftBoost::new(6, 10),
            competitions: SoftBoost::new(3, 6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_boost_caps() {
        let boost = SoftBoost::new(2, 8);
        assert_eq!(boost.apply(0), 0);
        assert_eq!(boost.apply(5), 2);
        assert_eq!(boost.apply(100), 8);
    }

    #[test]
    fn test_soft_boost_zero_divisor() {
        assert_eq!(SoftBoost::new(0, 8).apply(10), 0);
    }

    #[test]
    fn test_record_keeps_source_order() {
        let record: OpportunityRecord =
            [("Role", "Intern"), ("Company", "Acme"), ("Domain", "Fintech")]
                .into_iter()
                .collect();
        let keys: Vec<&str> = record.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Role", "Company", "Domain"]);
    }
}
