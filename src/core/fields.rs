use serde_json::Value;

use crate::models::OpportunityRecord;

/// Logical fields read from an opportunity record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CompanyName,
    Role,
    Degree,
    Languages,
    Skills,
    Specialisation,
    Domain,
}

/// Secondary lookup for the company name when the primary aliases yield no text
pub const COMPANY_FALLBACK_ALIASES: &[&str] = &["Company", "company"];

impl Field {
    /// Accepted key names, most preferred first
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::CompanyName => &["company name", "Company", "company"],
            Field::Role => &["Role", "role", "designation", "title"],
            Field::Degree => &["Degree", "degree"],
            Field::Languages => &["Languages", "languages", "language"],
            Field::Skills => &["Skills", "skills", "skill"],
            Field::Specialisation => &["Specialisation", "specialisation", "specialization"],
            Field::Domain => &["Domain", "domain"],
        }
    }

    /// Resolve this field as text; missing or non-text values become empty.
    pub fn text(self, record: &OpportunityRecord) -> String {
        resolve_text(record, self.aliases())
    }
}

/// Look up the first alias present in `record`.
///
/// Exact keys are tried first, in alias order. Failing that, a single pass
/// over the record's keys compares them to the aliases with case and
/// whitespace ignored; the first key (in record order) that matches any alias
/// wins. `null` values are treated as absent.
pub fn resolve_field<'a>(record: &'a OpportunityRecord, aliases: &[&str]) -> Option<&'a Value> {
    let exact = aliases
        .iter()
        .filter_map(|alias| record.get(alias))
        .find(|value| !value.is_null());
    if exact.is_some() {
        return exact;
    }

    let wanted: Vec<String> = aliases.iter().map(|alias| squash(alias)).collect();
    record
        .iter()
        .filter(|(_, value)| !value.is_null())
        .find(|(key, _)| {
            let key = squash(key);
            wanted.iter().any(|alias| *alias == key)
        })
        .map(|(_, value)| value)
}

/// Resolve as text, falling back to an empty string.
pub fn resolve_text(record: &OpportunityRecord, aliases: &[&str]) -> String {
    resolve_field(record, aliases)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Lowercase and strip all whitespace
fn squash(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Text of every field the scorer reads, resolved once per record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpportunityFields {
    pub company_name: String,
    pub role: String,
    pub degree: String,
    pub languages: String,
    pub skills: String,
    pub specialisation: String,
    pub domain: String,
}

impl OpportunityFields {
    pub fn resolve(record: &OpportunityRecord) -> Self {
        Self {
            company_name: Field::CompanyName.text(record),
            role: Field::Role.text(record),
            degree: Field::Degree.text(record),
            languages: Field::Languages.text(record),
            skills: Field::Skills.text(record),
            specialisation: Field::Specialisation.text(record),
            domain: Field::Domain.text(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> OpportunityRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_first_exact_alias_wins() {
        let rec = record(json!({ "title": "Analyst", "Role": "Engineer" }));
        assert_eq!(Field::Role.text(&rec), "Engineer");
    }

    #[test]
    fn test_fallback_ignores_case_and_spaces() {
        let rec = record(json!({ "COMPANY  NAME": "Acme", "Sk ills": "Rust" }));
        assert_eq!(Field::CompanyName.text(&rec), "Acme");
        assert_eq!(Field::Skills.text(&rec), "Rust");
    }

    #[test]
    fn test_exact_match_beats_earlier_fuzzy_key() {
        let rec = record(json!({ "ROLE": "fuzzy", "designation": "exact" }));
        assert_eq!(Field::Role.text(&rec), "exact");
    }

    #[test]
    fn test_fallback_uses_record_order() {
        let rec = record(json!({ "DOMAIN": "first", "domain ": "second" }));
        assert_eq!(Field::Domain.text(&rec), "first");
    }

    #[test]
    fn test_missing_and_null_resolve_empty() {
        let rec = record(json!({ "Degree": null }));
        assert_eq!(resolve_field(&rec, Field::Degree.aliases()), None);
        assert_eq!(Field::Degree.text(&rec), "");
        assert_eq!(Field::Skills.text(&rec), "");
    }

    #[test]
    fn test_non_text_value_resolves_empty_text() {
        let rec = record(json!({ "Degree": 4 }));
        assert_eq!(resolve_field(&rec, Field::Degree.aliases()), Some(&json!(4)));
        assert_eq!(Field::Degree.text(&rec), "");
    }

    #[test]
    fn test_resolve_all_fields() {
        let rec = record(json!({
            "Company": "Acme",
            "Role": "Data Analyst Intern",
            "Degree": "B.Tech",
            "Language": "English, Hindi",
            "Skills": "Python; SQL",
            "specialization": "Data Science",
            "Domain": "Fintech"
        }));
        let fields = OpportunityFields::resolve(&rec);

        assert_eq!(fields.company_name, "Acme");
        assert_eq!(fields.languages, "English, Hindi");
        assert_eq!(fields.specialisation, "Data Science");
    }
}
