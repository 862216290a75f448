use std::collections::HashSet;

use crate::core::fields::OpportunityFields;
use crate::core::text::{lower, split_list, words};
use crate::models::{Contribution, MatchRequest, OpportunityRecord, ScoredMatch, ScoringWeights, StudentProfile};

/// Inputs visible to every scoring rule
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub student: &'a StudentProfile,
    pub fields: &'a OpportunityFields,
    pub query: &'a str,
    pub filters: &'a [String],
}

/// A single additive clause of the score
pub type ScoringRule = fn(&ScoringContext<'_>, &ScoringWeights) -> Contribution;

/// Rules in the order their reasons are reported
pub const RULES: &[ScoringRule] = &[
    query_relevance,
    filter_relevance,
    degree_match,
    specialisation_match,
    domain_match,
    skills_overlap,
    languages_overlap,
    soft_boosts,
];

/// Calculate the relevance of one posting for a student
///
/// Scoring formula (default weights):
/// score = (
///     20 + 5 * query tokens found in role/company  # query relevance
///   + 6 * filters found in the posting              # filter relevance
///   + 12 degree + 10 specialisation + 10 domain     # exact matches
///   + min(30, 6 * shared skills)
///   + min(12, 4 * shared languages)
///   + projects/2 (<= 8) + experience/6 (<= 10) + competitions/3 (<= 6)
/// )
pub fn calculate_match_score(
    record: &OpportunityRecord,
    request: &MatchRequest,
    weights: &ScoringWeights,
) -> ScoredMatch {
    let fields = OpportunityFields::resolve(record);
    let ctx = ScoringContext {
        student: &request.profile,
        fields: &fields,
        query: &request.query,
        filters: &request.filters,
    };

    let mut score = 0u32;
    let mut matched_on = Vec::new();

    for rule in RULES {
        let contribution = rule(&ctx, weights);
        if contribution.points == 0 {
            continue;
        }
        score = score.saturating_add(contribution.points);
        if let Some(reason) = contribution.reason {
            matched_on.push(reason);
        }
    }

    ScoredMatch {
        score,
        matched_on,
        company_name: fields.company_name,
        role: fields.role,
        degree: fields.degree,
        languages: fields.languages,
        skills: fields.skills,
        specialisation: fields.specialisation,
        domain: fields.domain,
    }
}

/// Query tokens that also occur in the role or company name
pub fn query_relevance(ctx: &ScoringContext<'_>, weights: &ScoringWeights) -> Contribution {
    let query_words = words(ctx.query);
    if query_words.is_empty() {
        return Contribution::none();
    }

    let title_words: HashSet<String> = words(&ctx.fields.role)
        .into_iter()
        .chain(words(&ctx.fields.company_name))
        .collect();

    let mut seen = HashSet::new();
    let overlap: Vec<String> = query_words
        .into_iter()
        .filter(|word| title_words.contains(word) && seen.insert(word.clone()))
        .collect();

    if overlap.is_empty() {
        return Contribution::none();
    }

    let points = weights
        .query_base
        .saturating_add(weights.query_per_token.saturating_mul(hit_count(overlap.len())));
    Contribution::tagged(points, format!("query:{}", overlap.join(",")))
}

/// Filters found anywhere in the posting's descriptive fields
pub fn filter_relevance(ctx: &ScoringContext<'_>, weights: &ScoringWeights) -> Contribution {
    if ctx.filters.is_empty() {
        return Contribution::none();
    }

    let fields = ctx.fields;
    let haystack = lower(
        &[
            fields.degree.as_str(),
            fields.languages.as_str(),
            fields.skills.as_str(),
            fields.specialisation.as_str(),
            fields.domain.as_str(),
            fields.role.as_str(),
        ]
        .join(" "),
    );

    // Every filter occurrence is a hit, repeats and blanks included
    let hits: Vec<&str> = ctx
        .filters
        .iter()
        .map(String::as_str)
        .filter(|filter| haystack.contains(&lower(filter)))
        .collect();

    if hits.is_empty() {
        return Contribution::none();
    }

    let points = weights.filter_per_hit.saturating_mul(hit_count(hits.len()));
    let mut seen = HashSet::new();
    let shown: Vec<&str> = hits
        .iter()
        .copied()
        .filter(|hit| seen.insert(*hit))
        .take(4)
        .collect();
    Contribution::tagged(points, format!("filters:{}", shown.join(",")))
}

pub fn degree_match(ctx: &ScoringContext<'_>, weights: &ScoringWeights) -> Contribution {
    exact_match(&ctx.student.degree, &ctx.fields.degree, weights.degree, "degree")
}

pub fn specialisation_match(ctx: &ScoringContext<'_>, weights: &ScoringWeights) -> Contribution {
    exact_match(
        &ctx.student.specialisation,
        &ctx.fields.specialisation,
        weights.specialisation,
        "specialisation",
    )
}

pub fn domain_match(ctx: &ScoringContext<'_>, weights: &ScoringWeights) -> Contribution {
    exact_match(&ctx.student.domain, &ctx.fields.domain, weights.domain, "domain")
}

#[inline]
fn exact_match(student: &str, posting: &str, bonus: u32, tag: &str) -> Contribution {
    if student.is_empty() || posting.is_empty() || lower(student) != lower(posting) {
        return Contribution::none();
    }
    Contribution::tagged(bonus, tag)
}

pub fn skills_overlap(ctx: &ScoringContext<'_>, weights: &ScoringWeights) -> Contribution {
    let overlap = shared_terms(&ctx.student.skills, &ctx.fields.skills);
    if overlap.is_empty() {
        return Contribution::none();
    }

    let points = weights
        .skill_per_term
        .saturating_mul(hit_count(overlap.len()))
        .min(weights.skill_cap);
    let shown: Vec<&str> = overlap.iter().take(5).map(String::as_str).collect();
    Contribution::tagged(points, format!("skills:{}", shown.join(",")))
}

pub fn languages_overlap(ctx: &ScoringContext<'_>, weights: &ScoringWeights) -> Contribution {
    let overlap = shared_terms(&ctx.student.languages, &ctx.fields.languages);
    if overlap.is_empty() {
        return Contribution::none();
    }

    let points = weights
        .language_per_term
        .saturating_mul(hit_count(overlap.len()))
        .min(weights.language_cap);
    Contribution::tagged(points, format!("languages:{}", overlap.join(",")))
}

/// Lowercased terms listed on both sides, in the student's order, without repeats
fn shared_terms(student: &str, posting: &str) -> Vec<String> {
    let posting_terms: HashSet<String> = split_list(posting).into_iter().map(lower).collect();
    if posting_terms.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    split_list(student)
        .into_iter()
        .map(lower)
        .filter(|term| posting_terms.contains(term) && seen.insert(term.clone()))
        .collect()
}

#[inline]
fn hit_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Experience-based boosts, applied regardless of what else matched
pub fn soft_boosts(ctx: &ScoringContext<'_>, weights: &ScoringWeights) -> Contribution {
    let student = ctx.student;
    Contribution::untagged(
        weights
            .projects
            .apply(student.projects)
            .saturating_add(weights.experience.apply(student.experience))
            .saturating_add(weights.competitions.apply(student.competitions)),
    )
}
