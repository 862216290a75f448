use crate::core::fields::{resolve_text, COMPANY_FALLBACK_ALIASES};
use crate::core::matcher::{MatchResult, RankedMatch};
use crate::models::{PercentMatch, RawMatch};

/// Scores are reported as a percentage of this value, clamped at 100%.
pub const FULL_MATCH_SCORE: u32 = 100;

/// Shape ranked matches for `GET /api/match`.
pub fn to_percent_matches(result: &MatchResult<'_>) -> Vec<PercentMatch> {
    result
        .matches
        .iter()
        .map(|ranked| {
            let scored = &ranked.scored;
            PercentMatch {
                company: display_company(ranked),
                role: scored.role.clone(),
                match_percent: match_percent(scored.score),
                matched_on: scored.matched_on.clone(),
                degree: scored.degree.clone(),
                languages: scored.languages.clone(),
                skills: scored.skills.clone(),
                specialisation: scored.specialisation.clone(),
                domain: scored.domain.clone(),
            }
        })
        .collect()
}

/// Shape ranked matches for `POST /api/allocate`.
pub fn to_raw_matches(result: &MatchResult<'_>) -> Vec<RawMatch> {
    result
        .matches
        .iter()
        .map(|ranked| {
            let scored = &ranked.scored;
            RawMatch {
                company: display_company(ranked),
                role: scored.role.clone(),
                score: scored.score,
                matched_on: scored.matched_on.clone(),
                degree: scored.degree.clone(),
                languages: scored.languages.clone(),
                skills: scored.skills.clone(),
                specialisation: scored.specialisation.clone(),
                domain: scored.domain.clone(),
            }
        })
        .collect()
}

/// `round(score / 100 * 100)` clamped to 100.
///
/// Long queries alone can push a score past 100, so many strong matches
/// legitimately report 100%.
#[inline]
pub fn match_percent(score: u32) -> u8 {
    let percent = (f64::from(score) / f64::from(FULL_MATCH_SCORE) * 100.0).round();
    percent.min(100.0) as u8
}

fn display_company(ranked: &RankedMatch<'_>) -> String {
    if ranked.scored.company_name.is_empty() {
        resolve_text(ranked.record, COMPANY_FALLBACK_ALIASES)
    } else {
        ranked.scored.company_name.clone()
    }
}
