// Unit tests for Intern Match

use intern_match::core::{
    calculate_match_score, match_percent, to_percent_matches, to_raw_matches, words, split_list, Matcher,
};
use intern_match::models::{MatchRequest, OpportunityRecord, ScoringWeights, StudentProfile};
use serde_json::{json, Value};

fn record(value: Value) -> OpportunityRecord {
    serde_json::from_value(value).unwrap()
}

fn student() -> StudentProfile {
    StudentProfile::default()
}

#[test]
fn test_words_and_split_list() {
    assert_eq!(words("c++ developer"), vec!["c++", "developer"]);
    assert_eq!(split_list("Python, SQL; R"), vec!["Python", "SQL", "R"]);
}

#[test]
fn test_exact_degree_match_alone() {
    let posting = record(json!({ "Company": "Acme", "Role": "Intern", "Degree": "B.Tech", "Skills": "Go" }));
    let request = MatchRequest {
        profile: StudentProfile {
            degree: "B.Tech".to_string(),
            skills: "Java".to_string(),
            ..student()
        },
        ..MatchRequest::default()
    };

    let scored = calculate_match_score(&posting, &request, &ScoringWeights::default());

    assert_eq!(scored.score, 12);
    assert_eq!(scored.matched_on, vec!["degree"]);
}

#[test]
fn test_skills_overlap_contribution() {
    let posting = record(json!({ "skills": "Python / SQL / Excel / Tableau" }));
    let request = MatchRequest {
        profile: StudentProfile {
            skills: "python, sql, excel, tableau".to_string(),
            ..student()
        },
        ..MatchRequest::default()
    };
    let scored = calculate_match_score(&posting, &request, &ScoringWeights::default());
    assert_eq!(scored.score, 24);

    let terms: Vec<String> = (1..=10).map(|i| format!("skill{}", i)).collect();
    let posting = record(json!({ "Skills": terms.join(";") }));
    let request = MatchRequest {
        profile: StudentProfile {
            skills: terms.join(","),
            ..student()
        },
        ..MatchRequest::default()
    };
    let scored = calculate_match_score(&posting, &request, &ScoringWeights::default());
    assert_eq!(scored.score, 30);
    assert_eq!(scored.matched_on, vec!["skills:skill1,skill2,skill3,skill4,skill5"]);
}

#[test]
fn test_query_against_role() {
    let posting = record(json!({ "Company": "Infosys", "Role": "Data Analyst Intern" }));
    let request = MatchRequest {
        query: "data analyst".to_string(),
        ..MatchRequest::default()
    };

    let scored = calculate_match_score(&posting, &request, &ScoringWeights::default());

    assert_eq!(scored.score, 30);
    assert_eq!(scored.matched_on, vec!["query:data,analyst"]);
}

#[test]
fn test_missing_skills_field_does_not_contribute() {
    let posting = record(json!({ "Company": "Acme", "Role": "Analyst", "Skills": null }));
    let request = MatchRequest {
        profile: StudentProfile {
            skills: "Python, SQL".to_string(),
            ..student()
        },
        ..MatchRequest::default()
    };

    let scored = calculate_match_score(&posting, &request, &ScoringWeights::default());

    assert_eq!(scored.score, 0);
    assert!(scored.matched_on.iter().all(|reason| !reason.starts_with("skills:")));
}

#[test]
fn test_custom_weights() {
    let posting = record(json!({ "Degree": "BSc" }));
    let request = MatchRequest {
        profile: StudentProfile {
            degree: "bsc".to_string(),
            ..student()
        },
        ..MatchRequest::default()
    };
    let weights = ScoringWeights {
        degree: 40,
        ..ScoringWeights::default()
    };

    assert_eq!(calculate_match_score(&posting, &request, &weights).score, 40);
}

fn generated_postings(count: usize) -> Vec<OpportunityRecord> {
    const ROLES: &[&str] = &["Data Analyst Intern", "Backend Intern", "Designer", "ML Engineer Intern", "Sales Intern"];
    const SKILLS: &[&str] = &["Python, SQL", "Go; Docker", "Figma", "Python | TensorFlow | SQL", "Excel"];
    const DEGREES: &[&str] = &["B.Tech", "BBA", "B.Sc", "M.Tech"];

    (0..count)
        .map(|i| {
            record(json!({
                "id": i,
                "Company": format!("Company {}", i),
                "Role": ROLES[i % ROLES.len()],
                "Skills": SKILLS[(i / 2) % SKILLS.len()],
                "Degree": DEGREES[i % DEGREES.len()],
                "Languages": if i % 3 == 0 { "English, Hindi" } else { "English" },
                "Domain": if i % 4 == 0 { "Fintech" } else { "SaaS" }
            }))
        })
        .collect()
}

#[test]
fn test_ranked_result_invariants() {
    let matcher = Matcher::with_default_weights();
    let postings = generated_postings(300);
    let request = MatchRequest {
        query: "data intern".to_string(),
        filters: vec!["python".to_string(), "fintech".to_string()],
        profile: StudentProfile {
            degree: "B.Tech".to_string(),
            languages: "Hindi".to_string(),
            skills: "Python, SQL".to_string(),
            ..student()
        },
    };

    let result = matcher.rank(&postings, &request);

    assert_eq!(result.total_candidates, 300);
    assert_eq!(result.matches.len(), 50);
    assert!(result.matches.iter().all(|m| m.scored.score > 0));

    for pair in result.matches.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.scored.score >= b.scored.score, "Matches not sorted by score");
        if a.scored.score == b.scored.score {
            let id = |m: &intern_match::core::RankedMatch<'_>| m.record.get("id").and_then(Value::as_u64).unwrap();
            assert!(id(a) < id(b), "Equal scores must keep record order");
        }
    }

    let percent = to_percent_matches(&result);
    assert_eq!(percent.len(), result.matches.len());
    assert!(percent.iter().all(|m| m.match_percent <= 100));
    assert!(percent.windows(2).all(|pair| pair[0].match_percent >= pair[1].match_percent));

    let raw = to_raw_matches(&result);
    for (shaped, ranked) in raw.iter().zip(&result.matches) {
        assert_eq!(shaped.score, ranked.scored.score);
        assert_eq!(shaped.matched_on, ranked.scored.matched_on);
    }
}

#[test]
fn test_input_records_untouched() {
    let matcher = Matcher::with_default_weights();
    let postings = generated_postings(20);
    let before = postings.clone();

    let request = MatchRequest {
        query: "designer".to_string(),
        ..MatchRequest::default()
    };
    let _ = matcher.rank(&postings, &request);

    assert_eq!(postings, before);
}

#[test]
fn test_percent_saturates_for_long_queries() {
    let posting = record(json!({
        "Role": "senior junior data analyst engineer scientist developer intern trainee associate",
        "Company": "alpha beta gamma delta epsilon zeta eta theta"
    }));
    let request = MatchRequest {
        query: "senior junior data analyst engineer scientist developer intern trainee associate alpha beta gamma delta epsilon zeta eta theta"
            .to_string(),
        ..MatchRequest::default()
    };

    let scored = calculate_match_score(&posting, &request, &ScoringWeights::default());

    assert_eq!(scored.score, 20 + 5 * 18);
    assert_eq!(match_percent(scored.score), 100);
}
