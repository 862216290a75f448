use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{to_percent_matches, to_raw_matches, Matcher};
use crate::models::{AllocateRequest, ErrorResponse, HealthResponse, MatchQuery, MatchRequest, MatchesResponse};
use crate::services::{RecordProvider, SourceError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<RecordProvider>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::get().to(match_internships))
        .route("/allocate", web::post().to(allocate));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        remote_configured: state.provider.remote_configured(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search internships from the filter form
///
/// GET /api/match?title=&degree=&language=&skill=&specialisation=&domain=
///
/// Matches are reported as percentages.
async fn match_internships(
    state: web::Data<AppState>,
    query: web::Query<MatchQuery>,
) -> impl Responder {
    let request = MatchRequest::from(query.into_inner());

    let records = match state.provider.fetch_records().await {
        Ok(records) => records,
        Err(e) => return source_failure("match", &e),
    };

    let result = state.matcher.rank(&records, &request);
    let matches = to_percent_matches(&result);

    tracing::info!(
        "Returning {} matches for title {:?} (from {} postings)",
        matches.len(),
        request.query,
        result.total_candidates
    );

    HttpResponse::Ok().json(MatchesResponse { matches })
}

/// Allocate internships for a full student profile
///
/// POST /api/allocate
///
/// Request body:
/// ```json
/// {
///   "query": "data analyst",
///   "selectedFilters": ["python"],
///   "profile": {
///     "degree": "B.Tech",
///     "languages": "English, Hindi",
///     "skills": "Python, SQL",
///     "specialisation": "Data Science",
///     "domain": "Fintech",
///     "projects": 3,
///     "experience": 6,
///     "competitions": 1
///   }
/// }
/// ```
///
/// Matches are reported with their raw score.
async fn allocate(
    state: web::Data<AppState>,
    req: web::Json<AllocateRequest>,
) -> impl Responder {
    let request = MatchRequest::from(req.into_inner());

    let records = match state.provider.fetch_records().await {
        Ok(records) => records,
        Err(e) => return source_failure("allocate", &e),
    };

    let result = state.matcher.rank(&records, &request);
    let matches = to_raw_matches(&result);

    tracing::info!(
        "Allocated {} matches for query {:?} with {} filters (from {} postings)",
        matches.len(),
        request.query,
        request.filters.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(MatchesResponse { matches })
}

fn source_failure(endpoint: &str, e: &SourceError) -> HttpResponse {
    tracing::error!("Failed to load postings for {}: {}", endpoint, e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: e.to_string(),
        status_code: 500,
    })
}
