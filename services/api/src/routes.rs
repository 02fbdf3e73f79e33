use crate::infra::AppState;
use analyst_fit::assessment::{
    AnswerImportError, AnswerPolicy, AnswerSheet, AssessmentResults, AssessmentSession,
    FinalScores, QuestionBank, QuestionView, Section,
};
use analyst_fit::error::AppError;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct SectionCatalog {
    pub(crate) section: Section,
    pub(crate) title: &'static str,
    pub(crate) subtitle: &'static str,
    pub(crate) step: u8,
    pub(crate) questions: Vec<QuestionView>,
}

impl SectionCatalog {
    fn new(bank: &QuestionBank, section: Section) -> Self {
        Self {
            section,
            title: section.title(),
            subtitle: section.subtitle(),
            step: section.step(),
            questions: bank.questions(section).iter().map(|q| q.view()).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionCatalog {
    pub(crate) sections: Vec<SectionCatalog>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: BTreeMap<String, String>,
    #[serde(default)]
    pub(crate) lenient: Option<bool>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) scores: FinalScores,
    pub(crate) results: AssessmentResults,
}

pub(crate) fn assessment_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/questions", get(questions_endpoint))
        .route("/api/v1/questions/:section", get(section_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questions_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<QuestionCatalog> {
    let sections = Section::ordered()
        .into_iter()
        .map(|section| SectionCatalog::new(&state.bank, section))
        .collect();
    Json(QuestionCatalog { sections })
}

pub(crate) async fn section_endpoint(
    Extension(state): Extension<AppState>,
    Path(raw): Path<String>,
) -> Response {
    match raw.parse::<Section>() {
        Ok(section) => Json(SectionCatalog::new(&state.bank, section)).into_response(),
        Err(err) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let ScoreRequest { answers, lenient } = payload;
    let policy = match lenient {
        Some(true) => AnswerPolicy::Lenient,
        Some(false) => AnswerPolicy::Strict,
        None => state.answer_policy,
    };

    let sheet = AnswerSheet::from_map(&state.bank, answers).map_err(AnswerImportError::from)?;
    let session = AssessmentSession::replay(state.bank.clone(), &sheet, policy)?;
    let scores = session.scores().final_scores();
    let results = analyst_fit::assessment::render(session.scores());

    info!(
        policy = policy.label(),
        tier = results.tier_label,
        "scored submitted answer sheet"
    );

    Ok(Json(ScoreResponse { scores, results }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyst_fit::assessment::{Recommendation, SessionError};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            bank: Arc::new(QuestionBank::standard()),
            answer_policy: AnswerPolicy::Strict,
        }
    }

    fn best_answers(bank: &QuestionBank) -> BTreeMap<String, String> {
        Section::ordered()
            .into_iter()
            .flat_map(|section| bank.questions(section).iter())
            .map(|question| {
                let value = question.correct_option().map_or("5", |option| option.value);
                (question.id.to_string(), value.to_string())
            })
            .collect()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn score_endpoint_returns_scores_and_results() {
        let state = test_state(true);
        let answers = best_answers(&state.bank);

        let Json(body) = score_endpoint(
            Extension(state),
            Json(ScoreRequest {
                answers,
                lenient: None,
            }),
        )
        .await
        .expect("complete sheet scores");

        assert_eq!(body.scores.technical_readiness, 100.0);
        assert_eq!(body.results.tier, Recommendation::Yes);
        assert_eq!(body.results.job_matches.len(), 4);
    }

    #[tokio::test]
    async fn score_endpoint_rejects_incomplete_sheets() {
        let state = test_state(true);
        let mut answers = best_answers(&state.bank);
        answers.remove("w2");

        let err = score_endpoint(
            Extension(state),
            Json(ScoreRequest {
                answers,
                lenient: Some(true),
            }),
        )
        .await
        .expect_err("w2 is missing");

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("w2"));
    }

    #[tokio::test]
    async fn blank_values_are_reported_as_missing_answers() {
        let state = test_state(true);
        let mut answers = best_answers(&state.bank);
        answers.insert("t3".to_string(), String::new());

        let err = score_endpoint(
            Extension(state),
            Json(ScoreRequest {
                answers,
                lenient: None,
            }),
        )
        .await
        .expect_err("t3 is blank");

        assert!(matches!(
            err,
            AppError::Session(SessionError::Incomplete { ref question_id, .. }) if question_id == "t3"
        ));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn questions_catalog_hides_answer_keys() {
        let app = assessment_routes().layer(Extension(test_state(true)));
        let response = app
            .oneshot(
                Request::get("/api/v1/questions")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let sections = body["sections"].as_array().expect("sections array");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1]["section"], "technical");
        assert_eq!(sections[1]["questions"].as_array().map(Vec::len), Some(8));
        assert!(!body.to_string().contains("correct"));
    }

    #[tokio::test]
    async fn unknown_section_is_not_found() {
        let app = assessment_routes().layer(Extension(test_state(true)));
        let response = app
            .oneshot(
                Request::get("/api/v1/questions/astrology")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_values_map_to_unprocessable_entity() {
        let app = assessment_routes().layer(Extension(test_state(true)));
        let payload = json!({ "answers": { "p1": "11" } });
        let response = app
            .oneshot(
                Request::post("/api/v1/assessment/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert!(body["error"].as_str().is_some_and(|msg| msg.contains("p1")));
    }

    #[tokio::test]
    async fn readiness_reflects_the_flag() {
        let app = assessment_routes().layer(Extension(test_state(false)));
        let response = app
            .oneshot(
                Request::get("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
