use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use roaster_app::application::FormOutcome;
use roaster_app::domain::{FormInput, RoastResult, ScoreDisplay};
use roaster_app::AppContext;
use roaster_errors::{AppError, RelayResponse};
use serde::Serialize;
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub mod render;

use render::{render_form_page, render_result_page};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoastReply {
    roast: RoastResult,
    score: ScoreDisplay,
    share_caption: Option<String>,
}

pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(form_page))
        .route("/roast", post(roast_form))
        .route("/api/roast", post(roast_api))
        .route("/api/leads/crm", any(crm_lead))
        .route("/api/leads/document", any(document_lead))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn form_page(State(ctx): State<AppContext>) -> Html<String> {
    Html(render_form_page(&ctx.settings.catalog, &FormInput::default(), "", None))
}

async fn roast_form(State(ctx): State<AppContext>, body: Bytes) -> Response {
    let input = FormInput::from_urlencoded(&body);
    let mut session = ctx.form_session();

    match session.submit(&input).await {
        FormOutcome::Roasted(roast) => {
            let caption = session.share_caption();
            let company = session
                .share_card()
                .map(|card| card.company.clone())
                .unwrap_or_else(|| input.company_details());
            Html(render_result_page(&roast.sections, &company, caption.as_deref())).into_response()
        }
        FormOutcome::Rejected(err) => {
            let page = render_form_page(&ctx.settings.catalog, &input, session.status(), None);
            (status_of(&err), Html(page)).into_response()
        }
        FormOutcome::Failed(err) => {
            let page = render_form_page(
                &ctx.settings.catalog,
                &input,
                session.status(),
                Some(err.user_message()),
            );
            (status_of(&err), Html(page)).into_response()
        }
    }
}

async fn roast_api(State(ctx): State<AppContext>, body: Bytes) -> Result<Json<RoastReply>, AppError> {
    let input: FormInput = serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;
    let mut session = ctx.form_session();

    match session.submit(&input).await {
        FormOutcome::Roasted(roast) => Ok(Json(RoastReply {
            score: roast.sections.score(),
            roast: roast.sections,
            share_caption: session.share_caption(),
        })),
        FormOutcome::Rejected(err) | FormOutcome::Failed(err) => Err(err),
    }
}

async fn crm_lead(State(ctx): State<AppContext>, method: Method, body: Bytes) -> RelayResponse {
    ctx.crm_sync.handle(method.as_str(), &body).await
}

async fn document_lead(State(ctx): State<AppContext>, method: Method, body: Bytes) -> RelayResponse {
    ctx.document_sync.handle(method.as_str(), &body).await
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

fn status_of(err: &AppError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_GATEWAY)
}
