use std::error::Error;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
    extract::State,
    response::{Html, IntoResponse, Response},
    http::StatusCode,
    Json,
};
use log::{error, info};
use tower_http::cors::{Any, CorsLayer};

use crate::agent::{AgentError, BiAgent};
use crate::models::{AskRequest, AskResponse, ErrorResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");

struct ApiError(AgentError);

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AgentError::EmptyQuery => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse { error: self.0.to_string() };
        (status, Json(body)).into_response()
    }
}

pub fn router(agent: Arc<BiAgent>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home_handler))
        .route("/ask", post(ask_handler))
        .route("/get-boards", get(get_boards_handler))
        .layer(cors)
        .with_state(agent)
}

pub async fn serve(addr: &str, agent: Arc<BiAgent>) -> Result<(), Box<dyn Error + Send + Sync>> {
    let app = router(agent);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on: http://{}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn home_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn ask_handler(
    State(agent): State<Arc<BiAgent>>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    match agent.answer(&req.query).await {
        Ok(response) => Ok(Json(AskResponse { response })),
        Err(e) => {
            if !matches!(e, AgentError::EmptyQuery) {
                error!("ask pipeline failed: {}", e);
            }
            Err(ApiError(e))
        }
    }
}

async fn get_boards_handler(State(agent): State<Arc<BiAgent>>) -> Response {
    match agent.monday().list_boards().await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => {
            error!("Board listing failed: {}", e);
            let body = ErrorResponse { error: e.to_string() };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
