use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use picdex_service::{
	CloseSessionRequest, CloseSessionResponse, Error as ServiceError, NavigateRequest,
	NavigateResponse, SearchImagesRequest, SearchImagesResponse, SubmitTagsRequest,
	SubmitTagsResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/images/tag", post(submit_tags))
		.route("/v1/images/search", post(search_images))
		.route("/v1/sessions/navigate", post(navigate))
		.route("/v1/sessions/close", post(close_session))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn submit_tags(
	State(state): State<AppState>,
	Json(payload): Json<SubmitTagsRequest>,
) -> Result<Json<SubmitTagsResponse>, ApiError> {
	let response = state.service.submit_tags(payload).await?;

	Ok(Json(response))
}

async fn search_images(
	State(state): State<AppState>,
	Json(payload): Json<SearchImagesRequest>,
) -> Result<Json<SearchImagesResponse>, ApiError> {
	let response = state.service.search_images(payload).await?;

	Ok(Json(response))
}

async fn navigate(
	State(state): State<AppState>,
	Json(payload): Json<NavigateRequest>,
) -> Result<Json<NavigateResponse>, ApiError> {
	let response = state.service.navigate(payload).await?;

	Ok(Json(response))
}

async fn close_session(
	State(state): State<AppState>,
	Json(payload): Json<CloseSessionRequest>,
) -> Result<Json<CloseSessionResponse>, ApiError> {
	let response = state.service.close_session(payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::Validation { message } =>
				Self::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid_request", message),
			ServiceError::NotFound { message } =>
				Self::new(StatusCode::NOT_FOUND, "not_found", message),
			ServiceError::Conflict { message } =>
				Self::new(StatusCode::CONFLICT, "conflict", message),
			ServiceError::SessionExpired =>
				Self::new(StatusCode::GONE, "session_expired", "The viewer session has expired."),
			ServiceError::Forbidden => Self::new(
				StatusCode::FORBIDDEN,
				"forbidden",
				"The viewer session belongs to another requester.",
			),
			ServiceError::Provider { message } => {
				tracing::error!(%message, "Chat history fetch failed.");

				Self::new(
					StatusCode::BAD_GATEWAY,
					"provider_error",
					"Chat history is unavailable, please try again later.",
				)
			},
			ServiceError::Storage { message } => {
				tracing::error!(%message, "Storage failure.");

				Self::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"storage_error",
					"Request failed, please try again later.",
				)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
