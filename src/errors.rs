use rocket::Request;
use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder, Response};
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FocusGridError {
	#[error("internal server error: {0}")]
	Internal(#[from] InternalError),
	#[error("{0}")]
	BadRequest(String),
	#[error("not found: {0}")]
	NotFound(String),
	#[error("{0}")]
	Conflict(String),
	#[error("validation error: {0}")]
	ValidationError(#[from] validator::ValidationErrors),
	#[error("upstream error: {0}")]
	Upstream(#[from] UpstreamError),
}

impl FocusGridError {
	pub fn not_found(what: &str) -> Self {
		FocusGridError::NotFound(what.to_string())
	}

	pub fn bad_request(what: &str) -> Self {
		FocusGridError::BadRequest(what.to_string())
	}

	fn status(&self) -> Status {
		match self {
			FocusGridError::BadRequest(_)
			| FocusGridError::ValidationError(_) => Status::BadRequest,
			FocusGridError::NotFound(_) => Status::NotFound,
			FocusGridError::Conflict(_) => Status::Conflict,
			FocusGridError::Internal(_) | FocusGridError::Upstream(_) => {
				Status::InternalServerError
			},
		}
	}
}

impl<'r> Responder<'r, 'static> for FocusGridError {
	fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
		let body =
			serde_json::json!({ "error": self.to_string() }).to_string();
		Response::build()
			.status(self.status())
			.header(ContentType::JSON)
			.sized_body(body.len(), Cursor::new(body))
			.ok()
	}
}

impl From<diesel::result::Error> for FocusGridError {
	fn from(error: diesel::result::Error) -> Self {
		match error {
			diesel::result::Error::NotFound => {
				FocusGridError::not_found("no such record")
			},
			error => {
				FocusGridError::Internal(InternalError::DatabaseError(error))
			},
		}
	}
}

pub type Result<T> = std::result::Result<T, FocusGridError>;

#[derive(Error, Debug)]
pub enum InternalError {
	#[error("database error: {0}")]
	DatabaseError(#[from] diesel::result::Error),
}

#[derive(Error, Debug)]
pub enum UpstreamError {
	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),
	#[error("unexpected status {0}")]
	Status(u16),
}
