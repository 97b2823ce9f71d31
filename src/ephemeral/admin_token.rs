use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};

use crate::config::Config;

/// Request guard for the admin console endpoints. The admin console is a
/// trusted first-party app; it authenticates with a static bearer token
/// from the server config rather than a user account.
#[derive(Debug)]
pub struct AdminToken;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminToken {
	type Error = &'static str;

	async fn from_request(
		request: &'r Request<'_>,
	) -> Outcome<Self, Self::Error> {
		let headers: Vec<_> = request.headers().get("Authorization").collect();
		if headers.is_empty() {
			return Outcome::Error((
				Status::Unauthorized,
				"authorization header missing",
			));
		} else if headers.len() > 1 {
			return Outcome::Error((
				Status::BadRequest,
				"more than one authorization header",
			));
		}

		let config = match request.rocket().state::<Config>() {
			Some(config) => config,
			None => {
				return Outcome::Error((
					Status::InternalServerError,
					"server config not available",
				));
			},
		};

		match headers[0].strip_prefix("Bearer ") {
			Some(token) if token == config.admin_token => {
				Outcome::Success(AdminToken)
			},
			Some(_) => {
				Outcome::Error((Status::Unauthorized, "invalid admin token"))
			},
			None => Outcome::Error((
				Status::Unauthorized,
				"only bearer authentication is supported",
			)),
		}
	}
}
