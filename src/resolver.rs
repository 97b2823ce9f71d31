use std::time::Duration;

use log::warn;
use reqwest::StatusCode;
use rocket::tokio::time::sleep;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::{FocusGridError, Result, UpstreamError};
use crate::fallback::fallback_config;
use crate::models::client_config::ClientConfig;

/// Consumer-side resolution result. On a degraded result the config comes
/// from the fallback table and the upstream error rides along, so the
/// caller can both render something and report what went wrong.
#[derive(Serialize, Debug, Clone)]
pub struct ResolvedConfig {
	pub config: ClientConfig,
	pub degraded: bool,
	pub error: Option<String>,
}

/// HTTP client for the config endpoint, for the dashboard side of the
/// system. Transient upstream failures are retried a bounded number of
/// times with a fixed delay before the fallback table takes over.
pub struct ConfigResolver {
	http: reqwest::Client,
	base_url: String,
	default_client_id: Option<Uuid>,
	attempts: u32,
	delay: Duration,
}

#[derive(Deserialize)]
struct ErrorBody {
	error: String,
}

impl ConfigResolver {
	pub fn from_config(
		config: &Config,
		base_url: impl Into<String>,
	) -> Result<ConfigResolver> {
		let http = reqwest::Client::builder()
			.timeout(Duration::from_millis(config.fetch_timeout_ms))
			.build()
			.map_err(UpstreamError::from)?;
		Ok(ConfigResolver {
			http,
			base_url: base_url.into(),
			default_client_id: config
				.default_client_id
				.as_deref()
				.and_then(|id| Uuid::parse_str(id).ok()),
			attempts: config.fetch_attempts.max(1),
			delay: Duration::from_millis(config.fetch_delay_ms),
		})
	}

	/// Tenant id priority: explicit argument, then the configured default,
	/// then the CLIENT_ID environment variable.
	fn effective_id(&self, client_id: Option<Uuid>) -> Option<Uuid> {
		client_id.or(self.default_client_id).or_else(|| {
			std::env::var("CLIENT_ID")
				.ok()
				.and_then(|id| Uuid::parse_str(&id).ok())
		})
	}

	pub async fn resolve(
		&self,
		client_id: Option<Uuid>,
	) -> Result<ResolvedConfig> {
		let id = self.effective_id(client_id);
		let mut last_error = None;
		for attempt in 1..=self.attempts {
			match self.fetch(id).await {
				Ok(config) => {
					return Ok(ResolvedConfig {
						config,
						degraded: false,
						error: None,
					});
				},
				// The tenant authoritatively does not exist, or the
				// request itself is invalid; retrying cannot change that
				// and the fallback table must not mask it.
				Err(
					err @ (FocusGridError::NotFound(_)
					| FocusGridError::BadRequest(_)),
				) => {
					return Err(err);
				},
				Err(err) => {
					warn!(
						"config fetch attempt {}/{} failed: {}",
						attempt, self.attempts, err
					);
					last_error = Some(err.to_string());
					if attempt < self.attempts {
						sleep(self.delay).await;
					}
				},
			}
		}
		let error = last_error
			.unwrap_or_else(|| String::from("config fetch failed"));
		warn!("serving fallback config for {:?}: {}", id, error);
		Ok(ResolvedConfig {
			config: fallback_config(id),
			degraded: true,
			error: Some(error),
		})
	}

	async fn fetch(&self, client_id: Option<Uuid>) -> Result<ClientConfig> {
		let mut request =
			self.http.get(format!("{}/api/config", self.base_url));
		if let Some(id) = client_id {
			request = request.query(&[("client_id", id.to_string())]);
		}
		let response = request.send().await.map_err(UpstreamError::from)?;
		let status = response.status();
		if status.is_success() {
			let config =
				response.json().await.map_err(UpstreamError::from)?;
			return Ok(config);
		}
		let message = response
			.json::<ErrorBody>()
			.await
			.map(|body| body.error)
			.unwrap_or_else(|_| format!("status {}", status));
		match status {
			StatusCode::NOT_FOUND => Err(FocusGridError::NotFound(message)),
			StatusCode::BAD_REQUEST => {
				Err(FocusGridError::BadRequest(message))
			},
			status => Err(UpstreamError::Status(status.as_u16()).into()),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn config(default_client_id: Option<&str>) -> Config {
		Config {
			admin_token: String::from("test"),
			default_client_id: default_client_id.map(String::from),
			fetch_attempts: 1,
			fetch_delay_ms: 0,
			fetch_timeout_ms: 100,
		}
	}

	#[test]
	fn explicit_id_beats_configured_default() {
		let fallback = crate::fallback::ACME_TENANT_ID;
		let resolver = ConfigResolver::from_config(
			&config(Some(fallback)),
			"http://localhost",
		)
		.unwrap();

		let explicit = Uuid::new_v4();
		assert_eq!(resolver.effective_id(Some(explicit)), Some(explicit));
		assert_eq!(
			resolver.effective_id(None),
			Some(Uuid::parse_str(fallback).unwrap())
		);
	}

	#[test]
	fn unparsable_default_is_ignored() {
		let resolver = ConfigResolver::from_config(
			&config(Some("not-a-uuid")),
			"http://localhost",
		)
		.unwrap();
		assert_eq!(resolver.effective_id(None), None);
	}
}
