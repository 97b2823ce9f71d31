use rocket::State;
use rocket::serde::json::Json;
use uuid::Uuid;

use crate::DbConn;
use crate::config::Config;
use crate::errors::{FocusGridError, Result};
use crate::models::client::Client;
use crate::models::client_config::ClientConfig;
use crate::models::feature::{ClientFeature, FeatureName};

#[get("/api/health")]
pub fn health() -> &'static str {
	"ok"
}

/// Resolve the configuration for one tenant. The query param wins over the
/// configured default tenant; without either the request is invalid.
#[get("/api/config?<client_id>")]
pub async fn fetch_config(
	client_id: Option<String>,
	config: &State<Config>,
	db: DbConn,
) -> Result<Json<ClientConfig>> {
	let requested = client_id
		.or_else(|| config.default_client_id.clone())
		.ok_or_else(|| {
			FocusGridError::bad_request(
				"no client id given and no default tenant configured",
			)
		})?;
	let id = Uuid::parse_str(&requested).map_err(|_| {
		FocusGridError::BadRequest(format!(
			"invalid client id \"{}\"",
			requested
		))
	})?;
	let client = Client::find(id, &db).await?;
	Ok(Json(ClientConfig::load(client, &db).await?))
}

#[derive(Deserialize, Debug, Clone)]
pub struct FeatureToggle {
	pub client_id: Uuid,
	pub feature: FeatureName,
	pub enabled: bool,
}

/// Flip one flag for one tenant and return the refreshed config.
#[post("/api/features/toggle", data = "<toggle>")]
pub async fn toggle_feature(
	toggle: Json<FeatureToggle>,
	db: DbConn,
) -> Result<Json<ClientConfig>> {
	let toggle = toggle.into_inner();
	let client = Client::find(toggle.client_id, &db).await?;
	ClientFeature::set_enabled(client.id, toggle.feature, toggle.enabled, &db)
		.await?;
	Ok(Json(ClientConfig::load(client, &db).await?))
}
