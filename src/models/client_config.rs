use std::collections::BTreeMap;

use crate::DbConn;
use crate::errors::Result;
use crate::models::client::Client;
use crate::models::feature::{ClientFeature, FeatureName};

use uuid::Uuid;

/// The resolved configuration for one tenant. Derived, never persisted:
/// the tenant row left-merged with its stored feature overrides. The
/// feature map always carries every known flag; flags without an override
/// default to enabled, so new features are opt-out for existing tenants.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
	pub client_id: Uuid,
	pub name: String,
	pub slug: String,
	pub features: BTreeMap<FeatureName, bool>,
	pub branding: serde_json::Value,
}

impl ClientConfig {
	pub fn build(client: &Client, overrides: &[ClientFeature]) -> ClientConfig {
		let mut features = BTreeMap::new();
		for feature in FeatureName::ALL {
			let enabled = overrides
				.iter()
				.find(|o| o.feature_name == feature)
				.map(|o| o.enabled)
				.unwrap_or(true);
			features.insert(feature, enabled);
		}
		ClientConfig {
			client_id: client.id,
			name: client.name.clone(),
			slug: client.slug.clone(),
			features,
			branding: client.branding.clone(),
		}
	}

	pub async fn load(client: Client, db: &DbConn) -> Result<ClientConfig> {
		let overrides = ClientFeature::for_client(client.id, db).await?;
		Ok(Self::build(&client, &overrides))
	}

	pub fn enabled(&self, feature: FeatureName) -> bool {
		self.features.get(&feature).copied().unwrap_or(true)
	}
}
