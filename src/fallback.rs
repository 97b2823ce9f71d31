use std::collections::{BTreeMap, HashMap};

use crate::models::client_config::ClientConfig;
use crate::models::feature::FeatureName;

use uuid::Uuid;

/// Tenant served when the requested id is unknown to the fallback table
/// (or when no id was requested at all).
pub const DEFAULT_TENANT_ID: &str = "a27c1a52-51e3-4f86-8e57-bc18ff5a0e49";

pub const ACME_TENANT_ID: &str = "1f0f9a5e-6c1a-4b86-9be2-3e8f0c68d2a1";
pub const GLOBEX_TENANT_ID: &str = "7c3aa1a4-0d6e-4f28-8c4e-6b9d2f1e5a37";

fn baked(
	id: &str,
	name: &str,
	slug: &str,
	disabled: &[FeatureName],
	branding: serde_json::Value,
) -> ClientConfig {
	let mut features = BTreeMap::new();
	for feature in FeatureName::ALL {
		features.insert(feature, !disabled.contains(&feature));
	}
	ClientConfig {
		client_id: Uuid::parse_str(id).expect("fallback tenant id"),
		name: name.to_string(),
		slug: slug.to_string(),
		features,
		branding,
	}
}

lazy_static! {
	static ref DEFAULT_ID: Uuid =
		Uuid::parse_str(DEFAULT_TENANT_ID).expect("default tenant id");
	static ref KNOWN_CONFIGS: HashMap<Uuid, ClientConfig> = {
		let configs = [
			baked(
				DEFAULT_TENANT_ID,
				"Focus Grid Demo",
				"focus-grid-demo",
				&[],
				serde_json::json!({}),
			),
			baked(
				ACME_TENANT_ID,
				"Acme Corp",
				"acme-corp",
				&[],
				serde_json::json!({ "accent": "#2563eb" }),
			),
			baked(
				GLOBEX_TENANT_ID,
				"Globex",
				"globex",
				&[FeatureName::Reports],
				serde_json::json!({ "accent": "#dc2626" }),
			),
		];
		let mut map = HashMap::new();
		for config in configs {
			map.insert(config.client_id, config);
		}
		map
	};
}

/// Pre-baked config for a known tenant, or the default tenant's config
/// when the id is unknown or absent. Only consulted when the live
/// resolver has already failed; the caller tags the result as degraded.
pub fn fallback_config(client_id: Option<Uuid>) -> ClientConfig {
	client_id
		.and_then(|id| KNOWN_CONFIGS.get(&id))
		.unwrap_or_else(|| {
			KNOWN_CONFIGS
				.get(&*DEFAULT_ID)
				.expect("default fallback tenant present")
		})
		.clone()
}

pub fn known_configs() -> impl Iterator<Item = &'static ClientConfig> {
	KNOWN_CONFIGS.values()
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn known_tenant_is_served_as_baked() {
		let id = Uuid::parse_str(GLOBEX_TENANT_ID).unwrap();
		let config = fallback_config(Some(id));

		assert_eq!(config.client_id, id);
		assert_eq!(config.slug, "globex");
		assert!(!config.enabled(FeatureName::Reports));
		assert!(config.enabled(FeatureName::Goals));
	}

	#[test]
	fn unknown_or_absent_tenant_gets_the_default() {
		let unknown = fallback_config(Some(Uuid::new_v4()));
		assert_eq!(unknown.slug, "focus-grid-demo");

		let absent = fallback_config(None);
		assert_eq!(absent.slug, "focus-grid-demo");
	}
}
