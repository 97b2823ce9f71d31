use uuid::Uuid;

use focusgrid::config::Config;
use focusgrid::fallback;
use focusgrid::models::feature::FeatureName;
use focusgrid::resolver::ConfigResolver;

// Nothing listens on the discard port; connections fail immediately, so
// these tests exercise the outage path without a server or a database.
const DEAD_UPSTREAM: &str = "http://127.0.0.1:9";

fn outage_config() -> Config {
	Config {
		admin_token: String::from("unused"),
		default_client_id: None,
		fetch_attempts: 2,
		fetch_delay_ms: 10,
		fetch_timeout_ms: 250,
	}
}

#[rocket::async_test]
async fn outage_serves_the_degraded_fallback() {
	let resolver =
		ConfigResolver::from_config(&outage_config(), DEAD_UPSTREAM).unwrap();
	let id = Uuid::parse_str(fallback::ACME_TENANT_ID).unwrap();

	let resolved = resolver.resolve(Some(id)).await.unwrap();

	assert!(resolved.degraded);
	assert!(resolved.error.is_some(), "upstream error must be reported");
	assert_eq!(resolved.config.client_id, id);
	assert_eq!(resolved.config.slug, "acme-corp");
	assert_eq!(resolved.config.features.len(), FeatureName::ALL.len());
}

#[rocket::async_test]
async fn outage_without_an_id_serves_the_default_tenant() {
	let resolver =
		ConfigResolver::from_config(&outage_config(), DEAD_UPSTREAM).unwrap();

	let resolved = resolver.resolve(None).await.unwrap();

	assert!(resolved.degraded);
	assert_eq!(resolved.config.slug, "focus-grid-demo");
}

#[rocket::async_test]
async fn outage_for_an_unknown_tenant_degrades_to_the_default() {
	let resolver =
		ConfigResolver::from_config(&outage_config(), DEAD_UPSTREAM).unwrap();

	let resolved = resolver.resolve(Some(Uuid::new_v4())).await.unwrap();

	assert!(resolved.degraded);
	assert_eq!(resolved.config.slug, "focus-grid-demo");
}

#[test]
fn every_known_fallback_config_has_every_flag() {
	for config in fallback::known_configs() {
		assert_eq!(config.features.len(), FeatureName::ALL.len());
	}
}
