use rocket::serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(crate = "rocket::serde")]
pub struct Config {
	pub admin_token: String,
	/// Tenant used when a request carries no client id. Populated from the
	/// CLIENT_ID environment variable when the config leaves it unset.
	#[serde(default)]
	pub default_client_id: Option<String>,
	#[serde(default = "default_fetch_attempts")]
	pub fetch_attempts: u32,
	#[serde(default = "default_fetch_delay_ms")]
	pub fetch_delay_ms: u64,
	#[serde(default = "default_fetch_timeout_ms")]
	pub fetch_timeout_ms: u64,
}

fn default_fetch_attempts() -> u32 {
	3
}

fn default_fetch_delay_ms() -> u64 {
	500
}

fn default_fetch_timeout_ms() -> u64 {
	2000
}
