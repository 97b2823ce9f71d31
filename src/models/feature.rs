use diesel::{self, prelude::*};
use diesel_derive_enum::DbEnum;
use std::fmt;

use crate::DbConn;
use crate::errors::{FocusGridError, Result};
use crate::models::client::Client;
use crate::models::schema::client_features;

use uuid::Uuid;

/// The closed set of per-tenant dashboard modules.
#[derive(
	DbEnum,
	Debug,
	Serialize,
	Deserialize,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum FeatureName {
	Goals,
	ActionItems,
	Blockers,
	Agenda,
	Reports,
}

impl FeatureName {
	pub const ALL: [FeatureName; 5] = [
		FeatureName::Goals,
		FeatureName::ActionItems,
		FeatureName::Blockers,
		FeatureName::Agenda,
		FeatureName::Reports,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			FeatureName::Goals => "goals",
			FeatureName::ActionItems => "action_items",
			FeatureName::Blockers => "blockers",
			FeatureName::Agenda => "agenda",
			FeatureName::Reports => "reports",
		}
	}
}

impl fmt::Display for FeatureName {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// A stored per-tenant override for one feature flag. Flags without a row
/// fall back to enabled.
#[derive(
	Serialize,
	Queryable,
	Identifiable,
	Selectable,
	Associations,
	Insertable,
	Debug,
	Clone,
)]
#[diesel(belongs_to(Client))]
#[diesel(table_name = client_features)]
#[diesel(primary_key(client_id, feature_name))]
pub struct ClientFeature {
	pub client_id: Uuid,
	pub feature_name: FeatureName,
	pub enabled: bool,
	pub config: serde_json::Value,
}

impl ClientFeature {
	pub async fn for_client(
		client_id: Uuid,
		db: &DbConn,
	) -> Result<Vec<ClientFeature>> {
		db.run(move |conn| {
			client_features::table
				.filter(client_features::client_id.eq(client_id))
				.load(conn)
		})
		.await
		.map_err(FocusGridError::from)
	}

	/// Upsert on the (client_id, feature_name) key. A toggle never clobbers
	/// the stored feature config.
	pub async fn set_enabled(
		client_id: Uuid,
		feature: FeatureName,
		enabled: bool,
		db: &DbConn,
	) -> Result<ClientFeature> {
		let row = ClientFeature {
			client_id,
			feature_name: feature,
			enabled,
			config: serde_json::json!({}),
		};
		db.run(move |conn| {
			diesel::insert_into(client_features::table)
				.values(&row)
				.on_conflict((
					client_features::client_id,
					client_features::feature_name,
				))
				.do_update()
				.set(client_features::enabled.eq(enabled))
				.get_result(conn)
		})
		.await
		.map_err(FocusGridError::from)
	}
}
