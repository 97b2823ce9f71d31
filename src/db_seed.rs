use diesel::RunQueryDsl;

use crate::DbConn;
use crate::errors::{FocusGridError, Result};
use crate::models::client::{Client, NewClient};
use crate::models::feature::{ClientFeature, FeatureName};
use crate::models::schema::{client_features, clients};
use crate::util::slugify;

/// Development-only database seeding, driven by environment variables.
#[derive(Default)]
pub struct Seeder {
	empty_db: bool,
	clients_to_seed: usize,
	demo_client: Option<String>,
}

impl Seeder {
	pub fn from_env() -> Self {
		let mut seeder = Self::default();
		if std::env::var("FOCUSGRID_EMPTY_DB").is_ok() {
			seeder.empty_db = true;
		}
		if let Ok(number) = std::env::var("FOCUSGRID_SEED_CLIENTS") {
			match number.parse() {
				Ok(num) => seeder.clients_to_seed = num,
				Err(_) => eprintln!(
					"FOCUSGRID_SEED_CLIENTS=\"{}\" error, expected number",
					number
				),
			};
		}
		if let Ok(name) = std::env::var("FOCUSGRID_DEMO_CLIENT") {
			seeder.demo_client = Some(name);
		}
		seeder
	}

	pub async fn run(&self, db: &DbConn) -> Result<()> {
		if self.empty_db {
			self.delete_all(db).await?;
		}
		if self.demo_client.is_some() {
			self.seed_demo_client(db).await?;
		}
		if self.clients_to_seed > 0 {
			self.seed_clients(db).await?;
		}
		Ok(())
	}

	async fn delete_all(&self, db: &DbConn) -> Result<()> {
		db.run(|conn| {
			diesel::delete(client_features::table)
				.execute(conn)
				.map_err(FocusGridError::from)?;
			diesel::delete(clients::table)
				.execute(conn)
				.map_err(FocusGridError::from)
		})
		.await?;
		eprintln!("Database cleared");
		Ok(())
	}

	async fn seed_clients(&self, db: &DbConn) -> Result<()> {
		for i in 1..=self.clients_to_seed {
			Client::create(
				NewClient {
					name: format!("Test tenant {}", i),
					slug: None,
					subdomain: None,
					branding: None,
				},
				db,
			)
			.await?;
		}
		eprintln!("Seeded {} clients", self.clients_to_seed);
		Ok(())
	}

	async fn seed_demo_client(&self, db: &DbConn) -> Result<()> {
		let name = self.demo_client.as_ref().expect("demo client name");
		if Client::find_by_slug(slugify(name), db).await.is_err() {
			let client = Client::create(
				NewClient {
					name: name.clone(),
					slug: None,
					subdomain: None,
					branding: Some(
						serde_json::json!({ "accent": "#2563eb" }),
					),
				},
				db,
			)
			.await?;
			// One disabled module, so the seeded dashboard shows both
			// states.
			ClientFeature::set_enabled(
				client.id,
				FeatureName::Reports,
				false,
				db,
			)
			.await?;
			eprintln!("Seeded demo client \"{}\"", name);
		}
		Ok(())
	}
}
