#[macro_use]
extern crate rocket;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod controllers;
pub mod db_seed;
pub mod ephemeral;
pub mod errors;
pub mod fallback;
pub mod models;
pub mod resolver;
pub mod util;

use crate::config::Config;
use crate::controllers::*;
use crate::db_seed::Seeder;

use diesel_migrations::{
	EmbeddedMigrations, MigrationHarness, embed_migrations,
};
use rocket::fairing::{self, AdHoc};
use rocket::figment::Figment;
use rocket::{Build, Rocket};
use rocket_sync_db_pools::database;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[database("postgresql_database")]
pub struct DbConn(diesel::PgConnection);

pub fn prepare_custom(figment: Figment) -> Rocket<Build> {
	assemble(rocket::custom(figment))
}

pub fn prepare() -> Rocket<Build> {
	let mut figment = rocket::Config::figment();
	// An explicit default_client_id in the config wins over the
	// environment, so join rather than merge.
	if let Ok(client_id) = std::env::var("CLIENT_ID") {
		figment = figment.join(("default_client_id", client_id));
	}
	assemble(rocket::custom(figment))
}

/// Setup of the given rocket instance. Mount routes, attach the database
/// pool, and run migrations and the dev seeder on ignition.
fn assemble(rocket: Rocket<Build>) -> Rocket<Build> {
	rocket
		.mount(
			"/",
			routes![
				config_controller::health,
				config_controller::fetch_config,
				config_controller::toggle_feature,
				clients_controller::list_clients,
				clients_controller::create_client,
				clients_controller::show_client,
				clients_controller::update_client,
				clients_controller::delete_client,
				clients_controller::list_client_features,
			],
		)
		.attach(DbConn::fairing())
		.attach(AdHoc::config::<Config>())
		.attach(AdHoc::try_on_ignite("Database Migrations", run_migrations))
		.attach(AdHoc::try_on_ignite("Database Seeding", run_seeder))
}

async fn run_migrations(rocket: Rocket<Build>) -> fairing::Result {
	let db = DbConn::get_one(&rocket)
		.await
		.expect("database connection for migrations");
	let result = db
		.run(|conn| {
			conn.run_pending_migrations(MIGRATIONS)
				.map(|_| ())
				.map_err(|e| e.to_string())
		})
		.await;
	match result {
		Ok(()) => Ok(rocket),
		Err(e) => {
			eprintln!("Failed to run database migrations: {:?}", e);
			Err(rocket)
		},
	}
}

async fn run_seeder(rocket: Rocket<Build>) -> fairing::Result {
	if rocket.figment().profile() != &rocket::Config::DEBUG_PROFILE {
		return Ok(rocket);
	}
	let db = DbConn::get_one(&rocket)
		.await
		.expect("database connection for seeding");
	match Seeder::from_env().run(&db).await {
		Ok(()) => Ok(rocket),
		Err(e) => {
			eprintln!("Failed to seed database: {:?}", e);
			Err(rocket)
		},
	}
}
