use diesel::result::DatabaseErrorKind;
use rocket::http::Status;
use rocket::response::status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use uuid::Uuid;

use crate::DbConn;
use crate::ephemeral::admin_token::AdminToken;
use crate::errors::{FocusGridError, InternalError, Result};
use crate::models::client::{Client, ClientChange, NewClient};
use crate::models::feature::ClientFeature;

#[get("/clients")]
pub async fn list_clients(
	db: DbConn,
	_admin: AdminToken,
) -> Result<Json<Vec<Client>>> {
	let clients = Client::all(&db).await?;
	Ok(Json(clients))
}

#[post("/clients", data = "<client>")]
pub async fn create_client(
	client: Json<NewClient>,
	db: DbConn,
	_admin: AdminToken,
) -> Result<status::Created<Json<Client>>> {
	match Client::create(client.into_inner(), &db).await {
		Ok(client) => {
			let location = format!("/clients/{}", client.id);
			Ok(status::Created::new(location).body(Json(client)))
		},
		Err(FocusGridError::Internal(InternalError::DatabaseError(
			diesel::result::Error::DatabaseError(
				DatabaseErrorKind::UniqueViolation,
				_,
			),
		))) => Err(FocusGridError::Conflict(String::from(
			"a client with this slug or subdomain already exists",
		))),
		Err(err) => Err(err),
	}
}

#[get("/clients/<id>")]
pub async fn show_client(
	id: Uuid,
	db: DbConn,
	_admin: AdminToken,
) -> Result<Json<Client>> {
	let client = Client::find(id, &db).await?;
	Ok(Json(client))
}

#[put("/clients/<id>", data = "<change>")]
pub async fn update_client(
	id: Uuid,
	change: Json<ClientChange>,
	db: DbConn,
	_admin: AdminToken,
) -> Result<Json<Client>> {
	let mut client = Client::find(id, &db).await?;
	client.change_with(change.into_inner())?;
	let client = client.update(&db).await?;
	Ok(Json(client))
}

#[delete("/clients/<id>")]
pub async fn delete_client(
	id: Uuid,
	db: DbConn,
	_admin: AdminToken,
) -> Result<Custom<()>> {
	let client = Client::find(id, &db).await?;
	client.delete(&db).await?;
	Ok(Custom(Status::NoContent, ()))
}

/// The stored override rows only; the merged view lives on /api/config.
#[get("/clients/<id>/features")]
pub async fn list_client_features(
	id: Uuid,
	db: DbConn,
	_admin: AdminToken,
) -> Result<Json<Vec<ClientFeature>>> {
	let client = Client::find(id, &db).await?;
	let features = ClientFeature::for_client(client.id, &db).await?;
	Ok(Json(features))
}
