use rocket::http::{ContentType, Header, Status};

use focusgrid::models::client::Client;
use focusgrid::models::feature::{ClientFeature, FeatureName};

mod common;

use crate::common::HttpClient;

#[rocket::async_test]
async fn admin_endpoints_require_a_token() {
	common::as_visitor(async move |http_client: HttpClient, _db| {
		let response = http_client.get("/clients").dispatch().await;
		assert_eq!(response.status(), Status::Unauthorized);

		let response = http_client
			.get("/clients")
			.header(Header::new("Authorization", "Bearer wrong-token"))
			.dispatch()
			.await;
		assert_eq!(response.status(), Status::Unauthorized);

		let response = http_client
			.post("/clients")
			.body(r#"{"name": "Acme Corporation"}"#)
			.header(ContentType::JSON)
			.dispatch()
			.await;
		assert_eq!(response.status(), Status::Unauthorized);
	})
	.await;
}

#[rocket::async_test]
async fn create_show_update_and_delete_a_client() {
	common::as_visitor(async move |http_client, db| {
		let response = http_client
			.post("/clients")
			.body(r#"{"name": "Acme Corporation"}"#)
			.header(ContentType::JSON)
			.header(common::admin_auth())
			.dispatch()
			.await;

		assert_eq!(response.status(), Status::Created);
		let created: Client = response.into_json().await.unwrap();
		assert_eq!(created.name, "Acme Corporation");
		assert_eq!(created.slug, "acme-corporation");
		assert_eq!(created.subdomain, "acme-corporation");

		let response = http_client
			.get("/clients")
			.header(common::admin_auth())
			.dispatch()
			.await;
		assert_eq!(response.status(), Status::Ok);
		let listed: Vec<Client> = response.into_json().await.unwrap();
		assert_eq!(listed.len(), 1);
		assert_eq!(listed[0].id, created.id);

		let response = http_client
			.put(format!("/clients/{}", created.id))
			.body(r#"{"name": "Acme Inc"}"#)
			.header(ContentType::JSON)
			.header(common::admin_auth())
			.dispatch()
			.await;
		assert_eq!(response.status(), Status::Ok);
		let updated: Client = response.into_json().await.unwrap();
		assert_eq!(updated.id, created.id);
		assert_eq!(updated.name, "Acme Inc");
		// The slug and the id stay put on rename.
		assert_eq!(updated.slug, "acme-corporation");

		let response = http_client
			.delete(format!("/clients/{}", created.id))
			.header(common::admin_auth())
			.dispatch()
			.await;
		assert_eq!(response.status(), Status::NoContent);

		let response = http_client
			.get(format!("/clients/{}", created.id))
			.header(common::admin_auth())
			.dispatch()
			.await;
		assert_eq!(response.status(), Status::NotFound);

		assert_eq!(0, Client::all(&db).await.unwrap().len());
	})
	.await;
}

#[rocket::async_test]
async fn duplicate_slugs_conflict() {
	common::as_visitor(async move |http_client, db| {
		common::create_client("Acme Corporation", &db).await;

		let response = http_client
			.post("/clients")
			.body(r#"{"name": "Acme Corporation"}"#)
			.header(ContentType::JSON)
			.header(common::admin_auth())
			.dispatch()
			.await;

		assert_eq!(response.status(), Status::Conflict);
		assert_eq!(1, Client::all(&db).await.unwrap().len());
	})
	.await;
}

#[rocket::async_test]
async fn invalid_payloads_are_rejected() {
	common::as_visitor(async move |http_client, db| {
		let response = http_client
			.post("/clients")
			.body(r#"{"name": ""}"#)
			.header(ContentType::JSON)
			.header(common::admin_auth())
			.dispatch()
			.await;
		assert_eq!(response.status(), Status::BadRequest);

		let response = http_client
			.post("/clients")
			.body(r#"{"name": "Acme", "slug": "Not A Slug"}"#)
			.header(ContentType::JSON)
			.header(common::admin_auth())
			.dispatch()
			.await;
		assert_eq!(response.status(), Status::BadRequest);

		assert_eq!(0, Client::all(&db).await.unwrap().len());
	})
	.await;
}

#[rocket::async_test]
async fn feature_overrides_are_listed_per_client() {
	common::as_visitor(async move |http_client, db| {
		let client = common::create_client("Acme Corporation", &db).await;

		let response = http_client
			.get(format!("/clients/{}/features", client.id))
			.header(common::admin_auth())
			.dispatch()
			.await;
		assert_eq!(response.status(), Status::Ok);
		let rows: Vec<serde_json::Value> =
			response.into_json().await.unwrap();
		assert!(rows.is_empty());

		ClientFeature::set_enabled(
			client.id,
			FeatureName::Agenda,
			false,
			&db,
		)
		.await
		.unwrap();

		let response = http_client
			.get(format!("/clients/{}/features", client.id))
			.header(common::admin_auth())
			.dispatch()
			.await;
		let rows: Vec<serde_json::Value> =
			response.into_json().await.unwrap();
		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0]["feature_name"], "agenda");
		assert_eq!(rows[0]["enabled"], false);
	})
	.await;
}
