use diesel::{self, prelude::*};

use crate::DbConn;
use crate::errors::{FocusGridError, Result};
use crate::models::schema::clients;
use crate::util::slugify;

use chrono::NaiveDateTime;
use regex::Regex;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// One row per tenant. The id is generated at creation and never changes.
#[derive(
	Validate,
	Serialize,
	Deserialize,
	AsChangeset,
	Queryable,
	Identifiable,
	Selectable,
	Debug,
	Clone,
	PartialEq,
)]
#[diesel(table_name = clients)]
pub struct Client {
	pub id: Uuid,
	#[validate(length(min = 1, max = 80))]
	pub name: String,
	#[validate(length(min = 1, max = 80), custom(function = "validate_label"))]
	pub slug: String,
	#[validate(length(min = 1, max = 80), custom(function = "validate_label"))]
	pub subdomain: String,
	pub branding: serde_json::Value,
	pub created_at: NaiveDateTime,
}

#[derive(Validate, Deserialize, Debug, Clone)]
pub struct NewClient {
	#[validate(length(min = 1, max = 80))]
	pub name: String,
	#[validate(length(min = 1, max = 80), custom(function = "validate_label"))]
	pub slug: Option<String>,
	#[validate(length(min = 1, max = 80), custom(function = "validate_label"))]
	pub subdomain: Option<String>,
	pub branding: Option<serde_json::Value>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = clients)]
struct NewClientRecord {
	id: Uuid,
	name: String,
	slug: String,
	subdomain: String,
	branding: serde_json::Value,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ClientChange {
	pub name: Option<String>,
	pub slug: Option<String>,
	pub subdomain: Option<String>,
	pub branding: Option<serde_json::Value>,
}

impl Client {
	pub async fn all(db: &DbConn) -> Result<Vec<Client>> {
		let all_clients = db
			.run(move |conn| clients::table.load::<Client>(conn))
			.await?;
		Ok(all_clients)
	}

	pub async fn create(client: NewClient, db: &DbConn) -> Result<Client> {
		client.validate()?;
		let slug = match client.slug {
			Some(slug) => slug,
			None => slugify(&client.name),
		};
		if slug.is_empty() {
			return Err(FocusGridError::bad_request(
				"client name does not yield a usable slug",
			));
		}
		let record = NewClientRecord {
			id: Uuid::new_v4(),
			name: client.name,
			subdomain: client.subdomain.unwrap_or_else(|| slug.clone()),
			slug,
			branding: client
				.branding
				.unwrap_or_else(|| serde_json::json!({})),
		};
		db.run(move |conn| {
			diesel::insert_into(clients::table)
				.values(&record)
				.get_result::<Client>(conn)
		})
		.await
		.map_err(FocusGridError::from)
	}

	pub fn change_with(&mut self, change: ClientChange) -> Result<()> {
		if let Some(name) = change.name {
			self.name = name;
		}
		if let Some(slug) = change.slug {
			self.slug = slug;
		}
		if let Some(subdomain) = change.subdomain {
			self.subdomain = subdomain;
		}
		if let Some(branding) = change.branding {
			self.branding = branding;
		}
		self.validate()?;
		Ok(())
	}

	pub async fn update(self, db: &DbConn) -> Result<Self> {
		let id = self.id;
		db.run(move |conn| {
			diesel::update(clients::table.find(id))
				.set(self)
				.get_result(conn)
		})
		.await
		.map_err(FocusGridError::from)
	}

	pub async fn find(id: Uuid, db: &DbConn) -> Result<Client> {
		db.run(move |conn| clients::table.find(id).first(conn))
			.await
			.map_err(FocusGridError::from)
	}

	pub async fn find_by_slug(slug: String, db: &DbConn) -> Result<Client> {
		db.run(move |conn| {
			clients::table.filter(clients::slug.eq(slug)).first(conn)
		})
		.await
		.map_err(FocusGridError::from)
	}

	pub async fn delete(self, db: &DbConn) -> Result<()> {
		db.run(move |conn| {
			diesel::delete(clients::table.find(self.id)).execute(conn)
		})
		.await
		.map_err(FocusGridError::from)?;
		Ok(())
	}
}

fn validate_label(value: &str) -> std::result::Result<(), ValidationError> {
	lazy_static! {
		static ref LABEL_REGEX: Regex =
			Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
	}
	if LABEL_REGEX.is_match(value) {
		Ok(())
	} else {
		Err(ValidationError::new("invalid label"))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn label_validation() {
		assert!(validate_label("acme-corp").is_ok());
		assert!(validate_label("a1").is_ok());
		assert!(validate_label("Acme").is_err());
		assert!(validate_label("acme--corp").is_err());
		assert!(validate_label("-acme").is_err());
		assert!(validate_label("").is_err());
	}
}
