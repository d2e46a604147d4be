use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "provider_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_name: String,
    pub city: String,
    pub state: String,
    pub verification_status: String,
    /// Embedded service list pending sync into the standalone service table.
    pub services: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Service }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Service => Entity::has_many(crate::service::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// One entry of the embedded `services` array. Written by the provider
/// management subsystem as loose client JSON, so every sub-field beyond the
/// name is optional and filled with defaults at sync time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbeddedService {
    pub name: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    pub price_amount: Option<f64>,
    pub price_currency: Option<String>,
    pub price_type: Option<String>,
    pub duration_minutes: Option<i32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub search_keywords: Option<Vec<String>>,
    pub availability: Option<serde_json::Value>,
}

impl Model {
    pub fn is_approved(&self) -> bool {
        self.verification_status == STATUS_APPROVED
    }

    /// Parse the embedded service array; malformed JSON degrades to an
    /// empty list rather than failing the sync batch.
    pub fn embedded_services(&self) -> Vec<EmbeddedService> {
        serde_json::from_value(self.services.clone()).unwrap_or_default()
    }
}

pub fn validate_status(s: &str) -> Result<(), errors::ModelError> {
    let valid = [STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];
    if !valid.contains(&s) {
        return Err(errors::ModelError::Validation("invalid verification status".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    user_id: Uuid,
    business_name: &str,
    city: &str,
    state: &str,
    services: serde_json::Value,
) -> Result<Model, errors::ModelError> {
    if business_name.trim().is_empty() {
        return Err(errors::ModelError::Validation("business_name must not be empty".into()));
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        business_name: Set(business_name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        verification_status: Set(STATUS_PENDING.to_string()),
        services: Set(services),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn set_verification_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: &str,
) -> Result<(), errors::ModelError> {
    validate_status(status)?;
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or_else(|| errors::ModelError::Validation("provider_profile not found".into()))?
        .into();
    found.verification_status = Set(status.to_string());
    found.updated_at = Set(Utc::now().into());
    found.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
