use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors, provider_profile};

pub const PRICE_TYPE_FIXED: &str = "fixed";
pub const PRICE_TYPE_HOURLY: &str = "hourly";
pub const PRICE_TYPE_QUOTE: &str = "quote";

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_DURATION_MINUTES: i32 = 60;

/// Schedule applied when a provider has not published one.
pub fn empty_availability() -> Json {
    serde_json::json!({ "schedule": {}, "exceptions": [] })
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub provider_id: Uuid,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub description: String,
    pub price_amount: f64,
    pub price_currency: String,
    pub price_type: String,
    pub duration_minutes: i32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Weekly schedule keyed by day name, plus an `exceptions` list.
    pub availability: Json,
    pub rating_avg: f64,
    pub rating_count: i32,
    pub is_active: bool,
    /// Whitespace-separated keywords consulted by text search.
    pub search_keywords: String,
    pub popularity_score: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Provider }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Provider => Entity::belongs_to(provider_profile::Entity)
                .from(Column::ProviderId)
                .to(provider_profile::Column::Id)
                .into(),
        }
    }
}

impl Related<provider_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provider.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_price_type(t: &str) -> Result<String, errors::ModelError> {
    let lower = t.to_ascii_lowercase();
    let valid = [PRICE_TYPE_FIXED, PRICE_TYPE_HOURLY, PRICE_TYPE_QUOTE];
    if !valid.contains(&lower.as_str()) {
        return Err(errors::ModelError::Validation("invalid price type".into()));
    }
    Ok(lower)
}

pub fn validate_name(n: &str) -> Result<(), errors::ModelError> {
    if n.trim().is_empty() {
        return Err(errors::ModelError::Validation("service name must not be empty".into()));
    }
    Ok(())
}

pub fn validate_price_amount(a: f64) -> Result<(), errors::ModelError> {
    if !a.is_finite() || a < 0.0 {
        return Err(errors::ModelError::Validation("price amount must be >= 0".into()));
    }
    Ok(())
}

/// Direct service creation by a provider action. The sync job builds its
/// own ActiveModels because it applies embedded-copy defaults instead.
#[allow(clippy::too_many_arguments)]
pub async fn create(
    db: &DatabaseConnection,
    provider_id: Uuid,
    name: &str,
    category: &str,
    description: &str,
    price_amount: f64,
    price_type: &str,
    city: &str,
    state: &str,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_price_amount(price_amount)?;
    let price_type = validate_price_type(price_type)?;

    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        provider_id: Set(provider_id),
        name: Set(name.to_string()),
        category: Set(category.to_string()),
        subcategory: Set(None),
        description: Set(description.to_string()),
        price_amount: Set(price_amount),
        price_currency: Set(DEFAULT_CURRENCY.to_string()),
        price_type: Set(price_type),
        duration_minutes: Set(DEFAULT_DURATION_MINUTES),
        address: Set(String::new()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        lat: Set(None),
        lng: Set(None),
        availability: Set(empty_availability()),
        rating_avg: Set(0.0),
        rating_count: Set(0),
        is_active: Set(true),
        search_keywords: Set(String::new()),
        popularity_score: Set(0.0),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn set_active(db: &DatabaseConnection, id: Uuid, active: bool) -> Result<(), errors::ModelError> {
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or_else(|| errors::ModelError::Validation("service not found".into()))?
        .into();
    found.is_active = Set(active);
    found.updated_at = Set(Utc::now().into());
    found.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
