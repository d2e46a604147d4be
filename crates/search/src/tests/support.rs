//! Shared fixtures for DB-backed tests. Tests scope themselves to a unique
//! city string so they can run against a shared database without seeing
//! each other's rows.

use chrono::Utc;
use migration::MigratorTrait;
use models::{provider_profile, service};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::json;
use uuid::Uuid;

/// Connect and migrate, or `None` when no database is reachable.
pub async fn setup_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match models::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

pub fn unique_city() -> String {
    format!("test-city-{}", Uuid::new_v4())
}

pub async fn approved_provider(
    db: &DatabaseConnection,
    city: &str,
    services: serde_json::Value,
) -> provider_profile::Model {
    let now = Utc::now().into();
    provider_profile::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(Uuid::new_v4()),
        business_name: Set(format!("fixture-{}", Uuid::new_v4())),
        city: Set(city.to_string()),
        state: Set("Dubai".to_string()),
        verification_status: Set(provider_profile::STATUS_APPROVED.to_string()),
        services: Set(services),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("insert provider fixture")
}

pub async fn pending_provider(
    db: &DatabaseConnection,
    city: &str,
    services: serde_json::Value,
) -> provider_profile::Model {
    let now = Utc::now().into();
    provider_profile::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(Uuid::new_v4()),
        business_name: Set(format!("fixture-{}", Uuid::new_v4())),
        city: Set(city.to_string()),
        state: Set("Dubai".to_string()),
        verification_status: Set(provider_profile::STATUS_PENDING.to_string()),
        services: Set(services),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("insert provider fixture")
}

pub struct ServiceFixture {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub city: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub rating: f64,
    pub popularity: f64,
    pub active: bool,
    pub keywords: String,
}

impl ServiceFixture {
    pub fn new(name: &str, category: &str, price: f64, city: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            price,
            city: city.to_string(),
            lat: None,
            lng: None,
            rating: 0.0,
            popularity: 0.0,
            active: true,
            keywords: String::new(),
        }
    }
}

pub async fn insert_service(
    db: &DatabaseConnection,
    provider_id: Uuid,
    f: ServiceFixture,
) -> service::Model {
    let now = Utc::now().into();
    service::ActiveModel {
        id: Set(Uuid::new_v4()),
        provider_id: Set(provider_id),
        name: Set(f.name),
        category: Set(f.category),
        subcategory: Set(None),
        description: Set("fixture service".to_string()),
        price_amount: Set(f.price),
        price_currency: Set(service::DEFAULT_CURRENCY.to_string()),
        price_type: Set(service::PRICE_TYPE_FIXED.to_string()),
        duration_minutes: Set(service::DEFAULT_DURATION_MINUTES),
        address: Set(String::new()),
        city: Set(f.city),
        state: Set("Dubai".to_string()),
        lat: Set(f.lat),
        lng: Set(f.lng),
        availability: Set(service::empty_availability()),
        rating_avg: Set(f.rating),
        rating_count: Set(0),
        is_active: Set(f.active),
        search_keywords: Set(f.keywords),
        popularity_score: Set(f.popularity),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("insert service fixture")
}

/// Cascade-delete a provider fixture and its services.
pub async fn cleanup_provider(db: &DatabaseConnection, id: Uuid) {
    use sea_orm::EntityTrait;
    let _ = provider_profile::Entity::delete_by_id(id).exec(db).await;
}

pub fn empty_services() -> serde_json::Value {
    json!([])
}
