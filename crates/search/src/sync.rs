//! One-way projection of provider-embedded services into the standalone
//! service table, keyed by `(provider_id, name)`. Idempotent: reruns insert
//! nothing, and a duplicate-key race counts as already synced. Orphaned
//! standalone services are never deleted here.

use chrono::Utc;
use models::{provider_profile, service};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{errors::SearchError, registry};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub created: u32,
    pub skipped: u32,
}

/// Canonicalize an embedded category to its registry slug so display names
/// like "Beauty & Wellness" land queryable under "beauty-wellness". Unknown
/// labels are stored as written.
fn canonical_category(raw: &str) -> String {
    match registry::resolve(raw) {
        Some(def) => def.slug.to_string(),
        None => raw.to_string(),
    }
}

fn materialize(provider: &provider_profile::Model, embedded: &provider_profile::EmbeddedService) -> service::ActiveModel {
    let now = Utc::now().into();
    service::ActiveModel {
        id: Set(Uuid::new_v4()),
        provider_id: Set(provider.id),
        name: Set(embedded.name.trim().to_string()),
        category: Set(canonical_category(embedded.category.as_deref().unwrap_or_default())),
        subcategory: Set(embedded.subcategory.clone()),
        description: Set(embedded.description.clone().unwrap_or_default()),
        price_amount: Set(embedded.price_amount.unwrap_or(0.0)),
        price_currency: Set(embedded
            .price_currency
            .clone()
            .unwrap_or_else(|| service::DEFAULT_CURRENCY.to_string())),
        price_type: Set(embedded
            .price_type
            .clone()
            .unwrap_or_else(|| service::PRICE_TYPE_FIXED.to_string())),
        duration_minutes: Set(embedded.duration_minutes.unwrap_or(service::DEFAULT_DURATION_MINUTES)),
        address: Set(embedded.address.clone().unwrap_or_default()),
        city: Set(embedded.city.clone().unwrap_or_else(|| provider.city.clone())),
        state: Set(embedded.state.clone().unwrap_or_else(|| provider.state.clone())),
        lat: Set(embedded.lat),
        lng: Set(embedded.lng),
        availability: Set(embedded
            .availability
            .clone()
            .unwrap_or_else(service::empty_availability)),
        rating_avg: Set(0.0),
        rating_count: Set(0),
        is_active: Set(true),
        search_keywords: Set(embedded
            .search_keywords
            .clone()
            .map(|ks| ks.join(" "))
            .unwrap_or_default()),
        popularity_score: Set(0.0),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Sync one provider's embedded services. Non-approved providers are a
/// no-op; existing `(provider_id, name)` rows are skipped, never
/// overwritten.
pub async fn sync_provider(
    db: &DatabaseConnection,
    provider: &provider_profile::Model,
) -> Result<SyncReport, SearchError> {
    let mut report = SyncReport::default();
    if !provider.is_approved() {
        return Ok(report);
    }

    for embedded in provider.embedded_services() {
        let name = embedded.name.trim();
        if name.is_empty() {
            report.skipped += 1;
            continue;
        }

        let existing = service::Entity::find()
            .filter(service::Column::ProviderId.eq(provider.id))
            .filter(service::Column::Name.eq(name))
            .one(db)
            .await
            .map_err(SearchError::unavailable)?;
        if existing.is_some() {
            report.skipped += 1;
            continue;
        }

        let inserted = materialize(provider, &embedded)
            .insert(db)
            .await
            .map_err(SearchError::from_insert_err);
        match inserted {
            Ok(created) => {
                info!(provider_id = %provider.id, service = %created.name, "synced embedded service");
                report.created += 1;
            }
            // Concurrent run won the insert; the unique index on
            // (provider_id, name) makes this equivalent to "already synced".
            Err(SearchError::Conflict(_)) => {
                warn!(provider_id = %provider.id, service = name, "duplicate during sync, treating as skipped");
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

/// Batch entry point: sync every approved provider in the store.
pub async fn sync_all(db: &DatabaseConnection) -> Result<SyncReport, SearchError> {
    let providers = provider_profile::Entity::find()
        .filter(provider_profile::Column::VerificationStatus.eq(provider_profile::STATUS_APPROVED))
        .all(db)
        .await
        .map_err(SearchError::unavailable)?;

    let mut total = SyncReport::default();
    for p in &providers {
        let r = sync_provider(db, p).await?;
        total.created += r.created;
        total.skipped += r.skipped;
    }
    info!(providers = providers.len(), created = total.created, skipped = total.skipped, "sync batch finished");
    Ok(total)
}
