//! Wire-facing DTOs. The flat relational row is an internal shape; responses
//! group price, location, rating and search metadata the way clients expect.

use chrono::{DateTime, FixedOffset};
use common::types::PageMeta;
use serde::Serialize;
use uuid::Uuid;

use crate::executor::ServiceHit;
use crate::registry::{CategoryDef, CategoryMatch, Origin};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub price_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesDto {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<CoordinatesDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub average: f64,
    pub count: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetadataDto {
    pub search_keywords: Vec<String>,
    pub popularity_score: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub description: String,
    pub price: PriceDto,
    pub duration_minutes: i32,
    pub location: LocationDto,
    pub rating: RatingDto,
    pub is_active: bool,
    pub availability: serde_json::Value,
    pub search_metadata: SearchMetadataDto,
    /// Present only on geo-filtered results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<ServiceHit> for ServiceDto {
    fn from(hit: ServiceHit) -> Self {
        let m = hit.service;
        let coordinates = match (m.lat, m.lng) {
            (Some(lat), Some(lng)) => Some(CoordinatesDto { lat, lng }),
            _ => None,
        };
        ServiceDto {
            id: m.id,
            provider_id: m.provider_id,
            name: m.name,
            category: m.category,
            subcategory: m.subcategory,
            description: m.description,
            price: PriceDto {
                amount: m.price_amount,
                currency: m.price_currency,
                price_type: m.price_type,
            },
            duration_minutes: m.duration_minutes,
            location: LocationDto {
                address: m.address,
                city: m.city,
                state: m.state,
                coordinates,
            },
            rating: RatingDto { average: m.rating_avg, count: m.rating_count },
            is_active: m.is_active,
            availability: m.availability,
            search_metadata: SearchMetadataDto {
                search_keywords: m
                    .search_keywords
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
                popularity_score: m.popularity_score,
            },
            distance_km: hit.distance_km,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// The `data` payload of `/api/search` and category-scoped listings.
#[derive(Debug, Serialize)]
pub struct ServicesPageDto {
    pub services: Vec<ServiceDto>,
    pub pagination: PageMeta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub sort_order: i32,
    pub is_featured: bool,
    pub origin: &'static str,
}

impl From<&CategoryDef> for CategoryDto {
    fn from(c: &CategoryDef) -> Self {
        CategoryDto {
            name: c.name.to_string(),
            slug: c.slug.to_string(),
            icon: c.icon.to_string(),
            sort_order: c.sort_order,
            is_featured: c.is_featured,
            origin: match c.origin {
                Origin::Legacy => "legacy",
                Origin::Current => "current",
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetailDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    pub subcategories: Vec<String>,
}

impl From<&CategoryDef> for CategoryDetailDto {
    fn from(c: &CategoryDef) -> Self {
        CategoryDetailDto {
            category: c.into(),
            subcategories: c.subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryListDto {
    pub categories: Vec<CategoryDto>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySuggestionDto {
    pub category: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

impl From<&CategoryMatch> for CategorySuggestionDto {
    fn from(m: &CategoryMatch) -> Self {
        CategorySuggestionDto {
            category: m.category.name.to_string(),
            slug: m.category.slug.to_string(),
            subcategory: m.subcategory.map(str::to_string),
        }
    }
}
