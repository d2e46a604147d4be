//! Translates a `FilterSpec` into a store query, executes it, and shapes
//! the paged result. Filters combine with logical AND; every one of them
//! is optional except the `is_active` gate.

use common::pagination::to_offset;
use common::types::{PageMeta, Paged};
use models::service;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select,
};
use tracing::debug;

use crate::errors::SearchError;
use crate::filters::{FilterSpec, SortBy};

/// One result row, with the great-circle distance attached on geo queries.
#[derive(Debug)]
pub struct ServiceHit {
    pub service: service::Model,
    pub distance_km: Option<f64>,
}

const EARTH_RADIUS_KM: f64 = 6371.0;
const KM_PER_LAT_DEGREE: f64 = 110.574;
const KM_PER_LNG_DEGREE_AT_EQUATOR: f64 = 111.320;

/// Great-circle distance between two points, in km (haversine).
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

fn lower_eq(col: service::Column, value: &str) -> Condition {
    Condition::all().add(Expr::expr(Func::lower(Expr::col(col))).eq(value.to_lowercase()))
}

/// Escape LIKE metacharacters so a user query matches them literally.
/// Backslash goes first; it is the default escape character in Postgres.
fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn lower_contains(col: service::Column, needle: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col)))
        .like(format!("%{}%", escape_like(&needle.to_lowercase())))
}

/// Build the AND-combined predicate for a normalized spec. The geo portion
/// here is only the bounding-box prefilter; the exact radius cut happens
/// in `execute` after the rows are fetched.
pub(crate) fn build_condition(spec: &FilterSpec) -> Condition {
    let mut cond = Condition::all().add(service::Column::IsActive.eq(true));

    if let Some(cat) = &spec.category {
        cond = cond.add(lower_eq(service::Column::Category, cat));
        // Subcategory narrows a category; on its own it is ignored.
        if let Some(sub) = &spec.subcategory {
            cond = cond.add(lower_eq(service::Column::Subcategory, sub));
        }
    }

    if let Some(q) = spec.effective_query() {
        cond = cond.add(
            Condition::any()
                .add(lower_contains(service::Column::Name, q))
                .add(lower_contains(service::Column::Description, q))
                .add(lower_contains(service::Column::SearchKeywords, q)),
        );
    }

    // Bounds apply literally; inverted bounds legitimately match nothing.
    if let Some(min) = spec.min_price {
        cond = cond.add(service::Column::PriceAmount.gte(min));
    }
    if let Some(max) = spec.max_price {
        cond = cond.add(service::Column::PriceAmount.lte(max));
    }
    if let Some(min) = spec.min_rating {
        cond = cond.add(service::Column::RatingAvg.gte(min));
    }

    if let Some(city) = &spec.city {
        cond = cond.add(lower_eq(service::Column::City, city));
    }
    if let Some(state) = &spec.state {
        cond = cond.add(lower_eq(service::Column::State, state));
    }

    if let Some((lat, lng)) = spec.geo_point() {
        let dlat = spec.radius_km / KM_PER_LAT_DEGREE;
        let lng_scale = (KM_PER_LNG_DEGREE_AT_EQUATOR * lat.to_radians().cos().abs()).max(1e-6);
        let dlng = spec.radius_km / lng_scale;
        cond = cond
            .add(service::Column::Lat.between(lat - dlat, lat + dlat))
            .add(service::Column::Lng.between(lng - dlng, lng + dlng));
    }

    cond
}

/// Store-side ordering for non-geo queries, with the stable `id` tie-break
/// that keeps pagination consistent. A `distance` sort without coordinates
/// silently degrades to popularity.
fn apply_order(query: Select<service::Entity>, sort_by: SortBy) -> Select<service::Entity> {
    let ordered = match sort_by {
        SortBy::Popularity | SortBy::Distance => query.order_by_desc(service::Column::PopularityScore),
        SortBy::Rating => query.order_by_desc(service::Column::RatingAvg),
        SortBy::Price => query.order_by_asc(service::Column::PriceAmount),
        SortBy::PriceDesc => query.order_by_desc(service::Column::PriceAmount),
        SortBy::Newest => query.order_by_desc(service::Column::CreatedAt),
    };
    ordered.order_by_asc(service::Column::Id)
}

fn order_hits(hits: &mut [ServiceHit], sort_by: SortBy) {
    use std::cmp::Ordering;
    hits.sort_by(|a, b| {
        let primary = match sort_by {
            SortBy::Distance => a
                .distance_km
                .unwrap_or(f64::MAX)
                .total_cmp(&b.distance_km.unwrap_or(f64::MAX)),
            SortBy::Popularity => b.service.popularity_score.total_cmp(&a.service.popularity_score),
            SortBy::Rating => b.service.rating_avg.total_cmp(&a.service.rating_avg),
            SortBy::Price => a.service.price_amount.total_cmp(&b.service.price_amount),
            SortBy::PriceDesc => b.service.price_amount.total_cmp(&a.service.price_amount),
            SortBy::Newest => b.service.created_at.cmp(&a.service.created_at),
        };
        match primary {
            Ordering::Equal => a.service.id.cmp(&b.service.id),
            other => other,
        }
    });
}

/// Run a normalized search. Store failures surface as
/// `SearchError::Unavailable`; an unmatched predicate is an empty page with
/// `total: 0`, never an error.
pub async fn execute(
    db: &DatabaseConnection,
    spec: &FilterSpec,
) -> Result<Paged<ServiceHit>, SearchError> {
    let cond = build_condition(spec);
    debug!(sort = spec.sort_by.as_str(), page = spec.page, limit = spec.limit, "executing search");

    if let Some((lat, lng)) = spec.geo_point() {
        // Bounding box narrows in the store; exact radius, ordering and
        // pagination happen here because the distance is computed in process.
        let rows = service::Entity::find()
            .filter(cond)
            .all(db)
            .await
            .map_err(SearchError::unavailable)?;

        let mut hits: Vec<ServiceHit> = rows
            .into_iter()
            .filter_map(|m| match (m.lat, m.lng) {
                (Some(slat), Some(slng)) => {
                    let d = haversine_km(lat, lng, slat, slng);
                    (d <= spec.radius_km).then_some(ServiceHit { service: m, distance_km: Some(d) })
                }
                _ => None,
            })
            .collect();
        order_hits(&mut hits, spec.sort_by);

        let total = hits.len() as u64;
        let page_hits: Vec<ServiceHit> = hits
            .into_iter()
            .skip(to_offset(spec.page, spec.limit) as usize)
            .take(spec.limit as usize)
            .collect();
        return Ok(Paged {
            items: page_hits,
            pagination: PageMeta::new(total, spec.page, spec.limit),
        });
    }

    let query = apply_order(service::Entity::find().filter(cond), spec.sort_by);
    let paginator = query.paginate(db, spec.limit as u64);
    let total = paginator.num_items().await.map_err(SearchError::unavailable)?;
    let rows = paginator
        .fetch_page((spec.page - 1) as u64)
        .await
        .map_err(SearchError::unavailable)?;

    Ok(Paged {
        items: rows
            .into_iter()
            .map(|m| ServiceHit { service: m, distance_km: None })
            .collect(),
        pagination: PageMeta::new(total, spec.page, spec.limit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_metacharacters_match_literally() {
        assert_eq!(escape_like("50% off"), "50\\% off");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        // escaping the escape first keeps user backslashes inert
        assert_eq!(escape_like("\\%"), "\\\\\\%");
    }

    #[test]
    fn haversine_zero_for_same_point() {
        assert!(haversine_km(25.2, 55.3, 25.2, 55.3) < 1e-9);
    }

    #[test]
    fn haversine_known_distance() {
        // Dubai to Abu Dhabi city centers, roughly 123 km
        let d = haversine_km(25.2048, 55.2708, 24.4539, 54.3773);
        assert!((d - 123.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn ordering_breaks_ties_by_id() {
        let mk = |id: u128, price: f64| {
            let mut h = order_fixture(id);
            h.service.price_amount = price;
            h
        };
        let mut hits = vec![mk(3, 10.0), mk(1, 10.0), mk(2, 5.0)];
        order_hits(&mut hits, SortBy::Price);
        let ids: Vec<u128> = hits.iter().map(|h| h.service.id.as_u128()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn distance_ordering_puts_nearest_first() {
        let base = |id: u128, d: f64| ServiceHit {
            distance_km: Some(d),
            ..order_fixture(id)
        };
        let mut hits = vec![base(1, 9.0), base(2, 0.5)];
        order_hits(&mut hits, SortBy::Distance);
        assert_eq!(hits[0].service.id.as_u128(), 2);
    }

    fn order_fixture(id: u128) -> ServiceHit {
        ServiceHit {
            service: models::service::Model {
                id: uuid::Uuid::from_u128(id),
                provider_id: uuid::Uuid::from_u128(1),
                name: "x".into(),
                category: "cleaning".into(),
                subcategory: None,
                description: String::new(),
                price_amount: 0.0,
                price_currency: "USD".into(),
                price_type: "fixed".into(),
                duration_minutes: 60,
                address: String::new(),
                city: String::new(),
                state: String::new(),
                lat: None,
                lng: None,
                availability: models::service::empty_availability(),
                rating_avg: 0.0,
                rating_count: 0,
                is_active: true,
                search_keywords: String::new(),
                popularity_score: 0.0,
                created_at: chrono::Utc::now().into(),
                updated_at: chrono::Utc::now().into(),
            },
            distance_km: None,
        }
    }
}
