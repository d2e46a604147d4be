//! Total normalization of raw client filters into a canonical `FilterSpec`.
//! Malformed input is coerced, never rejected; there is no validation-error
//! path on this surface.

use common::pagination::{clamp_limit, clamp_page, DEFAULT_LIMIT};
use serde::Deserialize;

use crate::registry;

/// Default search radius in km, applied when coordinates are supplied
/// without an explicit radius.
pub const DEFAULT_RADIUS_KM: f64 = 25.0;

/// Minimum query length for text search and suggestion lookups.
pub const MIN_QUERY_LEN: usize = 2;

/// Numeric field that tolerates either a JSON number or a numeric string.
/// Anything unparsable becomes absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumOrStr {
    Num(f64),
    Str(String),
}

impl NumOrStr {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumOrStr::Num(n) if n.is_finite() => Some(*n),
            NumOrStr::Num(_) => None,
            NumOrStr::Str(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

/// Raw filters exactly as the client sent them, query string or JSON body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFilters {
    #[serde(rename = "q")]
    pub query: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub min_price: Option<NumOrStr>,
    pub max_price: Option<NumOrStr>,
    pub min_rating: Option<NumOrStr>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub lat: Option<NumOrStr>,
    pub lng: Option<NumOrStr>,
    #[serde(rename = "radius")]
    pub radius_km: Option<NumOrStr>,
    pub sort_by: Option<String>,
    pub page: Option<NumOrStr>,
    pub limit: Option<NumOrStr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Popularity,
    Rating,
    Price,
    PriceDesc,
    Distance,
    Newest,
}

impl SortBy {
    /// Unrecognized values fall back to popularity.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "popularity" => SortBy::Popularity,
            "rating" => SortBy::Rating,
            "price" => SortBy::Price,
            "price_desc" => SortBy::PriceDesc,
            "distance" => SortBy::Distance,
            "newest" => SortBy::Newest,
            _ => SortBy::Popularity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Popularity => "popularity",
            SortBy::Rating => "rating",
            SortBy::Price => "price",
            SortBy::PriceDesc => "price_desc",
            SortBy::Distance => "distance",
            SortBy::Newest => "newest",
        }
    }
}

/// Normalized, request-scoped filter state. Constructed per request and
/// discarded once the response is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// Trimmed free-text query. Kept even when shorter than
    /// `MIN_QUERY_LEN`; only suggestion lookups ignore short queries.
    pub query: Option<String>,
    /// Canonical slug when the registry resolved it, the raw client string
    /// otherwise (the executor matches case-insensitively either way).
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius_km: f64,
    pub sort_by: SortBy,
    pub page: u32,
    pub limit: u32,
}

impl Default for FilterSpec {
    fn default() -> Self {
        normalize(RawFilters::default())
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Turn raw client filters into a canonical spec. Total: never fails.
pub fn normalize(raw: RawFilters) -> FilterSpec {
    let query = non_empty(raw.query);

    // Resolution miss passes the raw string through unchanged; the executor
    // matches category case-insensitively, so legacy spellings keep working.
    let category = non_empty(raw.category)
        .map(|c| registry::resolve(&c).map(|d| d.slug.to_string()).unwrap_or(c));
    let subcategory = non_empty(raw.subcategory);

    let num = |v: Option<NumOrStr>| v.and_then(|n| n.as_f64());
    let lat = num(raw.lat);
    let lng = num(raw.lng);
    let radius_km = num(raw.radius_km).filter(|r| *r > 0.0).unwrap_or(DEFAULT_RADIUS_KM);

    let page = raw
        .page
        .and_then(|n| n.as_f64())
        .map(|p| clamp_page(p as i64))
        .unwrap_or(1);
    let limit = raw
        .limit
        .and_then(|n| n.as_f64())
        .map(|l| clamp_limit(if l < 0.0 { 0 } else { l as u32 }))
        .unwrap_or(DEFAULT_LIMIT);

    let sort_by = raw.sort_by.as_deref().map(SortBy::parse).unwrap_or_default();

    FilterSpec {
        query,
        category,
        subcategory,
        min_price: num(raw.min_price),
        max_price: num(raw.max_price),
        min_rating: num(raw.min_rating),
        city: non_empty(raw.city),
        state: non_empty(raw.state),
        lat,
        lng,
        radius_km,
        sort_by,
        page,
        limit,
    }
}

impl FilterSpec {
    /// The text query as used for full-text matching; queries shorter than
    /// `MIN_QUERY_LEN` after trimming are a no-op.
    pub fn effective_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| q.len() >= MIN_QUERY_LEN)
    }

    /// Both coordinates are required for any geo behavior.
    pub fn geo_point(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Pagination must not persist across filter changes: if anything other
    /// than the page differs from `prev`, the page resets to 1.
    pub fn reconcile_page(mut self, prev: &FilterSpec) -> FilterSpec {
        let mut a = self.clone();
        let mut b = prev.clone();
        a.page = 1;
        b.page = 1;
        if a != b {
            self.page = 1;
        }
        self
    }
}
