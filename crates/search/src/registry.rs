//! Canonical category table: one static list tagged with its origin epoch,
//! reachable by slug or by case-insensitive display name. Reference data,
//! never mutated at runtime; request-path lookups never touch the store.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Which enumeration a category originally came from. Lookup functions are
/// indifferent to origin; only `is_current_category` distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Legacy,
    Current,
}

#[derive(Debug)]
pub struct CategoryDef {
    pub name: &'static str,
    pub slug: &'static str,
    pub icon: &'static str,
    pub sort_order: i32,
    pub is_featured: bool,
    pub origin: Origin,
    pub subcategories: &'static [&'static str],
}

/// Sorted by `sort_order`. Must stay in step with the `service_category`
/// seed migration.
static CATEGORIES: &[CategoryDef] = &[
    CategoryDef { name: "Cleaning", slug: "cleaning", icon: "broom", sort_order: 1, is_featured: true, origin: Origin::Current,
        subcategories: &["Deep Cleaning", "Carpet Cleaning", "Window Cleaning", "Move-out Cleaning"] },
    CategoryDef { name: "Plumbing", slug: "plumbing", icon: "wrench", sort_order: 2, is_featured: true, origin: Origin::Current,
        subcategories: &["Leak Repair", "Drain Cleaning", "Water Heater", "Fixture Installation"] },
    CategoryDef { name: "Electrical", slug: "electrical", icon: "bolt", sort_order: 3, is_featured: true, origin: Origin::Current,
        subcategories: &["Wiring", "Lighting", "Fan Installation", "Breaker Repair"] },
    CategoryDef { name: "HVAC", slug: "hvac", icon: "fan", sort_order: 4, is_featured: true, origin: Origin::Current,
        subcategories: &["AC Repair", "AC Installation", "Duct Cleaning"] },
    CategoryDef { name: "Painting", slug: "painting", icon: "roller", sort_order: 5, is_featured: false, origin: Origin::Current,
        subcategories: &["Interior Painting", "Exterior Painting", "Wallpaper"] },
    CategoryDef { name: "Carpentry", slug: "carpentry", icon: "hammer", sort_order: 6, is_featured: false, origin: Origin::Current,
        subcategories: &["Furniture Assembly", "Custom Shelving", "Door Repair"] },
    CategoryDef { name: "Appliance Repair", slug: "appliance-repair", icon: "plug", sort_order: 7, is_featured: false, origin: Origin::Current,
        subcategories: &["Washing Machine", "Refrigerator", "Oven", "Dishwasher"] },
    CategoryDef { name: "Pest Control", slug: "pest-control", icon: "bug", sort_order: 8, is_featured: false, origin: Origin::Current,
        subcategories: &["Termite Treatment", "Rodent Control", "Disinfection"] },
    CategoryDef { name: "Landscaping & Gardening", slug: "landscaping", icon: "leaf", sort_order: 9, is_featured: false, origin: Origin::Current,
        subcategories: &["Lawn Mowing", "Garden Design", "Tree Trimming"] },
    CategoryDef { name: "Beauty & Wellness", slug: "beauty-wellness", icon: "spa", sort_order: 10, is_featured: true, origin: Origin::Current,
        subcategories: &["Haircut", "Massage", "Facial", "Manicure"] },
    CategoryDef { name: "Moving & Packing", slug: "moving-packing", icon: "truck", sort_order: 11, is_featured: false, origin: Origin::Current,
        subcategories: &["Local Moving", "Packing", "Furniture Moving"] },
    CategoryDef { name: "Home Security", slug: "home-security", icon: "shield", sort_order: 12, is_featured: false, origin: Origin::Current,
        subcategories: &["CCTV Installation", "Smart Locks", "Alarm Systems"] },
    CategoryDef { name: "Handyman", slug: "handyman", icon: "toolbox", sort_order: 13, is_featured: false, origin: Origin::Legacy,
        subcategories: &["General Repairs", "Mounting"] },
    CategoryDef { name: "Tutoring", slug: "tutoring", icon: "book", sort_order: 14, is_featured: false, origin: Origin::Legacy,
        subcategories: &["Math", "Languages", "Music"] },
    CategoryDef { name: "Car Wash", slug: "car-wash", icon: "car", sort_order: 15, is_featured: false, origin: Origin::Legacy,
        subcategories: &["Exterior Wash", "Detailing"] },
    CategoryDef { name: "Laundry", slug: "laundry", icon: "shirt", sort_order: 16, is_featured: false, origin: Origin::Legacy,
        subcategories: &["Wash & Fold", "Dry Cleaning", "Ironing"] },
];

static BY_SLUG: Lazy<HashMap<&'static str, &'static CategoryDef>> =
    Lazy::new(|| CATEGORIES.iter().map(|c| (c.slug, c)).collect());

static BY_NAME: Lazy<HashMap<String, &'static CategoryDef>> =
    Lazy::new(|| CATEGORIES.iter().map(|c| (c.name.to_lowercase(), c)).collect());

/// Resolve a slug or a display name to its canonical category.
/// Resolution order: exact slug match, then case-insensitive name match.
/// `None` means "no such category", never an error.
pub fn resolve(input: &str) -> Option<&'static CategoryDef> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    BY_SLUG
        .get(trimmed)
        .or_else(|| BY_NAME.get(&trimmed.to_lowercase()))
        .copied()
}

pub fn is_valid_category(input: &str) -> bool {
    resolve(input).is_some()
}

/// True only for categories of the current enumeration; a category may be
/// valid without being current.
pub fn is_current_category(input: &str) -> bool {
    resolve(input).map(|c| c.origin == Origin::Current).unwrap_or(false)
}

/// All categories in display order.
pub fn all() -> &'static [CategoryDef] {
    CATEGORIES
}

#[derive(Debug, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: &'static CategoryDef,
    /// Set when the hit was on a subcategory name rather than the category.
    pub subcategory: Option<&'static str>,
}

impl PartialEq for CategoryDef {
    fn eq(&self, other: &Self) -> bool {
        self.slug == other.slug
    }
}
impl Eq for CategoryDef {}

/// Lightweight suggestion lookup over category and subcategory names.
/// Queries shorter than 2 chars after trimming yield nothing.
pub fn search(query: &str) -> Vec<CategoryMatch> {
    let q = query.trim().to_lowercase();
    if q.len() < 2 {
        return Vec::new();
    }
    let mut out = Vec::new();
    for c in CATEGORIES {
        if c.name.to_lowercase().contains(&q) {
            out.push(CategoryMatch { category: c, subcategory: None });
        }
        for sub in c.subcategories {
            if sub.to_lowercase().contains(&q) {
                out.push(CategoryMatch { category: c, subcategory: Some(sub) });
            }
        }
    }
    out
}
