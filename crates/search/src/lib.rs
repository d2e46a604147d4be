//! Search core: category registry, filter normalization, query execution
//! and the provider-to-service sync job.
//! - Normalization is total: malformed client input degrades to defaults.
//! - Only store-level failures surface as errors.

pub mod errors;
pub mod registry;
pub mod filters;
pub mod dto;
pub mod executor;
pub mod sync;

#[cfg(test)]
mod tests;
