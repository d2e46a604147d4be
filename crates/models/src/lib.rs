pub mod errors;
pub mod db;
pub mod service_category;
pub mod provider_profile;
pub mod service;

#[cfg(test)]
mod tests;
