//! # chat2site_core
//!
//! Core domain logic for Chat2Site: the keyword matcher that picks chat
//! replies and page blueprints, landing-page export, and project persistence.

pub mod auth;
pub mod chat;
pub mod export;
pub mod matcher;
pub mod migrate;
pub mod models;
pub mod store;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
