//! Request handlers.

pub mod chat;
pub mod export;
pub mod health;
pub mod projects;
pub mod shares;
