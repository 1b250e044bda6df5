//! Request validation and orchestration shared by the handlers.

pub mod chat;
pub mod projects;
