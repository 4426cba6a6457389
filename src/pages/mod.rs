//! Routed pages

pub mod auth;
pub mod chat;
pub mod landing;
