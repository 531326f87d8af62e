//! API routes

pub mod fallback;
pub mod health;
pub mod home;
pub mod info;
