//! Route handlers grouped by area.

pub mod algorithms;
pub mod auth;
pub mod blog;
pub mod health;
