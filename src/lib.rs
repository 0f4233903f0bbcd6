//! Core library exports for the inventory catalog service.
//!
//! The `data` feature exposes the category tree engine: domain types, the
//! nested-set allocator, Diesel models and repositories, and the service layer.
//! The `server` feature adds the JSON routes and request forms used by the
//! binary.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
