//! Transfer Gateway - REST service for financial transfer records
//!
//! # Modules
//!
//! - [`transaction`] - Transfer record entity, validation and persistence
//! - [`gateway`] - Axum HTTP surface (create / get / list / update status)
//! - [`db`] - PostgreSQL connection pool management
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod transaction;
