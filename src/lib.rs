//! The `dailyhelper` library crate.
//!
//! A personal-productivity backend for notes and to-do tasks: JWT bearer
//! authentication, a generic CRUD repository per entity type over Postgres,
//! and an identity service over a pluggable user store. The main binary
//! (`main.rs`) assembles these into the running application.

pub mod auth;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod repository;
pub mod routes;
