//! Workshop dashboard backend.
//!
//! This crate contains all server-side functionality for the Santa's Workshop
//! toy-production dashboard, including HTTP routing, elf profile management
//! over REST, toy order management over GraphQL, and sample-data seeding. Both
//! API surfaces share a single embedded SQLite store accessed through sea-orm.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod graphql;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
