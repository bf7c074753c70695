//! Shared data transfer objects and application state.

pub mod api;
pub mod app;
pub mod elf;
pub mod toy_order;
