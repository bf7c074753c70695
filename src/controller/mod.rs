//! HTTP request handlers for the REST surface.

pub mod elf;
pub mod health;
