//! Data access layer.
//!
//! Repositories wrap sea-orm queries over the two store tables. They hold a
//! borrowed connection, never cache rows across calls, and surface raw
//! [`sea_orm::DbErr`] values for the service layer to translate.

pub mod elf;
pub mod toy_order;

pub use elf::ElfRepository;
pub use toy_order::ToyOrderRepository;
