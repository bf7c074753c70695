//! Service layer.
//!
//! Business logic for the two API surfaces: elf profile management (REST)
//! and the toy order lifecycle (GraphQL). Services coordinate repositories,
//! apply creation defaults, run auto-assignment, and translate store results
//! into the error taxonomy.

pub mod elf;
pub mod toy_order;

pub use elf::ElfService;
pub use toy_order::ToyOrderService;
