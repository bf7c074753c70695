//! Database entity definitions for the workshop dashboard.
//!
//! Contains sea-orm entities for the two tables owned by the store:
//! `elf_profiles` (worker profiles) and `toy_orders` (units of work).

pub mod elf_profile;
pub mod prelude;
pub mod toy_order;
