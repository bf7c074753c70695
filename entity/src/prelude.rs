pub use super::elf_profile::Entity as ElfProfile;
pub use super::toy_order::Entity as ToyOrder;
