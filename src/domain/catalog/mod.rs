//! Catalog module - the immutable item catalogs for both inventories.
//!
//! Reference data only: ten groups of four behavioral adjectives and ten
//! groups of six value phrases, embedded in the binary, versionless. Texts
//! are the product's pt-BR content.

mod behavioral;
mod item;
mod values;

pub use behavioral::DNA_ADJECTIVE_GROUPS;
pub use item::{Adjective, AdjectiveGroup, ValueGroup, ValuePhrase};
pub use values::VALUES_GROUPS;
