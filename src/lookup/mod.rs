//! Flat lookup tables consulted alongside the checklist.
//!
//! - [`Whitelist`]: controlled list of species names
//! - [`RedList`]: conservation status rows
//! - [`Translation`]: external names mapped onto checklist names
//!
//! None of these are used by [`crate::TaxonEngine`] itself, except that a
//! whitelist can be turned into a [`crate::catalog::index::NameFilter`].

pub mod red_list;
pub mod translate;
pub mod whitelist;

pub use red_list::RedList;
pub use translate::Translation;
pub use whitelist::Whitelist;

/// Encoding of the lookup files as they are distributed
pub const DEFAULT_TABLE_ENCODING: &str = "windows-1252";
