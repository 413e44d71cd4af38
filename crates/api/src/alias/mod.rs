//! Alias option resolution
//!
//! Everything needed to answer "what can this user do when creating a new
//! alias": the suffix domain catalog, suffix rendering, hostname-derived
//! prefix suggestions, plan quota, and the most-recently-used lookup.

pub mod catalog;
pub mod quota;
pub mod suffix;
pub mod suggest;
pub mod usage;

pub use catalog::{available_suffix_domains, DomainKind, SuffixDomain};
pub use suffix::{make_suffix, WordList, WordListError};
pub use suggest::suggest_prefix;
