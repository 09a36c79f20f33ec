//! Parameter name resolution and reference range lookup.
//!
//! Both resolvers borrow an immutable [`bloodwork_catalog::Catalog`] and
//! hold no other state, so they are cheap to construct and safe to share
//! across threads.

pub mod ranges;
pub mod resolver;

pub use ranges::RangeResolver;
pub use resolver::{DEFAULT_FUZZY_THRESHOLD, INGEST_FUZZY_THRESHOLD, NameResolver};
