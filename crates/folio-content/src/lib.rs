//! Project records, description markup, and catalogs.
//!
//! # Modules
//!
//! - [`record`]: The immutable [`ProjectRecord`] value
//! - [`markup`]: [`Description`], the link-only inline markup subset
//! - [`catalog`]: [`Catalog`], the ordered record list (built-in or TOML)
//!
//! # Example
//!
//! ```rust
//! use folio_content::ProjectRecord;
//!
//! let record = ProjectRecord::new(
//!     "Demo",
//!     "A <a href='https://x.test'>tool</a>.",
//!     "Go",
//!     "me/demo",
//!     "https://github.com/me/demo",
//! )
//! .unwrap();
//! assert_eq!(record.description().plain_text(), "A tool.");
//! ```

pub mod catalog;
pub mod markup;
pub mod record;

pub use catalog::Catalog;
pub use markup::{Description, Inline};
pub use record::{ProjectRecord, RawProjectRecord};
