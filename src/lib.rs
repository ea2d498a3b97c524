#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # uuid-field
//!
//! A UUID model-field type for relational databases.
//!
//! [`UuidField`] stores a 128-bit UUID in whatever physical encoding the
//! target backend handles best: the native `uuid` column type on Postgres,
//! `binary(16)` on MySQL, and `char(32)` (undashed lowercase hex) elsewhere.
//! The three encodings are lossless transforms of the same value, so a
//! value written under one backend reads back identically.
//!
//! ## A quick taste
//!
//! ```
//! use uuid_field::{DbBackend, UuidField};
//!
//! // a field that generates a random UUID on first insert
//! let field = UuidField::new(4).unwrap().auto();
//!
//! assert_eq!(field.db_type(DbBackend::Postgres).build(), "uuid");
//! assert_eq!(field.db_type(DbBackend::MySql).build(), "binary(16)");
//! assert_eq!(field.db_type(DbBackend::Sqlite).build(), "char(32)");
//!
//! // the framework calls pre_save before the first insert
//! let mut slot = None;
//! let persisted = field.pre_save(&mut slot, true).unwrap();
//! assert!(slot.is_some());
//! assert!(persisted.is_some());
//! ```
//!
//! Deterministic namespace-hashed fields are configured with a namespace
//! and a name:
//!
//! ```
//! use uuid_field::UuidField;
//! use uuid::Uuid;
//!
//! let field = UuidField::new(5)
//!     .unwrap()
//!     .namespace(Uuid::NAMESPACE_DNS)
//!     .name("example.org");
//! assert_eq!(field.create_uuid(), field.create_uuid());
//! ```
//!
//! Backends with native UUID support may need driver-side adaptation;
//! hosting applications call [`ensure_native_adaptation`] once at startup.

mod backend;
mod column_type;
pub mod error;
mod field;
mod formfield;
mod value;

pub use backend::*;
pub use column_type::*;
pub use error::*;
pub use field::*;
pub use formfield::*;
pub use value::*;

pub use uuid::Uuid;

/// Shorthand for the everyday names
pub mod prelude {
    pub use crate::{
        ColumnType, DbBackend, FormField, Uuid, UuidField, UuidFieldErr, UuidStorage, UuidVersion,
        Value, ensure_native_adaptation,
    };
}
