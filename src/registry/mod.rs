//! Name-keyed storage shared by every entity kind.
//!
//! - **repository**: `Registry<T>` with soft (`by_name`) and strict (`find`)
//!   lookups, plus the `Entry` returned by soft lookups
//!
//! # Lookup Semantics
//!
//! ```text
//! by_name("x") ─┬─ stored ──→ Entry::Found(&T)
//!               └─ missing ─→ Entry::Absent(T::null)   (never fails)
//! find("x")    ─┬─ stored ──→ Ok(&T)
//!               └─ missing ─→ Err(Error::NotFound)
//! ```

pub mod repository;

pub use repository::{Entry, Model, Registry};
