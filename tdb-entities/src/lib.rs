#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # tdb-entities
//!
//! Reusable, agnostic domain entities for tourdb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod language;
pub mod location;
pub mod price;
pub mod rating;
pub mod revision;
pub mod time;
pub mod tour;
pub mod translation;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
