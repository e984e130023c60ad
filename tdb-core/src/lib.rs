#![deny(missing_debug_implementations)]

//! # tdb-core
//!
//! Business logic of tourdb without any I/O: repository and gateway
//! ports, content resolution, rating aggregation, the itinerary
//! ordering engine and the use cases built on top of them.

pub mod content;
pub mod db;
pub mod gateways;
pub mod ordering;
pub mod rating;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use tdb_entities::{
        geo::*, id::*, language::*, location::*, price::*, rating::*, revision::*, time::*,
        tour::*, translation::*, user::*,
    };
}
