//! # tdb-gateways
//!
//! Implementations of the gateway ports of `tdb-core`.

pub mod share;
