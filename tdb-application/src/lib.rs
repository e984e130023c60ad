//! # tdb-application
//!
//! Flows that run the use cases of `tdb-core` against the SQLite
//! database. Every modifying flow is executed within a single
//! transaction, reading flows use a shared connection.

#[macro_use]
extern crate log;

mod import;
mod locations;
mod ratings;
mod stops;
mod tours;

pub mod prelude {
    pub use super::{import::*, locations::*, ratings::*, stops::*, tours::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use tdb_core::{
    content::ContentSettings, entities::*, ordering::OrderingSettings, repositories::*, usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub mod sqlite {
    pub use tdb_db_sqlite::{run_embedded_database_migrations, Connections};
}
