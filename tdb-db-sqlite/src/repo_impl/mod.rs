// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{self, prelude::*, result::Error as DieselError};

use tdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod location;
mod location_detail;
mod rating;
mod stop;
mod tour;
mod translation;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(diesel::result::DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

/// Upper bound for the number of ids bound to a single `IN (...)`
/// clause. SQLite rejects statements with more than 32766 variables.
const MAX_IDS_PER_QUERY: usize = 10_000;

/// A LIKE pattern that matches the text anywhere.
///
/// Wildcards in the text are escaped with `\` and match literally.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn read_only<T>() -> Result<T> {
    Err(anyhow!("Cannot modify the database through a read-only connection").into())
}

/// SQLite does not support an OFFSET without a LIMIT
/// <https://www.sqlite.org/lang_select.html>
fn limit_and_offset(pagination: &Pagination) -> (Option<i64>, i64) {
    let offset = pagination.offset.unwrap_or(0) as i64;
    let limit = match pagination.limit {
        Some(limit) => Some(limit as i64),
        None if offset > 0 => Some(i64::MAX),
        None => None,
    };
    (limit, offset)
}

fn resolve_user_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve user id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_location_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::location::dsl;
    schema::location::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve location id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_tour_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::tour::dsl;
    schema::tour::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve tour id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_rating_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::rating::dsl;
    schema::rating::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve rating id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn expect_single_row(count: usize) -> Result<()> {
    match count {
        0 => Err(repo::Error::NotFound),
        1 => Ok(()),
        _ => Err(anyhow!("Modified {count} rows instead of one").into()),
    }
}
