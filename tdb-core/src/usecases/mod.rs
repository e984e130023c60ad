mod add_stop;
mod build_detail;
mod build_ranking;
mod compact_day;
mod create_location;
mod create_tour;
mod delete_location;
mod delete_tour;
mod error;
mod import_dataset;
mod itinerary;
mod location_details;
mod query_tours;
mod rate_location;
mod remove_stop;
mod reorder_stops;
mod resolve_locations;
mod share_tour;
mod translations;
mod update_tour;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_stop::*,
    build_detail::*,
    build_ranking::*,
    compact_day::*,
    create_location::*,
    create_tour::*,
    delete_location::*,
    delete_tour::*,
    error::{Error, ErrorKind},
    import_dataset::*,
    itinerary::*,
    location_details::*,
    query_tours::*,
    rate_location::*,
    remove_stop::*,
    reorder_stops::*,
    resolve_locations::*,
    share_tour::*,
    translations::*,
    update_tour::*,
};

mod prelude {
    pub use super::error::{Error, ErrorKind};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};

    pub(crate) use super::{get_location, get_tour, get_user};
}

use self::prelude::*;

type RepoError = crate::repositories::Error;

fn not_found(not_found: Error) -> impl FnOnce(RepoError) -> Error {
    move |err| match err {
        RepoError::NotFound => not_found,
        err => err.into(),
    }
}

pub(crate) fn get_tour<R: TourRepo>(repo: &R, id: &str) -> Result<Tour> {
    repo.get_tour(id).map_err(not_found(Error::TourNotFound))
}

pub(crate) fn get_location<R: LocationRepo>(repo: &R, id: &str) -> Result<Location> {
    repo.get_location(id)
        .map_err(not_found(Error::LocationNotFound))
}

pub(crate) fn get_user<R: UserRepo>(repo: &R, id: &str) -> Result<User> {
    repo.get_user(id).map_err(not_found(Error::UserNotFound))
}

pub(crate) fn get_rating<R: RatingRepository>(repo: &R, id: &str) -> Result<Rating> {
    repo.get_rating(id).map_err(not_found(Error::RatingNotFound))
}

/// Trims the text and discards it if nothing remains.
pub(crate) fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}
