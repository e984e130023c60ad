// Low-level database access traits.
// Each repository is responsible for a single entity and
// its owned records. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: u64 = 10;
    pub const MAX_PAGE_SIZE: u64 = 100;

    /// Pages are counted from 1, the page size is clamped
    /// to `1..=MAX_PAGE_SIZE`.
    pub fn from_page(page: Option<u64>, page_size: Option<u64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = page_size
            .unwrap_or(Self::DEFAULT_PAGE_SIZE)
            .clamp(1, Self::MAX_PAGE_SIZE);
        Self {
            offset: Some((page - 1).saturating_mul(limit)),
            limit: Some(limit),
        }
    }
}

/// Filters are applied to the base language content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationFilter {
    /// Matches name or description
    pub keyword: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn get_user(&self, id: &str) -> Result<User>;
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>>;

    fn user_exists(&self, id: &str) -> Result<bool> {
        match self.get_user(id) {
            Ok(_) => Ok(true),
            Err(Error::NotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

pub trait LocationRepo {
    fn create_location(&self, location: &Location) -> Result<()>;
    fn update_location(&self, location: &Location) -> Result<()>;
    fn get_location(&self, id: &str) -> Result<Location>;

    // Ordered by insertion
    fn get_locations(&self, ids: &[&str]) -> Result<Vec<Location>>;
    fn all_locations(&self) -> Result<Vec<Location>>;
    fn query_locations(
        &self,
        filter: &LocationFilter,
        pagination: &Pagination,
    ) -> Result<Vec<Location>>;

    // Also deletes all owned translations, details,
    // ratings and their photos.
    fn delete_location(&self, id: &str) -> Result<()>;
}

pub trait TranslationRepo {
    // Replaces an existing translation of the same
    // (location, language) pair.
    fn upsert_translation(&self, translation: &Translation) -> Result<()>;
    fn get_translation(
        &self,
        location_id: &str,
        language: &LanguageCode,
    ) -> Result<Option<Translation>>;
    fn get_translations(
        &self,
        location_ids: &[&str],
        language: &LanguageCode,
    ) -> Result<Vec<Translation>>;
}

pub trait LocationDetailRepo {
    fn create_location_detail(&self, detail: &LocationDetail) -> Result<()>;

    // Ordered by insertion
    fn load_details_of_location(&self, location_id: &str) -> Result<Vec<LocationDetail>>;

    // The first non-empty detail image of each location, if any
    fn first_images_of_locations(&self, location_ids: &[&str]) -> Result<Vec<(Id, String)>>;
}

pub trait RatingRepository {
    // Stores the rating together with its photos
    fn create_rating(&self, rating: &Rating) -> Result<()>;
    fn get_rating(&self, id: &str) -> Result<Rating>;
    // Deletes the rating together with its photos
    fn delete_rating(&self, id: &str) -> Result<()>;

    // Ordered by creation time, ties by insertion
    fn load_ratings_of_location(&self, location_id: &str) -> Result<Vec<Rating>>;
    fn load_ratings_of_locations(&self, location_ids: &[&str]) -> Result<Vec<Rating>>;
    fn load_all_ratings(&self) -> Result<Vec<Rating>>;

    // Newest first
    fn recent_ratings(
        &self,
        location_id: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Rating>>;
}

pub trait TourRepo {
    fn create_tour(&self, tour: &Tour) -> Result<()>;
    fn update_tour(&self, tour: &Tour) -> Result<()>;
    fn get_tour(&self, id: &str) -> Result<Tour>;
    // Also deletes all stops of the tour
    fn delete_tour(&self, id: &str) -> Result<()>;

    // Newest first
    fn list_tours(&self, owner: Option<&str>, pagination: &Pagination) -> Result<Vec<Tour>>;
    // Case-insensitive substring match on the address, newest first
    fn search_tours_by_address(&self, text: &str, pagination: &Pagination) -> Result<Vec<Tour>>;
}

pub trait StopRepo {
    fn create_stop(&self, stop: &Stop) -> Result<()>;
    fn update_stop(&self, stop: &Stop) -> Result<()>;
    fn delete_stop(&self, id: &str) -> Result<()>;

    // Ordered by day and position, colliding slots by insertion
    fn load_stops_of_tour(&self, tour_id: &str) -> Result<Vec<Stop>>;
    fn load_stops_of_tours(&self, tour_ids: &[&str]) -> Result<Vec<Stop>>;
    fn load_stops_of_location(&self, location_id: &str) -> Result<Vec<Stop>>;
}
