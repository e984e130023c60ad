use std::cell::RefCell;

use super::prelude::*;
use tdb_entities::builders::*;

type RepoResult<T> = std::result::Result<T, RepoError>;
type RepoError = crate::repositories::Error;

/// In-memory database for testing use cases.
///
/// All collections are kept in insertion order.
#[derive(Debug, Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub locations: RefCell<Vec<Location>>,
    pub translations: RefCell<Vec<Translation>>,
    pub details: RefCell<Vec<LocationDetail>>,
    pub ratings: RefCell<Vec<Rating>>,
    pub tours: RefCell<Vec<Tour>>,
    pub stops: RefCell<Vec<Stop>>,
}

impl MockDb {
    /// A user `user` owning the tour and a location
    /// `Location <id>` in Hà Nội for each id.
    pub fn with_tour_and_locations(tour_id: &str, location_ids: &[&str]) -> Self {
        let db = Self::default();
        db.users.borrow_mut().push(User {
            id: "user".into(),
            name: "Test User".into(),
            email: None,
        });
        db.tours
            .borrow_mut()
            .push(Tour::build().id(tour_id).owner("user").finish());
        for (id, secs) in location_ids.iter().zip(1..) {
            db.locations.borrow_mut().push(
                Location::build()
                    .id(id)
                    .name(&format!("Location {id}"))
                    .city("Hà Nội")
                    .created_at(Timestamp::from_secs(secs))
                    .finish(),
            );
        }
        db
    }

    pub fn add_stop(&self, id: &str, tour_id: &str, location_id: &str, day: u16, position: u16) {
        self.stops.borrow_mut().push(Stop {
            id: id.into(),
            tour_id: tour_id.into(),
            location_id: location_id.into(),
            slot: Slot::new(day, position),
            note: None,
        });
    }

    pub fn stop(&self, id: &str) -> Stop {
        self.stops
            .borrow()
            .iter()
            .find(|s| s.id.as_str() == id)
            .cloned()
            .unwrap()
    }
}

fn get<T: Clone>(objects: &[T], pred: impl Fn(&T) -> bool) -> RepoResult<T> {
    objects.iter().find(|x| pred(x)).cloned().ok_or(RepoError::NotFound)
}

fn create<T>(objects: &mut Vec<T>, object: T, exists: impl Fn(&T) -> bool) -> RepoResult<()> {
    if objects.iter().any(exists) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(object);
    Ok(())
}

fn update<T>(objects: &mut [T], object: T, pred: impl Fn(&T) -> bool) -> RepoResult<()> {
    let existing = objects
        .iter_mut()
        .find(|x| pred(x))
        .ok_or(RepoError::NotFound)?;
    *existing = object;
    Ok(())
}

fn paginate<T>(objects: impl Iterator<Item = T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    objects.skip(offset).take(limit).collect()
}

fn contains_ignore_case(text: Option<&str>, pattern: &str) -> bool {
    text.is_some_and(|t| t.to_lowercase().contains(&pattern.to_lowercase()))
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), user.clone(), |x| x.id == user.id)
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), |x| x.id.as_str() == id)
    }
    fn get_users(&self, ids: &[&str]) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|x| ids.contains(&x.id.as_str()))
            .cloned()
            .collect())
    }
}

impl LocationRepo for MockDb {
    fn create_location(&self, location: &Location) -> RepoResult<()> {
        create(&mut self.locations.borrow_mut(), location.clone(), |x| {
            x.id == location.id
        })
    }
    fn update_location(&self, location: &Location) -> RepoResult<()> {
        update(&mut self.locations.borrow_mut(), location.clone(), |x| {
            x.id == location.id
        })
    }
    fn get_location(&self, id: &str) -> RepoResult<Location> {
        get(&self.locations.borrow(), |x| x.id.as_str() == id)
    }
    fn get_locations(&self, ids: &[&str]) -> RepoResult<Vec<Location>> {
        Ok(self
            .locations
            .borrow()
            .iter()
            .filter(|x| ids.contains(&x.id.as_str()))
            .cloned()
            .collect())
    }
    fn all_locations(&self) -> RepoResult<Vec<Location>> {
        Ok(self.locations.borrow().clone())
    }
    fn query_locations(
        &self,
        filter: &LocationFilter,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Location>> {
        let LocationFilter {
            keyword,
            city,
            category,
        } = filter;
        let locations = self.locations.borrow();
        let matches = locations.iter().filter(|x| {
            keyword.as_deref().is_none_or(|k| {
                contains_ignore_case(Some(&x.name), k)
                    || contains_ignore_case(x.description.as_deref(), k)
            }) && city
                .as_deref()
                .is_none_or(|c| contains_ignore_case(x.city.as_deref(), c))
                && category
                    .as_deref()
                    .is_none_or(|c| contains_ignore_case(x.category.as_deref(), c))
        });
        Ok(paginate(matches.cloned(), pagination))
    }
    fn delete_location(&self, id: &str) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let len = locations.len();
        locations.retain(|x| x.id.as_str() != id);
        if locations.len() == len {
            return Err(RepoError::NotFound);
        }
        self.translations
            .borrow_mut()
            .retain(|x| x.location_id.as_str() != id);
        self.details
            .borrow_mut()
            .retain(|x| x.location_id.as_str() != id);
        self.ratings
            .borrow_mut()
            .retain(|x| x.location_id.as_str() != id);
        Ok(())
    }
}

impl TranslationRepo for MockDb {
    fn upsert_translation(&self, translation: &Translation) -> RepoResult<()> {
        let mut translations = self.translations.borrow_mut();
        match translations.iter_mut().find(|x| {
            x.location_id == translation.location_id && x.language == translation.language
        }) {
            Some(existing) => *existing = translation.clone(),
            None => translations.push(translation.clone()),
        }
        Ok(())
    }
    fn get_translation(
        &self,
        location_id: &str,
        language: &LanguageCode,
    ) -> RepoResult<Option<Translation>> {
        Ok(self
            .translations
            .borrow()
            .iter()
            .find(|x| x.location_id.as_str() == location_id && &x.language == language)
            .cloned())
    }
    fn get_translations(
        &self,
        location_ids: &[&str],
        language: &LanguageCode,
    ) -> RepoResult<Vec<Translation>> {
        Ok(self
            .translations
            .borrow()
            .iter()
            .filter(|x| location_ids.contains(&x.location_id.as_str()) && &x.language == language)
            .cloned()
            .collect())
    }
}

impl LocationDetailRepo for MockDb {
    fn create_location_detail(&self, detail: &LocationDetail) -> RepoResult<()> {
        create(&mut self.details.borrow_mut(), detail.clone(), |x| {
            x.id == detail.id
        })
    }
    fn load_details_of_location(&self, location_id: &str) -> RepoResult<Vec<LocationDetail>> {
        Ok(self
            .details
            .borrow()
            .iter()
            .filter(|x| x.location_id.as_str() == location_id)
            .cloned()
            .collect())
    }
    fn first_images_of_locations(&self, location_ids: &[&str]) -> RepoResult<Vec<(Id, String)>> {
        let details = self.details.borrow();
        Ok(location_ids
            .iter()
            .filter_map(|&id| {
                details
                    .iter()
                    .filter(|x| x.location_id.as_str() == id)
                    .find_map(|x| x.image.clone().filter(|image| !image.is_empty()))
                    .map(|image| (Id::from(id), image))
            })
            .collect())
    }
}

impl RatingRepository for MockDb {
    fn create_rating(&self, rating: &Rating) -> RepoResult<()> {
        create(&mut self.ratings.borrow_mut(), rating.clone(), |x| {
            x.id == rating.id
        })
    }
    fn get_rating(&self, id: &str) -> RepoResult<Rating> {
        get(&self.ratings.borrow(), |x| x.id.as_str() == id)
    }
    fn delete_rating(&self, id: &str) -> RepoResult<()> {
        let mut ratings = self.ratings.borrow_mut();
        let len = ratings.len();
        ratings.retain(|x| x.id.as_str() != id);
        if ratings.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
    fn load_ratings_of_location(&self, location_id: &str) -> RepoResult<Vec<Rating>> {
        self.load_ratings_of_locations(&[location_id])
    }
    fn load_ratings_of_locations(&self, location_ids: &[&str]) -> RepoResult<Vec<Rating>> {
        let mut ratings: Vec<_> = self
            .ratings
            .borrow()
            .iter()
            .filter(|x| location_ids.contains(&x.location_id.as_str()))
            .cloned()
            .collect();
        ratings.sort_by_key(|x| x.created_at);
        Ok(ratings)
    }
    fn load_all_ratings(&self) -> RepoResult<Vec<Rating>> {
        let mut ratings = self.ratings.borrow().clone();
        ratings.sort_by_key(|x| x.created_at);
        Ok(ratings)
    }
    fn recent_ratings(
        &self,
        location_id: Option<&str>,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Rating>> {
        let mut ratings: Vec<_> = self
            .ratings
            .borrow()
            .iter()
            .rev()
            .filter(|x| location_id.is_none_or(|id| x.location_id.as_str() == id))
            .cloned()
            .collect();
        ratings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(ratings.into_iter(), pagination))
    }
}

impl TourRepo for MockDb {
    fn create_tour(&self, tour: &Tour) -> RepoResult<()> {
        create(&mut self.tours.borrow_mut(), tour.clone(), |x| x.id == tour.id)
    }
    fn update_tour(&self, tour: &Tour) -> RepoResult<()> {
        update(&mut self.tours.borrow_mut(), tour.clone(), |x| x.id == tour.id)
    }
    fn get_tour(&self, id: &str) -> RepoResult<Tour> {
        get(&self.tours.borrow(), |x| x.id.as_str() == id)
    }
    fn delete_tour(&self, id: &str) -> RepoResult<()> {
        let mut tours = self.tours.borrow_mut();
        let len = tours.len();
        tours.retain(|x| x.id.as_str() != id);
        if tours.len() == len {
            return Err(RepoError::NotFound);
        }
        self.stops.borrow_mut().retain(|x| x.tour_id.as_str() != id);
        Ok(())
    }
    fn list_tours(&self, owner: Option<&str>, pagination: &Pagination) -> RepoResult<Vec<Tour>> {
        let mut tours: Vec<_> = self
            .tours
            .borrow()
            .iter()
            .rev()
            .filter(|x| owner.is_none_or(|o| x.owner.as_str() == o))
            .cloned()
            .collect();
        tours.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(tours.into_iter(), pagination))
    }
    fn search_tours_by_address(
        &self,
        text: &str,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Tour>> {
        let tours = self.list_tours(None, &Pagination::default())?;
        Ok(paginate(
            tours
                .into_iter()
                .filter(|x| contains_ignore_case(x.address.as_deref(), text)),
            pagination,
        ))
    }
}

impl StopRepo for MockDb {
    fn create_stop(&self, stop: &Stop) -> RepoResult<()> {
        create(&mut self.stops.borrow_mut(), stop.clone(), |x| x.id == stop.id)
    }
    fn update_stop(&self, stop: &Stop) -> RepoResult<()> {
        update(&mut self.stops.borrow_mut(), stop.clone(), |x| x.id == stop.id)
    }
    fn delete_stop(&self, id: &str) -> RepoResult<()> {
        let mut stops = self.stops.borrow_mut();
        let len = stops.len();
        stops.retain(|x| x.id.as_str() != id);
        if stops.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
    fn load_stops_of_tour(&self, tour_id: &str) -> RepoResult<Vec<Stop>> {
        self.load_stops_of_tours(&[tour_id])
    }
    fn load_stops_of_tours(&self, tour_ids: &[&str]) -> RepoResult<Vec<Stop>> {
        let mut stops: Vec<_> = self
            .stops
            .borrow()
            .iter()
            .filter(|x| tour_ids.contains(&x.tour_id.as_str()))
            .cloned()
            .collect();
        stops.sort_by_key(|x| x.slot);
        Ok(stops)
    }
    fn load_stops_of_location(&self, location_id: &str) -> RepoResult<Vec<Stop>> {
        Ok(self
            .stops
            .borrow()
            .iter()
            .filter(|x| x.location_id.as_str() == location_id)
            .cloned()
            .collect())
    }
}
