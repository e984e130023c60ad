use std::collections::HashMap;

use super::prelude::*;
use crate::ordering::first_collision;

/// Records that are stored with their identifiers unchanged.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub locations: Vec<Location>,
    pub translations: Vec<Translation>,
    pub details: Vec<LocationDetail>,
    pub tours: Vec<Tour>,
    pub stops: Vec<Stop>,
    pub ratings: Vec<Rating>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub users: usize,
    pub locations: usize,
    pub translations: usize,
    pub details: usize,
    pub tours: usize,
    pub stops: usize,
    pub ratings: usize,
}

fn validate(dataset: &Dataset) -> Result<()> {
    if dataset.locations.iter().any(|l| l.name.trim().is_empty()) {
        return Err(Error::EmptyName);
    }
    if dataset.tours.iter().any(|t| t.title.trim().is_empty()) {
        return Err(Error::EmptyTitle);
    }
    if dataset.ratings.iter().any(|r| !r.value.is_valid()) {
        return Err(Error::RatingValue);
    }
    let mut slots_by_tour: HashMap<&Id, Vec<Slot>> = HashMap::new();
    for stop in &dataset.stops {
        if stop.slot.day < 1 {
            return Err(Error::DayNumber);
        }
        if stop.slot.position < 1 {
            return Err(Error::Position);
        }
        slots_by_tour
            .entry(&stop.tour_id)
            .or_default()
            .push(stop.slot);
    }
    for (tour_id, slots) in slots_by_tour {
        if let Some(slot) = first_collision(&slots) {
            log::warn!("Multiple stops of tour {tour_id} at {slot}");
            return Err(Error::SlotConflict(slot));
        }
    }
    Ok(())
}

/// Stores a complete set of related records, e.g. for seeding
/// an empty database.
///
/// Referenced records must either already exist or be part of
/// the dataset.
pub fn import_dataset<R: Db>(repo: &R, dataset: Dataset) -> Result<ImportSummary> {
    validate(&dataset)?;
    let Dataset {
        users,
        locations,
        translations,
        details,
        tours,
        stops,
        ratings,
    } = dataset;
    for user in &users {
        repo.create_user(user)?;
    }
    for location in &locations {
        repo.create_location(location)?;
    }
    for translation in &translations {
        get_location(repo, translation.location_id.as_str())?;
        repo.upsert_translation(translation)?;
    }
    for detail in &details {
        get_location(repo, detail.location_id.as_str())?;
        repo.create_location_detail(detail)?;
    }
    for tour in &tours {
        get_user(repo, tour.owner.as_str())?;
        repo.create_tour(tour)?;
    }
    for stop in &stops {
        get_tour(repo, stop.tour_id.as_str())?;
        get_location(repo, stop.location_id.as_str())?;
        repo.create_stop(stop)?;
    }
    for rating in &ratings {
        get_user(repo, rating.user_id.as_str())?;
        get_location(repo, rating.location_id.as_str())?;
        repo.create_rating(rating)?;
    }
    let summary = ImportSummary {
        users: users.len(),
        locations: locations.len(),
        translations: translations.len(),
        details: details.len(),
        tours: tours.len(),
        stops: stops.len(),
        ratings: ratings.len(),
    };
    log::info!("Imported {summary:?}");
    Ok(summary)
}
