use std::collections::BTreeMap;

use super::prelude::*;

/// What happens to stops that visit a location that is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationDeletionPolicy {
    #[default]
    Refuse,
    /// Remove the stops and bump the versions of the affected tours
    Cascade,
}

/// Deletes a location with all of its translations, details
/// and ratings.
///
/// Returns the number of removed stops.
pub fn delete_location<R>(repo: &R, id: &str, policy: LocationDeletionPolicy) -> Result<usize>
where
    R: LocationRepo + TourRepo + StopRepo,
{
    get_location(repo, id)?;
    let stops = repo.load_stops_of_location(id)?;
    if !stops.is_empty() && policy == LocationDeletionPolicy::Refuse {
        log::info!(
            "Refusing to delete location {id} that is visited by {} stop(s)",
            stops.len()
        );
        return Err(Error::LocationInUse(stops.len()));
    }
    let mut stops_by_tour: BTreeMap<Id, Vec<Stop>> = BTreeMap::new();
    for stop in stops {
        stops_by_tour
            .entry(stop.tour_id.clone())
            .or_default()
            .push(stop);
    }
    let mut removed = 0;
    for (tour_id, stops) in stops_by_tour {
        let mut itinerary = super::load_itinerary(repo, tour_id.as_str()).inspect_err(|err| {
            log::warn!("Failed to load tour {tour_id} visiting location {id}: {err}");
        })?;
        for stop in stops {
            itinerary.remove_stop(stop.id.as_str())?;
            repo.delete_stop(stop.id.as_str())?;
            removed += 1;
        }
        repo.update_tour(itinerary.tour())?;
    }
    repo.delete_location(id)?;
    log::info!("Deleted location {id} and {removed} stop(s)");
    Ok(removed)
}
