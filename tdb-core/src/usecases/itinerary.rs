use super::prelude::*;
use crate::ordering::Itinerary;

/// Loads a tour together with all of its stops.
pub fn load_itinerary<R>(repo: &R, tour_id: &str) -> Result<Itinerary>
where
    R: TourRepo + StopRepo,
{
    let tour = get_tour(repo, tour_id)?;
    let stops = repo.load_stops_of_tour(tour_id)?;
    Ok(Itinerary::new(tour, stops))
}

/// Lists the stops of a tour sorted by day and position.
pub fn list_ordered_stops<R>(repo: &R, tour_id: &str) -> Result<Vec<Stop>>
where
    R: TourRepo + StopRepo,
{
    let (_, stops) = load_itinerary(repo, tour_id)?.into_inner();
    Ok(stops)
}

pub(crate) fn store_modified_stops<R>(repo: &R, itinerary: &Itinerary, stops: &[Stop]) -> Result<()>
where
    R: TourRepo + StopRepo,
{
    for stop in stops {
        repo.update_stop(stop)?;
    }
    repo.update_tour(itinerary.tour())?;
    Ok(())
}
