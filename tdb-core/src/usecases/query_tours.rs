use std::collections::HashMap;

use super::prelude::*;
use crate::ordering::Itinerary;

/// Lists tours, newest first, optionally only those of a single owner.
pub fn list_tours<R>(
    repo: &R,
    owner: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Itinerary>>
where
    R: TourRepo + StopRepo,
{
    let tours = repo.list_tours(owner, pagination)?;
    with_stops(repo, tours)
}

/// Finds tours whose address mentions the city.
pub fn search_tours<R>(repo: &R, city: &str, pagination: &Pagination) -> Result<Vec<Itinerary>>
where
    R: TourRepo + StopRepo,
{
    let city = city.trim();
    if city.is_empty() {
        return Err(Error::EmptyCity);
    }
    let tours = repo.search_tours_by_address(city, pagination)?;
    log::debug!("Found {} tour(s) in '{city}'", tours.len());
    with_stops(repo, tours)
}

fn with_stops<R: StopRepo>(repo: &R, tours: Vec<Tour>) -> Result<Vec<Itinerary>> {
    let tour_ids: Vec<_> = tours.iter().map(|t| t.id.as_str()).collect();
    let mut stops_by_tour: HashMap<Id, Vec<Stop>> = HashMap::with_capacity(tours.len());
    for stop in repo.load_stops_of_tours(&tour_ids)? {
        stops_by_tour
            .entry(stop.tour_id.clone())
            .or_default()
            .push(stop);
    }
    Ok(tours
        .into_iter()
        .map(|tour| {
            let stops = stops_by_tour.remove(&tour.id).unwrap_or_default();
            Itinerary::new(tour, stops)
        })
        .collect())
}
