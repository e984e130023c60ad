use super::prelude::*;
use crate::ordering::Itinerary;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewTour {
    pub owner             : Id,
    pub title             : String,
    pub description       : Option<String>,
    pub duration          : Option<String>,
    pub price             : Option<Price>,
    pub address           : Option<String>,
    pub image             : Option<String>,
    /// Visited on the first day in the given order
    pub initial_locations : Vec<Id>,
}

pub fn create_tour<R>(repo: &R, new_tour: NewTour) -> Result<Itinerary>
where
    R: TourRepo + StopRepo + LocationRepo + UserRepo,
{
    let NewTour {
        owner,
        title,
        description,
        duration,
        price,
        address,
        image,
        initial_locations,
    } = new_tour;
    let title = title.trim().to_owned();
    if title.is_empty() {
        return Err(Error::EmptyTitle);
    }
    get_user(repo, owner.as_str())?;
    for location_id in &initial_locations {
        get_location(repo, location_id.as_str())?;
    }
    let tour = Tour {
        id: Id::new(),
        owner,
        title,
        description: super::non_empty(description),
        duration: super::non_empty(duration),
        price,
        address: super::non_empty(address),
        image: super::non_empty(image),
        created_at: Timestamp::now(),
        version: Revision::initial(),
    };
    repo.create_tour(&tour)?;
    let mut stops = Vec::with_capacity(initial_locations.len());
    for (location_id, position) in initial_locations.into_iter().zip(1..) {
        let stop = Stop {
            id: Id::new(),
            tour_id: tour.id.clone(),
            location_id,
            slot: Slot::new(1, position),
            note: None,
        };
        repo.create_stop(&stop)?;
        stops.push(stop);
    }
    log::info!(
        "Created tour {} with {} initial stop(s)",
        tour.id,
        stops.len()
    );
    Ok(Itinerary::new(tour, stops))
}
