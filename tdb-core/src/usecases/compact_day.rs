use super::prelude::*;
use crate::ordering::OrderingSettings;

/// Closes the gaps between the stops of a day.
pub fn compact_day<R>(
    repo: &R,
    settings: &OrderingSettings,
    tour_id: &str,
    day: DayNumber,
    expected_version: Option<Revision>,
) -> Result<Vec<Stop>>
where
    R: TourRepo + StopRepo,
{
    let mut itinerary = super::load_itinerary(repo, tour_id)?;
    itinerary.check_version(expected_version, settings.concurrency)?;
    let modified = itinerary.compact_day(day)?;
    if modified.is_empty() {
        return Ok(itinerary.into_inner().1);
    }
    super::store_modified_stops(repo, &itinerary, &modified)?;
    log::info!(
        "Compacted day {day} of tour {tour_id}: {} stop(s) moved",
        modified.len()
    );
    Ok(repo.load_stops_of_tour(tour_id)?)
}
