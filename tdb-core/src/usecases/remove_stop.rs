use super::prelude::*;
use crate::ordering::OrderingSettings;

/// Removes a stop. The remaining stops of that day keep
/// their positions.
pub fn remove_stop<R>(
    repo: &R,
    settings: &OrderingSettings,
    tour_id: &str,
    stop_id: &str,
    expected_version: Option<Revision>,
) -> Result<Stop>
where
    R: TourRepo + StopRepo,
{
    let mut itinerary = super::load_itinerary(repo, tour_id)?;
    itinerary.check_version(expected_version, settings.concurrency)?;
    let stop = itinerary.remove_stop(stop_id)?;
    repo.delete_stop(stop_id)?;
    repo.update_tour(itinerary.tour())?;
    log::info!("Removed stop {} from tour {}", stop_id, tour_id);
    Ok(stop)
}
