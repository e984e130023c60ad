use super::prelude::*;

/// Deletes a tour together with all of its stops.
pub fn delete_tour<R>(repo: &R, id: &str) -> Result<()>
where
    R: TourRepo + StopRepo,
{
    get_tour(repo, id)?;
    let stop_count = repo.load_stops_of_tour(id)?.len();
    repo.delete_tour(id)?;
    log::info!("Deleted tour {id} with {stop_count} stop(s)");
    Ok(())
}
