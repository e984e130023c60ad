use super::*;

pub fn list_stops(connections: &sqlite::Connections, tour_id: &str) -> Result<Vec<Stop>> {
    let db = connections.shared()?;
    Ok(usecases::list_ordered_stops(&db, tour_id)?)
}

/// Appends a new stop to a day of the tour.
///
/// Repeating this flow adds another stop for the same location.
pub fn add_stop(
    connections: &sqlite::Connections,
    settings: &OrderingSettings,
    tour_id: &str,
    new_stop: usecases::NewStop,
    expected_version: Option<Revision>,
) -> Result<Stop> {
    let stop = connections.exclusive()?.transaction(|conn| {
        usecases::add_stop(conn, settings, tour_id, new_stop, expected_version)
    })?;
    Ok(stop)
}

pub fn remove_stop(
    connections: &sqlite::Connections,
    settings: &OrderingSettings,
    tour_id: &str,
    stop_id: &str,
    expected_version: Option<Revision>,
) -> Result<Stop> {
    let stop = connections.exclusive()?.transaction(|conn| {
        usecases::remove_stop(conn, settings, tour_id, stop_id, expected_version)
    })?;
    Ok(stop)
}

/// Either all or none of the assignments are stored.
pub fn reorder_stops(
    connections: &sqlite::Connections,
    settings: &OrderingSettings,
    tour_id: &str,
    assignments: &[tdb_core::ordering::SlotAssignment],
    expected_version: Option<Revision>,
) -> Result<Vec<Stop>> {
    let stops = connections.exclusive()?.transaction(|conn| {
        usecases::reorder_stops(conn, settings, tour_id, assignments, expected_version)
            .inspect_err(|err| {
                warn!("Failed to reorder the stops of tour {tour_id}: {err}");
            })
    })?;
    Ok(stops)
}

pub fn compact_day(
    connections: &sqlite::Connections,
    settings: &OrderingSettings,
    tour_id: &str,
    day: DayNumber,
    expected_version: Option<Revision>,
) -> Result<Vec<Stop>> {
    let stops = connections.exclusive()?.transaction(|conn| {
        usecases::compact_day(conn, settings, tour_id, day, expected_version)
    })?;
    Ok(stops)
}
