use super::prelude::*;
use crate::ordering::OrderingSettings;

#[derive(Debug, Clone)]
pub struct NewStop {
    pub location_id: Id,
    pub day: DayNumber,
    pub note: Option<String>,
}

/// Appends a stop to the end of its day.
///
/// Not idempotent: repeating the call creates another stop.
pub fn add_stop<R>(
    repo: &R,
    settings: &OrderingSettings,
    tour_id: &str,
    new_stop: NewStop,
    expected_version: Option<Revision>,
) -> Result<Stop>
where
    R: TourRepo + StopRepo + LocationRepo,
{
    let NewStop {
        location_id,
        day,
        note,
    } = new_stop;
    let mut itinerary = super::load_itinerary(repo, tour_id)?;
    itinerary.check_version(expected_version, settings.concurrency)?;
    get_location(repo, location_id.as_str())?;
    let stop = itinerary.add_stop(location_id, day, super::non_empty(note))?;
    repo.create_stop(&stop)?;
    repo.update_tour(itinerary.tour())?;
    log::info!(
        "Added stop {} to tour {} at {}",
        stop.id,
        tour_id,
        stop.slot
    );
    Ok(stop)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use crate::ordering::ConcurrencyMode;

    fn new_stop(location_id: &str, day: DayNumber) -> NewStop {
        NewStop {
            location_id: location_id.into(),
            day,
            note: None,
        }
    }

    #[test]
    fn add_stops_to_a_day() {
        let db = MockDb::with_tour_and_locations("t", &["a", "b"]);
        let settings = OrderingSettings::default();
        let s1 = add_stop(&db, &settings, "t", new_stop("a", 1), None).unwrap();
        let s2 = add_stop(&db, &settings, "t", new_stop("b", 1), None).unwrap();
        assert_eq!(s1.slot, Slot::new(1, 1));
        assert_eq!(s2.slot, Slot::new(1, 2));
        let stops = super::super::list_ordered_stops(&db, "t").unwrap();
        assert_eq!(stops.last().unwrap().id, s2.id);
        assert_eq!(db.tours.borrow()[0].version, Revision::from(2_u64));
    }

    #[test]
    fn add_stop_with_missing_references() {
        let db = MockDb::with_tour_and_locations("t", &["a"]);
        let settings = OrderingSettings::default();
        assert!(matches!(
            add_stop(&db, &settings, "x", new_stop("a", 1), None),
            Err(Error::TourNotFound)
        ));
        assert!(matches!(
            add_stop(&db, &settings, "t", new_stop("x", 1), None),
            Err(Error::LocationNotFound)
        ));
        assert!(matches!(
            add_stop(&db, &settings, "t", new_stop("a", 0), None),
            Err(Error::DayNumber)
        ));
        assert!(db.stops.borrow().is_empty());
        assert!(db.tours.borrow()[0].version.is_initial());
    }

    #[test]
    fn add_stop_with_optimistic_concurrency() {
        let db = MockDb::with_tour_and_locations("t", &["a"]);
        let settings = OrderingSettings {
            concurrency: ConcurrencyMode::Optimistic,
            ..Default::default()
        };
        assert!(matches!(
            add_stop(&db, &settings, "t", new_stop("a", 1), None),
            Err(Error::MissingVersion)
        ));
        let v0 = Revision::initial();
        add_stop(&db, &settings, "t", new_stop("a", 1), Some(v0)).unwrap();
        assert!(matches!(
            add_stop(&db, &settings, "t", new_stop("a", 1), Some(v0)),
            Err(Error::VersionConflict { .. })
        ));
        add_stop(&db, &settings, "t", new_stop("a", 1), Some(v0.next())).unwrap();
        assert_eq!(db.stops.borrow().len(), 2);
    }
}
