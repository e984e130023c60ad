use super::prelude::*;
use crate::ordering::{OrderingSettings, SlotAssignment};

/// Moves stops of a tour into new slots.
///
/// Either all assignments are stored or none. Returns all stops
/// of the tour in canonical order.
pub fn reorder_stops<R>(
    repo: &R,
    settings: &OrderingSettings,
    tour_id: &str,
    assignments: &[SlotAssignment],
    expected_version: Option<Revision>,
) -> Result<Vec<Stop>>
where
    R: TourRepo + StopRepo,
{
    let mut itinerary = super::load_itinerary(repo, tour_id)?;
    itinerary.check_version(expected_version, settings.concurrency)?;
    let modified = itinerary
        .reorder(assignments, settings.slot_conflicts)
        .inspect_err(|err| {
            log::info!("Rejected reordering of tour {tour_id}: {err}");
        })?;
    if modified.is_empty() {
        log::debug!("Reordering tour {tour_id} did not move any stops");
        return Ok(itinerary.into_inner().1);
    }
    super::store_modified_stops(repo, &itinerary, &modified)?;
    log::info!(
        "Moved {} stop(s) of tour {tour_id}",
        modified.len()
    );
    Ok(repo.load_stops_of_tour(tour_id)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use crate::ordering::SlotConflictPolicy;
    use tdb_entities::builders::*;

    fn assign(stop_id: &str, day: DayNumber, position: Position) -> SlotAssignment {
        SlotAssignment {
            stop_id: stop_id.into(),
            slot: Slot::new(day, position),
        }
    }

    fn fixture() -> MockDb {
        let db = MockDb::with_tour_and_locations("t", &["x"]);
        db.add_stop("a", "t", "x", 1, 1);
        db.add_stop("b", "t", "x", 1, 2);
        db.add_stop("c", "t", "x", 2, 1);
        db
    }

    #[test]
    fn reorder_stops_across_days() {
        let db = fixture();
        let stops = reorder_stops(
            &db,
            &OrderingSettings::default(),
            "t",
            &[assign("c", 1, 1), assign("a", 2, 1)],
            None,
        )
        .unwrap();
        let ids: Vec<_> = stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(db.stop("c").slot, Slot::new(1, 1));
        assert_eq!(db.stop("a").slot, Slot::new(2, 1));
        assert_eq!(db.stop("b").slot, Slot::new(1, 2));
        assert_eq!(db.tours.borrow()[0].version, Revision::from(1_u64));
    }

    #[test]
    fn foreign_stops_are_not_touched() {
        let db = fixture();
        db.tours.borrow_mut().push(Tour::build().id("u").finish());
        db.add_stop("foreign", "u", "x", 1, 1);
        let stops = reorder_stops(
            &db,
            &OrderingSettings::default(),
            "t",
            &[assign("foreign", 3, 3)],
            None,
        )
        .unwrap();
        assert_eq!(stops.len(), 3);
        assert_eq!(db.stop("foreign").slot, Slot::new(1, 1));
        assert!(db.tours.borrow()[0].version.is_initial());
    }

    #[test]
    fn colliding_reorder_is_rejected_without_changes() {
        let db = fixture();
        let err = reorder_stops(
            &db,
            &OrderingSettings::default(),
            "t",
            &[assign("c", 1, 3), assign("a", 1, 2)],
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::SlotConflict(slot) if slot == Slot::new(1, 2)));
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(db.stop("a").slot, Slot::new(1, 1));
        assert_eq!(db.stop("c").slot, Slot::new(2, 1));
        assert!(db.tours.borrow()[0].version.is_initial());
    }

    #[test]
    fn colliding_reorder_is_applied_if_allowed() {
        let db = fixture();
        let settings = OrderingSettings {
            slot_conflicts: SlotConflictPolicy::Allow,
            ..Default::default()
        };
        let stops = reorder_stops(&db, &settings, "t", &[assign("c", 1, 1)], None).unwrap();
        let ids: Vec<_> = stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn reorder_with_outdated_version() {
        let db = fixture();
        db.tours.borrow_mut()[0].version = Revision::from(3_u64);
        let result = reorder_stops(
            &db,
            &OrderingSettings::default(),
            "t",
            &[assign("a", 1, 5)],
            Some(Revision::from(2_u64)),
        );
        assert!(matches!(result, Err(Error::VersionConflict { .. })));
        assert_eq!(db.stop("a").slot, Slot::new(1, 1));
    }
}
