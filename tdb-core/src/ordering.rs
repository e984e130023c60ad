//! The itinerary ordering engine.
//!
//! A tour and its stops form an aggregate that is loaded, modified and
//! stored as a unit. All placement of stops happens here.

use std::collections::HashMap;

use thiserror::Error;

use crate::entities::*;

/// How to handle reorders that would put multiple stops into the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotConflictPolicy {
    /// Apply the assignment anyway. Stops that share a slot are
    /// listed in insertion order.
    Allow,
    /// Reject the whole reorder.
    #[default]
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyMode {
    /// Expected versions are only checked if provided.
    #[default]
    LastWriterWins,
    /// Every modification must provide the expected version.
    Optimistic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderingSettings {
    pub slot_conflicts: SlotConflictPolicy,
    pub concurrency: ConcurrencyMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    pub stop_id: Id,
    pub slot: Slot,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderingError {
    #[error("Invalid day number")]
    DayNumber,
    #[error("Invalid position")]
    Position,
    #[error("The stop {0} does not belong to the tour")]
    StopNotFound(Id),
    #[error("Multiple stops at {0}")]
    SlotConflict(Slot),
    #[error("Expected version {expected} but found {actual}")]
    VersionConflict { expected: Revision, actual: Revision },
    #[error("Missing the expected version")]
    MissingVersion,
}

type Result<T> = std::result::Result<T, OrderingError>;

#[derive(Debug, Clone)]
pub struct Itinerary {
    tour: Tour,
    // Canonical order
    stops: Vec<Stop>,
}

impl Itinerary {
    /// The stops must be given in the order of insertion or
    /// already in canonical order.
    pub fn new(tour: Tour, mut stops: Vec<Stop>) -> Self {
        debug_assert!(stops.iter().all(|s| s.tour_id == tour.id));
        stops.sort_by_key(|s| s.slot);
        Self { tour, stops }
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// All stops sorted by day and position.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn into_inner(self) -> (Tour, Vec<Stop>) {
        let Self { tour, stops } = self;
        (tour, stops)
    }

    pub fn check_version(&self, expected: Option<Revision>, mode: ConcurrencyMode) -> Result<()> {
        let actual = self.tour.version;
        match (expected, mode) {
            (Some(expected), _) if expected != actual => {
                Err(OrderingError::VersionConflict { expected, actual })
            }
            (None, ConcurrencyMode::Optimistic) => Err(OrderingError::MissingVersion),
            _ => Ok(()),
        }
    }

    /// The position directly after the last stop of that day.
    pub fn next_position(&self, day: DayNumber) -> Result<Position> {
        self.stops
            .iter()
            .filter(|s| s.slot.day == day)
            .map(|s| s.slot.position)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(OrderingError::Position)
    }

    /// Appends a new stop to the end of `day`.
    ///
    /// This is not idempotent: each invocation creates another stop.
    pub fn add_stop(
        &mut self,
        location_id: Id,
        day: DayNumber,
        note: Option<String>,
    ) -> Result<Stop> {
        if day < 1 {
            return Err(OrderingError::DayNumber);
        }
        let position = self.next_position(day)?;
        let stop = Stop {
            id: Id::new(),
            tour_id: self.tour.id.clone(),
            location_id,
            slot: Slot::new(day, position),
            note,
        };
        let idx = self.stops.partition_point(|s| s.slot <= stop.slot);
        self.stops.insert(idx, stop.clone());
        self.bump_version();
        Ok(stop)
    }

    /// Removes a stop without closing the gap it leaves behind.
    pub fn remove_stop(&mut self, stop_id: &str) -> Result<Stop> {
        let idx = self
            .stops
            .iter()
            .position(|s| s.id.as_str() == stop_id)
            .ok_or_else(|| OrderingError::StopNotFound(stop_id.into()))?;
        let stop = self.stops.remove(idx);
        self.bump_version();
        Ok(stop)
    }

    /// Moves stops into new slots and returns the modified stops.
    ///
    /// Stops that are not mentioned keep their slot. Assignments for
    /// unknown stops or stops of other tours are ignored. Multiple
    /// assignments for the same stop are applied in order.
    pub fn reorder(
        &mut self,
        assignments: &[SlotAssignment],
        policy: SlotConflictPolicy,
    ) -> Result<Vec<Stop>> {
        for SlotAssignment { slot, .. } in assignments {
            if slot.day < 1 {
                return Err(OrderingError::DayNumber);
            }
            if slot.position < 1 {
                return Err(OrderingError::Position);
            }
        }
        let index: HashMap<&str, usize> = self
            .stops
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.as_str(), i))
            .collect();
        let mut proposed: Vec<Slot> = self.stops.iter().map(|s| s.slot).collect();
        for SlotAssignment { stop_id, slot } in assignments {
            match index.get(stop_id.as_str()) {
                Some(&i) => proposed[i] = *slot,
                None => {
                    log::debug!(
                        "Ignoring slot assignment for stop {stop_id} that does not belong to tour {}",
                        self.tour.id
                    );
                }
            }
        }
        if policy == SlotConflictPolicy::Reject {
            if let Some(slot) = first_collision(&proposed) {
                return Err(OrderingError::SlotConflict(slot));
            }
        }
        let mut changed = Vec::new();
        for (stop, slot) in self.stops.iter_mut().zip(proposed) {
            if stop.slot != slot {
                stop.slot = slot;
                changed.push(stop.clone());
            }
        }
        if !changed.is_empty() {
            self.stops.sort_by_key(|s| s.slot);
            self.bump_version();
        }
        Ok(changed)
    }

    /// Renumbers the stops of a single day to `1..=n` keeping
    /// their order and returns the modified stops.
    pub fn compact_day(&mut self, day: DayNumber) -> Result<Vec<Stop>> {
        if day < 1 {
            return Err(OrderingError::DayNumber);
        }
        let mut changed = Vec::new();
        let mut position: Position = 0;
        for stop in self.stops.iter_mut().filter(|s| s.slot.day == day) {
            position += 1;
            if stop.slot.position != position {
                stop.slot.position = position;
                changed.push(stop.clone());
            }
        }
        if !changed.is_empty() {
            self.bump_version();
        }
        Ok(changed)
    }

    fn bump_version(&mut self) {
        self.tour.version = self.tour.version.next();
    }
}

/// The smallest slot that is occupied more than once.
pub(crate) fn first_collision(slots: &[Slot]) -> Option<Slot> {
    let mut sorted = slots.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).find(|w| w[0] == w[1]).map(|w| w[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdb_entities::builders::*;

    fn stop(id: &str, location_id: &str, day: DayNumber, position: Position) -> Stop {
        Stop {
            id: id.into(),
            tour_id: "tour".into(),
            location_id: location_id.into(),
            slot: Slot::new(day, position),
            note: None,
        }
    }

    fn itinerary(stops: Vec<Stop>) -> Itinerary {
        Itinerary::new(Tour::build().id("tour").finish(), stops)
    }

    fn slots(it: &Itinerary) -> Vec<(&str, DayNumber, Position)> {
        it.stops()
            .iter()
            .map(|s| (s.id.as_str(), s.slot.day, s.slot.position))
            .collect()
    }

    fn version(v: u64) -> Revision {
        v.into()
    }

    fn assign(stop_id: &str, day: DayNumber, position: Position) -> SlotAssignment {
        SlotAssignment {
            stop_id: stop_id.into(),
            slot: Slot::new(day, position),
        }
    }

    #[test]
    fn stops_are_sorted_canonically() {
        let it = itinerary(vec![
            stop("c", "x", 2, 1),
            stop("b", "x", 1, 2),
            stop("a", "x", 1, 1),
        ]);
        assert_eq!(slots(&it), vec![("a", 1, 1), ("b", 1, 2), ("c", 2, 1)]);
    }

    #[test]
    fn add_stop_to_empty_day() {
        let mut it = itinerary(vec![stop("a", "x", 1, 1)]);
        let s = it.add_stop("y".into(), 2, Some("lunch".into())).unwrap();
        assert_eq!(s.slot, Slot::new(2, 1));
        assert_eq!(s.tour_id, Id::from("tour"));
        assert_eq!(s.note.as_deref(), Some("lunch"));
        assert_eq!(it.tour().version, version(1));
    }

    #[test]
    fn add_stop_appends_after_the_last_position() {
        let mut it = itinerary(vec![
            stop("a", "x", 1, 1),
            stop("b", "x", 1, 4),
            stop("c", "x", 2, 7),
        ]);
        let s = it.add_stop("y".into(), 1, None).unwrap();
        assert_eq!(s.slot, Slot::new(1, 5));
        assert_eq!(it.stops()[2].id, s.id);
        // not idempotent
        let s2 = it.add_stop("y".into(), 1, None).unwrap();
        assert_ne!(s.id, s2.id);
        assert_eq!(s2.slot, Slot::new(1, 6));
        assert_eq!(it.tour().version, version(2));
    }

    #[test]
    fn add_stop_to_invalid_day() {
        let mut it = itinerary(vec![]);
        assert_eq!(
            it.add_stop("y".into(), 0, None).unwrap_err(),
            OrderingError::DayNumber
        );
        assert!(it.stops().is_empty());
        assert!(it.tour().version.is_initial());
    }

    #[test]
    fn remove_stop_leaves_a_gap() {
        let mut it = itinerary(vec![stop("a", "locA", 1, 1), stop("b", "locB", 1, 2)]);
        let removed = it.remove_stop("a").unwrap();
        assert_eq!(removed.location_id, Id::from("locA"));
        assert_eq!(slots(&it), vec![("b", 1, 2)]);
        assert_eq!(
            it.remove_stop("a").unwrap_err(),
            OrderingError::StopNotFound("a".into())
        );
    }

    #[test]
    fn reorder_moves_named_stops_only() {
        let mut it = itinerary(vec![
            stop("a", "x", 1, 1),
            stop("b", "x", 1, 2),
            stop("c", "x", 2, 1),
        ]);
        let changed = it
            .reorder(
                &[assign("a", 1, 3), assign("c", 1, 1)],
                SlotConflictPolicy::Reject,
            )
            .unwrap();
        assert_eq!(changed.len(), 2);
        assert_eq!(slots(&it), vec![("c", 1, 1), ("b", 1, 2), ("a", 1, 3)]);
        assert_eq!(it.tour().version, version(1));
    }

    #[test]
    fn reorder_ignores_foreign_stops() {
        let mut it = itinerary(vec![stop("a", "x", 1, 1)]);
        let changed = it
            .reorder(&[assign("other", 5, 5)], SlotConflictPolicy::Reject)
            .unwrap();
        assert!(changed.is_empty());
        assert_eq!(slots(&it), vec![("a", 1, 1)]);
        assert!(it.tour().version.is_initial());
    }

    #[test]
    fn reorder_applies_repeated_assignments_in_order() {
        let mut it = itinerary(vec![stop("a", "x", 1, 1)]);
        it.reorder(
            &[assign("a", 2, 2), assign("a", 3, 1)],
            SlotConflictPolicy::Reject,
        )
        .unwrap();
        assert_eq!(slots(&it), vec![("a", 3, 1)]);
    }

    #[test]
    fn reject_colliding_reorder_as_a_whole() {
        let mut it = itinerary(vec![
            stop("a", "x", 1, 1),
            stop("b", "x", 1, 2),
            stop("c", "x", 1, 3),
        ]);
        let err = it
            .reorder(
                &[assign("c", 1, 4), assign("a", 1, 2)],
                SlotConflictPolicy::Reject,
            )
            .unwrap_err();
        assert_eq!(err, OrderingError::SlotConflict(Slot::new(1, 2)));
        assert_eq!(slots(&it), vec![("a", 1, 1), ("b", 1, 2), ("c", 1, 3)]);
        assert!(it.tour().version.is_initial());
    }

    #[test]
    fn swapping_stops_is_no_collision() {
        let mut it = itinerary(vec![stop("a", "x", 1, 1), stop("b", "x", 1, 2)]);
        it.reorder(
            &[assign("a", 1, 2), assign("b", 1, 1)],
            SlotConflictPolicy::Reject,
        )
        .unwrap();
        assert_eq!(slots(&it), vec![("b", 1, 1), ("a", 1, 2)]);
    }

    #[test]
    fn allow_colliding_reorder() {
        let mut it = itinerary(vec![stop("a", "x", 1, 1), stop("b", "x", 1, 2)]);
        let changed = it
            .reorder(&[assign("b", 1, 1)], SlotConflictPolicy::Allow)
            .unwrap();
        assert_eq!(changed.len(), 1);
        // stable: insertion order for colliding slots
        assert_eq!(slots(&it), vec![("a", 1, 1), ("b", 1, 1)]);
    }

    #[test]
    fn reorder_validates_slots() {
        let mut it = itinerary(vec![stop("a", "x", 1, 1)]);
        assert_eq!(
            it.reorder(&[assign("a", 0, 1)], SlotConflictPolicy::Allow)
                .unwrap_err(),
            OrderingError::DayNumber
        );
        assert_eq!(
            it.reorder(&[assign("a", 1, 0)], SlotConflictPolicy::Allow)
                .unwrap_err(),
            OrderingError::Position
        );
    }

    #[test]
    fn compact_a_single_day() {
        let mut it = itinerary(vec![
            stop("a", "x", 1, 2),
            stop("b", "x", 1, 5),
            stop("c", "x", 2, 3),
        ]);
        let changed = it.compact_day(1).unwrap();
        assert_eq!(changed.len(), 2);
        assert_eq!(slots(&it), vec![("a", 1, 1), ("b", 1, 2), ("c", 2, 3)]);
        assert_eq!(it.tour().version, version(1));
        assert!(it.compact_day(1).unwrap().is_empty());
        assert_eq!(it.tour().version, version(1));
    }

    #[test]
    fn check_versions() {
        let it = itinerary(vec![]);
        let v0 = Revision::initial();
        assert!(it.check_version(None, ConcurrencyMode::LastWriterWins).is_ok());
        assert!(it
            .check_version(Some(v0), ConcurrencyMode::LastWriterWins)
            .is_ok());
        assert!(it.check_version(Some(v0), ConcurrencyMode::Optimistic).is_ok());
        assert_eq!(
            it.check_version(None, ConcurrencyMode::Optimistic)
                .unwrap_err(),
            OrderingError::MissingVersion
        );
        assert_eq!(
            it.check_version(Some(v0.next()), ConcurrencyMode::LastWriterWins)
                .unwrap_err(),
            OrderingError::VersionConflict {
                expected: v0.next(),
                actual: v0
            }
        );
    }
}
