use crate::{id::*, price::*, revision::*, time::*};

pub type DayNumber = u16;

pub type Position = u16;

/// The place of a stop within a tour.
///
/// The derived ordering (day first, then position) is the canonical
/// display order of stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub day: DayNumber,
    pub position: Position,
}

impl Slot {
    pub const fn new(day: DayNumber, position: Position) -> Self {
        Self { day, position }
    }

    /// Both day and position are counted from 1.
    pub const fn is_valid(self) -> bool {
        self.day >= 1 && self.position >= 1
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "day {} / position {}", self.day, self.position)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub id          : Id,
    pub owner       : Id,
    pub title       : String,
    pub description : Option<String>,
    pub duration    : Option<String>,
    pub price       : Option<Price>,
    pub address     : Option<String>,
    pub image       : Option<String>,
    pub created_at  : Timestamp,
    pub version     : Revision,
}

/// One scheduled visit of a location within a tour.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub id          : Id,
    pub tour_id     : Id,
    pub location_id : Id,
    pub slot        : Slot,
    pub note        : Option<String>,
}
