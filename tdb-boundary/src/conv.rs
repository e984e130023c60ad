use ::time::{format_description::BorrowedFormatItem, macros::format_description};
use tdb_entities as e;

use super::*;

const TIME_OF_DAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

fn format_time_of_day(time: e::time::TimeOfDay) -> Option<String> {
    time.format(TIME_OF_DAY_FORMAT).ok()
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            name,
            city,
            description,
            category,
            pos,
            opening_time,
            closing_time,
            created_at,
        } = from;
        Self {
            id: id.into(),
            created_at: created_at.to_string(),
            name,
            city,
            description,
            category,
            lat: pos.map(|pos| pos.lat()),
            lng: pos.map(|pos| pos.lng()),
            opening_time: opening_time.and_then(format_time_of_day),
            closing_time: closing_time.and_then(format_time_of_day),
        }
    }
}

impl From<e::rating::Rating> for Rating {
    fn from(from: e::rating::Rating) -> Self {
        let e::rating::Rating {
            id,
            location_id,
            user_id,
            created_at,
            value,
            comment,
            photos,
        } = from;
        Self {
            id: id.into(),
            location_id: location_id.into(),
            user_id: user_id.into(),
            created_at: created_at.to_string(),
            value: value.into(),
            comment,
            photos,
        }
    }
}

impl From<e::tour::Tour> for Tour {
    fn from(from: e::tour::Tour) -> Self {
        let e::tour::Tour {
            id,
            owner,
            title,
            description,
            duration,
            price,
            address,
            image,
            created_at,
            version,
        } = from;
        Self {
            id: id.into(),
            owner: owner.into(),
            created_at: created_at.to_string(),
            version: version.into(),
            title,
            description,
            duration,
            price: price.map(|p| p.to_string()),
            address,
            image,
        }
    }
}

impl From<e::tour::Stop> for Stop {
    fn from(from: e::tour::Stop) -> Self {
        let e::tour::Stop {
            id,
            tour_id,
            location_id,
            slot,
            note,
        } = from;
        Self {
            id: id.into(),
            tour_id: tour_id.into(),
            location_id: location_id.into(),
            day: slot.day,
            position: slot.position,
            note,
        }
    }
}

impl From<SlotAssignment<'_>> for (e::id::Id, e::tour::Slot) {
    fn from(from: SlotAssignment<'_>) -> Self {
        let SlotAssignment {
            stop_id,
            day,
            position,
        } = from;
        (stop_id.into(), e::tour::Slot::new(day, position))
    }
}
