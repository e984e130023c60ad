use crate::{geo::*, id::*, price::*, time::*};

/// A point of interest with its canonical content in the base language.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Id,
    pub name: String,
    pub city: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub pos: Option<MapPoint>,
    pub opening_time: Option<TimeOfDay>,
    pub closing_time: Option<TimeOfDay>,
    pub created_at: Timestamp,
}

/// Supplementary information about a location, e.g. a picture or the
/// ticket price.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDetail {
    pub id: Id,
    pub location_id: Id,
    pub ticket_price: Option<Price>,
    pub image: Option<String>,
    pub review: Option<String>,
    pub services_around: Option<String>,
    pub updated_at: Timestamp,
}
