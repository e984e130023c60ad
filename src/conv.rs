//! Conversions of core views into boundary types.

use tdb_application::error::AppError;
use tdb_boundary as json;
use tdb_core::{
    content::ResolvedContent,
    entities::*,
    usecases::{self, ErrorKind},
};

fn resolved_location(
    id: Id,
    pos: Option<MapPoint>,
    content: ResolvedContent,
) -> json::ResolvedLocation {
    let ResolvedContent {
        language,
        name,
        city,
        description,
        category,
    } = content;
    json::ResolvedLocation {
        id: id.into(),
        language: language.into(),
        name,
        city,
        description,
        category,
        lat: pos.map(|pos| pos.lat()),
        lng: pos.map(|pos| pos.lng()),
    }
}

pub fn from_resolved_location(from: usecases::ResolvedLocation) -> json::ResolvedLocation {
    let usecases::ResolvedLocation { location, content } = from;
    resolved_location(location.id, location.pos, content)
}

pub fn from_location_summary(from: usecases::LocationSummary) -> json::LocationSummary {
    let usecases::LocationSummary {
        id,
        content,
        pos,
        average,
        count,
        photo,
    } = from;
    json::LocationSummary {
        location: resolved_location(id, pos, content),
        average_rating: average.into(),
        review_count: count,
        photo,
    }
}

fn stop_detail(from: usecases::StopView) -> json::StopDetail {
    let usecases::StopView {
        stop,
        location,
        pos,
        image,
    } = from;
    let Stop {
        id,
        location_id,
        slot,
        note,
        ..
    } = stop;
    json::StopDetail {
        id: id.into(),
        day: slot.day,
        position: slot.position,
        note,
        location: resolved_location(location_id, pos, location),
        image,
    }
}

pub fn from_tour_view(from: usecases::TourView) -> json::TourWithStops {
    let usecases::TourView { tour, stops } = from;
    json::TourWithStops {
        tour: tour.into(),
        stops: stops.into_iter().map(stop_detail).collect(),
    }
}

pub fn from_tour_detail(from: usecases::TourDetailView) -> json::TourDetail {
    let usecases::TourDetailView {
        tour,
        owner_name,
        stops,
    } = from;
    json::TourDetail {
        tour: tour.into(),
        owner_name,
        stops: stops.into_iter().map(stop_detail).collect(),
    }
}

pub fn from_app_error(from: &AppError) -> json::Error {
    let kind = match from.kind() {
        ErrorKind::NotFound => json::ErrorKind::NotFound,
        ErrorKind::ValidationFailed => json::ErrorKind::ValidationFailed,
        ErrorKind::Conflict => json::ErrorKind::Conflict,
        ErrorKind::Internal => json::ErrorKind::Internal,
    };
    json::Error {
        kind,
        message: from.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdb_entities::builders::*;

    fn content(name: &str) -> ResolvedContent {
        ResolvedContent {
            language: "en".parse().unwrap(),
            name: name.into(),
            city: Some("Hanoi".into()),
            description: None,
            category: None,
        }
    }

    #[test]
    fn convert_tour_detail() {
        let tour = Tour::build().id("t1").owner("u1").version(2).finish();
        let view = usecases::TourDetailView {
            tour,
            owner_name: Some("Lan".into()),
            stops: vec![usecases::StopView {
                stop: Stop {
                    id: "s1".into(),
                    tour_id: "t1".into(),
                    location_id: "a".into(),
                    slot: Slot::new(1, 2),
                    note: None,
                },
                location: content("Hoan Kiem Lake"),
                pos: MapPoint::try_from_lat_lng_deg(21.0288, 105.8525),
                image: "https://example.com/a.jpg".into(),
            }],
        };
        let detail = from_tour_detail(view);
        assert_eq!(detail.tour.id, "t1");
        assert_eq!(detail.tour.version, 2);
        assert_eq!(detail.owner_name.as_deref(), Some("Lan"));
        assert_eq!(detail.stops.len(), 1);
        let stop = &detail.stops[0];
        assert_eq!((stop.day, stop.position), (1, 2));
        assert_eq!(stop.location.id, "a");
        assert_eq!(stop.location.language, "en");
        assert_eq!(stop.location.name, "Hoan Kiem Lake");
        assert_eq!(stop.location.lat, Some(21.0288));
        assert_eq!(stop.location.lng, Some(105.8525));
    }

    #[test]
    fn convert_tour_view() {
        let tour = Tour::build().id("t1").owner("u1").finish();
        let view = usecases::TourView {
            tour,
            stops: vec![usecases::StopView {
                stop: Stop {
                    id: "s1".into(),
                    tour_id: "t1".into(),
                    location_id: "a".into(),
                    slot: Slot::new(1, 1),
                    note: Some("Sunrise".into()),
                },
                location: content("Hoan Kiem Lake"),
                pos: None,
                image: "https://example.com/placeholder.jpg".into(),
            }],
        };
        let tour = from_tour_view(view);
        assert_eq!(tour.tour.id, "t1");
        assert_eq!(tour.stops.len(), 1);
        assert_eq!(tour.stops[0].note.as_deref(), Some("Sunrise"));
        assert_eq!(tour.stops[0].location.name, "Hoan Kiem Lake");
        assert_eq!(tour.stops[0].location.lat, None);
    }

    #[test]
    fn convert_location_summary() {
        let summary = usecases::LocationSummary {
            id: "a".into(),
            content: content("Hoan Kiem Lake"),
            pos: MapPoint::try_from_lat_lng_deg(16.4637, 107.5909),
            average: AvgRatingValue::from(4.5),
            count: 2,
            photo: "p1".into(),
        };
        let summary = from_location_summary(summary);
        assert_eq!(summary.location.id, "a");
        assert_eq!(summary.location.lat, Some(16.4637));
        assert_eq!(summary.average_rating, 4.5);
        assert_eq!(summary.review_count, 2);
        assert_eq!(summary.photo, "p1");
    }

    #[test]
    fn convert_resolved_location_with_position() {
        let location = Location::build()
            .id("a")
            .pos(MapPoint::try_from_lat_lng_deg(21.0, 105.8).unwrap())
            .finish();
        let resolved = from_resolved_location(usecases::ResolvedLocation {
            location,
            content: content("Hoan Kiem Lake"),
        });
        assert_eq!(resolved.lat, Some(21.0));
        assert_eq!(resolved.lng, Some(105.8));
    }

    #[test]
    fn convert_errors() {
        let err = AppError::from(usecases::Error::TourNotFound);
        let err = from_app_error(&err);
        assert_eq!(err.kind, tdb_boundary::ErrorKind::NotFound);
        assert!(!err.message.is_empty());
    }
}
