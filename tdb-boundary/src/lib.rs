use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub id           : String,
    pub created_at   : String,
    pub name         : String,
    pub city         : Option<String>,
    pub description  : Option<String>,
    pub category     : Option<String>,
    pub lat          : Option<f64>,
    pub lng          : Option<f64>,
    pub opening_time : Option<String>,
    pub closing_time : Option<String>,
}

/// The content of a location in the requested language.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub id          : String,
    pub language    : String,
    pub name        : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city        : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat         : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng         : Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: String,
    pub location_id: String,
    pub user_id: String,
    pub created_at: String,
    /// Number of stars in the range 0.0 to 5.0
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub photos: Vec<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tour {
    pub id          : String,
    pub owner       : String,
    pub created_at  : String,
    pub version     : u64,
    pub title       : String,
    pub description : Option<String>,
    pub duration    : Option<String>,
    pub price       : Option<String>,
    pub address     : Option<String>,
    pub image       : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub id          : String,
    pub tour_id     : String,
    pub location_id : String,
    pub day         : u16,
    pub position    : u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note        : Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TourWithStops {
    #[serde(flatten)]
    pub tour: Tour,
    pub stops: Vec<StopDetail>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopDetail {
    pub id: String,
    pub day: u16,
    pub position: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub location: ResolvedLocation,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TourDetail {
    #[serde(flatten)]
    pub tour: Tour,
    pub owner_name: Option<String>,
    pub stops: Vec<StopDetail>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LocationSummary {
    pub location: ResolvedLocation,
    pub average_rating: f64,
    pub review_count: usize,
    pub photo: String,
}

/// A new slot for an existing stop.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAssignment<'a> {
    pub stop_id: &'a str,
    pub day: u16,
    pub position: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub tour_id: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    NotFound,
    ValidationFailed,
    Conflict,
    Internal,
}

/// The caller-visible description of a failed operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_errors() {
        let err = Error {
            kind: ErrorKind::NotFound,
            message: "The tour does not exist".into(),
        };
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"kind":"not-found","message":"The tour does not exist"}"#
        );
        assert_eq!(err.to_string(), "The tour does not exist");
    }

    #[test]
    fn deserialize_slot_assignments() {
        let json = r#"[{"stop_id":"s1","day":1,"position":2},{"stop_id":"s2","day":2,"position":1}]"#;
        let assignments: Vec<SlotAssignment> = serde_json::from_str(json).unwrap();
        assert_eq!(
            assignments,
            vec![
                SlotAssignment {
                    stop_id: "s1",
                    day: 1,
                    position: 2
                },
                SlotAssignment {
                    stop_id: "s2",
                    day: 2,
                    position: 1
                },
            ]
        );
    }

    #[test]
    fn flatten_tour_with_stops() {
        let tour = TourWithStops {
            tour: Tour {
                id: "t1".into(),
                owner: "u1".into(),
                created_at: "1970-01-01T00:00:00Z".into(),
                version: 3,
                title: "Hà Nội".into(),
                description: None,
                duration: None,
                price: None,
                address: None,
                image: None,
            },
            stops: vec![],
        };
        let json = serde_json::to_value(&tour).unwrap();
        assert_eq!(json["id"], "t1");
        assert_eq!(json["version"], 3);
        assert!(json["stops"].as_array().unwrap().is_empty());
    }
}
