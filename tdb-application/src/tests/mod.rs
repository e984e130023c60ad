
pub mod prelude {
    pub use tdb_core::{
        content::ContentSettings,
        entities::*,
        ordering::{ConcurrencyMode, OrderingSettings, SlotAssignment, SlotConflictPolicy},
        repositories::{Error as RepoError, *},
        usecases::{self, ErrorKind},
    };

    pub use crate::{error::AppError, prelude as flows, sqlite};

    pub fn vi() -> LanguageCode {
        LanguageCode::base()
    }

    pub fn en() -> LanguageCode {
        "en".parse().unwrap()
    }

    pub fn default_new_location(name: &str) -> usecases::NewLocation {
        usecases::NewLocation {
            name: name.into(),
            city: Some("Hà Nội".into()),
            description: Some(format!("Mô tả {name}")),
            category: Some("di tích".into()),
            pos: None,
            opening_time: None,
            closing_time: None,
        }
    }

    pub fn default_new_tour(owner: &str, initial_locations: &[&str]) -> usecases::NewTour {
        usecases::NewTour {
            owner: owner.into(),
            title: "Hà Nội 3 ngày 2 đêm".into(),
            description: None,
            duration: Some("3 ngày".into()),
            price: None,
            address: Some("Quận Hoàn Kiếm, Hà Nội".into()),
            image: None,
            initial_locations: initial_locations.iter().map(|id| Id::from(*id)).collect(),
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub ordering: OrderingSettings,
        pub content: ContentSettings,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self {
                db_connections,
                ordering: OrderingSettings::default(),
                content: ContentSettings::default(),
            }
        }

        pub fn create_user(&self, id: &str, name: &str) {
            let user = User {
                id: id.into(),
                name: name.into(),
                email: None,
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .transaction(|db| db.create_user(&user))
                .unwrap();
        }

        pub fn create_location(&self, name: &str) -> String {
            flows::create_location(&self.db_connections, default_new_location(name))
                .unwrap()
                .id
                .into()
        }

        pub fn create_tour(&self, owner: &str, initial_locations: &[&str]) -> String {
            flows::create_tour(
                &self.db_connections,
                default_new_tour(owner, initial_locations),
            )
            .unwrap()
            .tour()
            .id
            .to_string()
        }

        pub fn add_stop(&self, tour_id: &str, location_id: &str, day: DayNumber) -> Stop {
            let new_stop = usecases::NewStop {
                location_id: location_id.into(),
                day,
                note: None,
            };
            flows::add_stop(&self.db_connections, &self.ordering, tour_id, new_stop, None)
                .unwrap()
        }

        pub fn rate(&self, user: &str, location: &str, value: f64) -> Rating {
            let new_rating = usecases::NewRating {
                user: user.into(),
                location: location.into(),
                value,
                comment: None,
                photos: vec![],
            };
            flows::rate_location(&self.db_connections, new_rating).unwrap()
        }

        pub fn stops(&self, tour_id: &str) -> Vec<Stop> {
            flows::list_stops(&self.db_connections, tour_id).unwrap()
        }

        pub fn tour(&self, tour_id: &str) -> Tour {
            self.db_connections
                .shared()
                .unwrap()
                .get_tour(tour_id)
                .unwrap()
        }
    }

    pub fn slots(stops: &[Stop]) -> Vec<(DayNumber, Position)> {
        stops.iter().map(|s| (s.slot.day, s.slot.position)).collect()
    }
}
