pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{location_builder::*, rating_builder::*, tour_builder::*};

pub mod location_builder {

    use super::*;
    use crate::{geo::*, id::*, location::*, time::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.location.city = Some(city.into());
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.location.description = Some(desc.into());
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.location.category = Some(category.into());
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = Some(pos);
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.location.created_at = created_at;
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    name: "".into(),
                    city: None,
                    description: None,
                    category: None,
                    pos: None,
                    opening_time: None,
                    closing_time: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod tour_builder {

    use super::*;
    use crate::{id::*, revision::*, time::*, tour::*};

    #[derive(Debug)]
    pub struct TourBuild {
        tour: Tour,
    }

    impl TourBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.tour.id = id.into();
            self
        }
        pub fn owner(mut self, owner: &str) -> Self {
            self.tour.owner = owner.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.tour.title = title.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.tour.address = Some(address.into());
            self
        }
        pub fn version(mut self, v: u64) -> Self {
            self.tour.version = v.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.tour.created_at = created_at;
            self
        }
        pub fn finish(self) -> Tour {
            self.tour
        }
    }

    impl Builder for Tour {
        type Build = TourBuild;
        fn build() -> TourBuild {
            TourBuild {
                tour: Tour {
                    id: Id::new(),
                    owner: Id::new(),
                    title: "".into(),
                    description: None,
                    duration: None,
                    price: None,
                    address: None,
                    image: None,
                    created_at: Timestamp::now(),
                    version: Revision::initial(),
                },
            }
        }
    }
}

pub mod rating_builder {

    use super::*;
    use crate::{id::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct RatingBuild {
        rating: Rating,
    }

    impl RatingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.rating.id = id.into();
            self
        }
        pub fn location_id(mut self, id: &str) -> Self {
            self.rating.location_id = id.into();
            self
        }
        pub fn user_id(mut self, id: &str) -> Self {
            self.rating.user_id = id.into();
            self
        }
        /// Stars in tenths, e.g. `45` for 4.5 stars.
        pub fn value(mut self, tenths: i16) -> Self {
            self.rating.value = RatingValue::from_tenths(tenths);
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.rating.comment = Some(comment.into());
            self
        }
        pub fn photos(mut self, photos: Vec<impl Into<String>>) -> Self {
            self.rating.photos = photos.into_iter().map(Into::into).collect();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.rating.created_at = created_at;
            self
        }
        pub fn finish(self) -> Rating {
            self.rating
        }
    }

    impl Builder for Rating {
        type Build = RatingBuild;
        fn build() -> RatingBuild {
            RatingBuild {
                rating: Rating {
                    id: Id::new(),
                    location_id: Id::new(),
                    user_id: Id::new(),
                    created_at: Timestamp::now(),
                    value: RatingValue::max(),
                    comment: None,
                    photos: vec![],
                },
            }
        }
    }
}
