use std::collections::HashMap;

use crate::entities::*;

/// Roll-up of all ratings of a single location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingStats {
    pub average: AvgRatingValue,
    pub count: usize,
    /// First photo of the earliest rating that has photos
    pub photo: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct RatingStatsBuilder {
    avg: AvgRatingValueBuilder,
    photo: Option<(Timestamp, String)>,
}

impl RatingStatsBuilder {
    /// Ratings with the same creation time keep the order
    /// in which they have been added.
    pub fn add(&mut self, rating: &Rating) {
        self.avg.add(rating.value);
        let Some(first_photo) = rating.photos.first() else {
            return;
        };
        match &self.photo {
            Some((created_at, _)) if *created_at <= rating.created_at => {}
            _ => {
                self.photo = Some((rating.created_at, first_photo.clone()));
            }
        }
    }

    pub fn build(self) -> RatingStats {
        let count = self.avg.count();
        RatingStats {
            average: self.avg.build(),
            count,
            photo: self.photo.map(|(_, photo)| photo),
        }
    }
}

pub trait Rated {
    fn rating_stats(&self, _: &[Rating]) -> RatingStats;
}

impl Rated for Location {
    fn rating_stats(&self, ratings: &[Rating]) -> RatingStats {
        debug_assert_eq!(
            ratings.len(),
            ratings.iter().filter(|r| r.location_id == self.id).count()
        );
        aggregate(ratings)
    }
}

pub fn aggregate<'a>(ratings: impl IntoIterator<Item = &'a Rating>) -> RatingStats {
    ratings
        .into_iter()
        .fold(RatingStatsBuilder::default(), |mut acc, r| {
            acc.add(r);
            acc
        })
        .build()
}

/// Aggregates the ratings of many locations in a single pass.
///
/// Locations without ratings are missing in the result.
pub fn aggregate_by_location<'a>(
    ratings: impl IntoIterator<Item = &'a Rating>,
) -> HashMap<Id, RatingStats> {
    let mut builders: HashMap<&Id, RatingStatsBuilder> = HashMap::new();
    for rating in ratings {
        builders.entry(&rating.location_id).or_default().add(rating);
    }
    builders
        .into_iter()
        .map(|(id, builder)| (id.clone(), builder.build()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdb_entities::builders::*;

    fn new_rating(location_id: &str, tenths: i16, created_at: i64, photos: Vec<&str>) -> Rating {
        Rating::build()
            .location_id(location_id)
            .value(tenths)
            .created_at(Timestamp::from_millis(created_at))
            .photos(photos)
            .finish()
    }

    #[test]
    fn average_rating() {
        let ratings = [
            new_rating("a", 30, 1, vec![]),
            new_rating("a", 40, 2, vec![]),
            new_rating("a", 50, 3, vec![]),
        ];
        let stats = Location::build()
            .id("a")
            .finish()
            .rating_stats(&ratings);
        assert_eq!(stats.average, AvgRatingValue::from(4.0));
        assert_eq!(stats.count, 3);
        assert_eq!(stats.photo, None);
    }

    #[test]
    fn no_ratings() {
        let stats = aggregate(&[]);
        assert_eq!(f64::from(stats.average), 0.0);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.photo, None);
    }

    #[test]
    fn first_photo_of_earliest_rating() {
        let ratings = [
            new_rating("a", 30, 5, vec!["late.jpg"]),
            new_rating("a", 40, 1, vec![]),
            new_rating("a", 50, 2, vec!["early-1.jpg", "early-2.jpg"]),
            new_rating("a", 50, 2, vec!["same-time.jpg"]),
        ];
        assert_eq!(aggregate(&ratings).photo.as_deref(), Some("early-1.jpg"));
    }

    #[test]
    fn aggregate_many_locations_at_once() {
        let ratings = [
            new_rating("a", 45, 1, vec!["a.jpg"]),
            new_rating("b", 30, 1, vec![]),
            new_rating("a", 20, 2, vec![]),
            new_rating("b", 31, 2, vec!["b.jpg"]),
        ];
        let stats = aggregate_by_location(&ratings);
        assert_eq!(stats.len(), 2);
        let a = &stats[&Id::from("a")];
        assert_eq!(a.count, 2);
        // 3.25 is rounded away from zero
        assert_eq!(a.average, AvgRatingValue::from(3.3));
        assert_eq!(a.photo.as_deref(), Some("a.jpg"));
        let b = &stats[&Id::from("b")];
        assert_eq!(b.average, AvgRatingValue::from(3.1));
        assert_eq!(b.photo.as_deref(), Some("b.jpg"));
        assert!(!stats.contains_key(&Id::from("c")));
    }
}
