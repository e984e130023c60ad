use thiserror::Error;

use crate::{id::*, time::*};

/// A rating value in tenths of a star, e.g. `45` for 4.5 stars.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(i16);

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Not a rating value: {0}")]
pub struct RatingValueParseError(f64);

impl RatingValue {
    pub const fn from_tenths(tenths: i16) -> Self {
        Self(tenths)
    }

    pub const fn tenths(self) -> i16 {
        self.0
    }

    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(50)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl TryFrom<f64> for RatingValue {
    type Error = RatingValueParseError;

    /// Rounds the number of stars to the nearest tenth.
    ///
    /// The result is not necessarily valid, see [`RatingValue::is_valid`].
    fn try_from(stars: f64) -> Result<Self, Self::Error> {
        let tenths = (stars * 10.0).round();
        if !tenths.is_finite() || tenths < f64::from(i16::MIN) || tenths > f64::from(i16::MAX) {
            return Err(RatingValueParseError(stars));
        }
        Ok(Self(tenths as i16))
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0) / 10.0
    }
}

/// An average rating in stars, rounded to one decimal place.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(from).into()
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: i64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += i64::from(val.0);
        self.cnt += 1;
    }

    pub fn count(&self) -> usize {
        self.cnt
    }

    /// The arithmetic mean rounded to one decimal place or 0 if
    /// nothing has been added.
    pub fn build(self) -> AvgRatingValue {
        if self.cnt > 0 {
            let avg_tenths = (self.acc as f64 / self.cnt as f64).round();
            AvgRatingValue::from(avg_tenths / 10.0).clamp()
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id          : Id,
    pub location_id : Id,
    pub user_id     : Id,
    pub created_at  : Timestamp,
    pub value       : RatingValue,
    pub comment     : Option<String>,
    // Photo URLs in the order they have been submitted
    pub photos      : Vec<String>,
}
