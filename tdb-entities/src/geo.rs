/// A geographic position in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn min_lat() -> f64 {
        -90.0
    }

    pub const fn max_lat() -> f64 {
        90.0
    }

    pub const fn min_lng() -> f64 {
        -180.0
    }

    pub const fn max_lng() -> f64 {
        180.0
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self { lat, lng };
        pos.is_valid().then_some(pos)
    }

    pub fn lat(self) -> f64 {
        self.lat
    }

    pub fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        (Self::min_lat()..=Self::max_lat()).contains(&self.lat)
            && (Self::min_lng()..=Self::max_lng()).contains(&self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_out_of_range_coordinates() {
        assert!(MapPoint::try_from_lat_lng_deg(15.12, 108.8).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.5).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_none());
    }
}
