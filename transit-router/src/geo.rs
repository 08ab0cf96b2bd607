//! Great-circle distance between coordinates.

use crate::domain::Coordinates;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in metres between two points, by the haversine formula.
pub fn distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }
    let d_lat = (to.lat() - from.lat()).to_radians();
    let d_lng = (to.lng() - from.lng()).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat().to_radians().cos() * to.lat().to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn same_point_is_zero() {
        let p = coords(55.611087, 37.20829);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 2 * pi * R / 360
        let d = distance(coords(0.0, 0.0), coords(1.0, 0.0));
        assert!((d - 111_194.93).abs() < 1.0, "got {d}");
    }

    #[test]
    fn quarter_meridian() {
        let d = distance(coords(0.0, 0.0), coords(90.0, 0.0));
        let expected = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_M;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn nearby_moscow_stops() {
        // Tolstopaltsevo -> Marushkino
        let d = distance(coords(55.611087, 37.20829), coords(55.595884, 37.209755));
        assert!((d - 1692.99).abs() < 1.0, "got {d}");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_coords() -> impl Strategy<Value = Coordinates> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinates::new(lat, lng).unwrap())
    }

    proptest! {
        /// Distance does not depend on direction
        #[test]
        fn symmetric(a in any_coords(), b in any_coords()) {
            prop_assert!((distance(a, b) - distance(b, a)).abs() < 1e-6);
        }

        /// Distance is never negative nor longer than half the circumference
        #[test]
        fn bounded(a in any_coords(), b in any_coords()) {
            let d = distance(a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_M + 1e-6);
        }
    }
}
