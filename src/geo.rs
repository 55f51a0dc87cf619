//! Geographic locations and great-circle distances.
//!
//! Vertices of a delivery graph carry a [`GeoPoint`]; edge weights are usually
//! the Haversine distance between the two endpoints in kilometres.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Mean radius of the Earth in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point without range checks
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    /// Creates a point, rejecting non-finite or out-of-range coordinates
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self> {
        let point = GeoPoint::new(latitude, longitude);
        if point.is_valid() {
            Ok(point)
        } else {
            Err(Error::InvalidLocation {
                latitude,
                longitude,
            })
        }
    }

    /// Returns true if latitude is within [-90, 90] and longitude within [-180, 180]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to `other` in kilometres
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Converts degrees to radians
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Haversine distance in kilometres between two coordinates given in degrees
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = to_radians(lat2 - lat1);
    let d_lon = to_radians(lon2 - lon1);

    let a = (d_lat / 2.0).sin().powi(2)
        + to_radians(lat1).cos() * to_radians(lat2).cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
