//! Delivery orders placed with a venue vertex of a geographic graph.

use log::info;
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::graph::UndirectedGraph;
use crate::{Error, Result};

/// Customer details submitted with an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub item: String,
}

impl OrderForm {
    /// Checks that every field is filled in, reporting the first blank one
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("item", &self.item),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(Error::MissingField(*field)),
            None => Ok(()),
        }
    }
}

/// Outcome of a successfully placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub venue: String,
    /// Straight-line distance from the customer to the venue
    pub distance_km: f64,
    pub message: String,
}

/// Builds the message shown to the customer once an order is accepted
pub fn acknowledge(venue: &str, distance_km: f64) -> String {
    format!(
        "{venue} is approximately {distance_km:.2} KM away from you. Enjoy your meal!\n\n\
         Thanks for ordering from {venue} with the selected items."
    )
}

/// Validates `form` and confirms an order with `venue` for a customer at `customer`.
///
/// The venue must be a vertex of `graph`; its location is used to compute the
/// distance quoted in the acknowledgment.
pub fn place_order(
    graph: &UndirectedGraph<GeoPoint>,
    form: &OrderForm,
    customer: GeoPoint,
    venue: &str,
) -> Result<OrderConfirmation> {
    form.validate()?;

    let venue_location = graph
        .location(venue)
        .ok_or_else(|| Error::VertexNotFound(venue.to_string()))?;
    let distance_km = customer.distance_km(venue_location);

    info!("order for {} placed with {} ({:.2} km)", form.item, venue, distance_km);

    Ok(OrderConfirmation {
        venue: venue.to_string(),
        distance_km,
        message: acknowledge(venue, distance_km),
    })
}
