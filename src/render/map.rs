use serde::Serialize;

use crate::models::Event;
use crate::view::Element;

pub const MAP_ID: &str = "map";
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 40.3428452,
    lng: -74.6568153,
};
pub const DEFAULT_ZOOM: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Coordinates are passed through as received; no validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPosition {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub title: Option<String>,
    pub position: MarkerPosition,
}

impl From<&Event> for Marker {
    fn from(event: &Event) -> Self {
        Self {
            title: event.event_title.clone(),
            position: MarkerPosition {
                lat: event.event_latitude,
                lng: event.event_longitude,
            },
        }
    }
}

/// The third-party map the markers are drawn on.
pub trait MapWidget {
    fn create(container_id: &str, options: MapOptions) -> Self
    where
        Self: Sized;

    fn add_marker(&mut self, marker: Marker);
}

/// Adds one marker per event, in order.
pub fn add_event_markers<W: MapWidget>(widget: &mut W, events: &[Event]) {
    for event in events {
        widget.add_marker(Marker::from(event));
    }
}

/// A [`MapWidget`] that records its configuration so the page script can hand
/// it to the real map library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    pub container: String,
    pub options: MapOptions,
    pub markers: Vec<Marker>,
}

impl MapWidget for MarkerLayer {
    fn create(container_id: &str, options: MapOptions) -> Self {
        Self {
            container: container_id.to_string(),
            options,
            markers: Vec::new(),
        }
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}

impl MarkerLayer {
    /// The map container, with the layer attached as JSON in `data-map`.
    pub fn to_element(&self) -> Element {
        let json = serde_json::to_string(self).unwrap_or_default();
        Element::new("div")
            .id(self.container.clone())
            .attr("data-map", json)
    }
}
