//! Core-Domänentypen: Koordinaten, Marker, Kamera, Orte und Routen.

pub mod camera;
pub mod geo;
pub mod marker;
pub mod place;

pub use camera::{MapCamera, DEFAULT_CENTER, DEFAULT_ZOOM, SEARCH_ZOOM, ZOOM_MAX, ZOOM_MIN};
pub use geo::{LatLng, RegionBounds, COQUIMBO_BOUNDS, REGION_COUNTRY, REGION_QUALIFIER};
pub use marker::{
    category_color, DraftMarker, Marker, MarkerCategory, COLOR_COMIDA, COLOR_DEFAULT, COLOR_PACOS,
    COLOR_PELIGRO,
};
pub use place::{AddressSuggestion, ResolvedPlace, Route, SearchResult, SelectedPlace, SuggestField};
