//! Peruvian Waze Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod net;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    category_color, AddressSuggestion, DraftMarker, LatLng, MapCamera, Marker, MarkerCategory,
    RegionBounds, ResolvedPlace, Route, SearchResult, SelectedPlace, SuggestField,
    COQUIMBO_BOUNDS, DEFAULT_CENTER, DEFAULT_ZOOM, SEARCH_ZOOM,
};
pub use net::{GeoStore, GoogleResolver, NetBridge, NetError, NetEvent, NetRequest, PlaceResolver};
pub use shared::{AppConfig, AppOptions, ConfigError};
