//! Netzwerkschicht: GraphQL-Store, Geocoding/Directions-Provider,
//! Worker-Threads und Tile-Beschaffung.
//!
//! Alle Aufrufe sind einzelne Roundtrips ohne Retry und ohne Cache
//! (Ausnahme: Basemap-Tiles). Ergebnisse laufen über einen mpsc-Kanal
//! zurück in den Event-Loop.

pub mod error;
pub mod geo_store;
pub mod polyline;
pub mod resolver;
pub mod tiles;
pub mod worker;

pub use error::NetError;
pub use geo_store::GeoStore;
pub use resolver::{GoogleResolver, PlaceResolver};
pub use tiles::{DecodedTile, TileCache, TileId};
pub use worker::{NetBridge, NetEvent, NetRequest, Seq};
