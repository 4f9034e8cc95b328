//! Command-Handler, gruppiert nach Fachbereich.
//!
//! Handler sind freie Funktionen über `&mut AppState`; Policy liegt im
//! `intent_mapping`, hier passiert nur die Mutation.

pub mod data;
pub mod dialog;
pub mod directions;
pub mod markers;
pub mod search;
pub mod view;
