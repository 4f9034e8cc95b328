//! Worker-Bridge: führt Netzwerk-Requests auf Threads aus und liefert
//! Ergebnisse als Events über einen mpsc-Kanal zurück.
//!
//! Ein laufender Request ist nicht abbrechbar; veraltete Antworten
//! werden erst im Controller per Sequenz-Token verworfen. Jeder Request
//! trägt deshalb die `seq`, unter der er ausgegeben wurde.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use super::error::NetError;
use super::geo_store::GeoStore;
use super::resolver::PlaceResolver;
use crate::core::{AddressSuggestion, DraftMarker, LatLng, Marker, ResolvedPlace, Route, SuggestField};

/// Monoton steigendes Ausgabe-Token eines Requests.
pub type Seq = u64;

/// Vom Controller ausgegebene, noch nicht dispatchte Netzwerk-Requests.
#[derive(Debug, Clone, PartialEq)]
pub enum NetRequest {
    /// Geräte-Standort ermitteln (Start-Sequenz)
    Locate { seq: Seq },
    /// Freitext-Suche auflösen
    Geocode { seq: Seq, text: String },
    /// Fahrtroute zwischen zwei Freitext-Adressen auflösen
    Directions {
        seq: Seq,
        origin: String,
        destination: String,
    },
    /// Adress-Vorschläge für ein Eingabefeld holen
    Suggest {
        seq: Seq,
        field: SuggestField,
        text: String,
    },
    /// Alle Marker aus dem Store lesen
    ListLocations { seq: Seq },
    /// Marker-Entwurf in den Store schreiben
    CreateLocation { seq: Seq, draft: DraftMarker },
}

/// Abgeschlossene Netzwerk-Operation, geliefert über den Event-Kanal.
#[derive(Debug, Clone)]
pub enum NetEvent {
    /// Standortermittlung abgeschlossen
    LocateDone {
        seq: Seq,
        result: Result<LatLng, NetError>,
    },
    /// Geocode abgeschlossen
    GeocodeDone {
        seq: Seq,
        result: Result<ResolvedPlace, NetError>,
    },
    /// Routenberechnung abgeschlossen
    DirectionsDone {
        seq: Seq,
        result: Result<Route, NetError>,
    },
    /// Adress-Vorschläge abgeschlossen
    SuggestDone {
        seq: Seq,
        field: SuggestField,
        result: Result<Vec<AddressSuggestion>, NetError>,
    },
    /// Marker-Liste gelesen
    ListDone {
        seq: Seq,
        result: Result<Vec<Marker>, NetError>,
    },
    /// Marker angelegt
    CreateDone {
        seq: Seq,
        result: Result<Marker, NetError>,
    },
}

/// Dispatcht Requests auf Worker-Threads und hält die Sender-Seite des
/// Event-Kanals. Die Empfänger-Seite drained der eframe-Update-Loop.
pub struct NetBridge {
    resolver: Arc<dyn PlaceResolver>,
    store: Arc<GeoStore>,
    tx: Sender<NetEvent>,
}

impl NetBridge {
    /// Erstellt Bridge und zugehörigen Event-Empfänger.
    pub fn new(
        resolver: Arc<dyn PlaceResolver>,
        store: Arc<GeoStore>,
    ) -> (Self, Receiver<NetEvent>) {
        let (tx, rx) = channel();
        (
            Self {
                resolver,
                store,
                tx,
            },
            rx,
        )
    }

    /// Führt den Request auf einem eigenen Thread aus.
    pub fn dispatch(&self, request: NetRequest) {
        let resolver = Arc::clone(&self.resolver);
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();

        thread::spawn(move || {
            let event = match request {
                NetRequest::Locate { seq } => NetEvent::LocateDone {
                    seq,
                    result: resolver.locate(),
                },
                NetRequest::Geocode { seq, text } => NetEvent::GeocodeDone {
                    seq,
                    result: resolver.geocode(&text),
                },
                NetRequest::Directions {
                    seq,
                    origin,
                    destination,
                } => NetEvent::DirectionsDone {
                    seq,
                    result: resolver.route(&origin, &destination),
                },
                NetRequest::Suggest { seq, field, text } => NetEvent::SuggestDone {
                    seq,
                    field,
                    result: resolver.suggest(&text),
                },
                NetRequest::ListLocations { seq } => NetEvent::ListDone {
                    seq,
                    result: store.list_locations(),
                },
                NetRequest::CreateLocation { seq, draft } => NetEvent::CreateDone {
                    seq,
                    result: store.create_location(&draft),
                },
            };

            // Empfänger weg = Anwendung beendet sich gerade
            if tx.send(event).is_err() {
                log::debug!("Event-Kanal geschlossen, Ergebnis verworfen");
            }
        });
    }
}
