use std::collections::HashMap;

use crate::core::SuggestField;
use crate::net::{NetRequest, Seq};

/// Fachliche Request-Klasse für das Token-Fencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Locate,
    Search,
    Directions,
    Suggest(SuggestField),
    List,
    Create,
}

/// Fence-Klasse: Requests derselben Klasse verdrängen sich gegenseitig.
///
/// Suche und Route teilen sich eine Klasse, weil sich ihre Overlays
/// ausschließen; ein neuer Request der einen Art macht das ausstehende
/// Ergebnis der anderen bedeutungslos. Vorschläge werden pro
/// Eingabefeld getrennt gefenct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FenceClass {
    Locate,
    Resolve,
    Suggest(SuggestField),
    List,
    Create,
}

impl RequestKind {
    fn fence_class(self) -> FenceClass {
        match self {
            RequestKind::Locate => FenceClass::Locate,
            RequestKind::Search | RequestKind::Directions => FenceClass::Resolve,
            RequestKind::Suggest(field) => FenceClass::Suggest(field),
            RequestKind::List => FenceClass::List,
            RequestKind::Create => FenceClass::Create,
        }
    }
}

/// Laufende Netzwerk-Sitzung: Sequenznummern und ausstehende Requests.
///
/// Handler legen Requests hier ab, die Hauptschleife reicht sie an die
/// Netzwerk-Bridge weiter. Ergebnisse tragen ihre Sequenznummer zurück;
/// `admit` wendet pro Fence-Klasse nur das Ergebnis des jeweils
/// zuletzt ausgegebenen Requests an.
#[derive(Debug, Default)]
pub struct SessionState {
    next_seq: Seq,
    issued: HashMap<FenceClass, Seq>,
    applied: HashMap<FenceClass, Seq>,
    pending: Vec<NetRequest>,
    /// Suchtext des zuletzt ausgegebenen Geocode-Requests
    pub pending_query: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergibt die nächste Sequenznummer (global monoton, startet bei 1)
    /// und merkt sie als jüngsten Request der Fence-Klasse vor.
    pub fn issue(&mut self, kind: RequestKind) -> Seq {
        self.next_seq += 1;
        self.issued.insert(kind.fence_class(), self.next_seq);
        self.next_seq
    }

    /// Prüft, ob ein Ergebnis noch aktuell ist, und merkt es als
    /// angewendet vor. `false` bei Duplikaten und wenn in derselben
    /// Fence-Klasse inzwischen ein jüngerer Request ausgegeben wurde.
    pub fn admit(&mut self, kind: RequestKind, seq: Seq) -> bool {
        let class = kind.fence_class();
        if self.issued.get(&class) != Some(&seq) {
            return false;
        }
        let applied = self.applied.entry(class).or_insert(0);
        if seq > *applied {
            *applied = seq;
            true
        } else {
            false
        }
    }

    /// Stellt einen Request zur Auslieferung ein.
    pub fn push(&mut self, request: NetRequest) {
        self.pending.push(request);
    }

    /// Entnimmt alle ausstehenden Requests in Einstellreihenfolge.
    pub fn take_requests(&mut self) -> Vec<NetRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Anzahl noch nicht ausgelieferter Requests.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_is_monotonic() {
        let mut session = SessionState::new();
        let a = session.issue(RequestKind::Search);
        let b = session.issue(RequestKind::List);
        let c = session.issue(RequestKind::Search);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_admit_rejects_stale_and_duplicate_seq() {
        let mut session = SessionState::new();
        let first = session.issue(RequestKind::Search);
        let second = session.issue(RequestKind::Search);

        assert!(session.admit(RequestKind::Search, second));
        assert!(!session.admit(RequestKind::Search, first), "veraltet");
        assert!(!session.admit(RequestKind::Search, second), "Duplikat");
    }

    #[test]
    fn test_search_and_directions_share_a_fence() {
        let mut session = SessionState::new();
        let search = session.issue(RequestKind::Search);
        let directions = session.issue(RequestKind::Directions);

        assert!(session.admit(RequestKind::Directions, directions));
        assert!(
            !session.admit(RequestKind::Search, search),
            "vom jüngeren Routen-Request überholt"
        );
    }

    #[test]
    fn test_newer_request_fences_out_pending_result() {
        let mut session = SessionState::new();
        let old = session.issue(RequestKind::Search);
        session.issue(RequestKind::Directions);

        // Das alte Ergebnis trifft vor dem neuen ein und wird trotzdem
        // verworfen
        assert!(!session.admit(RequestKind::Search, old));
    }

    #[test]
    fn test_suggest_fields_fence_independently() {
        let mut session = SessionState::new();
        let origin = session.issue(RequestKind::Suggest(crate::core::SuggestField::Origin));
        let destination =
            session.issue(RequestKind::Suggest(crate::core::SuggestField::Destination));

        assert!(session.admit(
            RequestKind::Suggest(crate::core::SuggestField::Origin),
            origin
        ));
        assert!(session.admit(
            RequestKind::Suggest(crate::core::SuggestField::Destination),
            destination
        ));
    }

    #[test]
    fn test_take_requests_drains_in_order() {
        let mut session = SessionState::new();
        session.push(NetRequest::Locate { seq: 1 });
        session.push(NetRequest::ListLocations { seq: 2 });
        let drained = session.take_requests();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], NetRequest::Locate { seq: 1 }));
        assert_eq!(session.pending_len(), 0);
    }
}
