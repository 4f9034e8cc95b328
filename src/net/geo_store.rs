//! GraphQL-Client für den Remote-Marker-Store.
//!
//! Zwei Operationen, jeweils ein einzelner POST auf denselben Endpoint:
//! `locations` (alle Marker, ohne Pagination und Ordnungsgarantie) und
//! `createLocation` (Store vergibt `id` und `createdAt`). Ein HTTP-200
//! bedeutet nicht Erfolg: das top-level `errors`-Array wird immer geprüft.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use super::error::NetError;
use crate::core::{DraftMarker, LatLng, Marker};

const LOCATIONS_QUERY: &str = "\
query {
  locations {
    id
    latitude
    longitude
    comment
    createdAt
    title
    category
  }
}";

const CREATE_LOCATION_MUTATION: &str = "\
mutation CreateLocation($latitude: Float!, $longitude: Float!, $comment: String, $category: String, $title: String) {
  createLocation(latitude: $latitude, longitude: $longitude, comment: $comment, category: $category, title: $title) {
    id
    latitude
    longitude
    comment
    createdAt
    title
    category
  }
}";

/// Client für den GraphQL-Store. Kein Retry, kein Cache, keine
/// Deduplizierung paralleler Requests.
pub struct GeoStore {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl GeoStore {
    /// Erstellt den Client für den konfigurierten Endpoint.
    pub fn new(client: reqwest::blocking::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    /// Liest alle Marker aus dem Store.
    pub fn list_locations(&self) -> Result<Vec<Marker>, NetError> {
        let body = self.post(json!({ "query": LOCATIONS_QUERY }))?;
        parse_locations(&body)
    }

    /// Legt einen Marker an; der Store vergibt Identität und Zeitstempel.
    /// Clientseitig wird nur auf nicht-leeren Titel/Kommentar geprüft.
    pub fn create_location(&self, draft: &DraftMarker) -> Result<Marker, NetError> {
        if !draft.is_complete() {
            return Err(NetError::Validation(
                "Titel und Kommentar dürfen nicht leer sein".to_string(),
            ));
        }

        let body = self.post(json!({
            "query": CREATE_LOCATION_MUTATION,
            "variables": {
                "latitude": draft.position.lat,
                "longitude": draft.position.lng,
                "comment": draft.comment.trim(),
                "category": draft.category.as_str(),
                "title": draft.title.trim(),
            },
        }))?;
        parse_created(&body)
    }

    fn post(&self, payload: serde_json::Value) -> Result<String, NetError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()?;
        Ok(response.text()?)
    }
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationRow {
    id: serde_json::Value,
    latitude: f64,
    longitude: f64,
    comment: Option<String>,
    created_at: Option<String>,
    title: Option<String>,
    category: Option<String>,
}

#[derive(Deserialize)]
struct LocationsData {
    locations: Vec<LocationRow>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateData {
    create_location: LocationRow,
}

impl LocationRow {
    fn into_marker(self) -> Marker {
        // IDs kommen je nach Store als String oder Zahl; beides opak behandeln
        let id = match self.id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Marker {
            id,
            position: LatLng::new(self.latitude, self.longitude),
            title: self.title.filter(|t| !t.is_empty()),
            comment: self.comment.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            created_at: self.created_at,
        }
    }
}

/// Parst einen GraphQL-Response-Body; ein belegtes `errors`-Array gilt
/// auch bei HTTP-200 als Fehlschlag.
fn parse_graphql<T: DeserializeOwned>(body: &str) -> Result<T, NetError> {
    let response: GraphqlResponse<T> = serde_json::from_str(body)?;
    if let Some(errors) = response.errors {
        if !errors.is_empty() {
            return Err(NetError::Backend(errors[0].message.clone()));
        }
    }
    response
        .data
        .ok_or_else(|| NetError::Backend("Antwort ohne data-Feld".to_string()))
}

pub(crate) fn parse_locations(body: &str) -> Result<Vec<Marker>, NetError> {
    let data: LocationsData = parse_graphql(body)?;
    Ok(data
        .locations
        .into_iter()
        .map(LocationRow::into_marker)
        .collect())
}

pub(crate) fn parse_created(body: &str) -> Result<Marker, NetError> {
    let data: CreateData = parse_graphql(body)?;
    Ok(data.create_location.into_marker())
}
