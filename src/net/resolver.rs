//! Place Resolution Adapter: Geocoding, Directions, Adress-Vorschläge
//! und Geräte-Standort hinter einem Trait.
//!
//! Der Controller kennt nur [`PlaceResolver`]; die konkrete Anbindung an
//! die Maps-Web-Services lebt ausschließlich hier. Der Regions-Bias ist
//! bewusst dieselbe brüchige String-Heuristik wie im Produkt: Qualifier
//! ans Ende des Freitexts hängen.

use serde::Deserialize;
use std::time::Duration;

use super::error::NetError;
use super::polyline;
use crate::core::{
    AddressSuggestion, LatLng, ResolvedPlace, Route, COQUIMBO_BOUNDS, REGION_COUNTRY,
    REGION_QUALIFIER,
};

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
const GEOLOCATE_URL: &str = "https://www.googleapis.com/geolocation/v1/geolocate";

/// Bounded Wait für den Geräte-Standort beim Start.
const LOCATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Auflösungs-Operationen des externen Karten-Providers.
pub trait PlaceResolver: Send + Sync {
    /// Löst Freitext zur besten Koordinate auf (nur der erste Kandidat).
    fn geocode(&self, address: &str) -> Result<ResolvedPlace, NetError>;

    /// Löst zwei Freitext-Endpunkte zu einer Fahrtroute auf.
    fn route(&self, origin: &str, destination: &str) -> Result<Route, NetError>;

    /// Liefert Adress-Vorschläge zur Eingabe, begrenzt auf Land und Region.
    fn suggest(&self, input: &str) -> Result<Vec<AddressSuggestion>, NetError>;

    /// Best-Effort-Geräteposition mit gebundener Wartezeit.
    fn locate(&self) -> Result<LatLng, NetError>;
}

/// Anbindung an die Maps-Web-Services (Geocoding, Directions, Geolocation).
pub struct GoogleResolver {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl GoogleResolver {
    /// Erstellt den Resolver mit dem konfigurierten API-Key.
    pub fn new(client: reqwest::blocking::Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

/// Hängt den festen Regions-Qualifier an den Freitext an.
pub(crate) fn with_region_bias(text: &str) -> String {
    format!("{}{}", text.trim(), REGION_QUALIFIER)
}

/// `bounds`-Parameter des Geocoding-Endpoints: `süd,west|nord,ost`.
fn region_bounds_param() -> String {
    format!(
        "{},{}|{},{}",
        COQUIMBO_BOUNDS.south, COQUIMBO_BOUNDS.west, COQUIMBO_BOUNDS.north, COQUIMBO_BOUNDS.east
    )
}

impl PlaceResolver for GoogleResolver {
    fn geocode(&self, address: &str) -> Result<ResolvedPlace, NetError> {
        let body = self
            .client
            .get(GEOCODE_URL)
            .query(&[
                ("address", with_region_bias(address).as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()?
            .text()?;

        let candidates = parse_geocode(&body)?;
        let first = candidates.into_iter().next().ok_or(NetError::NotFound)?;
        Ok(ResolvedPlace {
            position: first.position,
            formatted_address: first.description,
        })
    }

    fn route(&self, origin: &str, destination: &str) -> Result<Route, NetError> {
        let body = self
            .client
            .get(DIRECTIONS_URL)
            .query(&[
                ("origin", with_region_bias(origin).as_str()),
                ("destination", with_region_bias(destination).as_str()),
                ("mode", "driving"),
                ("key", self.api_key.as_str()),
            ])
            .send()?
            .text()?;

        parse_route(&body)
    }

    fn suggest(&self, input: &str) -> Result<Vec<AddressSuggestion>, NetError> {
        let components = format!("country:{}", REGION_COUNTRY.to_uppercase());
        let bounds = region_bounds_param();
        let body = self
            .client
            .get(GEOCODE_URL)
            .query(&[
                ("address", input.trim()),
                ("components", components.as_str()),
                ("bounds", bounds.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()?
            .text()?;

        parse_geocode(&body)
    }

    fn locate(&self) -> Result<LatLng, NetError> {
        let body = self
            .client
            .post(GEOLOCATE_URL)
            .query(&[("key", self.api_key.as_str())])
            .timeout(LOCATE_TIMEOUT)
            .json(&serde_json::json!({ "considerIp": true }))
            .send()?
            .text()?;

        parse_locate(&body)
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    location: RawLocation,
}

#[derive(Deserialize)]
struct RawLocation {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Deserialize)]
struct RawRoute {
    overview_polyline: RawPolyline,
}

#[derive(Deserialize)]
struct RawPolyline {
    points: String,
}

#[derive(Deserialize)]
struct GeolocateResponse {
    location: RawLocation,
}

/// Mappt einen Provider-Status auf die Fehlertaxonomie.
/// `REQUEST_DENIED` wird bewusst von `NotFound` unterschieden: die
/// Behebung ist eine andere (Account-Freischaltung vs. andere Eingabe).
fn check_status(status: &str, error_message: Option<&str>) -> Result<(), NetError> {
    match status {
        "OK" => Ok(()),
        "ZERO_RESULTS" | "NOT_FOUND" => Err(NetError::NotFound),
        "REQUEST_DENIED" => Err(NetError::ProviderDenied(
            error_message.unwrap_or("REQUEST_DENIED").to_string(),
        )),
        other => Err(NetError::Network(format!(
            "Provider-Status {other}: {}",
            error_message.unwrap_or("")
        ))),
    }
}

pub(crate) fn parse_geocode(body: &str) -> Result<Vec<AddressSuggestion>, NetError> {
    let response: GeocodeResponse = serde_json::from_str(body)?;
    check_status(&response.status, response.error_message.as_deref())?;
    Ok(response
        .results
        .into_iter()
        .map(|r| AddressSuggestion {
            description: r.formatted_address,
            position: LatLng::new(r.geometry.location.lat, r.geometry.location.lng),
        })
        .collect())
}

pub(crate) fn parse_route(body: &str) -> Result<Route, NetError> {
    let response: DirectionsResponse = serde_json::from_str(body)?;
    check_status(&response.status, response.error_message.as_deref())?;
    let raw = response.routes.into_iter().next().ok_or(NetError::NotFound)?;
    let path = polyline::decode(&raw.overview_polyline.points)
        .map_err(|e| NetError::Network(format!("kaputte Routen-Polyline: {e}")))?;
    Ok(Route { path })
}

pub(crate) fn parse_locate(body: &str) -> Result<LatLng, NetError> {
    let response: GeolocateResponse = serde_json::from_str(body)?;
    let p = LatLng::new(response.location.lat, response.location.lng);
    if !p.is_valid() {
        return Err(NetError::Network("Geolocation außerhalb des Wertebereichs".to_string()));
    }
    Ok(p)
}
