//! Decoder für das Encoded-Polyline-Format der Directions-API.
//!
//! Koordinaten sind als Delta-kodierte, vorzeichenbehaftete Varints in
//! Base64-ähnlichen ASCII-Chunks (Offset 63) abgelegt, Präzision 1e-5.

use crate::core::LatLng;

/// Fehler beim Dekodieren einer Polyline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("ungültige Polyline an Byte {offset}")]
pub struct PolylineError {
    /// Byte-Offset des fehlerhaften Zeichens
    pub offset: usize,
}

/// Dekodiert eine Encoded-Polyline in eine Punktfolge.
pub fn decode(encoded: &str) -> Result<Vec<LatLng>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0usize;
    let mut lat = 0i64;
    let mut lng = 0i64;

    while index < bytes.len() {
        let (dlat, next) = decode_value(bytes, index)?;
        let (dlng, next) = decode_value(bytes, next)?;
        index = next;

        lat += dlat;
        lng += dlng;
        points.push(LatLng::new(lat as f64 * 1e-5, lng as f64 * 1e-5));
    }

    Ok(points)
}

/// Liest einen vorzeichenbehafteten Varint-Wert ab `start`.
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut result: i64 = 0;
    let mut shift = 0u32;
    let mut index = start;

    loop {
        let Some(&b) = bytes.get(index) else {
            return Err(PolylineError { offset: index });
        };
        if b < 63 || shift > 60 {
            return Err(PolylineError { offset: index });
        }
        let chunk = i64::from(b - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        index += 1;
        if chunk & 0x20 == 0 {
            break;
        }
    }

    let value = if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    };
    Ok((value, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decode_reference_vector() {
        // Referenzbeispiel aus der Format-Dokumentation
        let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").expect("Dekodieren sollte klappen");
        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[0].lat, 38.5, epsilon = 1e-9);
        assert_relative_eq!(points[0].lng, -120.2, epsilon = 1e-9);
        assert_relative_eq!(points[1].lat, 40.7, epsilon = 1e-9);
        assert_relative_eq!(points[1].lng, -120.95, epsilon = 1e-9);
        assert_relative_eq!(points[2].lat, 43.252, epsilon = 1e-9);
        assert_relative_eq!(points[2].lng, -126.453, epsilon = 1e-9);
    }

    #[test]
    fn test_decode_empty_is_empty_path() {
        assert_eq!(decode("").expect("leer ist gültig"), Vec::new());
    }

    #[test]
    fn test_decode_truncated_input_fails() {
        // Fortsetzungsbit gesetzt, aber keine Folge-Bytes
        assert!(decode("_").is_err());
    }
}
