//! Decoding of station feeds and route documents.
//!
//! Station feeds are decoded leniently: a record that doesn't match the
//! expected shape is skipped rather than failing the whole feed. Routes come
//! from a routing provider and are decoded strictly.

use crate::error::InputError;
use crate::models::{Coordinate, Station};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Parse a JSON array of station records.
///
/// Expected record shape:
/// `{ "id", "location", "coordinates": [lat, lon], "value": number|null, "lastUpdated"? }`
pub fn parse_stations(json: &str) -> Result<Vec<Station>, InputError> {
    let document: Value = serde_json::from_str(json)?;
    stations_from_value(&document)
}

/// Decode stations from an already-parsed JSON document.
pub fn stations_from_value(document: &Value) -> Result<Vec<Station>, InputError> {
    let records = document
        .as_array()
        .ok_or(InputError::NotAnArray("station records"))?;

    let stations: Vec<Station> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let station = station_from_record(record);
            if station.is_none() {
                tracing::debug!(index, "Skipping malformed station record");
            }
            station
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        accepted = stations.len(),
        "Decoded station feed"
    );
    Ok(stations)
}

/// Parse a JSON array of `[lat, lon]` route vertices.
pub fn parse_route(json: &str) -> Result<Vec<Coordinate>, InputError> {
    let document: Value = serde_json::from_str(json)?;
    let vertices = document
        .as_array()
        .ok_or(InputError::NotAnArray("[latitude, longitude] pairs"))?;

    vertices
        .iter()
        .enumerate()
        .map(|(index, vertex)| {
            coordinate_from_value(vertex).ok_or(InputError::InvalidVertex { index })
        })
        .collect()
}

fn station_from_record(record: &Value) -> Option<Station> {
    let object = record.as_object()?;

    let coordinates = coordinate_from_value(object.get("coordinates")?)?;
    let value = match object.get("value") {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) => Some(number.as_f64()?),
        Some(_) => return None,
    };
    let id = match object.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return None,
    };
    let location = object
        .get("location")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let last_updated = object
        .get("lastUpdated")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|timestamp| timestamp.with_timezone(&Utc));

    Some(Station {
        id,
        location,
        coordinates,
        value,
        last_updated,
    })
}

fn coordinate_from_value(value: &Value) -> Option<Coordinate> {
    match value.as_array()?.as_slice() {
        [lat, lon] => {
            let coord = Coordinate::new(lat.as_f64()?, lon.as_f64()?);
            coord.is_finite().then_some(coord)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_feed() {
        let json = r#"[
            {"id": "kl-01", "location": "Batu Muda", "coordinates": [3.2125, 101.6822], "value": 57, "lastUpdated": "2024-05-01T08:00:00Z"},
            {"id": 42, "location": "Cheras", "coordinates": [3.1060, 101.7180], "value": 88.5}
        ]"#;
        let stations = parse_stations(json).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id, "kl-01");
        assert_eq!(stations[0].coordinates, Coordinate::new(3.2125, 101.6822));
        assert_eq!(stations[0].value, Some(57.0));
        assert!(stations[0].last_updated.is_some());
        assert_eq!(stations[1].id, "42");
        assert_eq!(stations[1].value, Some(88.5));
        assert!(stations[1].last_updated.is_none());
    }

    #[test]
    fn null_value_is_kept_as_absent() {
        let json = r#"[{"id": "a", "location": "A", "coordinates": [1.0, 2.0], "value": null}]"#;
        let stations = parse_stations(json).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].value, None);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let json = r#"[
            {"id": "no-coords", "location": "x", "value": 10},
            {"id": "short", "location": "x", "coordinates": [1.0], "value": 10},
            {"id": "text-coord", "location": "x", "coordinates": ["1", 2.0], "value": 10},
            {"id": "text-value", "location": "x", "coordinates": [1.0, 2.0], "value": "high"},
            {"location": "no id", "coordinates": [1.0, 2.0], "value": 10},
            "not an object",
            {"id": "ok", "location": "x", "coordinates": [1.0, 2.0], "value": 10, "lastUpdated": "yesterday"}
        ]"#;
        let stations = parse_stations(json).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, "ok");
        assert!(stations[0].last_updated.is_none());
    }

    #[test]
    fn rejects_non_array_documents() {
        assert!(matches!(
            parse_stations(r#"{"id": "a"}"#),
            Err(InputError::NotAnArray(_))
        ));
        assert!(matches!(parse_stations("not json"), Err(InputError::Json(_))));
    }

    #[test]
    fn parses_route_strictly() {
        let route = parse_route("[[3.14, 101.69], [3.15, 101.70]]").unwrap();
        assert_eq!(
            route,
            vec![Coordinate::new(3.14, 101.69), Coordinate::new(3.15, 101.70)]
        );

        assert!(matches!(
            parse_route("[[3.14, 101.69], [3.15]]"),
            Err(InputError::InvalidVertex { index: 1 })
        ));
        assert!(parse_route("[]").unwrap().is_empty());
    }
}
