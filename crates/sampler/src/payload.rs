use lux_core::FetchError;
use serde::Deserialize;

/// Body served by the sensor: `{"lux": <number>}`.  Other fields are ignored.
#[derive(Debug, Deserialize)]
struct LightPayload {
    lux: f64,
}

/// Extract the lux value from a response body.
pub fn decode_payload(body: &str) -> Result<f64, FetchError> {
    serde_json::from_str::<LightPayload>(body)
        .map(|p| p.lux)
        .map_err(|e| FetchError::Decode(e.to_string()))
}
