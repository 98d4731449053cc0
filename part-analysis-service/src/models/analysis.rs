//! Per-request data for a part analysis. Nothing here outlives one request.

use axum::body::Bytes;
use serde::Serialize;

/// Vehicle description submitted alongside the photo.
///
/// Values are taken verbatim from the form. A field that was not sent is
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleDetails {
    pub brand: String,
    pub model: String,
    pub year: String,
    /// Submitted as the `type` form field.
    pub part_type: String,
}

impl VehicleDetails {
    /// Store a form field by name. Returns `false` for unknown names.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "brand" => &mut self.brand,
            "model" => &mut self.model,
            "year" => &mut self.year,
            "type" => &mut self.part_type,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// The uploaded photo, buffered in memory.
#[derive(Debug, Clone)]
pub struct PartImage {
    pub mime_type: String,
    pub data: Bytes,
}

/// Success body of `POST /analyze`.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_maps_form_names() {
        let mut details = VehicleDetails::default();
        assert!(details.set_field("brand", "Toyota".into()));
        assert!(details.set_field("model", "Corolla".into()));
        assert!(details.set_field("year", "2015".into()));
        assert!(details.set_field("type", "brake disc".into()));

        assert_eq!(
            details,
            VehicleDetails {
                brand: "Toyota".into(),
                model: "Corolla".into(),
                year: "2015".into(),
                part_type: "brake disc".into(),
            }
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut details = VehicleDetails::default();
        assert!(!details.set_field("color", "red".into()));
        assert_eq!(details, VehicleDetails::default());
    }

    #[test]
    fn repeated_field_keeps_last_value() {
        let mut details = VehicleDetails::default();
        details.set_field("year", "2014".into());
        details.set_field("year", "2015".into());
        assert_eq!(details.year, "2015");
    }

    #[test]
    fn response_serializes_result_only() {
        let body = serde_json::to_value(AnalysisResponse {
            result: "Fren diski aşınmış.".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "result": "Fren diski aşınmış." }));
    }
}
