use serde::{Deserialize, Serialize};

/// A point of interest, positioned in unscaled map-image pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub title: String,
    pub description: String,
}

/// One named static region map in the catalog.
///
/// `file_name` is the image stem under `/static/images/maps/`; native image
/// dimensions are carried because regions differ in size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionMap {
    pub display_name: String,
    pub file_name: String,
    pub image_width: f64,
    pub image_height: f64,
    pub active: bool,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl RegionMap {
    /// Generate a URL-safe slug from the display name.
    pub fn slug(&self) -> String {
        self.display_name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn find_marker(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_region() -> RegionMap {
        RegionMap {
            display_name: "Northern Highlands".to_string(),
            file_name: "northern-highlands".to_string(),
            image_width: 1600.0,
            image_height: 1200.0,
            active: true,
            markers: vec![Marker {
                id: "1".to_string(),
                x: 150.0,
                y: 100.0,
                title: "Mountain Peak".to_string(),
                description: "Highest point in the region".to_string(),
            }],
        }
    }

    #[test]
    fn test_slug_simple() {
        let r = test_region();
        assert_eq!(r.slug(), "northern-highlands");
    }

    #[test]
    fn test_slug_strips_punctuation() {
        let mut r = test_region();
        r.display_name = "Isle of Glass (East)".to_string();
        assert_eq!(r.slug(), "isle-of-glass-east");
    }

    #[test]
    fn test_slug_collapses_repeated_separators() {
        let mut r = test_region();
        r.display_name = "Amber -- Coast".to_string();
        assert_eq!(r.slug(), "amber-coast");
    }

    #[test]
    fn test_find_marker() {
        let r = test_region();
        assert_eq!(
            r.find_marker("1").map(|m| m.title.as_str()),
            Some("Mountain Peak")
        );
        assert!(r.find_marker("9").is_none());
    }

    #[test]
    fn test_region_deserializes_camel_case() {
        let json = r#"{
            "displayName": "Thornwood Vale",
            "fileName": "thornwood-vale",
            "imageWidth": 800.0,
            "imageHeight": 600.0,
            "active": true,
            "markers": [
                {"id": "1", "x": 150.0, "y": 100.0, "title": "Mountain Peak", "description": "Highest point in the region"}
            ]
        }"#;
        let r: RegionMap = serde_json::from_str(json).unwrap();
        assert_eq!(r.display_name, "Thornwood Vale");
        assert_eq!(r.image_width, 800.0);
        assert_eq!(r.markers.len(), 1);
        assert_eq!(r.markers[0].id, "1");
    }

    #[test]
    fn test_region_markers_default_to_empty() {
        let json = r#"{
            "displayName": "Bare",
            "fileName": "bare",
            "imageWidth": 640.0,
            "imageHeight": 480.0,
            "active": false
        }"#;
        let r: RegionMap = serde_json::from_str(json).unwrap();
        assert!(r.markers.is_empty());
        assert!(!r.active);
    }

    #[test]
    fn test_marker_roundtrip() {
        let m = test_region().markers[0].clone();
        let json = serde_json::to_string(&m).unwrap();
        let back: Marker = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
