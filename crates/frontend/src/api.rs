use atlas_shared::models::RegionMap;

/// Build a shareable deep link for a region.
pub fn build_region_url(origin: &str, slug: &str) -> String {
    format!("{}/region/{}", origin, slug)
}

/// Keep only the regions the selector should offer.
pub fn active_regions(regions: Vec<RegionMap>) -> Vec<RegionMap> {
    regions.into_iter().filter(|r| r.active).collect()
}

fn catalog_url() -> String {
    // In production, same origin. In dev, might be different.
    let window = web_sys::window().unwrap();
    let origin = window.location().origin().unwrap();
    format!("{}/static/regions.json", origin)
}

/// Fetch the region catalog served as a static asset.
pub async fn fetch_regions() -> Result<Vec<RegionMap>, String> {
    let resp = reqwest::Client::new()
        .get(catalog_url())
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let regions: Vec<RegionMap> = resp.json().await.map_err(|e| e.to_string())?;
    Ok(active_regions(regions))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"[
        {
            "displayName": "Northern Highlands",
            "fileName": "northern-highlands",
            "imageWidth": 1600.0,
            "imageHeight": 1200.0,
            "active": true,
            "markers": [
                {"id": "1", "x": 150.0, "y": 100.0, "title": "Mountain Peak", "description": "Highest point in the region"},
                {"id": "2", "x": 300.0, "y": 220.0, "title": "Lake", "description": "Freshwater lake"}
            ]
        },
        {
            "displayName": "Isle of Glass",
            "fileName": "isle-of-glass",
            "imageWidth": 1024.0,
            "imageHeight": 1024.0,
            "active": false
        }
    ]"#;

    #[test]
    fn test_catalog_deserializes() {
        let regions: Vec<RegionMap> = serde_json::from_str(CATALOG_JSON).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].display_name, "Northern Highlands");
        assert_eq!(regions[0].markers.len(), 2);
        assert_eq!(regions[0].markers[1].title, "Lake");
        assert!(regions[1].markers.is_empty());
    }

    #[test]
    fn test_active_regions_filters_inactive() {
        let regions: Vec<RegionMap> = serde_json::from_str(CATALOG_JSON).unwrap();
        let active = active_regions(regions);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].file_name, "northern-highlands");
    }

    #[test]
    fn test_build_region_url() {
        assert_eq!(
            build_region_url("http://localhost:3000", "northern-highlands"),
            "http://localhost:3000/region/northern-highlands"
        );
    }

    #[test]
    fn test_build_region_url_production() {
        assert_eq!(
            build_region_url("https://atlas.example.com", "amber-coast"),
            "https://atlas.example.com/region/amber-coast"
        );
    }
}
