use atlas_shared::models::RegionMap;
use std::path::Path;

#[derive(Debug)]
pub struct Assets {
    pub regions: Vec<RegionMap>,
}

impl Assets {
    pub fn load(assets_dir: &Path) -> Result<Self, String> {
        let catalog_path = assets_dir.join("regions.json");

        let data = std::fs::read_to_string(&catalog_path)
            .map_err(|e| format!("Failed to read {}: {}", catalog_path.display(), e))?;
        let regions: Vec<RegionMap> = serde_json::from_str(&data)
            .map_err(|e| format!("Failed to parse regions.json: {}", e))?;

        for region in &regions {
            for marker in &region.markers {
                let inside = (0.0..=region.image_width).contains(&marker.x)
                    && (0.0..=region.image_height).contains(&marker.y);
                if !inside {
                    tracing::warn!(
                        region = %region.display_name,
                        marker = %marker.id,
                        "Marker lies outside the region image bounds"
                    );
                }
            }
        }

        tracing::info!(
            regions = regions.len(),
            active = regions.iter().filter(|r| r.active).count(),
            "Loaded region catalog"
        );

        Ok(Assets { regions })
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&RegionMap> {
        self.regions.iter().find(|r| r.slug() == slug)
    }
}
