use serde::{Deserialize, Serialize};

/// Per-page animation content: how many elements each animator group has
/// and the values they animate to. The page supplies this as JSON at load
/// (it knows its own markup); a builtin matching the shipped page backs
/// tests and the default build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageManifest {
    /// Number of page sections; nav links map to these one-to-one.
    pub sections: usize,
    /// Count-up targets, one per stat element in document order.
    #[serde(default)]
    pub stat_targets: Vec<u32>,
    /// Skill bar fill percentages, one per bar.
    #[serde(default)]
    pub skill_levels: Vec<f32>,
    /// Number of timeline entries.
    #[serde(default)]
    pub timeline_items: usize,
    /// Number of fade-in targets (cards, paragraphs).
    #[serde(default)]
    pub fade_targets: usize,
    /// Number of images with deferred sources.
    #[serde(default)]
    pub deferred_images: usize,
}

impl Default for PageManifest {
    fn default() -> Self {
        Self {
            sections: 6,
            stat_targets: vec![50, 20, 10],
            skill_levels: vec![95.0, 90.0, 85.0, 88.0, 80.0, 75.0],
            timeline_items: 4,
            fade_targets: 8,
            deferred_images: 4,
        }
    }
}

impl PageManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest() {
        let json = r#"{
            "sections": 4,
            "stat_targets": [10, 20],
            "skill_levels": [50.0],
            "timeline_items": 2,
            "fade_targets": 3,
            "deferred_images": 1
        }"#;
        let manifest = PageManifest::from_json(json).unwrap();
        assert_eq!(manifest.sections, 4);
        assert_eq!(manifest.stat_targets, vec![10, 20]);
    }

    #[test]
    fn optional_groups_default_empty() {
        let manifest = PageManifest::from_json(r#"{ "sections": 3 }"#).unwrap();
        assert_eq!(manifest.sections, 3);
        assert!(manifest.stat_targets.is_empty());
        assert_eq!(manifest.timeline_items, 0);
    }
}
