use serde::{Deserialize, Serialize};

/// A single downloadable installer attached to a release.
///
/// The file name carries all platform/architecture/package signal via
/// naming conventions; there is no structured metadata field on the feed.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub size: u64,
    pub browser_download_url: String,
    #[serde(default)]
    pub content_type: String,
}

/// A published BOSS Console release.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form markdown release notes.
    #[serde(default)]
    pub body: Option<String>,
    /// Publication date (ISO 8601).
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Title to show for this release; the tag stands in when the feed
    /// carries no name.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_deserializes_feed_payload() {
        let json = r###"{
            "tag_name": "v2.1.0",
            "name": "BOSS Console 2.1",
            "body": "## What's New\n- Faster startup",
            "published_at": "2025-11-05T12:00:00Z",
            "assets": [
                {
                    "name": "BOSS-Universal.dmg",
                    "size": 104857600,
                    "browser_download_url": "https://example.com/BOSS-Universal.dmg",
                    "content_type": "application/octet-stream"
                }
            ]
        }"###;

        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v2.1.0");
        assert_eq!(release.name.as_deref(), Some("BOSS Console 2.1"));
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].name, "BOSS-Universal.dmg");
        assert_eq!(release.assets[0].size, 104857600);
    }

    #[test]
    fn test_release_tolerates_missing_optional_fields() {
        // The feed omits name/body on some tags; only tag_name is guaranteed.
        let release: Release = serde_json::from_str(r#"{"tag_name": "v0.9.0"}"#).unwrap();
        assert_eq!(release.tag_name, "v0.9.0");
        assert!(release.name.is_none());
        assert!(release.body.is_none());
        assert!(release.published_at.is_none());
        assert!(release.assets.is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_tag() {
        let mut release = Release {
            tag_name: "v1.0.0".into(),
            ..Default::default()
        };
        assert_eq!(release.display_name(), "v1.0.0");

        release.name = Some(String::new());
        assert_eq!(release.display_name(), "v1.0.0");

        release.name = Some("First stable".into());
        assert_eq!(release.display_name(), "First stable");
    }

    #[test]
    fn test_asset_content_type_defaults_to_empty() {
        let asset: ReleaseAsset = serde_json::from_str(
            r#"{"name": "a.msi", "size": 1, "browser_download_url": "https://example.com/a.msi"}"#,
        )
        .unwrap();
        assert_eq!(asset.content_type, "");
    }
}
