use crate::github::ReleaseAsset;

use super::{Arch, Os, PlatformSignature};

/// Trait for picking the installer to offer from a release's asset list.
pub trait DownloadResolver: Send + Sync {
    /// Pick the most appropriate asset for the audience this resolver serves.
    ///
    /// Returns `None` if no suitable asset is found. A miss is an expected
    /// outcome, not an error; the caller falls back to manual selection.
    fn resolve<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset>;
}

/// Resolver that matches installers to a visitor's platform signature.
///
/// Matching is ordered and first-match-wins within each OS: the tiers encode
/// the naming conventions of the release pipeline, from most specific to a
/// catch-all. Multiple assets can match one tier; feed order decides.
pub struct SmartResolver {
    signature: PlatformSignature,
}

impl SmartResolver {
    pub fn new() -> Self {
        Self {
            signature: PlatformSignature::detect(),
        }
    }

    pub fn with_signature(signature: PlatformSignature) -> Self {
        Self { signature }
    }

    fn pick_macos<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        if self.signature.arch == Arch::Arm64 {
            if let Some(asset) = find(assets, |n| n.contains("macos") && n.contains("arm64")) {
                return Some(asset);
            }
        }

        if let Some(asset) = find(assets, |n| {
            n.contains("universal.dmg") || (n.contains("macos") && n.ends_with(".dmg"))
        }) {
            return Some(asset);
        }

        find(assets, |n| n.contains("macos") || n.contains("darwin"))
    }

    fn pick_windows<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        if let Some(asset) = find(assets, |n| n.ends_with(".msi")) {
            return Some(asset);
        }

        if let Some(asset) = find(assets, |n| n.ends_with(".exe")) {
            return Some(asset);
        }

        find(assets, |n| n.contains("windows") || n.contains("win"))
    }

    fn pick_linux<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        if let Some(asset) = find(assets, |n| n.contains("amd64.deb") || n.ends_with(".deb")) {
            return Some(asset);
        }

        if let Some(asset) = find(assets, |n| n.contains(".rpm")) {
            return Some(asset);
        }

        if let Some(asset) = find(assets, |n| n.contains(".jar")) {
            return Some(asset);
        }

        find(assets, |n| n.contains("linux"))
    }
}

impl Default for SmartResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadResolver for SmartResolver {
    fn resolve<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        match self.signature.os {
            Os::MacOs => self.pick_macos(assets),
            Os::Windows => self.pick_windows(assets),
            Os::Linux => self.pick_linux(assets),
            Os::Unknown => None,
        }
    }
}

/// First asset whose lowercased name satisfies the predicate.
fn find<'a>(
    assets: &'a [ReleaseAsset],
    matches: impl Fn(&str) -> bool,
) -> Option<&'a ReleaseAsset> {
    assets.iter().find(|a| matches(&a.name.to_lowercase()))
}
