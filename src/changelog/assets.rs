use std::fmt;

use crate::github::ReleaseAsset;
use crate::platform::Os;

/// Package formats the downloads table understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    Dmg,
    Msi,
    Exe,
    Deb,
    Rpm,
    Jar,
    Unknown,
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageKind::Dmg => write!(f, "DMG"),
            PackageKind::Msi => write!(f, "MSI"),
            PackageKind::Exe => write!(f, "EXE"),
            PackageKind::Deb => write!(f, "DEB"),
            PackageKind::Rpm => write!(f, "RPM"),
            PackageKind::Jar => write!(f, "JAR"),
            PackageKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Architecture labels shown in the downloads table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageArch {
    Universal,
    Arm64,
    Amd64,
    X64,
    Unknown,
}

impl fmt::Display for PackageArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageArch::Universal => write!(f, "Universal (Apple Silicon + Intel)"),
            PackageArch::Arm64 => write!(f, "ARM64"),
            PackageArch::Amd64 => write!(f, "AMD64"),
            PackageArch::X64 => write!(f, "x64"),
            PackageArch::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Classified view of a single release asset, ready for tabular display.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetProfile {
    pub platform: Os,
    pub arch: PackageArch,
    pub kind: PackageKind,
    pub url: String,
}

/// Classify an asset's platform, architecture and package kind from its
/// file name.
///
/// Unlike resolution, every asset gets a classification; anything the
/// conventions don't cover comes back as Unknown in each field.
pub fn classify(asset: &ReleaseAsset) -> AssetProfile {
    let name = asset.name.to_lowercase();

    let (platform, arch, kind) = if name.contains(".dmg") {
        let arch = if name.contains("universal") {
            PackageArch::Universal
        } else {
            PackageArch::Unknown
        };
        (Os::MacOs, arch, PackageKind::Dmg)
    } else if name.contains(".msi") || name.contains(".exe") {
        let kind = if name.contains(".msi") {
            PackageKind::Msi
        } else {
            PackageKind::Exe
        };
        (Os::Windows, PackageArch::X64, kind)
    } else if name.contains(".deb") {
        (Os::Linux, linux_arch(&name), PackageKind::Deb)
    } else if name.contains(".rpm") {
        (Os::Linux, linux_arch(&name), PackageKind::Rpm)
    } else if name.contains(".jar") {
        (Os::Linux, linux_arch(&name), PackageKind::Jar)
    } else {
        (Os::Unknown, PackageArch::Unknown, PackageKind::Unknown)
    };

    AssetProfile {
        platform,
        arch,
        kind,
        url: asset.browser_download_url.clone(),
    }
}

fn linux_arch(name: &str) -> PackageArch {
    if name.contains("arm64") {
        PackageArch::Arm64
    } else {
        PackageArch::Amd64
    }
}
