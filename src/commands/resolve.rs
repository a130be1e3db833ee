use anyhow::Result;
use log::debug;

use crate::github::{Release, ReleaseFeed};
use crate::platform::{Arch, DownloadResolver, Os, PlatformSignature, SmartResolver};
use crate::state::LoadState;

use super::require_loaded;

/// Print the installer URL that best fits a platform signature.
///
/// The signature comes from a user-agent string when one is given, otherwise
/// from host detection; explicit OS/arch overrides win over either. A
/// resolution miss is reported on stderr and is not an error; only a fetch
/// failure is.
#[tracing::instrument(skip(feed, user_agent))]
pub async fn resolve<F: ReleaseFeed>(
    feed: &F,
    user_agent: Option<&str>,
    os: Option<Os>,
    arch: Option<Arch>,
) -> Result<()> {
    let mut signature = match user_agent {
        Some(ua) => PlatformSignature::from_user_agent(ua),
        None => PlatformSignature::detect(),
    };
    if let Some(os) = os {
        signature.os = os;
    }
    if let Some(arch) = arch {
        signature.arch = arch;
    }

    debug!("Resolving installer for {}", signature);

    let state: LoadState<Release> = feed.latest_release().await.into();
    let release = require_loaded(&state)?;

    let resolver = SmartResolver::with_signature(signature);
    match resolver.resolve(&release.assets) {
        Some(asset) => {
            debug!("Resolved {} to {}", signature, asset.name);
            println!("{}", asset.browser_download_url);
        }
        None => {
            eprintln!("Unable to determine a download for {}.", signature);
            if release.assets.is_empty() {
                eprintln!("No downloads are attached to {}.", release.tag_name);
            } else {
                eprintln!("Available installers:");
                for asset in &release.assets {
                    eprintln!("  {}", asset.name);
                }
            }
        }
    }

    Ok(())
}
