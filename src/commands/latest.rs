use anyhow::Result;
use log::debug;

use crate::github::{Release, ReleaseFeed};
use crate::platform::{DownloadResolver, PlatformSignature, SmartResolver};
use crate::state::LoadState;

use super::{format_date, human_size, require_loaded};

/// Show the latest release and the installer suggested for this machine.
#[tracing::instrument(skip(feed))]
pub async fn latest<F: ReleaseFeed>(feed: &F) -> Result<()> {
    debug!("Fetching latest release...");
    let state: LoadState<Release> = feed.latest_release().await.into();
    let release = require_loaded(&state)?;

    let signature = PlatformSignature::detect();
    debug!("Detected platform {}", signature);

    println!("{}", release.tag_name);
    println!("# {}", release.display_name());
    println!("Released: {}", format_date(release.published_at.as_deref()));
    println!();

    if release.assets.is_empty() {
        println!("No downloads are attached to this release yet.");
        return Ok(());
    }

    let resolver = SmartResolver::with_signature(signature);
    match resolver.resolve(&release.assets) {
        Some(asset) => {
            println!("Suggested download for {}:", signature);
            println!("  {}", asset.browser_download_url);
        }
        None => {
            println!(
                "No installer matches {}. Pick one from the list below:",
                signature
            );
        }
    }

    println!();
    println!("All downloads:");
    for asset in &release.assets {
        println!("  {}  ({})", asset.name, human_size(asset.size));
    }

    Ok(())
}
