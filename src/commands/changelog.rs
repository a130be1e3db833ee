use anyhow::Result;
use log::debug;

use crate::changelog::{classify, extract_whats_new};
use crate::github::{Release, ReleaseFeed};
use crate::state::LoadState;

use super::{format_date, require_loaded};

/// Print the full release history: notes plus a downloads table per release.
#[tracing::instrument(skip(feed))]
pub async fn changelog<F: ReleaseFeed>(feed: &F) -> Result<()> {
    debug!("Fetching release history...");
    let state: LoadState<Vec<Release>> = feed.all_releases().await.into();
    let releases = require_loaded(&state)?;

    if releases.is_empty() {
        println!("No releases published yet.");
        return Ok(());
    }

    debug!("Rendering {} release(s)", releases.len());

    for (idx, release) in releases.iter().enumerate() {
        println!("{:02}  {}", idx + 1, release.tag_name);
        println!("    Released: {}", format_date(release.published_at.as_deref()));
        println!("    # {}", release.display_name());
        println!();

        println!("    What's New:");
        for note in extract_whats_new(release.body.as_deref().unwrap_or_default()) {
            println!("      - {}", note);
        }
        println!();

        println!("    Downloads:");
        if release.assets.is_empty() {
            println!("      (none)");
        } else {
            for asset in &release.assets {
                let profile = classify(asset);
                println!(
                    "      {:<8}  {:<33}  {:<7}  {}",
                    profile.platform.to_string(),
                    profile.arch.to_string(),
                    profile.kind.to_string(),
                    profile.url
                );
            }
        }
        println!();
    }

    Ok(())
}
