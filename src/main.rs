use anyhow::Result;
use bossdl::commands;
use bossdl::github::{GitHubFeed, build_client};
use clap::Parser;

/// bossdl - BOSS Console download helper
///
/// Query the BOSS Console release feed, browse the changelog, and find the
/// right installer for a platform.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for
/// authentication. This is useful for avoiding rate limits.
#[derive(Parser, Debug)]
#[command(author, version = env!("BOSSDL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(
        long = "api-url",
        value_name = "URL",
        env = "BOSSDL_API_URL",
        global = true
    )]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show the latest release and the installer suggested for this machine
    Latest(LatestArgs),

    /// Show the release history with notes and download tables
    Changelog(ChangelogArgs),

    /// Print the installer URL that best fits a platform
    Resolve(ResolveArgs),
}

#[derive(clap::Args, Debug)]
pub struct LatestArgs {}

#[derive(clap::Args, Debug)]
pub struct ChangelogArgs {}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Derive the platform from a browser user-agent string
    #[arg(long = "user-agent", value_name = "UA")]
    pub user_agent: Option<String>,

    /// Operating system override (macos, windows, linux)
    #[arg(long, value_name = "OS")]
    pub os: Option<String>,

    /// Architecture override (arm64, x64)
    #[arg(long, value_name = "ARCH")]
    pub arch: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let feed = GitHubFeed::new(build_client()?, cli.api_url);

    match cli.command {
        Commands::Latest(_) => commands::latest(&feed).await?,
        Commands::Changelog(_) => commands::changelog(&feed).await?,
        Commands::Resolve(args) => {
            let os = args.os.as_deref().map(str::parse).transpose()?;
            let arch = args.arch.as_deref().map(str::parse).transpose()?;
            commands::resolve(&feed, args.user_agent.as_deref(), os, arch).await?
        }
    }
    Ok(())
}
