use clap::Parser;
use color_eyre::eyre::Result;
use std::{env, time::Duration};

use webui_release_tools::{
    logging::initialize_logger,
    release_asset::{DEFAULT_TIMEOUT_SECS, request::AssetUpload, upload_asset},
};

/// Upload a single file to a GitHub release.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "")]
    /// GitHub token. Falls back to GITHUB_TOKEN env var.
    github_token: String,

    #[arg(long, default_value = "")]
    /// Release upload url, template suffix allowed. Falls back to UPLOAD_URL
    /// env var.
    upload_url: String,

    #[arg(long, default_value = "")]
    /// File to upload. Falls back to ASSET_PATH env var.
    asset_path: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    /// Upload timeout in seconds.
    timeout_secs: u64,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    debug: bool,
}

fn flag_or_env(value: String, var: &str) -> String {
    if value.is_empty() {
        return env::var(var).unwrap_or_default();
    }
    value
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug, module_path!())?;

    let asset = AssetUpload::new(
        flag_or_env(args.github_token, "GITHUB_TOKEN"),
        flag_or_env(args.upload_url, "UPLOAD_URL"),
        flag_or_env(args.asset_path, "ASSET_PATH"),
    );

    let response =
        upload_asset(&asset, Duration::from_secs(args.timeout_secs)).await?;

    println!("Download URL: {}", response.browser_download_url);

    Ok(())
}
