use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use std::path::PathBuf;

use webui_release_tools::{
    logging::initialize_logger,
    uploader::{HttpFileSink, UploadTarget, upload_directory},
};

/// Recursively upload every file in a directory to the configured server.
///
/// Requires the KEY and SERVER environment variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long)]
    /// Directory to upload.
    dir: PathBuf,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // checked before anything else so a misconfigured run never gets going
    let target = UploadTarget::from_env()?;

    let args = Args::parse();

    initialize_logger(args.debug, module_path!())?;

    let sink = HttpFileSink::new(target)?;
    let summary = upload_directory(&sink, &args.dir).await?;

    if let Some(failed) = summary.failed {
        return Err(eyre!(
            "upload stopped at [{}/{}] {} after {} successful uploads: {}",
            failed.index,
            summary.total,
            failed.relative_path,
            summary.uploaded,
            failed.reason
        ));
    }

    Ok(())
}
