use clap::Parser;
use color_eyre::eyre::Result;
use std::{env, path::PathBuf};

use webui_release_tools::{
    logging::initialize_logger,
    publisher::{ProcessLauncher, layout::ReleaseLayout, publish},
};

/// Copy the build output into webui/<code> and upload the webui directory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long)]
    /// Repository root. Defaults to the current directory.
    repo_dir: Option<PathBuf>,

    #[arg(long)]
    /// Uploader executable. Defaults to file-uploader next to this binary.
    uploader: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    debug: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug, module_path!())?;

    let repo_dir = match args.repo_dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    let launcher = match args.uploader {
        Some(program) => ProcessLauncher::new(program),
        None => ProcessLauncher::sibling()?,
    };

    let layout = ReleaseLayout::new(repo_dir);
    let code = publish(&layout, &launcher)?;

    println!("release {code} published");

    Ok(())
}
