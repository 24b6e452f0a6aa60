use crate::{Result, error::TransferError};

/// Initialize terminal logger with debug or info level filtering for the
/// library output and the calling binary.
pub fn initialize_logger(debug: bool, binary: &'static str) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("webui_release_tools")
        .add_filter_allow_str(binary)
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .map_err(TransferError::from)?;

    Ok(())
}
