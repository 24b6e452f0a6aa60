//! Result type shared by the release tools.
//!
//! Everything that can fail returns [`Result<T>`], a `color-eyre` result, so
//! the binaries get colorized error chains for free when `main` returns an
//! error. Use `.wrap_err()` to attach context as errors propagate:
//!
//! ```rust,ignore
//! use color_eyre::eyre::WrapErr;
//! use webui_release_tools::Result;
//!
//! fn read_code(path: &std::path::Path) -> Result<String> {
//!     let content = std::fs::read_to_string(path)
//!         .wrap_err("failed to read release code file")?;
//!     Ok(content.trim().to_string())
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout the release tools.
pub type Result<T> = EyreResult<T>;
