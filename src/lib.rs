pub mod error;
pub mod logging;
mod path_helpers;
pub mod publisher;
pub mod release_asset;
mod result;
pub mod uploader;

pub use result::Result;
