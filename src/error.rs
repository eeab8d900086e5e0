// The crate's error type.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

use crate::shape::ParamKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the frame buffer to the window failed

    #[error("Raster size error: {width}x{height} (both sides must be > 0)")]
    InvalidSize { width: u32, height: u32 },

    #[error("Blit error: raster is {src:?}, target is {dst:?}")]
    BlitSize { src: (usize, usize), dst: (usize, usize) },

    #[error("Hex color error: {0:?} is not #rrggbb")]
    InvalidHex(String),

    #[error("Parameter error: {shape} has no parameter '{name}'")]
    UnknownParam { shape: &'static str, name: String },

    #[error("Parameter error: '{name}' expects {expected}, got {got}")]
    ParamKind {
        name: String,
        expected: ParamKind,
        got: ParamKind,
    },

    #[error("Config read error ({path}): {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error ({path}): {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
