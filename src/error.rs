//! Error taxonomy for dialog realization.
//!
//! Everything here is a configuration or toolkit error that is fatal to the
//! current `show()` call. Nothing is retryable: a malformed color or a
//! missing icon file fails identically on the next attempt, so the only
//! recovery the crate offers is guaranteed widget teardown.

use gtk4::glib;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// GTK could not be initialized, usually because no display is available.
    #[error("failed to initialize GTK: {0}")]
    Init(#[from] glib::BoolError),

    /// A header color string did not have 6 or 8 hex digits after the
    /// optional leading `#`.
    #[error("invalid header color '{color}': expected 6 or 8 hex digits")]
    InvalidColorLength { color: String },

    /// A header color string contained a non-hexadecimal character.
    #[error("invalid header color '{color}': non-hexadecimal digit")]
    InvalidColorDigit { color: String },

    /// The custom icon kind was selected but no icon path was ever supplied.
    #[error("custom icon selected but no icon path was supplied")]
    MissingCustomIconPath,

    /// An icon image could not be decoded. For custom icons this covers a
    /// missing or corrupt file; for bundled icons it would indicate a broken
    /// build.
    #[error("failed to load icon image '{name}': {source}")]
    IconDecode {
        name: String,
        #[source]
        source: glib::Error,
    },
}
