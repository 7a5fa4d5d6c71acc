//! Bundled header icons, embedded at build time.
//!
//! The four built-in icons ship inside the binary so realization never
//! depends on files being installed next to it; only custom icons touch the
//! filesystem.

use gtk4::{gdk, glib};

use crate::builder::{Dialog, Icon};
use crate::error::Error;

const INFO_PNG: &[u8] = include_bytes!("../assets/info.png");
const WARNING_PNG: &[u8] = include_bytes!("../assets/warning.png");
const QUESTION_PNG: &[u8] = include_bytes!("../assets/question.png");
const ERROR_PNG: &[u8] = include_bytes!("../assets/error.png");

/// Decodes the icon a spec asks for, or `None` for icon-less dialogs.
///
/// Requires GTK to be initialized. Decoding happens here, before any window
/// exists, so a corrupt or missing image surfaces as an [`Error`] instead of
/// a blank spot in a half-built dialog.
pub(crate) fn load_texture(spec: &Dialog) -> Result<Option<gdk::Texture>, Error> {
    let (name, bytes) = match spec.icon {
        Icon::None => return Ok(None),
        Icon::Info => ("info", INFO_PNG),
        Icon::Warning => ("warning", WARNING_PNG),
        Icon::Question => ("question", QUESTION_PNG),
        Icon::Error => ("error", ERROR_PNG),
        Icon::Custom => {
            let path = spec
                .custom_icon_path
                .as_ref()
                .ok_or(Error::MissingCustomIconPath)?;
            let texture = gdk::Texture::from_filename(path).map_err(|source| {
                Error::IconDecode {
                    name: path.display().to_string(),
                    source,
                }
            })?;
            return Ok(Some(texture));
        }
    };

    let texture =
        gdk::Texture::from_bytes(&glib::Bytes::from_static(bytes)).map_err(|source| {
            Error::IconDecode {
                name: name.to_string(),
                source,
            }
        })?;
    Ok(Some(texture))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn bundled_icons_are_pngs() {
        for bytes in [INFO_PNG, WARNING_PNG, QUESTION_PNG, ERROR_PNG] {
            assert!(bytes.len() > PNG_MAGIC.len());
            assert_eq!(&bytes[..PNG_MAGIC.len()], &PNG_MAGIC);
        }
    }
}
