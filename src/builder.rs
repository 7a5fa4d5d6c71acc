//! The dialog specification and its fluent setters.
//!
//! A [`Dialog`] is a plain value object: setters only record state and never
//! touch the display layer. All constraint checking (color format, custom
//! icon path) is deferred to realization, so chaining can never fail.

use std::path::PathBuf;

use crate::error::Error;
use crate::realize::{self, Response};

/// Default minimum window width, in pixels.
pub const DEFAULT_WIDTH: i32 = 300;

/// Default label on the extra-panel expander.
pub const DEFAULT_EXTRA_NAME: &str = "Details";

/// The icon shown in the dialog header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    #[default]
    None,
    Info,
    Warning,
    Question,
    Error,
    /// An image loaded from a caller-supplied file path at realization time.
    Custom,
}

/// The set of buttons offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Buttons {
    #[default]
    Ok,
    OkCancel,
    YesNo,
    YesNoCancel,
}

/// What the header label should render.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Body<'a> {
    /// Pango markup. Wins over plain text when both are set.
    Markup(&'a str),
    Text(&'a str),
    Empty,
}

/// A dialog specification, accumulated through method chaining.
///
/// Created with [`Dialog::title`], consumed exactly once by [`Dialog::show`].
/// Every setter takes the value by move and hands it back, so a spec is never
/// shared and never mutated from outside the chain.
#[derive(Debug, Clone)]
pub struct Dialog {
    pub(crate) title: String,
    pub(crate) text: String,
    pub(crate) text_markup: String,
    pub(crate) header_color: Option<String>,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) icon: Icon,
    pub(crate) custom_icon_path: Option<PathBuf>,
    pub(crate) buttons: Buttons,
    pub(crate) extra: String,
    pub(crate) extra_name: String,
    pub(crate) extra_height: i32,
    pub(crate) extra_expanded: bool,
}

impl Dialog {
    /// Starts a new dialog specification. Every dialog needs a title, so this
    /// is the single entry point of the builder.
    pub fn title(title: impl Into<String>) -> Self {
        Dialog {
            title: title.into(),
            text: String::new(),
            text_markup: String::new(),
            header_color: None,
            width: DEFAULT_WIDTH,
            height: 0,
            icon: Icon::None,
            custom_icon_path: None,
            buttons: Buttons::Ok,
            extra: String::new(),
            extra_name: DEFAULT_EXTRA_NAME.to_string(),
            extra_height: 0,
            extra_expanded: false,
        }
    }

    /// Sets the main text of the dialog. Ignored when markup is also set.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the main text of the dialog in Pango markup format. Takes
    /// precedence over [`text`](Self::text) when both are set.
    pub fn text_markup(mut self, markup: impl Into<String>) -> Self {
        self.text_markup = markup.into();
        self
    }

    /// Sets the header background color, as `#RRGGBB` or `#RRGGBBAA` (the
    /// leading `#` is optional). Without this call the header color follows
    /// the icon kind: white for no icon, info and custom icons; amber for
    /// warning; green for question; red for error.
    pub fn header_color(mut self, color: impl Into<String>) -> Self {
        self.header_color = Some(color.into());
        self
    }

    /// Sets the minimum size of the dialog.
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the minimum width of the dialog. Defaults to 300.
    pub fn width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    /// Sets the minimum height of the dialog. The window grows by
    /// [`extra_height`](Self::extra_height) pixels while the extra panel is
    /// expanded.
    pub fn height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    /// Sets the extra text shown in a collapsible, scrollable text box below
    /// the main text. The panel starts collapsed.
    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    /// Sets the extra text and starts the panel expanded.
    pub fn extra_expanded(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self.extra_expanded = true;
        self
    }

    /// Sets the label on the expander that reveals the extra text.
    /// Defaults to "Details".
    pub fn extra_name(mut self, name: impl Into<String>) -> Self {
        self.extra_name = name.into();
        self
    }

    /// Sets the height of the extra panel when it is expanded.
    pub fn extra_height(mut self, extra_height: i32) -> Self {
        self.extra_height = extra_height;
        self
    }

    /// Shows an information icon in the header.
    pub fn info_icon(mut self) -> Self {
        self.icon = Icon::Info;
        self
    }

    /// Shows a warning icon in the header.
    pub fn warning_icon(mut self) -> Self {
        self.icon = Icon::Warning;
        self
    }

    /// Shows a question icon in the header.
    pub fn question_icon(mut self) -> Self {
        self.icon = Icon::Question;
        self
    }

    /// Shows an error icon in the header.
    pub fn error_icon(mut self) -> Self {
        self.icon = Icon::Error;
        self
    }

    /// Shows a custom icon, loaded from `path` when the dialog is realized.
    pub fn custom_icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon = Icon::Custom;
        self.custom_icon_path = Some(path.into());
        self
    }

    /// Offers a single Ok button. This is the default.
    pub fn ok_button(mut self) -> Self {
        self.buttons = Buttons::Ok;
        self
    }

    /// Offers Ok and Cancel buttons.
    pub fn ok_cancel_buttons(mut self) -> Self {
        self.buttons = Buttons::OkCancel;
        self
    }

    /// Offers Yes and No buttons.
    pub fn yes_no_buttons(mut self) -> Self {
        self.buttons = Buttons::YesNo;
        self
    }

    /// Offers Yes, No and Cancel buttons.
    pub fn yes_no_cancel_buttons(mut self) -> Self {
        self.buttons = Buttons::YesNoCancel;
        self
    }

    /// Realizes the dialog and blocks until the user responds.
    ///
    /// Initializes GTK if needed, validates the accumulated configuration,
    /// builds the widget tree, runs a modal loop and tears everything down
    /// again before returning the pressed button. Closing the window without
    /// pressing a button yields [`Response::Closed`].
    pub fn show(self) -> Result<Response, Error> {
        realize::show(&self)
    }

    pub(crate) fn body(&self) -> Body<'_> {
        if !self.text_markup.is_empty() {
            Body::Markup(&self.text_markup)
        } else if !self.text.is_empty() {
            Body::Text(&self.text)
        } else {
            Body::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_sets_documented_defaults() {
        let d = Dialog::title("Hello");
        assert_eq!(d.title, "Hello");
        assert_eq!(d.width, DEFAULT_WIDTH);
        assert_eq!(d.height, 0);
        assert_eq!(d.icon, Icon::None);
        assert_eq!(d.buttons, Buttons::Ok);
        assert_eq!(d.extra_name, DEFAULT_EXTRA_NAME);
        assert!(!d.extra_expanded);
        assert!(d.header_color.is_none());
        assert!(d.custom_icon_path.is_none());
    }

    #[test]
    fn last_setter_call_wins() {
        let d = Dialog::title("t")
            .width(400)
            .size(500, 200)
            .info_icon()
            .error_icon()
            .ok_cancel_buttons()
            .yes_no_cancel_buttons()
            .header_color("#FFFFFF")
            .header_color("#6879D0FF");
        assert_eq!((d.width, d.height), (500, 200));
        assert_eq!(d.icon, Icon::Error);
        assert_eq!(d.buttons, Buttons::YesNoCancel);
        assert_eq!(d.header_color.as_deref(), Some("#6879D0FF"));
    }

    #[test]
    fn markup_wins_over_plain_text() {
        let d = Dialog::title("t").text("plain").text_markup("<b>rich</b>");
        assert_eq!(d.body(), Body::Markup("<b>rich</b>"));

        let d = Dialog::title("t").text("plain");
        assert_eq!(d.body(), Body::Text("plain"));

        let d = Dialog::title("t");
        assert_eq!(d.body(), Body::Empty);
    }

    #[test]
    fn extra_expanded_records_text_and_flag() {
        let d = Dialog::title("t").extra_expanded("long text").extra_height(200);
        assert_eq!(d.extra, "long text");
        assert!(d.extra_expanded);
        assert_eq!(d.extra_height, 200);
    }

    #[test]
    fn custom_icon_records_path() {
        let d = Dialog::title("t").custom_icon("/tmp/icon.png");
        assert_eq!(d.icon, Icon::Custom);
        assert_eq!(
            d.custom_icon_path.as_deref(),
            Some(std::path::Path::new("/tmp/icon.png"))
        );
    }
}
