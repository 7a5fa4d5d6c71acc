//! GTK4 realization of a finished dialog spec.
//!
//! [`show`] validates the configuration, builds the widget tree, runs a
//! nested main loop until the user responds, then destroys the window. All
//! fallible work (color parsing, icon decoding) happens before the window
//! exists, so no error path can leave a half-built dialog on screen.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Once;

use gtk4::prelude::*;
use gtk4::{
    gdk, glib, pango, Align, Box as GtkBox, Button, CssProvider, DrawingArea, Expander, Image,
    Label, Orientation, Overlay, ScrolledWindow, TextBuffer, TextView, Window,
};
use log::{debug, warn};

use crate::builder::{Body, Buttons, Dialog, Icon};
use crate::color::{self, Rgba};
use crate::error::Error;
use crate::icons;

/// Height of the colored header band, in pixels.
const HEADER_HEIGHT: i32 = 50;

/// Left inset of the header icon inside the band.
const ICON_INSET: i32 = 9;

/// CSS name given to the plain-text header label so one process-wide style
/// rule can pin its text color.
const HEADER_LABEL_NAME: &str = "headerLabel";

/// The button the user pressed, or [`Response::Closed`] when the window was
/// dismissed without pressing any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Ok,
    Cancel,
    Yes,
    No,
    Closed,
}

/// The fixed button-set table. Order here is display order, left to right.
pub(crate) fn button_rows(buttons: Buttons) -> &'static [(&'static str, Response)] {
    match buttons {
        Buttons::Ok => &[("Ok", Response::Ok)],
        Buttons::OkCancel => &[("Ok", Response::Ok), ("Cancel", Response::Cancel)],
        Buttons::YesNo => &[("Yes", Response::Yes), ("No", Response::No)],
        Buttons::YesNoCancel => &[
            ("Yes", Response::Yes),
            ("No", Response::No),
            ("Cancel", Response::Cancel),
        ],
    }
}

/// Window height for a given extra-panel state.
fn target_height(height: i32, extra_height: i32, expanded: bool) -> i32 {
    if expanded {
        height + extra_height
    } else {
        height
    }
}

/// Checks everything that can be checked without touching GTK and resolves
/// the header color.
fn validate(spec: &Dialog) -> Result<Rgba, Error> {
    if spec.icon == Icon::Custom && spec.custom_icon_path.is_none() {
        return Err(Error::MissingCustomIconPath);
    }
    match &spec.header_color {
        Some(explicit) => color::parse_hex(explicit),
        None => Ok(color::default_color(spec.icon)),
    }
}

/// Realizes `spec`, blocks until the user responds, and tears the window
/// down again.
pub(crate) fn show(spec: &Dialog) -> Result<Response, Error> {
    let header_rgba = validate(spec)?;
    gtk4::init()?;
    let icon_texture = icons::load_texture(spec)?;

    debug!("Realizing dialog '{}'", spec.title);

    let window = Window::builder()
        .title(spec.title.as_str())
        .modal(true)
        .build();

    let content = GtkBox::new(Orientation::Vertical, 0);
    content.append(&build_header(spec, header_rgba, icon_texture.as_ref()));

    if !spec.extra.is_empty() {
        let expander = build_extra_expander(spec);
        expander.set_expanded(spec.extra_expanded);

        // Wired after set_expanded so the initial state does not fire it.
        let window_weak = window.downgrade();
        let (width, height, extra_height) = (spec.width, spec.height, spec.extra_height);
        expander.connect_expanded_notify(move |expander| {
            let target = target_height(height, extra_height, expander.is_expanded());
            debug!("Extra panel toggled, resizing window to {}x{}", width, target);
            if let Some(window) = window_weak.upgrade() {
                window.set_default_size(width, target);
            }
        });
        content.append(&expander);
    }

    let response = Rc::new(Cell::new(Response::Closed));
    content.append(&build_button_row(spec.buttons, &window, &response));

    window.set_child(Some(&content));
    window.set_size_request(spec.width, spec.height);
    window.set_default_size(
        spec.width,
        target_height(spec.height, spec.extra_height, spec.extra_expanded),
    );

    let main_loop = glib::MainLoop::new(None, false);
    {
        let main_loop = main_loop.clone();
        window.connect_close_request(move |_| {
            main_loop.quit();
            glib::Propagation::Proceed
        });
    }

    window.present();
    main_loop.run();
    window.destroy();

    let response = response.get();
    debug!("Dialog '{}' answered with {:?}", spec.title, response);
    Ok(response)
}

/// Builds the header band: a painted background, the optional icon and the
/// body label stacked in an overlay.
fn build_header(spec: &Dialog, rgba: Rgba, icon_texture: Option<&gdk::Texture>) -> Overlay {
    let overlay = Overlay::new();

    let area = DrawingArea::new();
    area.set_size_request(spec.width, HEADER_HEIGHT);
    area.set_hexpand(true);
    area.set_draw_func(move |_, cr, width, _| {
        cr.set_source_rgba(rgba[0], rgba[1], rgba[2], rgba[3]);
        cr.rectangle(0.0, 0.0, f64::from(width), f64::from(HEADER_HEIGHT));
        if let Err(e) = cr.fill() {
            warn!("Failed to fill header background: {}", e);
        }
    });
    overlay.set_child(Some(&area));

    if let Some(texture) = icon_texture {
        let image = Image::from_paintable(Some(texture));
        image.set_pixel_size(HEADER_HEIGHT - 2 * ICON_INSET);
        image.set_halign(Align::Start);
        image.set_valign(Align::Center);
        image.set_margin_start(ICON_INSET);
        overlay.add_overlay(&image);
    }

    overlay.add_overlay(&build_body_label(spec, icon_texture.is_some()));
    overlay.set_size_request(spec.width, HEADER_HEIGHT);
    overlay
}

fn build_body_label(spec: &Dialog, has_icon: bool) -> Label {
    let label = Label::new(None);
    match spec.body() {
        Body::Markup(markup) => {
            label.set_markup(markup);
            label.set_use_markup(true);
        }
        Body::Text(text) => {
            label.set_text(text);
            // Named so the process-wide CSS rule below can target it.
            label.set_widget_name(HEADER_LABEL_NAME);
            ensure_header_label_css();
        }
        Body::Empty => {}
    }

    label.set_halign(Align::Start);
    label.set_valign(Align::Center);
    label.set_hexpand(true);
    label.set_vexpand(false);
    label.set_wrap(true);
    label.set_wrap_mode(pango::WrapMode::WordChar);
    label.set_margin_start(if has_icon { 45 } else { 10 });
    label
}

fn build_extra_expander(spec: &Dialog) -> Expander {
    let expander = Expander::new(Some(spec.extra_name.as_str()));
    expander.set_vexpand(true);
    expander.set_hexpand(true);
    expander.set_margin_top(5);
    expander.set_margin_bottom(5);

    let scroll = ScrolledWindow::new();
    scroll.set_size_request(spec.width, spec.extra_height);
    expander.set_child(Some(&scroll));

    let buffer = TextBuffer::new(None);
    buffer.set_text(&spec.extra);
    let view = TextView::with_buffer(&buffer);
    view.set_accepts_tab(false);
    view.set_editable(false);
    view.set_cursor_visible(false);
    view.set_wrap_mode(gtk4::WrapMode::Word);
    view.set_margin_start(20);
    view.set_margin_end(20);
    view.set_hexpand(true);
    view.set_vexpand(true);
    scroll.set_child(Some(&view));

    expander
}

fn build_button_row(buttons: Buttons, window: &Window, response: &Rc<Cell<Response>>) -> GtkBox {
    let row = GtkBox::new(Orientation::Horizontal, 6);
    row.set_halign(Align::End);
    row.set_margin_top(5);
    row.set_margin_bottom(10);
    row.set_margin_start(10);
    row.set_margin_end(10);

    for &(label, value) in button_rows(buttons) {
        let button = Button::with_label(label);
        let response = Rc::clone(response);
        let window_weak = window.downgrade();
        button.connect_clicked(move |_| {
            response.set(value);
            if let Some(window) = window_weak.upgrade() {
                window.close();
            }
        });
        row.append(&button);
    }
    row
}

/// Registers the black-text rule for plain-text header labels once per
/// process. Repeated dialogs reuse the same provider instead of stacking a
/// new one onto the display each time.
fn ensure_header_label_css() {
    static CSS: Once = Once::new();
    CSS.call_once(|| {
        let provider = CssProvider::new();
        provider.load_from_string(&format!("#{HEADER_LABEL_NAME} {{ color: black; }}"));
        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => warn!("No default display; header label CSS not applied"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_table_matches_fixed_order_and_codes() {
        assert_eq!(button_rows(Buttons::Ok), &[("Ok", Response::Ok)]);
        assert_eq!(
            button_rows(Buttons::OkCancel),
            &[("Ok", Response::Ok), ("Cancel", Response::Cancel)]
        );
        assert_eq!(
            button_rows(Buttons::YesNo),
            &[("Yes", Response::Yes), ("No", Response::No)]
        );
        assert_eq!(
            button_rows(Buttons::YesNoCancel),
            &[
                ("Yes", Response::Yes),
                ("No", Response::No),
                ("Cancel", Response::Cancel)
            ]
        );
    }

    #[test]
    fn expanding_adds_extra_height_and_collapsing_restores_it() {
        assert_eq!(target_height(100, 200, false), 100);
        assert_eq!(target_height(100, 200, true), 300);
        assert_eq!(target_height(100, 200, false), 100);
        assert_eq!(target_height(0, 50, true), 50);
    }

    #[test]
    fn custom_icon_without_path_is_a_configuration_error() {
        let mut spec = Dialog::title("t");
        spec.icon = Icon::Custom;
        assert!(matches!(validate(&spec), Err(Error::MissingCustomIconPath)));
    }

    #[test]
    fn explicit_header_color_overrides_icon_default() {
        let spec = Dialog::title("t").error_icon().header_color("#6879D0FF");
        let rgba = validate(&spec).unwrap();
        assert_eq!(
            rgba,
            [
                f64::from(0x68) / 255.0,
                f64::from(0x79) / 255.0,
                f64::from(0xD0) / 255.0,
                1.0
            ]
        );
    }

    #[test]
    fn bad_header_color_fails_before_any_widget_exists() {
        let spec = Dialog::title("t").header_color("#abcd");
        assert!(matches!(
            validate(&spec),
            Err(Error::InvalidColorLength { .. })
        ));

        let spec = Dialog::title("t").header_color("ZZZZZZ");
        assert!(matches!(
            validate(&spec),
            Err(Error::InvalidColorDigit { .. })
        ));
    }

    #[test]
    fn unset_header_color_falls_back_to_icon_default() {
        let spec = Dialog::title("t").warning_icon();
        assert_eq!(validate(&spec).unwrap(), [0.941, 0.729, 0.192, 1.0]);
    }
}
