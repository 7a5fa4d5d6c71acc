//! Walkthrough of the dialog builder, one dialog per feature.

use anyhow::Result;
use fluent_dialog::{Dialog, Response};
use log::info;

const LONG_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim \
veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo \
consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum \
dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, \
sunt in culpa qui officia deserunt mollit anim id est laborum.";

fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    Dialog::title(format!("{} custom icons!", 10))
        .text(format!(
            "This is a custom icon, really? This is a really long text that needs {} line breaks.",
            5
        ))
        .extra_expanded(LONG_TEXT)
        .extra_height(200)
        .custom_icon("assets/info.png")
        .header_color("#6879D0FF")
        .ok_button()
        .size(300, 50)
        .show()?;

    Dialog::title("Hello World!")
        .text_markup(format!(
            "<span foreground=\"black\">How are you on this <i><b>{}</b></i>?</span>",
            "Tuesday"
        ))
        .info_icon()
        .ok_button()
        .size(300, 100)
        .show()?;

    Dialog::title("No image dialog!")
        .text("How are you today?")
        .extra(LONG_TEXT)
        .extra_height(50)
        .extra_name("Extra name test")
        .ok_button()
        .height(100)
        .show()?;

    let response = Dialog::title("Hello World!")
        .text("How are you today?")
        .extra(LONG_TEXT)
        .extra_height(50)
        .question_icon()
        .yes_no_buttons()
        .height(125)
        .show()?;
    info!("Question dialog answered with {:?}", response);

    if response == Response::Yes {
        Dialog::title("Your response...")
            .text("...was affirmative!")
            .warning_icon()
            .ok_button()
            .show()?;
    } else {
        Dialog::title("Your response...")
            .text("...was very negative!")
            .error_icon()
            .ok_button()
            .show()?;
    }

    Ok(())
}
