//! Fluent builder for modal GTK4 dialog boxes.
//!
//! A dialog is described by chaining setters onto [`Dialog::title`] and then
//! realized with [`Dialog::show`], which blocks until the user picks a button
//! (or closes the window) and returns the choice as a [`Response`].
//!
//! ```no_run
//! use fluent_dialog::{Dialog, Response};
//!
//! let response = Dialog::title("Delete file?")
//!     .text("This cannot be undone.")
//!     .question_icon()
//!     .yes_no_buttons()
//!     .show()
//!     .expect("failed to realize dialog");
//!
//! if response == Response::Yes {
//!     // delete it
//! }
//! ```

pub mod builder;
mod color;
pub mod error;
mod icons;
mod realize;

pub use builder::{Buttons, Dialog, Icon};
pub use error::Error;
pub use realize::Response;
