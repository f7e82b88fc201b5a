//! Terminal output composer.
//!
//! A [`Printer`] holds an ordered list of [`Component`]s, joins their rendered
//! text with newlines and writes the result to an output sink. A
//! [`ColorState`] owned by the printer tells application code whether to emit
//! ANSI styling.
//!
//! # Example
//!
//! ```
//! use termprint_core::{KeyValue, List, Printer};
//!
//! let mut printer = Printer::with_writer(Vec::new());
//! printer.set_no_color(true);
//!
//! let heading = printer.colors().bold("Build");
//! printer
//!     .add_title(heading)
//!     .add(KeyValue::new().pair("target", "x86_64").pair("profile", "release"))
//!     .add(List::new(["core", "cli"]));
//!
//! assert_eq!(
//!     printer.render(),
//!     "Build\ntarget:  x86_64\nprofile: release\n- core\n- cli\n"
//! );
//! ```

mod color;
mod component;
mod error;
mod printer;

pub use color::ColorState;
pub use component::{Blank, Component, KeyValue, List, Text, Title};
pub use crossterm::style::Color;
pub use error::PrintError;
pub use printer::Printer;
