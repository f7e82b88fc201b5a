//! Printer: an ordered list of components rendered to an output sink.
//!
//! The rendered text is always the concatenation of each component's
//! `format()` output followed by exactly one `\n`, in the order the
//! components were added.
//!
//! # Examples
//!
//! ```
//! use termprint_core::{Printer, Text};
//!
//! let mut printer = Printer::with_writer(Vec::new());
//! printer.add_title("Report").add(Text::new("all green"));
//! assert_eq!(printer.render(), "Report\nall green\n");
//!
//! printer.print().unwrap();
//! assert_eq!(printer.writer_mut().as_slice(), b"Report\nall green\n\n");
//! ```

use std::fmt;
use std::io::{self, Stdout, Write};

use crate::color::ColorState;
use crate::component::{Component, Title};
use crate::error::PrintError;

/// Output printer for composed components.
///
/// The sink `W` is owned by the printer but never closed or otherwise managed
/// beyond writing and flushing.
pub struct Printer<W: Write = Stdout> {
    writer: W,
    no_color: bool,
    comps: Vec<Box<dyn Component>>,
    color: Option<ColorState>,
}

impl Printer<Stdout> {
    /// Create a printer bound to standard output with colors enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Printer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Printer<W> {
    /// Create a printer bound to the given sink.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            no_color: false,
            comps: Vec::new(),
            color: Some(ColorState::new()),
        }
    }

    /// Replace the output sink.
    pub fn set_writer(&mut self, writer: W) {
        self.writer = writer;
    }

    /// Get the output sink.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Get the output sink mutably.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the printer and return its sink.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Set the no-color flag.
    ///
    /// When set, `colors()` forces the color state off before returning it.
    pub fn set_no_color(&mut self, no_color: bool) -> &mut Self {
        self.no_color = no_color;
        self
    }

    /// Check the no-color flag.
    #[must_use]
    pub const fn no_color(&self) -> bool {
        self.no_color
    }

    /// Append a component.
    ///
    /// Components are kept in insertion order; duplicates and empty
    /// components are accepted as-is.
    pub fn add(&mut self, component: impl Component + 'static) -> &mut Self {
        self.comps.push(Box::new(component));
        tracing::trace!(count = self.comps.len(), "component added");
        self
    }

    /// Append a title component.
    pub fn add_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.add(Title::new(title))
    }

    /// Append several components in order.
    pub fn extend<I, C>(&mut self, components: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for component in components {
            self.add(component);
        }
        self
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.comps.len()
    }

    /// Check if no components have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }

    /// Remove all components. The sink, flag and color state are kept.
    pub fn clear(&mut self) -> &mut Self {
        self.comps.clear();
        self
    }

    /// Iterate over the components in insertion order.
    pub fn components(&self) -> impl Iterator<Item = &dyn Component> + '_ {
        self.comps.iter().map(|c| &**c)
    }

    /// Render all components, each followed by a newline.
    #[must_use]
    pub fn render(&self) -> String {
        let out = self.comps.iter().fold(String::new(), |mut out, c| {
            out.push_str(&c.format());
            out.push('\n');
            out
        });
        tracing::debug!(components = self.comps.len(), bytes = out.len(), "rendered");
        out
    }

    /// Get the color state, creating it on first access.
    ///
    /// If the no-color flag is set the state is forced off. Changes made
    /// through the returned reference persist in the printer.
    pub fn colors(&mut self) -> &mut ColorState {
        let no_color = self.no_color;
        let color = self.color.get_or_insert_with(ColorState::new);
        if no_color && color.is_enabled() {
            tracing::debug!("no-color set, disabling color state");
            color.disable();
        }
        color
    }

    /// Write exactly what `print` would emit to another writer, then flush it.
    pub fn render_to(&self, writer: &mut impl Write) -> Result<(), PrintError> {
        writeln!(writer, "{}", self.render())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the rendered output plus a trailing newline to the sink.
    ///
    /// Sink failures are returned rather than swallowed.
    pub fn print(&mut self) -> Result<(), PrintError> {
        let out = self.render();
        writeln!(self.writer, "{out}")?;
        self.writer.flush()?;
        tracing::debug!(bytes = out.len() + 1, "printed");
        Ok(())
    }
}

impl<W: Write> fmt::Display for Printer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<W: Write> fmt::Debug for Printer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("no_color", &self.no_color)
            .field("components", &self.comps.len())
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
