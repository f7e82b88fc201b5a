//! Component trait and the built-in components.
//!
//! A component is anything that can produce a fragment of display text. The
//! printer joins the fragments of its components, one per line, in the order
//! they were added.
//!
//! # Examples
//!
//! ```
//! use termprint_core::{Component, KeyValue, List, Title};
//!
//! assert_eq!(Title::new("Report").format(), "Report");
//!
//! let list = List::new(["alpha", "beta"]);
//! assert_eq!(list.format(), "- alpha\n- beta");
//!
//! let pairs = KeyValue::new().pair("name", "racer").pair("os", "linux");
//! assert_eq!(pairs.format(), "name: racer\nos:   linux");
//! ```

/// Core trait that all printable elements implement.
///
/// `format` must be a pure function of the component's own fields: calling it
/// twice yields the same text, and it never fails.
pub trait Component {
    /// Render this component to display text.
    fn format(&self) -> String;
}

impl<C: Component + ?Sized> Component for &C {
    fn format(&self) -> String {
        (**self).format()
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn format(&self) -> String {
        (**self).format()
    }
}

impl Component for String {
    fn format(&self) -> String {
        self.clone()
    }
}

impl Component for str {
    fn format(&self) -> String {
        self.to_owned()
    }
}

/// A heading rendered as its text, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Title {
    text: String,
}

impl Title {
    /// Create a new title.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the title text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for Title {
    fn format(&self) -> String {
        self.text.clone()
    }
}

/// A plain line of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    content: String,
}

impl Text {
    /// Create a new text line.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Component for Text {
    fn format(&self) -> String {
        self.content.clone()
    }
}

/// An empty line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Blank;

impl Component for Blank {
    fn format(&self) -> String {
        String::new()
    }
}

/// Bulleted list, one item per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    items: Vec<String>,
    bullet: String,
}

impl List {
    /// Default bullet prefix.
    pub const DEFAULT_BULLET: &'static str = "-";

    /// Create a list from items.
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            bullet: Self::DEFAULT_BULLET.to_string(),
        }
    }

    /// Set the bullet prefix.
    #[must_use]
    pub fn bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }

    /// Append an item.
    #[must_use]
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Get the items.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl Component for List {
    fn format(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{} {item}", self.bullet))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Aligned `key: value` lines.
///
/// Keys are padded to the widest key so values line up in one column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValue {
    pairs: Vec<(String, String)>,
}

impl KeyValue {
    /// Create an empty set of pairs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair.
    #[must_use]
    pub fn pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Get the pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyValue {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Component for KeyValue {
    fn format(&self) -> String {
        let width = self
            .pairs
            .iter()
            .map(|(k, _)| k.chars().count())
            .max()
            .unwrap_or(0);

        self.pairs
            .iter()
            .map(|(k, v)| {
                // Pad after the colon so "key:" stays attached.
                let pad = width - k.chars().count();
                format!("{k}: {}{v}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
