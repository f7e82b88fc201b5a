//! YAML report format.
//!
//! ```yaml
//! title: "Release"
//! components:
//!   - title: "Artifacts"
//!   - list: ["core", "cli"]
//!   - blank
//!   - pairs: { version: "0.1.0", channel: stable }
//!   - text: "done"
//! ```

use std::io::Write;

use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};
use termprint_core::{Blank, KeyValue, List, Printer, Text};

use crate::error::CliError;

/// Report loaded from a YAML document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct Report {
    /// Heading printed before the components
    #[serde(default)]
    pub(crate) title: Option<String>,
    /// Components in print order, each a single-key map (`- text: "..."`)
    #[serde(default, with = "serde_yaml_ng::with::singleton_map_recursive")]
    pub(crate) components: Vec<ReportComponent>,
}

/// One entry of `components`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReportComponent {
    Title(String),
    Text(String),
    List(Vec<String>),
    Pairs(Mapping),
    Blank,
}

impl Report {
    /// Parse a report from a YAML string.
    pub(crate) fn from_yaml(yaml: &str) -> Result<Self, CliError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Check if the report would add nothing.
    pub(crate) fn is_empty(&self) -> bool {
        self.title.is_none() && self.components.is_empty()
    }

    /// Append this report's components to the printer.
    ///
    /// Titles are bolded through the printer's color state, so they stay plain
    /// when colors are off.
    pub(crate) fn apply<W: Write>(
        &self,
        printer: &mut Printer<W>,
        bullet: &str,
    ) -> Result<(), CliError> {
        if let Some(title) = &self.title {
            let styled = printer.colors().bold(title);
            printer.add_title(styled);
        }

        for component in &self.components {
            match component {
                ReportComponent::Title(text) => {
                    let styled = printer.colors().bold(text);
                    printer.add_title(styled);
                }
                ReportComponent::Text(text) => {
                    printer.add(Text::new(text.clone()));
                }
                ReportComponent::List(items) => {
                    printer.add(List::new(items.iter().cloned()).bullet(bullet));
                }
                ReportComponent::Pairs(mapping) => {
                    printer.add(key_value(mapping)?);
                }
                ReportComponent::Blank => {
                    printer.add(Blank);
                }
            }
        }
        Ok(())
    }
}

fn key_value(mapping: &Mapping) -> Result<KeyValue, CliError> {
    mapping
        .iter()
        .map(|(k, v)| Ok((scalar(k)?, scalar(v)?)))
        .collect()
}

fn scalar(value: &Value) -> Result<String, CliError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(CliError::InvalidValue {
            field: "pairs".to_string(),
            message: format!("expected a scalar, found {other:?}"),
        }),
    }
}
