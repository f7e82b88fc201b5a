//! Integration tests for termprint-core.

use termprint_core::{Blank, Color, Component, KeyValue, List, Printer, Text, Title};

/// Component defined outside the crate.
struct Status {
    name: &'static str,
    passed: bool,
}

impl Component for Status {
    fn format(&self) -> String {
        let mark = if self.passed { "ok" } else { "FAILED" };
        format!("{} ... {mark}", self.name)
    }
}

#[test]
fn test_report_end_to_end() {
    let mut printer = Printer::with_writer(Vec::new());
    assert_eq!(printer.render(), "");

    printer.add_title("Report");
    assert_eq!(printer.render(), "Report\n");

    printer
        .add(Status {
            name: "parse",
            passed: true,
        })
        .add(Status {
            name: "emit",
            passed: false,
        })
        .add(Blank)
        .add(KeyValue::new().pair("passed", "1").pair("failed", "1"));

    let expected = "Report\nparse ... ok\nemit ... FAILED\n\npassed: 1\nfailed: 1\n";
    assert_eq!(printer.render(), expected);

    printer.print().unwrap();
    let written = String::from_utf8(printer.into_writer()).unwrap();
    assert_eq!(written, format!("{expected}\n"));
}

#[test]
fn test_render_equals_formatted_components_joined() {
    let components: Vec<Box<dyn Component>> = vec![
        Box::new(Title::new("T")),
        Box::new(Text::new("body")),
        Box::new(List::new(["x", "y"]).bullet("*")),
    ];
    let expected: String = components
        .iter()
        .map(|c| format!("{}\n", c.format()))
        .collect();

    let mut printer = Printer::with_writer(Vec::new());
    printer.extend(components);
    assert_eq!(printer.render(), expected);
    assert_eq!(printer.render(), "T\nbody\n* x\n* y\n");
}

#[test]
fn test_no_color_disables_styling_helpers() {
    let mut printer = Printer::with_writer(Vec::new());
    printer.set_no_color(true);

    let colors = printer.colors();
    assert!(!colors.is_enabled());
    assert_eq!(colors.bold("plain"), "plain");
    assert_eq!(colors.paint("plain", Color::Red), "plain");
}

#[test]
fn test_styled_title_round_trips_through_printer() {
    let mut printer = Printer::with_writer(Vec::new());
    let styled = printer.colors().bold("Heading");
    printer.add_title(styled.clone());
    assert_eq!(printer.render(), format!("{styled}\n"));
    assert!(styled.contains("Heading"));
}

#[test]
fn test_default_printer_targets_stdout() {
    let printer = Printer::default();
    assert!(printer.is_empty());
    assert!(!printer.no_color());
}
