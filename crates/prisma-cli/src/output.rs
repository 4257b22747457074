use serde::Serialize;
use std::fmt::Display;

const LABEL_WIDTH: usize = 18;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a titled block of `label value` lines with aligned values.
pub fn print_section<'a, V: Display>(
    title: &str,
    fields: impl IntoIterator<Item = (&'a str, V)>,
) {
    println!("{title}:");
    for (label, value) in fields {
        print_field(label, value);
    }
    println!();
}

pub fn print_field(label: &str, value: impl Display) {
    println!("  {label:<width$} {value}", width = LABEL_WIDTH);
}
