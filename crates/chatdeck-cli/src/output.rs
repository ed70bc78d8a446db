// Output formatting for CLI

use serde::Serialize;

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => OutputFormat::Text,
        }
    }

    pub fn print_value<T: Serialize>(&self, value: &T) {
        match self {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value).unwrap());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(value).unwrap());
            }
            OutputFormat::Text => {
                // Text format is handled by each command
            }
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

/// Print a simple key-value pair for text output
pub fn print_field(label: &str, value: &str) {
    println!("{:<16} {}", format!("{}:", label), value);
}

/// Print a header line plus one padded row per entry
pub fn print_table(columns: &[(&str, usize)], rows: &[Vec<String>]) {
    let line = |cells: Vec<(&str, usize)>| {
        cells
            .iter()
            .map(|(value, width)| {
                let cell = if value.len() > *width {
                    format!("{}...", &value[..width - 3])
                } else {
                    value.to_string()
                };
                format!("{:<width$}", cell, width = width)
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(columns.to_vec()));
    for row in rows {
        let cells: Vec<(&str, usize)> = row
            .iter()
            .map(String::as_str)
            .zip(columns.iter().map(|(_, width)| *width))
            .collect();
        println!("{}", line(cells));
    }
}
