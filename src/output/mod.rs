//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// Format and print data to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "ID")]
        id: String,
    }

    #[test]
    fn test_vec_formats_as_table_or_json() {
        let rows = vec![Row {
            id: "42".to_string(),
        }];

        let table = rows.format(OutputFormat::Table).unwrap();
        assert!(table.contains("ID"));
        assert!(table.contains("42"));

        let json = rows.format(OutputFormat::Json).unwrap();
        assert!(json.contains("\"id\": \"42\""));
    }
}
