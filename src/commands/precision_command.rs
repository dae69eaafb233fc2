//! Precision table command

use crate::commands::command_traits::Command;
use crate::commands::output_format::OutputFormat;
use crate::coordinate::Precision;
use crate::errors::GeoResult;

/// Command listing every supported precision
pub struct PrecisionCommand {
    /// Configured default, marked in the listing
    default: Precision,
    format: OutputFormat,
}

impl PrecisionCommand {
    pub fn new(default: Precision, format: OutputFormat) -> Self {
        PrecisionCommand { default, format }
    }
}

impl Command for PrecisionCommand {
    fn output(&self) -> GeoResult<String> {
        let lines: Vec<String> = Precision::all()
            .map(|p| match self.format {
                OutputFormat::Text => format!(
                    "{}{:>2}  {:<16} {}",
                    if p == self.default { "*" } else { " " },
                    p.digits(),
                    p.approximate_distance(),
                    p.typical_usage()
                ),
                OutputFormat::Json => format!(
                    "{{\"precision\":{},\"distance\":\"{}\",\"usage\":\"{}\",\"default\":{}}}",
                    p.digits(),
                    p.approximate_distance(),
                    p.typical_usage(),
                    p == self.default
                ),
            })
            .collect();

        Ok(match self.format {
            OutputFormat::Text => lines.join("\n"),
            OutputFormat::Json => format!("[{}]", lines.join(",")),
        })
    }
}
