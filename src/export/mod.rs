mod csv_export;
mod json_export;
pub mod model;
pub mod template;

pub use model::ReportRow;

use crate::core::report::DayReport;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::io::Write;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} report written to {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Csv,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Render `reports` in `format` into `out`. `custom_template` only applies to text output.
    pub fn write<W: Write>(
        mut out: W,
        format: ReportFormat,
        custom_template: Option<&str>,
        reports: &[DayReport],
    ) -> AppResult<()> {
        let rows: Vec<ReportRow> = reports.iter().map(ReportRow::from_report).collect();

        match format {
            ReportFormat::Text => {
                let tpl = custom_template.unwrap_or(template::DEFAULT_TEMPLATE);
                out.write_all(template::render(tpl, &rows)?.as_bytes())?;
                out.flush()?;
            }
            ReportFormat::Csv => csv_export::write_csv(out, &rows)?,
            ReportFormat::Json => json_export::write_json(out, &rows)?,
        }

        Ok(())
    }
}
