//! Placeholder templates for the `report` command.
//!
//! A template is rendered once per day. Placeholders are `{name}` where name is
//! one of the `ReportRow` fields; `{{` and `}}` produce literal braces.

use crate::errors::{AppError, AppResult};
use crate::export::model::ReportRow;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_TEMPLATE: &str =
    "{day}  {enter} - {leave}  breaks {breaks}  total {total}  overtime {overtime}  {reason}\n";

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([a-z_]+)\}").expect("placeholder pattern is valid")
});

/// Check every placeholder up front so a typo fails before any output is produced.
pub fn validate(template: &str) -> AppResult<()> {
    let probe = ReportRow {
        day: String::new(),
        enter: String::new(),
        leave: String::new(),
        breaks: String::new(),
        total: String::new(),
        overtime: String::new(),
        overtime_start: String::new(),
        reason: String::new(),
    };
    render_row(template, &probe).map(|_| ())
}

pub fn render_row(template: &str, row: &ReportRow) -> AppResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for cap in PLACEHOLDER_RE.captures_iter(template) {
        let Some(m) = cap.get(0) else { continue };
        out.push_str(&template[last..m.start()]);
        match m.as_str() {
            "{{" => out.push('{'),
            "}}" => out.push('}'),
            _ => {
                let name = &cap[1];
                let value = row
                    .field(name)
                    .ok_or_else(|| AppError::Template(format!("unknown placeholder {{{name}}}")))?;
                out.push_str(value);
            }
        }
        last = m.end();
    }
    out.push_str(&template[last..]);

    Ok(out)
}

pub fn render(template: &str, rows: &[ReportRow]) -> AppResult<String> {
    validate(template)?;
    let mut out = String::new();
    for row in rows {
        out.push_str(&render_row(template, row)?);
    }
    Ok(out)
}
