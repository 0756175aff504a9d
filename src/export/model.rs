use crate::core::report::DayReport;
use crate::utils::date::format_day;
use crate::utils::formatting::{format_duration, format_optional_duration};
use crate::utils::time::format_hour;
use serde::Serialize;

/// Flat, string-valued view of a day for CSV / JSON / template output.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub day: String,
    pub enter: String,
    pub leave: String,
    pub breaks: String,
    pub total: String,
    pub overtime: String,
    pub overtime_start: String,
    pub reason: String,
}

impl ReportRow {
    pub fn from_report(r: &DayReport) -> Self {
        let log = &r.worklog;
        Self {
            day: format_day(&log.day()),
            enter: format_hour(&log.enter()),
            leave: if log.has_left() {
                format_hour(&log.leave())
            } else {
                "--".to_string()
            },
            breaks: format_duration(log.breaks(), true),
            total: format_duration(r.total, true),
            overtime: format_optional_duration(r.overtime.as_ref().map(|o| o.duration), true),
            overtime_start: r
                .overtime
                .as_ref()
                .map(|o| format_hour(&o.start))
                .unwrap_or_else(|| "--".to_string()),
            reason: log.overtime_reason().to_string(),
        }
    }

    /// Value for a template placeholder name.
    pub fn field(&self, name: &str) -> Option<&str> {
        let v = match name {
            "day" => &self.day,
            "enter" => &self.enter,
            "leave" => &self.leave,
            "breaks" => &self.breaks,
            "total" => &self.total,
            "overtime" => &self.overtime,
            "overtime_start" => &self.overtime_start,
            "reason" => &self.reason,
            _ => return None,
        };
        Some(v.as_str())
    }
}

pub(crate) fn get_headers() -> [&'static str; 8] {
    [
        "day",
        "enter",
        "leave",
        "breaks",
        "total",
        "overtime",
        "overtime_start",
        "reason",
    ]
}
