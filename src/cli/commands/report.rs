use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::report::{DayReport, ReportLogic};
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, ReportFormat, notify_export_success};
use crate::utils::date::parse_day_or;
use std::fs;
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Report {
        day,
        from,
        to,
        template,
        format,
        out,
        force,
    } = cmd
    {
        let today = clock.today();
        let (start, end) = if day.is_some() {
            let d = parse_day_or(day.as_ref(), today)?;
            (d, d)
        } else {
            let end = parse_day_or(to.as_ref(), today)?;
            (parse_day_or(from.as_ref(), end)?, end)
        };

        // Read the template before opening the database so a bad path fails fast.
        let tpl = template
            .as_ref()
            .map(|p| {
                fs::read_to_string(p)
                    .map_err(|e| AppError::Template(format!("cannot read template {p}: {e}")))
            })
            .transpose()?;

        if tpl.is_some() && *format != ReportFormat::Text {
            return Err(AppError::Template(format!(
                "--template only applies to text output, not --format {}",
                format.as_str()
            )));
        }

        let workday = cfg.workday()?;
        let pool = DbPool::new(&cfg.database)?;
        let store = SqliteStore::new(&pool.conn);

        let reports: Vec<DayReport> = if start == end {
            ReportLogic::day(&store, start, workday)?
                .into_iter()
                .collect()
        } else {
            ReportLogic::collect(&store, start, end, workday)?
        };

        match out {
            Some(file) => {
                let path = Path::new(file);
                if path.exists() && !*force {
                    return Err(AppError::Io(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} already exists (use --force to overwrite)", path.display()),
                    )));
                }
                // Render fully first so a failing template leaves no file behind.
                let mut buf = Vec::new();
                ExportLogic::write(&mut buf, *format, tpl.as_deref(), &reports)?;
                fs::write(path, buf)?;
                notify_export_success(format.as_str(), path);
            }
            None => {
                let stdout = io::stdout();
                ExportLogic::write(stdout.lock(), *format, tpl.as_deref(), &reports)?;
            }
        }
    }

    Ok(())
}
