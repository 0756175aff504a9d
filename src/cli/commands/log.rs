use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "stop" => Colour::Red,
        "update" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(e.date);

            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            // Pad on the visible text, then colour only the operation word.
            let padded = format!("{:<op_w$}", op_target);
            let coloured = padded.replacen(
                &e.operation,
                &color_for_operation(&e.operation).paint(e.operation.as_str()).to_string(),
                1,
            );

            println!("{:>id_w$}: {} | {} => {}", e.id, date, coloured, e.message);
        }
    }

    Ok(())
}
