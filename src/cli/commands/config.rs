use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            print!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                cfg.save_to(&path)?;
            }

            let fallback = default_editor();
            let requested = editor.clone().unwrap_or_else(|| fallback.clone());

            let ok = Command::new(&requested)
                .arg(&path)
                .status()
                .map(|s| s.success())
                .unwrap_or(false);

            if ok {
                success(format!("Configuration file edited using '{requested}'"));
            } else if requested != fallback {
                warning(format!(
                    "Editor '{requested}' not available, falling back to '{fallback}'"
                ));
                let status = Command::new(&fallback)
                    .arg(&path)
                    .status()
                    .map_err(|e| AppError::Config(format!("cannot run '{fallback}': {e}")))?;
                if !status.success() {
                    return Err(AppError::Config(format!("'{fallback}' exited with {status}")));
                }
                success(format!("Configuration file edited using '{fallback}'"));
            } else {
                return Err(AppError::Config(format!("failed to run editor '{requested}'")));
            }

            // Reject an edit that no longer parses.
            Config::load_from(&path)?.workday()?;
        }
    }

    Ok(())
}
