//! overwatcher main entrypoint.

use overwatcher::run;
use overwatcher::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        if e.is_integrity_violation() {
            error("Aborting: the database holds more than one worklog for a single day.");
        }
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
