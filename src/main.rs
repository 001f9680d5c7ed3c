//! rAttendance main entrypoint.

use env_logger::Env;
use rattendance::run;
use rattendance::ui::messages::error;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
