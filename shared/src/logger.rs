use std::io::Write;

use chrono::Local;
use colored::Colorize;
use env_logger::{Builder, Env};
use log::Level;

/// Installs the global logger. Honors `RUST_LOG`, defaults to `info`.
///
/// Calling it more than once is harmless: later calls are ignored.
pub fn init() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    builder.format(|buf, record| {
        let level = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN".yellow().bold(),
            Level::Info => "INFO".green(),
            Level::Debug => "DEBUG".blue(),
            Level::Trace => "TRACE".purple(),
        };

        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
            level,
            record.target(),
            record.args()
        )
    });

    _ = builder.try_init();
}
