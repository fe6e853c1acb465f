use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the global logger. `RUST_LOG` overrides `level`.
pub fn init_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    SimpleLogger::new().with_level(level).env().init()
}
