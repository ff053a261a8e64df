use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

pub fn wasm_log<S: std::fmt::Display>(msg: S) {
    console_log(&msg.to_string());
}

pub fn wasm_logf(args: std::fmt::Arguments) {
    console_log(&args.to_string());
}

#[macro_export]
macro_rules! wasm_log {
    ($($t:tt)*) => ($crate::utils::wasm_logger::wasm_logf(format_args!($($t)*)))
}

/// `log` sink that writes every enabled record to the browser console.
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            wasm_logf(format_args!(
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(LevelFilter::Trace);

/// Installs the console sink. Only meaningful on wasm32, where the console import exists.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
