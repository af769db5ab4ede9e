//! Browser console plumbing: a `log` backend and a panic hook.

use log::{LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        write_console(record);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(record: &Record) {
    use log::Level;
    let msg = format!("[bento] {}", record.args()).into();
    match record.level() {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Info => web_sys::console::info_1(&msg),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
    }
}

/// Route `log` output to the console. Later calls only adjust the level.
pub fn init_logger(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Parse a level name as given from JS (`"warn"`, `"debug"`, ...).
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Warn)
}

pub fn panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("bento WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
