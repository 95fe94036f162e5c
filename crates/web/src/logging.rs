//! Logging subscriber writing to the browser console.

use std::io;

use tracing_subscriber::{
    EnvFilter,
    fmt::MakeWriter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};
use wasm_bindgen::JsValue;

/// Filter directives baked in at build time.
const LOG_LEVEL: &str = match option_env!("RUST_LOG") {
    Some(level) => level,
    None => "info",
};

/// Buffers one formatted event and logs it to the console when dropped.
#[derive(Debug, Default)]
pub(crate) struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buffer);
        let text = text.trim_end();

        (!text.is_empty()).then(|| text.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(bytes);

        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            web_sys::console::log_1(&JsValue::from_str(&line));
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_new(LOG_LEVEL).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Timestamps are left out: the browser has no
/// system clock for `std::time`.
pub(crate) fn init_subscriber() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_target(true)
                .with_writer(MakeConsoleWriter),
        )
        .with(build_env_filter())
        .try_init()
}
