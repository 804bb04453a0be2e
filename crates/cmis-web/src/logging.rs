#![forbid(unsafe_code)]

//! `tracing` output to the browser console.

use std::io;
use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and forwards it to `console.log` on flush/drop.
pub(crate) struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Install the console subscriber. Only the first call takes effect.
pub(crate) fn init(level: &str) {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let max_level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::WARN);
        let _ = tracing_subscriber::fmt()
            .with_writer(ConsoleMakeWriter)
            .with_ansi(false)
            .without_time()
            .with_max_level(max_level)
            .try_init();
    });
}
