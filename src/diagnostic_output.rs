use lazy_static::lazy_static;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

pub type DiagnosticSink = Box<dyn Write + Send>;

// use lazy_static initialize the diagnostic channel, stdout until replaced
lazy_static! {
    static ref DIAGNOSTIC_OUTPUT: Mutex<DiagnosticSink> = Mutex::new(Box::new(io::stdout()));
}

pub(crate) fn get_diagnostic_output() -> &'static Mutex<DiagnosticSink> {
    &DIAGNOSTIC_OUTPUT
}

/// Replace the sink `Vector::print` writes to, returning the previous one
pub fn set_diagnostic_output(sink: DiagnosticSink) -> DiagnosticSink {
    let mut guard = get_diagnostic_output()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, sink)
}

/// Write one line to the diagnostic channel
pub(crate) fn emit_line(line: &str) -> io::Result<()> {
    let mut sink = get_diagnostic_output()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    writeln!(sink, "{}", line)?;
    sink.flush()
}

// tests swapping the process wide channel hold this for their whole body
#[cfg(test)]
pub(crate) fn lock_channel() -> std::sync::MutexGuard<'static, ()> {
    static CHANNEL_LOCK: Mutex<()> = Mutex::new(());
    CHANNEL_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct Capture(pub(crate) std::sync::Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl Capture {
    pub(crate) fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
