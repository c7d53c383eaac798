use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Destination for the single report a [`ScopedTimer`] makes when dropped.
pub trait TimingSink {
    fn record(&mut self, label: &str, elapsed: Duration);
}

/// Writes one `"<label>: <seconds>"` line per record.
///
/// A failed write panics.
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    out: W,
}

/// Sink used by the binary.
pub type StdoutSink = WriteSink<io::Stdout>;

impl<W: Write> WriteSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriteSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TimingSink for WriteSink<W> {
    fn record(&mut self, label: &str, elapsed: Duration) {
        if let Err(err) = writeln!(self.out, "{}: {}", label, elapsed.as_secs_f64()) {
            panic!("failed to write timing for {}: {}", label, err);
        }
    }
}

/// One captured timer report.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label: String,
    pub elapsed: Duration,
}

impl Sample {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl TimingSink for Vec<Sample> {
    fn record(&mut self, label: &str, elapsed: Duration) {
        self.push(Sample {
            label: label.into(),
            elapsed,
        });
    }
}

impl<S: TimingSink + ?Sized> TimingSink for &mut S {
    fn record(&mut self, label: &str, elapsed: Duration) {
        (**self).record(label, elapsed);
    }
}

/// Measures the lifetime of its enclosing scope.
///
/// The start instant is taken in [`ScopedTimer::new`]; the elapsed time is
/// handed to the sink from `Drop`, so it is reported on every exit path,
/// unwinding included.
pub struct ScopedTimer<'s, S: TimingSink> {
    start: Instant,
    label: String,
    sink: &'s mut S,
}

impl<'s, S: TimingSink> ScopedTimer<'s, S> {
    pub fn new(label: impl Into<String>, sink: &'s mut S) -> Self {
        let label = label.into();
        log::trace!("timer started: {}", label);
        Self {
            start: Instant::now(),
            label,
            sink,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Time since construction; does not end the measurement.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<S: TimingSink> Drop for ScopedTimer<'_, S> {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        log::trace!("timer stopped: {}", self.label());
        self.sink.record(&self.label, elapsed);
    }
}
