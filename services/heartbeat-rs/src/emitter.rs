//! The heartbeat loop.
//!
//! Each pass bumps the counter, writes exactly one [`Status`] line to the
//! stream it belongs on and then sleeps for the configured interval.

use std::io::{self, Write};

use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::message::{Status, Stream};
use crate::rng::{BatchSource, XorShift32};

pub struct Emitter<O, E, R> {
    count: u64,
    out: O,
    err: E,
    rng: R,
}

impl Emitter<io::Stdout, io::Stderr, XorShift32> {
    /// Emitter on the process' stdout/stderr with a clock-seeded rng.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr(), XorShift32::from_clock())
    }
}

impl<O: Write, E: Write, R: BatchSource> Emitter<O, E, R> {
    pub fn new(out: O, err: E, rng: R) -> Self {
        Self {
            count: 0,
            out,
            err,
            rng,
        }
    }

    /// Number of iterations run so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Runs one iteration without sleeping.
    pub fn tick(&mut self) -> Result<Status> {
        self.count = self.count.wrapping_add(1);
        let status = Status::classify(self.count, &mut self.rng);

        let w: &mut dyn Write = match status.stream() {
            Stream::Stdout => &mut self.out,
            Stream::Stderr => &mut self.err,
        };
        writeln!(w, "{status}")?;
        // pipes are block buffered, log collectors want the line now
        w.flush()?;

        debug!(count = self.count, ?status, "tick");
        Ok(status)
    }

    /// Tick, sleep, repeat. Only returns early on a write error or once
    /// `max_iterations` is reached, if set.
    pub async fn run(&mut self, config: &Config) -> Result<()> {
        let interval = config.interval();
        info!(?interval, max_iterations = config.max_iterations, "heartbeat loop starting");

        loop {
            self.tick()?;
            if config.max_iterations != 0 && self.count >= config.max_iterations {
                info!(count = self.count, "iteration limit reached");
                return Ok(());
            }
            sleep(interval).await;
        }
    }
}
