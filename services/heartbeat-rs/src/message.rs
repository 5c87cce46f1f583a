//! Status lines and the rule that picks one per iteration.

use std::fmt;

use crate::rng::BatchSource;

const IMPORT_ERROR_EVERY: u64 = 8;
const DATABASE_EVERY: u64 = 12;
const BATCH_EVERY: u64 = 5;

/// Which standard stream a status line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The line emitted for a single iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Simulated failed import. Cosmetic only.
    ImportError,
    DatabaseConnected,
    Batch(u8),
    Running(u64),
}

impl Status {
    /// Classifies iteration `count`. Rules are checked in order 8, 12, 5 and
    /// the first match wins, so 24 and 40 are import errors.
    ///
    /// `rng` is only consulted for the batch line.
    pub fn classify<R: BatchSource + ?Sized>(count: u64, rng: &mut R) -> Self {
        if count % IMPORT_ERROR_EVERY == 0 {
            Status::ImportError
        } else if count % DATABASE_EVERY == 0 {
            Status::DatabaseConnected
        } else if count % BATCH_EVERY == 0 {
            Status::Batch(rng.next_batch())
        } else {
            Status::Running(count)
        }
    }

    pub fn stream(&self) -> Stream {
        match self {
            Status::ImportError => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::ImportError => write!(f, "❌ ImportError: No module named 'requests'"),
            Status::DatabaseConnected => write!(f, "✅ Database connection successful"),
            Status::Batch(n) => write!(f, "📊 Processing data batch {n}"),
            Status::Running(count) => write!(f, "[INFO] Application running - iteration {count}"),
        }
    }
}
