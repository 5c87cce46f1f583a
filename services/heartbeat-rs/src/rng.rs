use chrono::Utc;

pub const BATCH_MIN: u8 = 1;
pub const BATCH_MAX: u8 = 100;

/// Source of batch numbers for the "processing data batch" line.
pub trait BatchSource {
    /// Returns a number in `BATCH_MIN..=BATCH_MAX`.
    fn next_batch(&mut self) -> u8;
}

/// xorshift32, good enough for a display-only number.
#[derive(Copy, Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        // state 0 is a fixed point
        Self { state: seed.max(1) }
    }

    /// Seeded from the wall clock, so every run gets different batch numbers.
    pub fn from_clock() -> Self {
        let now = Utc::now();
        let seed = now.timestamp_subsec_nanos() ^ (now.timestamp() as u32);
        Self::new(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl BatchSource for XorShift32 {
    fn next_batch(&mut self) -> u8 {
        let span = u32::from(BATCH_MAX - BATCH_MIN) + 1;
        BATCH_MIN + (self.next_u32() % span) as u8
    }
}
