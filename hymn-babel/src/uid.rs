//! Short opaque identifiers for slides, layouts and shows.
//!
//! Ids are lowercase hex strings sliced out of a buffer of random bytes that is
//! refilled once consumed. The state sits behind a mutex so a single generator
//! can be shared across threads.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

/// Default identifier length.
pub const DEFAULT_LENGTH: usize = 11;

const BUFFER_BYTES: usize = 256;
const HEX: &[u8; 16] = b"0123456789abcdef";

static GLOBAL: Lazy<Arc<UidGenerator>> = Lazy::new(|| Arc::new(UidGenerator::new()));

/// Handle to the process-wide generator.
pub fn shared() -> Arc<UidGenerator> {
    Arc::clone(&GLOBAL)
}

/// Generate an id of `length` hex characters from the process-wide generator.
pub fn generate(length: usize) -> String {
    GLOBAL.generate(length)
}

/// Generate an id of [`DEFAULT_LENGTH`] characters.
pub fn generate_default() -> String {
    GLOBAL.generate(DEFAULT_LENGTH)
}

struct State {
    rng: StdRng,
    buffer: String,
    cursor: usize,
}

impl State {
    fn refill(&mut self) {
        let mut bytes = [0u8; BUFFER_BYTES];
        self.rng.fill(&mut bytes[..]);
        self.buffer.clear();
        for byte in bytes {
            self.buffer.push(HEX[(byte >> 4) as usize] as char);
            self.buffer.push(HEX[(byte & 0x0f) as usize] as char);
        }
        self.cursor = 0;
    }

    fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }
}

/// Thread-safe buffered id generator.
pub struct UidGenerator {
    state: Mutex<State>,
}

impl UidGenerator {
    /// A generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// A deterministic generator, for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        UidGenerator {
            state: Mutex::new(State {
                rng,
                buffer: String::with_capacity(BUFFER_BYTES * 2),
                cursor: 0,
            }),
        }
    }

    /// Returns exactly `length` characters from `[0-9a-f]`.
    pub fn generate(&self, length: usize) -> String {
        // A poisoned lock only means another caller panicked mid-slice; the
        // buffer is still valid hex.
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut id = String::with_capacity(length);
        while id.len() < length {
            if state.remaining() == 0 {
                state.refill();
            }
            let take = (length - id.len()).min(state.remaining());
            let start = state.cursor;
            id.push_str(&state.buffer[start..start + take]);
            state.cursor += take;
        }
        id
    }
}

impl Default for UidGenerator {
    fn default() -> Self {
        Self::new()
    }
}
