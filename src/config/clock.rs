/// Clock widget configuration constants.
pub const CLOCK_TICK_MS: u64 = 1_000; // Interval between clock pushes.
