/// Energy level above which a cell flashes
pub const FLASH_THRESHOLD: u8 = 9;

/// Default number of steps for a timed run
pub const DEFAULT_STEPS: u32 = 100;

/// Default upper bound (exclusive) for the nova search
pub const DEFAULT_NOVA_BOUND: u32 = 999;
