//! Game constants and runtime configuration defaults

// Order generation
/// Exclusive upper bound of the filling count in the hardest bracket
pub const MAX_INGREDIENTS: u32 = 10;
/// Difficulty level used when none is given
pub const DEFAULT_LEVEL: i32 = 1;
/// Number of orders printed per invocation by default
pub const DEFAULT_ORDER_COUNT: usize = 1;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Round timer
/// Seconds a round lasts before the countdown expires
pub const DEFAULT_TIME_LIMIT_SECS: f32 = 10.0;

// Alpha map naming
/// Marker identifying a texture as an extracted alpha map
pub const ALPHA_MAP_MARKER: &str = "[a]";
/// Suffix replacing the extension of a source texture
pub const ALPHA_MAP_SUFFIX: &str = "[a].png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
