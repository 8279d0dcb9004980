//! Generation constants and runtime configuration defaults

// Grid bounds outside which generation is skipped
/// Smallest accepted grid dimension
pub const MIN_GRID_DIMENSION: usize = 1;
/// Largest accepted grid dimension
pub const MAX_GRID_DIMENSION: usize = 51;

/// Fewest colours an inventory needs before generation is attempted
pub const MIN_COLOURS: usize = 2;

/// Random draws per cell before falling back to a linear scan of the pool
pub const SELECTION_DRAW_ATTEMPTS: usize = 20;

/// Full-grid attempts before reporting a generation failure
pub const MAX_GENERATION_ATTEMPTS: usize = 1000;

// Defaults for a fresh session
/// Default number of rows (major axis)
pub const DEFAULT_ROWS: usize = 20;
/// Default number of columns (minor axis)
pub const DEFAULT_COLUMNS: usize = 25;
/// Starting palette as (colour id, quantity) pairs
pub const DEFAULT_PALETTE: [(&str, usize); 5] = [
    ("#F5D0A9", 100),
    ("#F5A9BC", 100),
    ("#A9BCF5", 100),
    ("#A9F5D0", 100),
    ("#F3F781", 100),
];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Extension of inventory documents accepted as input
pub const INPUT_EXTENSION: &str = "json";
/// Edge length in pixels of one panel in exported images
pub const DEFAULT_CELL_SIZE: u32 = 16;
/// Largest accepted panel edge length in pixels
pub const MAX_CELL_SIZE: u32 = 256;
