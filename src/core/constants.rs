// Tick and timing
pub const FPS: u32 = 60;
pub const FRAME_ANIMATION_WIDTH: f64 = 3.0; // pixels per frame
pub const PIPE_ADD_INTERVAL_MS: u64 = 3000;
pub const WING_FLAP_PERIOD_MS: u64 = 500;

// Screen: background is 284x512, tiled twice
pub const SCREEN_WIDTH: u32 = 284 * 2;
pub const SCREEN_HEIGHT: u32 = 512;

// Bird
pub const BIRD_X: f64 = 50.0;
pub const BIRD_WIDTH: u32 = 32;
pub const BIRD_HEIGHT: u32 = 32;
pub const FRAME_DROP_HEIGHT: f64 = 3.0; // pixels per frame
pub const FRAME_JUMP_HEIGHT: f64 = 5.0; // pixels per frame, on average
pub const JUMP_STEPS: u32 = 20;
pub const INITIAL_JUMP_STEPS: u32 = 2;

// Pipes
pub const PIPE_WIDTH: u32 = 80;
pub const PIPE_PIECE_HEIGHT: u32 = 32;

// Gap reserved between pipes, in bird heights
pub const GAP_BIRD_HEIGHTS: u32 = 3;
// Two end caps plus one body piece
pub const RESERVED_PIPE_PIECES: u32 = 3;
pub const MIN_TOTAL_PIPE_PIECES: i64 = 2;

// Files under ~/.flappy/
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappy.log";
