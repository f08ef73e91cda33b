//! Shared data types for the game session.

/// Axis-aligned rectangle in screen pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True if the two rectangles share any area. Touching edges do not
    /// count, and an empty rectangle never intersects anything.
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// One discrete event handled during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Window closed, Esc, or Ctrl+C.
    Quit,
    /// Pause or resume.
    TogglePause,
    /// Restart the bird's jump arc.
    Jump,
    /// Add a new pipe pair at the right edge. Raised by the session itself
    /// on the spawn interval.
    SpawnPipe,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Quit,
    PipeCollision,
    OutOfBounds,
}

impl EndReason {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::PipeCollision => "hit a pipe",
            Self::OutOfBounds => "left the screen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Paused,
    Terminated(EndReason),
}

/// Everything that happened during one tick, for the render and logging
/// layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickResult {
    /// A frame should be drawn for this tick.
    pub render: bool,
    /// A pipe pair was added.
    pub spawned: bool,
    /// Pipes scored this tick.
    pub scored: u32,
    /// The pause flag flipped at least once.
    pub pause_toggled: bool,
    /// The session ended this tick.
    pub ended: Option<EndReason>,
}

/// Which bird image to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingPose {
    Up,
    Down,
}

impl WingPose {
    /// Wing up during the second half of every `period_ms` cycle, down
    /// during the first. Purely decorative.
    pub fn at(elapsed_ms: u64, period_ms: u64) -> Self {
        let period = period_ms.max(2);
        if elapsed_ms % period >= period / 2 {
            Self::Up
        } else {
            Self::Down
        }
    }
}
