use crate::viewer::Point;

pub const SMOOTHING_FACTOR: f64 = 0.15;
pub const TICK_MS: u32 = 8;
pub const CLICKABLE_SELECTOR: &str =
    "button, a, [role=\"button\"], [data-clickable], .cursor-pointer";
const SETTLE_DISTANCE: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMode {
    Idle,
    HoveringClickable,
    Clicking,
}

impl CursorMode {
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "is-idle",
            Self::HoveringClickable => "is-hovering",
            Self::Clicking => "is-clicking",
        }
    }
}

pub fn is_clickable(matches_selector: bool, computed_cursor: Option<&str>) -> bool {
    matches_selector || computed_cursor.map(str::trim) == Some("pointer")
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorTracker {
    raw: Point,
    smoothed: Point,
    over_clickable: bool,
    pressed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CursorEvent {
    Move { at: Point, clickable: bool },
    Down,
    Up,
    Tick { factor: f64 },
}

impl CursorTracker {
    pub fn raw(&self) -> Point {
        self.raw
    }

    pub fn smoothed(&self) -> Point {
        self.smoothed
    }

    pub fn mode(&self) -> CursorMode {
        if self.pressed {
            CursorMode::Clicking
        } else if self.over_clickable {
            CursorMode::HoveringClickable
        } else {
            CursorMode::Idle
        }
    }

    pub fn apply(&mut self, event: CursorEvent) {
        match event {
            CursorEvent::Move { at, clickable } => {
                self.raw = at;
                self.over_clickable = clickable;
            }
            CursorEvent::Down => self.pressed = true,
            CursorEvent::Up => self.pressed = false,
            CursorEvent::Tick { factor } => self.tick(factor),
        }
    }

    /// One step of `smoothed += (raw - smoothed) * factor`, snapping once the
    /// gap is negligible so the follower comes to rest.
    fn tick(&mut self, factor: f64) {
        let dx = self.raw.x - self.smoothed.x;
        let dy = self.raw.y - self.smoothed.y;

        if dx.abs() < SETTLE_DISTANCE && dy.abs() < SETTLE_DISTANCE {
            self.smoothed = self.raw;
            return;
        }

        let factor = factor.clamp(0.0, 1.0);
        self.smoothed.x += dx * factor;
        self.smoothed.y += dy * factor;
    }
}
