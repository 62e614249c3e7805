pub const CLOSE_BUTTON_RESERVE: f64 = 80.0;
pub const SWIPE_MIN_DISTANCE: f64 = 50.0;
pub const TAP_MAX_DISTANCE: f64 = 30.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Capability {
    #[default]
    Desktop,
    Touch,
}

impl Capability {
    pub fn detect(viewport_width: f64, touch_supported: bool) -> Self {
        if viewport_width < MOBILE_BREAKPOINT || touch_supported {
            Self::Touch
        } else {
            Self::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageCursor {
    index: usize,
    len: usize,
}

impl ImageCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn next(&mut self) {
        if self.can_navigate() {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.can_navigate() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Left,
    Middle,
    Right,
}

pub fn in_close_reserve(at: Point, viewport_width: f64) -> bool {
    at.x > viewport_width - CLOSE_BUTTON_RESERVE && at.y < CLOSE_BUTTON_RESERVE
}

impl Zone {
    pub fn classify(at: Point, viewport_width: f64) -> Option<Self> {
        if in_close_reserve(at, viewport_width) {
            return None;
        }

        let left_edge = viewport_width / 3.0;
        let right_edge = viewport_width * 2.0 / 3.0;

        Some(if at.x < left_edge {
            Self::Left
        } else if at.x > right_edge {
            Self::Right
        } else {
            Self::Middle
        })
    }

    pub fn command(self, image_count: usize) -> ViewerCommand {
        match self {
            Self::Left if image_count > 1 => ViewerCommand::Previous,
            Self::Right if image_count > 1 => ViewerCommand::Next,
            _ => ViewerCommand::Close,
        }
    }

    pub fn glyph(self, image_count: usize) -> Glyph {
        match self.command(image_count) {
            ViewerCommand::Previous => Glyph::ChevronLeft,
            ViewerCommand::Next => Glyph::ChevronRight,
            _ => Glyph::Close,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ChevronLeft,
    ChevronRight,
    Close,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::ChevronLeft => "‹",
            Self::ChevronRight => "›",
            Self::Close => "✕",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ChevronLeft => "Previous image",
            Self::ChevronRight => "Next image",
            Self::Close => "Close",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerCommand {
    Previous,
    Next,
    Close,
    Ignore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    SwipeLeft,
    SwipeRight,
    Tap,
    Ambiguous,
}

impl Gesture {
    /// `diff = start - end`, so a positive horizontal diff means the finger
    /// moved left.
    pub fn classify(start: Point, end: Point) -> Self {
        let diff_x = start.x - end.x;
        let diff_y = start.y - end.y;

        if diff_x.abs() > diff_y.abs() && diff_x.abs() >= SWIPE_MIN_DISTANCE {
            if diff_x > 0.0 {
                Self::SwipeLeft
            } else {
                Self::SwipeRight
            }
        } else if diff_x.abs() < TAP_MAX_DISTANCE && diff_y.abs() < TAP_MAX_DISTANCE {
            Self::Tap
        } else {
            Self::Ambiguous
        }
    }

    pub fn command(self, image_count: usize) -> ViewerCommand {
        match self {
            Self::SwipeLeft if image_count > 1 => ViewerCommand::Next,
            Self::SwipeRight if image_count > 1 => ViewerCommand::Previous,
            Self::Tap => ViewerCommand::Close,
            _ => ViewerCommand::Ignore,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    PassThrough,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerAction {
    Next,
    Previous,
    OpenFullscreen(usize),
    CloseFullscreen,
    PointerMove { at: Point, viewport_width: f64 },
    Click { at: Point, viewport_width: f64 },
    TouchStart(Point),
    TouchEnd(Point),
    Escape,
    Capability(Capability),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    images: ImageCursor,
    fullscreen: bool,
    zone: Option<Zone>,
    pointer: Point,
    capability: Capability,
    touch_start: Option<Point>,
}

impl ViewerState {
    pub fn new(image_count: usize, capability: Capability) -> Self {
        Self {
            images: ImageCursor::new(image_count),
            fullscreen: false,
            zone: None,
            pointer: Point::default(),
            capability,
            touch_start: None,
        }
    }

    pub fn images(&self) -> &ImageCursor {
        &self.images
    }

    pub fn current(&self) -> Option<usize> {
        self.images.current()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[cfg(test)]
    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    fn zone_navigation_active(&self) -> bool {
        self.fullscreen && self.capability == Capability::Desktop
    }

    fn gesture_navigation_active(&self) -> bool {
        self.fullscreen && self.capability == Capability::Touch
    }

    pub fn hides_cursor(&self) -> bool {
        self.zone_navigation_active()
    }

    pub fn zone_glyph(&self) -> Option<Glyph> {
        if !self.zone_navigation_active() {
            return None;
        }
        self.zone.map(|zone| zone.glyph(self.images.len()))
    }

    pub fn counter_label(&self) -> Option<String> {
        if !self.images.can_navigate() {
            return None;
        }
        self.current()
            .map(|index| format!("{} / {}", index + 1, self.images.len()))
    }

    pub fn open_fullscreen(&mut self, index: usize) -> bool {
        if !self.images.select(index) {
            return false;
        }
        self.fullscreen = true;
        self.zone = None;
        self.touch_start = None;
        true
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen = false;
        self.zone = None;
        self.touch_start = None;
    }

    pub fn escape(&mut self) -> KeyOutcome {
        if self.fullscreen {
            self.close_fullscreen();
            KeyOutcome::Consumed
        } else {
            KeyOutcome::PassThrough
        }
    }

    fn run(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Previous => self.images.prev(),
            ViewerCommand::Next => self.images.next(),
            ViewerCommand::Close => self.close_fullscreen(),
            ViewerCommand::Ignore => {}
        }
    }

    pub fn apply(&mut self, action: ViewerAction) {
        match action {
            ViewerAction::Next => self.images.next(),
            ViewerAction::Previous => self.images.prev(),
            ViewerAction::OpenFullscreen(index) => {
                self.open_fullscreen(index);
            }
            ViewerAction::CloseFullscreen => self.close_fullscreen(),
            ViewerAction::PointerMove { at, viewport_width } => {
                if self.zone_navigation_active() {
                    self.pointer = at;
                    self.zone = Zone::classify(at, viewport_width);
                }
            }
            ViewerAction::Click { at, viewport_width } => {
                if !self.zone_navigation_active() {
                    return;
                }
                let command = Zone::classify(at, viewport_width)
                    .map(|zone| zone.command(self.images.len()))
                    .unwrap_or(ViewerCommand::Ignore);
                self.run(command);
            }
            ViewerAction::TouchStart(at) => {
                if self.gesture_navigation_active() {
                    self.touch_start = Some(at);
                }
            }
            ViewerAction::TouchEnd(end) => {
                if !self.gesture_navigation_active() {
                    return;
                }
                if let Some(start) = self.touch_start.take() {
                    let command = Gesture::classify(start, end).command(self.images.len());
                    self.run(command);
                }
            }
            ViewerAction::Escape => {
                self.escape();
            }
            ViewerAction::Capability(capability) => {
                if capability != self.capability {
                    self.capability = capability;
                    self.zone = None;
                    self.touch_start = None;
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialogAction {
    Open,
    Close,
    Escape,
    Viewer(ViewerAction),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDialog {
    open: bool,
    viewer: ViewerState,
}

impl ProjectDialog {
    pub fn new(image_count: usize, capability: Capability) -> Self {
        Self {
            open: false,
            viewer: ViewerState::new(image_count, capability),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    pub fn close(&mut self) {
        self.open = false;
        self.viewer = ViewerState::new(self.viewer.images.len(), self.viewer.capability);
    }

    pub fn apply(&mut self, action: DialogAction) {
        match action {
            DialogAction::Open => self.open = true,
            DialogAction::Close => self.close(),
            DialogAction::Escape => {
                if self.viewer.escape() == KeyOutcome::PassThrough {
                    self.close();
                }
            }
            DialogAction::Viewer(action) => {
                if self.open || matches!(action, ViewerAction::Capability(_)) {
                    self.viewer.apply(action);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 1200.0;

    fn fullscreen(image_count: usize, capability: Capability) -> ViewerState {
        let mut state = ViewerState::new(image_count, capability);
        assert!(state.open_fullscreen(0));
        state
    }

    fn click(x: f64, y: f64) -> ViewerAction {
        ViewerAction::Click { at: Point::new(x, y), viewport_width: WIDTH }
    }

    #[test]
    fn next_wraps_around_three_images() {
        let mut cursor = ImageCursor::new(3);
        assert_eq!(cursor.current(), Some(0));
        cursor.next();
        assert_eq!(cursor.current(), Some(1));
        cursor.next();
        assert_eq!(cursor.current(), Some(2));
        cursor.next();
        assert_eq!(cursor.current(), Some(0));
    }

    #[test]
    fn next_and_prev_cancel_out() {
        for len in 2..6 {
            for start in 0..len {
                let mut cursor = ImageCursor::new(len);
                cursor.select(start);
                cursor.next();
                cursor.prev();
                assert_eq!(cursor.current(), Some(start));
                cursor.prev();
                cursor.next();
                assert_eq!(cursor.current(), Some(start));
            }
        }
    }

    #[test]
    fn single_and_empty_lists_do_not_move() {
        let mut single = ImageCursor::new(1);
        single.next();
        single.prev();
        assert_eq!(single.current(), Some(0));

        let mut empty = ImageCursor::new(0);
        empty.next();
        empty.prev();
        assert_eq!(empty.current(), None);
        assert!(!empty.select(0));
    }

    #[test]
    fn zones_split_viewport_in_thirds() {
        assert_eq!(Zone::classify(Point::new(0.0, 500.0), WIDTH), Some(Zone::Left));
        assert_eq!(Zone::classify(Point::new(399.9, 500.0), WIDTH), Some(Zone::Left));
        assert_eq!(Zone::classify(Point::new(400.0, 500.0), WIDTH), Some(Zone::Middle));
        assert_eq!(Zone::classify(Point::new(800.0, 500.0), WIDTH), Some(Zone::Middle));
        assert_eq!(Zone::classify(Point::new(800.1, 500.0), WIDTH), Some(Zone::Right));
    }

    #[test]
    fn close_button_corner_has_no_zone() {
        assert_eq!(Zone::classify(Point::new(1150.0, 40.0), WIDTH), None);
        assert_eq!(Zone::classify(Point::new(1150.0, 80.0), WIDTH), Some(Zone::Right));
        assert_eq!(Zone::classify(Point::new(1120.0, 40.0), WIDTH), Some(Zone::Right));
    }

    #[test]
    fn side_zones_close_when_nothing_to_page() {
        assert_eq!(Zone::Left.command(1), ViewerCommand::Close);
        assert_eq!(Zone::Right.command(0), ViewerCommand::Close);
        assert_eq!(Zone::Left.command(2), ViewerCommand::Previous);
        assert_eq!(Zone::Middle.command(5), ViewerCommand::Close);
        assert_eq!(Zone::Left.glyph(1), Glyph::Close);
        assert_eq!(Zone::Right.glyph(3), Glyph::ChevronRight);
    }

    #[test]
    fn left_click_pages_back() {
        let mut state = fullscreen(3, Capability::Desktop);
        state.apply(click(100.0, 500.0));
        assert_eq!(state.current(), Some(2));
        assert!(state.is_fullscreen());
    }

    #[test]
    fn left_click_closes_single_image() {
        let mut state = fullscreen(1, Capability::Desktop);
        state.apply(click(100.0, 500.0));
        assert!(!state.is_fullscreen());
        assert_eq!(state.current(), Some(0));
    }

    #[test]
    fn click_in_reserve_is_ignored() {
        let mut state = fullscreen(3, Capability::Desktop);
        state.apply(click(1190.0, 10.0));
        assert!(state.is_fullscreen());
        assert_eq!(state.current(), Some(0));
    }

    #[test]
    fn clicks_are_ignored_on_touch_devices() {
        let mut state = fullscreen(3, Capability::Touch);
        state.apply(click(600.0, 500.0));
        assert!(state.is_fullscreen());
    }

    #[test]
    fn pointer_move_tracks_zone_and_glyph() {
        let mut state = fullscreen(3, Capability::Desktop);
        state.apply(ViewerAction::PointerMove { at: Point::new(1000.0, 400.0), viewport_width: WIDTH });
        assert_eq!(state.zone(), Some(Zone::Right));
        assert_eq!(state.zone_glyph(), Some(Glyph::ChevronRight));
        assert_eq!(state.pointer(), Point::new(1000.0, 400.0));

        state.apply(ViewerAction::PointerMove { at: Point::new(1190.0, 20.0), viewport_width: WIDTH });
        assert_eq!(state.zone(), None);
        assert_eq!(state.zone_glyph(), None);
    }

    #[test]
    fn swipe_direction_follows_finger() {
        let start = Point::new(300.0, 400.0);
        assert_eq!(Gesture::classify(start, Point::new(240.0, 410.0)), Gesture::SwipeLeft);
        assert_eq!(Gesture::classify(start, Point::new(350.0, 400.0)), Gesture::SwipeRight);
        assert_eq!(Gesture::classify(start, Point::new(310.0, 390.0)), Gesture::Tap);
        assert_eq!(Gesture::classify(start, Point::new(260.0, 400.0)), Gesture::Ambiguous);
        assert_eq!(Gesture::classify(start, Point::new(200.0, 520.0)), Gesture::Ambiguous);
    }

    #[test]
    fn swipe_threshold_includes_exactly_fifty_pixels() {
        let start = Point::new(400.0, 300.0);
        assert_eq!(Gesture::classify(start, Point::new(350.0, 300.0)), Gesture::SwipeLeft);
        assert_eq!(Gesture::classify(start, Point::new(450.0, 300.0)), Gesture::SwipeRight);
        assert_eq!(Gesture::classify(start, Point::new(351.0, 300.0)), Gesture::Ambiguous);
    }

    #[test]
    fn swipes_step_exactly_one_image() {
        let mut state = fullscreen(4, Capability::Touch);
        state.apply(ViewerAction::TouchStart(Point::new(300.0, 400.0)));
        state.apply(ViewerAction::TouchEnd(Point::new(200.0, 420.0)));
        assert_eq!(state.current(), Some(1));

        state.apply(ViewerAction::TouchStart(Point::new(100.0, 400.0)));
        state.apply(ViewerAction::TouchEnd(Point::new(300.0, 400.0)));
        assert_eq!(state.current(), Some(0));

        state.apply(ViewerAction::TouchStart(Point::new(100.0, 400.0)));
        state.apply(ViewerAction::TouchEnd(Point::new(150.0, 400.0)));
        assert_eq!(state.current(), Some(3));
        assert!(state.is_fullscreen());
    }

    #[test]
    fn swipe_on_single_image_does_nothing() {
        let mut state = fullscreen(1, Capability::Touch);
        state.apply(ViewerAction::TouchStart(Point::new(300.0, 400.0)));
        state.apply(ViewerAction::TouchEnd(Point::new(100.0, 400.0)));
        assert!(state.is_fullscreen());
        assert_eq!(state.current(), Some(0));
    }

    #[test]
    fn tap_closes_without_moving() {
        let mut state = fullscreen(3, Capability::Touch);
        state.apply(ViewerAction::Next);
        state.apply(ViewerAction::TouchStart(Point::new(0.0, 0.0)));
        state.apply(ViewerAction::TouchEnd(Point::new(5.0, 5.0)));
        assert!(!state.is_fullscreen());
        assert_eq!(state.current(), Some(1));
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut state = fullscreen(3, Capability::Touch);
        state.apply(ViewerAction::TouchEnd(Point::new(5.0, 5.0)));
        assert!(state.is_fullscreen());
    }

    #[test]
    fn empty_project_cannot_enter_fullscreen() {
        let mut state = ViewerState::new(0, Capability::Desktop);
        assert!(!state.open_fullscreen(0));
        assert!(!state.is_fullscreen());
        assert_eq!(state.counter_label(), None);
    }

    #[test]
    fn counter_only_shown_for_multiple_images() {
        let mut state = fullscreen(3, Capability::Desktop);
        state.apply(ViewerAction::Next);
        assert_eq!(state.counter_label().as_deref(), Some("2 / 3"));
        assert_eq!(fullscreen(1, Capability::Desktop).counter_label(), None);
    }

    #[test]
    fn escape_closes_fullscreen_but_keeps_dialog() {
        let mut dialog = ProjectDialog::new(3, Capability::Desktop);
        dialog.apply(DialogAction::Open);
        dialog.apply(DialogAction::Viewer(ViewerAction::OpenFullscreen(2)));
        assert!(dialog.viewer().is_fullscreen());

        dialog.apply(DialogAction::Escape);
        assert!(dialog.is_open());
        assert!(!dialog.viewer().is_fullscreen());
        assert_eq!(dialog.viewer().current(), Some(2));

        dialog.apply(DialogAction::Escape);
        assert!(!dialog.is_open());
    }

    #[test]
    fn closing_dialog_resets_viewer() {
        let mut dialog = ProjectDialog::new(3, Capability::Touch);
        dialog.apply(DialogAction::Open);
        dialog.apply(DialogAction::Viewer(ViewerAction::OpenFullscreen(1)));
        dialog.apply(DialogAction::Viewer(ViewerAction::Next));
        dialog.apply(DialogAction::Close);

        assert_eq!(dialog.viewer(), &ViewerState::new(3, Capability::Touch));
    }

    #[test]
    fn viewer_actions_need_an_open_dialog() {
        let mut dialog = ProjectDialog::new(3, Capability::Desktop);
        dialog.apply(DialogAction::Viewer(ViewerAction::Next));
        assert_eq!(dialog.viewer().current(), Some(0));
    }

    #[test]
    fn capability_survives_dialog_reset() {
        let mut dialog = ProjectDialog::new(2, Capability::Desktop);
        dialog.apply(DialogAction::Viewer(ViewerAction::Capability(Capability::Touch)));
        dialog.apply(DialogAction::Open);
        dialog.apply(DialogAction::Close);
        assert_eq!(dialog.viewer().capability(), Capability::Touch);
    }

    #[test]
    fn capability_switch_drops_stale_zone() {
        let mut state = fullscreen(3, Capability::Desktop);
        state.apply(ViewerAction::PointerMove { at: Point::new(10.0, 400.0), viewport_width: WIDTH });
        state.apply(ViewerAction::Capability(Capability::Touch));
        assert_eq!(state.zone(), None);
        assert!(!state.hides_cursor());
        assert_eq!(Capability::detect(500.0, false), Capability::Touch);
        assert_eq!(Capability::detect(1280.0, true), Capability::Touch);
        assert_eq!(Capability::detect(1280.0, false), Capability::Desktop);
    }
}
