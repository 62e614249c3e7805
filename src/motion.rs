use crate::content::SectionId;

pub const HERO_REVEAL_THRESHOLD: f64 = 0.3;
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.3;
pub const PROJECTS_REVEAL_THRESHOLD: f64 = 0.2;
pub const HERO_MAX_OFFSET_PERCENT: f64 = 30.0;
pub const HERO_MIN_OPACITY: f64 = 0.3;
pub const PARTICLE_COUNT: usize = 50;
const PARTICLE_MIN_DURATION_S: f64 = 10.0;
const PARTICLE_DURATION_SPREAD_S: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    Once,
    Retrigger,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    threshold: f64,
    mode: RevealMode,
    revealed: bool,
}

impl Reveal {
    pub const fn new(threshold: f64, mode: RevealMode) -> Self {
        Self {
            threshold,
            mode,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn observe(&mut self, intersection_ratio: f64, is_intersecting: bool) -> bool {
        let visible = is_intersecting && intersection_ratio >= self.threshold;
        let next = match self.mode {
            RevealMode::Once => self.revealed || visible,
            RevealMode::Retrigger => visible,
        };
        let changed = next != self.revealed;
        self.revealed = next;
        changed
    }
}

/// Observer settings in a form that can key an effect; `f64` is not `Eq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealConfig {
    threshold_bits: u64,
    mode: RevealMode,
}

impl RevealConfig {
    pub fn new(threshold: f64, mode: RevealMode) -> Self {
        Self {
            threshold_bits: threshold.to_bits(),
            mode,
        }
    }

    pub fn threshold(self) -> f64 {
        f64::from_bits(self.threshold_bits)
    }

    pub fn mode(self) -> RevealMode {
        self.mode
    }

    pub fn start(self) -> Reveal {
        Reveal::new(self.threshold(), self.mode)
    }
}

/// Progress of an element scrolling out past the top of the viewport:
/// 0 while its top edge is at or below the viewport top, 1 once its bottom
/// edge reaches it.
pub fn scroll_progress(element_top: f64, element_height: f64) -> f64 {
    if element_height <= 0.0 || !element_top.is_finite() {
        return 0.0;
    }
    (-element_top / element_height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub offset_percent: f64,
    pub opacity: f64,
}

impl HeroTransform {
    pub fn at(progress: f64) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            offset_percent: HERO_MAX_OFFSET_PERCENT * progress,
            opacity: 1.0 - (1.0 - HERO_MIN_OPACITY) * progress,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.2}%); opacity: {:.3};",
            self.offset_percent, self.opacity
        )
    }
}

pub fn stagger_delay_ms(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

pub fn delay_style(delay_ms: u32) -> String {
    format!("--reveal-delay: {delay_ms}ms;")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterFrom {
    Below,
    Left,
    Right,
}

impl EnterFrom {
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Below => "from-below",
            Self::Left => "from-left",
            Self::Right => "from-right",
        }
    }
}

pub fn skill_fill(level: u8, revealed: bool) -> u8 {
    if revealed {
        level.min(100)
    } else {
        0
    }
}

pub fn active_section(section_tops: &[(SectionId, f64)], probe_y: f64) -> Option<SectionId> {
    section_tops
        .iter()
        .filter(|(_, top)| *top <= probe_y)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .or_else(|| section_tops.first())
        .map(|(id, _)| *id)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
    pub duration_s: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "--from-x: {:.1}px; --from-y: {:.1}px; --to-x: {:.1}px; --to-y: {:.1}px; animation-duration: {:.2}s;",
            self.from_x, self.from_y, self.to_x, self.to_y, self.duration_s
        )
    }
}

/// `random` must yield values in `[0, 1)`.
pub fn particle_field(
    count: usize,
    width: f64,
    height: f64,
    mut random: impl FnMut() -> f64,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            from_x: random() * width,
            from_y: random() * height,
            to_x: random() * width,
            to_y: random() * height,
            duration_s: PARTICLE_MIN_DURATION_S + random() * PARTICLE_DURATION_SPREAD_S,
        })
        .collect()
}
