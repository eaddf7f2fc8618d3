/// How long after mount the hero entrance starts; effectively the next paint.
pub const HERO_MOUNT_DELAY_MS: u64 = 10;

const BASE_CLASS: &str = "transition-all ease-out transform";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    /// Slides up while fading in.
    Rise,
    /// Grows from nothing while fading in.
    Bloom,
}

impl Entrance {
    fn state_class(self, loaded: bool) -> &'static str {
        match (self, loaded) {
            (Entrance::Rise, true) => "translate-y-0 opacity-100",
            (Entrance::Rise, false) => "translate-y-12 opacity-0",
            (Entrance::Bloom, true) => "scale-100 opacity-100",
            (Entrance::Bloom, false) => "scale-0 opacity-0",
        }
    }
}

/// One hero element's slot in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub entrance: Entrance,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Stagger {
    const fn rise(delay_ms: u32) -> Self {
        Self {
            entrance: Entrance::Rise,
            delay_ms,
            duration_ms: 1000,
        }
    }

    const fn bloom(delay_ms: u32) -> Self {
        Self {
            entrance: Entrance::Bloom,
            delay_ms,
            duration_ms: 2000,
        }
    }

    pub fn class(&self, loaded: bool) -> String {
        format!("{BASE_CLASS} {}", self.entrance.state_class(loaded))
    }

    pub fn style(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms",
            self.duration_ms, self.delay_ms
        )
    }
}

pub const ACCENT_BLOB: Stagger = Stagger::bloom(0);
pub const WARM_BLOB: Stagger = Stagger::bloom(300);
pub const BADGE: Stagger = Stagger::rise(100);
pub const HEADLINE_TOP: Stagger = Stagger::rise(200);
pub const HEADLINE_BOTTOM: Stagger = Stagger::rise(300);
pub const TAGLINE: Stagger = Stagger::rise(500);
pub const ACTIONS: Stagger = Stagger::rise(700);
