/// Fraction of the target's area that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// absorbs f64 rounding in the reported ratio, nothing more
const RATIO_EPSILON: f64 = 1e-6;

const BASE_CLASS: &str = "transition-all duration-1000 ease-out transform";
const HIDDEN_CLASS: &str = "opacity-0 translate-y-12";
const SHOWN_CLASS: &str = "opacity-100 translate-y-0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unobserved,
    Watching,
    Revealed,
    /// Torn down before the target was ever seen.
    Disposed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealEvent {
    /// The viewport watch was registered.
    Observe,
    /// No intersection capability in this environment.
    Unsupported,
    Intersect { is_intersecting: bool, ratio: f64 },
    /// The owning view went away.
    Teardown,
}

impl RevealState {
    pub fn next(self, event: RevealEvent) -> Self {
        use RevealEvent::*;
        use RevealState::*;
        match (self, event) {
            (Revealed, _) | (Disposed, _) => self,
            (Unobserved, Observe) => Watching,
            (Watching, Observe) => Watching,
            (_, Unsupported) => Revealed,
            (
                _,
                Intersect {
                    is_intersecting,
                    ratio,
                },
            ) => {
                if crosses_threshold(is_intersecting, ratio) {
                    Revealed
                } else {
                    self
                }
            }
            (_, Teardown) => Disposed,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Revealed
    }

    /// No further events can change the state; the watch should be released.
    pub fn is_terminal(self) -> bool {
        matches!(self, RevealState::Revealed | RevealState::Disposed)
    }
}

pub fn crosses_threshold(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio + RATIO_EPSILON >= REVEAL_THRESHOLD
}

/// Classes for a reveal wrapper, with any caller-supplied classes appended.
pub fn reveal_class(visible: bool, extra: &str) -> String {
    let state = if visible { SHOWN_CLASS } else { HIDDEN_CLASS };
    if extra.trim().is_empty() {
        format!("{BASE_CLASS} {state}")
    } else {
        format!("{BASE_CLASS} {state} {}", extra.trim())
    }
}

pub fn transition_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms")
}
