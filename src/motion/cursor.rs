/// Only pointer devices on desktop-width viewports get the custom cursor.
pub const CURSOR_MEDIA_QUERY: &str = "(min-width: 768px) and (pointer: fine)";

pub const HOVER_SCALE: f64 = 2.5;
const REST_SCALE: f64 = 1.0;

const CENTER_ON_POINTER: &str = "translate(-50%, -50%)";

pub const CURSOR_CLASS: &str = "fixed top-0 left-0 w-8 h-8 rounded-full border-2 border-accent pointer-events-none z-50 mix-blend-difference transition-transform duration-200 ease-out hidden md:block";
const HOVER_FILL: &str = "bg-accent";
const REST_FILL: &str = "bg-transparent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter,
    Leave,
}

impl HoverEvent {
    pub fn is_hovering(self) -> bool {
        self == HoverEvent::Enter
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorStyle {
    pub position: Option<PointerPosition>,
    pub hovering: bool,
}

impl CursorStyle {
    pub fn moved_to(self, position: PointerPosition) -> Self {
        Self {
            position: Some(position),
            ..self
        }
    }

    pub fn with_hover(self, hovering: bool) -> Self {
        Self { hovering, ..self }
    }

    pub fn scale(&self) -> f64 {
        if self.hovering {
            HOVER_SCALE
        } else {
            REST_SCALE
        }
    }

    /// Value for the element's `transform`, centering the circle on the pointer.
    ///
    /// Before the first move the circle sits centered on the top-left corner.
    pub fn transform(&self) -> String {
        match self.position {
            Some(PointerPosition { x, y }) => format!(
                "translate({x}px, {y}px) {CENTER_ON_POINTER} scale({})",
                self.scale()
            ),
            None => CENTER_ON_POINTER.to_string(),
        }
    }

    pub fn class(&self) -> String {
        let fill = if self.hovering { HOVER_FILL } else { REST_FILL };
        format!("{CURSOR_CLASS} {fill}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_transform_has_no_position() {
        let style = CursorStyle::default();
        assert_eq!(style.transform(), "translate(-50%, -50%)");
        assert!(style.class().ends_with("bg-transparent"));
    }

    #[test]
    fn test_transform_tracks_every_move() {
        let mut style = CursorStyle::default();
        for (x, y) in [(0, 0), (120, 48), (121, 50), (-3, 900)] {
            style = style.moved_to(PointerPosition { x, y });
            assert_eq!(
                style.transform(),
                format!("translate({x}px, {y}px) translate(-50%, -50%) scale(1)")
            );
        }
    }

    #[test]
    fn test_hover_scales_and_fills() {
        let style = CursorStyle::default()
            .moved_to(PointerPosition { x: 10, y: 20 })
            .with_hover(true);
        assert_eq!(
            style.transform(),
            "translate(10px, 20px) translate(-50%, -50%) scale(2.5)"
        );
        assert!(style.class().ends_with("bg-accent"));

        let style = style.with_hover(false);
        assert_eq!(style.scale(), 1.0);
        assert!(style.class().ends_with("bg-transparent"));
    }

    #[test]
    fn test_hover_event_flag() {
        assert!(HoverEvent::Enter.is_hovering());
        assert!(!HoverEvent::Leave.is_hovering());
    }
}
