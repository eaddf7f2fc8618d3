use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_media_query, use_window};

use crate::motion::{cursor::CURSOR_MEDIA_QUERY, CursorStyle, HoverEvent, PointerPosition};

/// Whether the pointer is over an interactive control.
///
/// Owned by the page view and handed to its controls through context.
#[derive(Debug, Clone, Copy)]
pub struct CursorHover(RwSignal<bool>);

impl CursorHover {
    pub fn provide() -> Self {
        let hover = Self(RwSignal::new(false));
        provide_context(hover);
        hover
    }

    pub fn apply(&self, event: HoverEvent) {
        self.0.set(event.is_hovering());
    }

    pub fn is_hovering(&self) -> bool {
        self.0.get()
    }
}

#[component]
pub fn CustomCursor(hover: CursorHover) -> impl IntoView {
    // effects only run in the browser, so the server never renders the dot
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    let has_pointer = use_media_query(CURSOR_MEDIA_QUERY.to_string());

    view! {
        <Show when=move || mounted.get() && has_pointer.get()>
            <CursorDot hover />
        </Show>
    }
}

#[component]
fn CursorDot(hover: CursorHover) -> impl IntoView {
    let cursor_ref = NodeRef::<html::Div>::new();
    // not a signal: moving the pointer must not re-render anything
    let style = StoredValue::new(CursorStyle::default());

    let write_transform = move || {
        let Some(el) = cursor_ref.get_untracked() else {
            return;
        };
        let transform = style.with_value(CursorStyle::transform);
        let css = web_sys::HtmlElement::style(&el);
        if let Err(e) = css.set_property("transform", &transform) {
            log::warn!("Couldn't move cursor: {e:?}");
        }
    };

    let _ = use_event_listener(use_window(), ev::mousemove, move |evt| {
        let position = PointerPosition {
            x: evt.client_x(),
            y: evt.client_y(),
        };
        style.update_value(|s| *s = s.moved_to(position));
        write_transform();
    });

    Effect::watch(
        move || hover.is_hovering(),
        move |hovering, _, _| {
            style.update_value(|s| *s = s.with_hover(*hovering));
            if style.with_value(|s| s.position.is_some()) {
                write_transform();
            }
        },
        false,
    );

    view! {
        <div
            node_ref=cursor_ref
            class=move || CursorStyle::default().with_hover(hover.is_hovering()).class()
            style=format!("transform: {}", CursorStyle::default().transform())
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_hover_settles_to_last() {
        let owner = Owner::new();
        owner.with(|| {
            use HoverEvent::*;
            let hover = CursorHover::provide();
            assert!(!hover.is_hovering());

            for event in [Enter, Leave, Enter, Leave] {
                hover.apply(event);
            }
            assert!(!hover.is_hovering());

            for event in [Leave, Enter, Leave, Enter] {
                hover.apply(event);
            }
            assert!(hover.is_hovering());
            assert!(use_context::<CursorHover>().is_some_and(|h| h.is_hovering()));
        });
    }
}
