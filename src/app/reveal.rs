use leptos::{html, prelude::*};
use leptos_use::{
    js, use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{
    reveal::{reveal_class, transition_delay_style, REVEAL_THRESHOLD},
    RevealEvent, RevealState,
};

/// Fades and slides its children into place the first time they scroll into view.
///
/// `delay` is added to the transition, in milliseconds. The viewport watch is
/// released as soon as the content has been revealed, or when the wrapper
/// unmounts first.
#[component]
pub fn RevealOnScroll(
    #[prop(optional)] delay: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealState::default());

    let step = move |event: RevealEvent| {
        let prev = state.get_untracked();
        let next = prev.next(event);
        if next != prev {
            state.set(next);
        }
        next
    };

    // leptos-use panics when it builds an observer the browser doesn't have
    let supported = use_supported(|| js!("IntersectionObserver" in &window()));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                let next = step(RevealEvent::Intersect {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
                if next.is_terminal() {
                    observer.disconnect();
                    break;
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .immediate(supported.get_untracked())
            .thresholds(vec![REVEAL_THRESHOLD]),
    );

    Effect::new(move |_| {
        if supported.get_untracked() {
            step(RevealEvent::Observe);
        } else {
            log::debug!("IntersectionObserver unavailable, revealing immediately");
            step(RevealEvent::Unsupported);
        }
    });

    on_cleanup(move || {
        stop();
        let _ = state.try_update(|s| *s = s.next(RevealEvent::Teardown));
    });

    view! {
        <div
            node_ref=target
            class=move || reveal_class(state.get().is_visible(), &class)
            style=transition_delay_style(delay)
        >
            {children()}
        </div>
    }
}
