use leptos::prelude::*;

use super::cursor::CursorHover;
use crate::motion::HoverEvent;

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-full font-medium transition-all duration-300 active:scale-95 disabled:opacity-50";
const BADGE_BASE: &str = "inline-flex items-center rounded-full border border-ink/10 bg-white/50 px-3 py-1 text-xs font-semibold uppercase tracking-wider text-ink backdrop-blur-sm";
const CARD_BASE: &str = "rounded-2xl border border-ink/5 bg-white/40 p-6 backdrop-blur-sm transition-all hover:bg-white/60 hover:shadow-xl hover:shadow-accent/5";

/// Joins the non-empty class fragments with single spaces.
pub fn class_names(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Outline,
    Ghost,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::Default => "bg-accent text-white hover:bg-accent-hover shadow-lg shadow-accent/20",
            Variant::Outline => "border-2 border-ink text-ink hover:bg-ink hover:text-paper",
            Variant::Ghost => "hover:bg-ink/5 text-ink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    fn class(self) -> &'static str {
        match self {
            Size::Sm => "h-9 px-4 text-xs",
            Size::Md => "h-11 px-6 text-sm",
            Size::Lg => "h-14 px-8 text-base",
        }
    }
}

fn button_class(variant: Variant, size: Size, extra: &str) -> String {
    class_names(&[BUTTON_BASE, variant.class(), size.class(), extra])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: Variant,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let hover = use_context::<CursorHover>();
    view! {
        <button
            type="button"
            class=button_class(variant, size, &class)
            on:mouseenter=move |_| {
                if let Some(hover) = hover {
                    hover.apply(HoverEvent::Enter);
                }
            }
            on:mouseleave=move |_| {
                if let Some(hover) = hover {
                    hover.apply(HoverEvent::Leave);
                }
            }
        >
            {children()}
        </button>
    }
}

/// An anchor styled as a [`Button`].
#[component]
pub fn ButtonLink(
    href: &'static str,
    #[prop(optional)] variant: Variant,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] class: String,
    /// Opens in a new browsing context.
    #[prop(optional)]
    new_tab: bool,
    /// Suggested filename; the link downloads instead of navigating.
    #[prop(optional)]
    download: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let hover = use_context::<CursorHover>();
    view! {
        <a
            href=href
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
            download=download
            class=button_class(variant, size, &class)
            on:mouseenter=move |_| {
                if let Some(hover) = hover {
                    hover.apply(HoverEvent::Enter);
                }
            }
            on:mouseleave=move |_| {
                if let Some(hover) = hover {
                    hover.apply(HoverEvent::Leave);
                }
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub fn Badge(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <span class=class_names(&[BADGE_BASE, &class])>{children()}</span> }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=class_names(&[CARD_BASE, &class])>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_skips_empty() {
        assert_eq!(class_names(&["a", "", "  ", "b c"]), "a b c");
        assert_eq!(class_names(&[]), "");
        assert_eq!(class_names(&[" h-full "]), "h-full");
    }

    #[test]
    fn test_button_class_defaults() {
        let class = button_class(Variant::default(), Size::default(), "");
        assert!(class.starts_with(BUTTON_BASE));
        assert!(class.contains("bg-accent text-white"));
        assert!(class.ends_with("h-11 px-6 text-sm"));
    }

    #[test]
    fn test_button_class_extra_last() {
        let class = button_class(Variant::Outline, Size::Lg, "group");
        assert!(class.contains("border-2 border-ink"));
        assert!(class.contains("h-14 px-8 text-base"));
        assert!(class.ends_with(" group"));
    }
}
