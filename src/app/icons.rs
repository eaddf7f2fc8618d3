use leptos::prelude::*;

use crate::content::Icon;

impl Icon {
    /// Inner SVG elements, drawn on a 24x24 stroke grid.
    fn paths(self) -> &'static str {
        match self {
            Icon::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Icon::Download => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/>"#
            }
            Icon::Instagram => {
                r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#
            }
            Icon::Layers => {
                r#"<path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"/><path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"/><path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"/>"#
            }
            Icon::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            Icon::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Icon::MousePointer => {
                r#"<path d="M4.037 4.688a.495.495 0 0 1 .651-.651l16 6.5a.5.5 0 0 1-.063.947l-6.124 1.58a2 2 0 0 0-1.438 1.435l-1.579 6.126a.5.5 0 0 1-.947.063z"/>"#
            }
            Icon::PenTool => {
                r#"<path d="M15.707 21.293a1 1 0 0 1-1.414 0l-1.586-1.586a1 1 0 0 1 0-1.414l5.586-5.586a1 1 0 0 1 1.414 0l1.586 1.586a1 1 0 0 1 0 1.414z"/><path d="m18 13-1.375-6.874a1 1 0 0 0-.746-.776L3.235 2.028a1 1 0 0 0-1.207 1.207L5.35 15.879a1 1 0 0 0 .776.746L13 18"/><path d="m2.3 2.3 7.286 7.286"/><circle cx="11" cy="11" r="2"/>"#
            }
            Icon::Play => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
        }
    }

    fn svg(self, size: u32, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{class}" aria-hidden="true">{}</svg>"#,
            self.paths()
        )
    }
}

#[component]
pub fn IconSvg(
    icon: Icon,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! { <span class="inline-flex shrink-0" inner_html=icon.svg(size, &class)></span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_wraps_paths() {
        let svg = Icon::Play.svg(20, "ml-2");
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="20" height="20""#));
        assert!(svg.contains(r#"class="ml-2""#));
        assert!(svg.contains(r#"<polygon points="6 3 20 12 6 21 6 3"/>"#));
        assert!(svg.ends_with("</svg>"));
    }
}
