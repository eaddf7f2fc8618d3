use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    cursor::{CursorHover, CustomCursor},
    footer::Footer,
    header::NavBar,
    hero::Hero,
    resume::{EducationBanner, Experience, Skills},
};
use crate::meta;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let hover = CursorHover::provide();

    view! {
        <Title text=meta::TITLE />
        <div class="min-h-screen bg-paper text-ink font-sans selection:bg-accent selection:text-white [@media(pointer:fine)]:md:cursor-none overflow-x-hidden">
            <CustomCursor hover />
            <NavBar />
            <Hero />
            <Experience />
            <EducationBanner />
            <Skills />
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos_meta::provide_meta_context;

    use super::*;
    use crate::content::{BEHANCE_URL, RESUME_FILENAME};

    fn render_page() -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_meta_context();
            view! { <PortfolioPage /> }.to_html()
        })
    }

    #[test]
    fn test_first_paint_is_hidden() {
        let html = render_page();
        let hidden = html
            .matches("duration-1000 ease-out transform opacity-0 translate-y-12")
            .count();
        assert_eq!(hidden, 9);
        assert!(!html.contains("opacity-100 translate-y-0"));
        assert!(!html.contains("translate-y-0 opacity-100"));
    }

    #[test]
    fn test_cursor_is_client_only() {
        let html = render_page();
        assert!(!html.contains("mix-blend-difference"));
        assert!(html.contains("[@media(pointer:fine)]:md:cursor-none"));
        assert!(!html.contains(" cursor-none "));
    }

    #[test]
    fn test_resume_and_contact_links() {
        let html = render_page();
        assert!(html.contains(&format!("download=\"{RESUME_FILENAME}\"")));
        let contact = html
            .split("<a ")
            .find(|a| a.contains(BEHANCE_URL))
            .expect("contact link is rendered");
        assert!(contact.contains("target=\"_blank\""));
        assert!(contact.contains("noopener"));
    }
}
