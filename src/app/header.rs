use leptos::prelude::*;

use super::ui::{Button, ButtonLink, Size, Variant};
use crate::content::{BEHANCE_URL, BRAND, NAV_ITEMS};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full z-40 px-6 py-6 flex justify-between items-center mix-blend-multiply bg-paper/80 backdrop-blur-sm">
            <div class="text-xl font-bold tracking-tighter">{BRAND}</div>
            <div class="hidden md:flex gap-2">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <Button variant=Variant::Ghost size=Size::Sm>
                                {*item}
                            </Button>
                        }
                    })
                    .collect_view()}
                <ButtonLink href=BEHANCE_URL new_tab=true size=Size::Sm class="bg-ink text-white">
                    "Contact Me"
                </ButtonLink>
            </div>
        </nav>
    }
}
