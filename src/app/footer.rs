use leptos::prelude::*;

use super::{
    icons::IconSvg,
    reveal::RevealOnScroll,
    ui::{ButtonLink, Size},
};
use crate::content::{Icon, CONTACT_EMAIL, CONTACT_MAILTO, COPYRIGHT, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-20 px-6 md:px-20 border-t border-ink/10 bg-white/40 mt-12">
            <div class="flex flex-col md:flex-row justify-between items-end">
                <RevealOnScroll>
                    <div>
                        <h2 class="text-5xl md:text-7xl font-bold tracking-tighter mb-6">
                            "LET'S CREATE " <br /> "SOMETHING "
                            <span class="text-accent italic font-serif">"WILD."</span>
                        </h2>
                        <div class="flex gap-4">
                            <ButtonLink
                                href=CONTACT_MAILTO
                                size=Size::Lg
                                class="rounded-full px-8 bg-ink text-white hover:bg-accent"
                            >
                                <IconSvg icon=Icon::Mail size=16 class="mr-2" />
                                {CONTACT_EMAIL}
                            </ButtonLink>
                        </div>
                    </div>
                </RevealOnScroll>
                <div class="flex gap-4 mt-10 md:mt-0">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    aria-label=link.label
                                    class="p-3 bg-white border border-ink/10 rounded-full hover:bg-accent hover:text-white transition-colors"
                                >
                                    <IconSvg icon=link.icon size=20 />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="mt-12 pt-8 border-t border-ink/5 flex justify-between text-sm text-ink/40">
                <p>{COPYRIGHT}</p>
                <p>"Developed with Leptos"</p>
            </div>
        </footer>
    }
}
