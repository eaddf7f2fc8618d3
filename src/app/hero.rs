use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{
    icons::IconSvg,
    ui::{Badge, Button, ButtonLink, Size, Variant},
};
use crate::{
    content::{Icon, RESUME_FILENAME, RESUME_PATH},
    motion::{
        hero::{self, HERO_MOUNT_DELAY_MS},
        Stagger,
    },
};

#[component]
pub fn Hero() -> impl IntoView {
    let (hero_loaded, set_hero_loaded) = signal(false);

    // the timer is cleared by leptos-use if the hero unmounts before it fires
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| set_hero_loaded.set(true),
        HERO_MOUNT_DELAY_MS as f64,
    );
    Effect::new(move |_| start(()));

    view! {
        <section class="relative min-h-screen flex flex-col justify-center px-6 md:px-20 pt-20">
            <Staged
                stagger=hero::ACCENT_BLOB
                loaded=hero_loaded
                class="absolute right-0 top-1/4 w-[30vw] h-[30vw] rounded-full bg-accent/10 blur-[100px]"
            />
            <Staged
                stagger=hero::WARM_BLOB
                loaded=hero_loaded
                class="absolute left-10 bottom-10 w-[20vw] h-[20vw] rounded-full bg-warm/10 blur-[80px]"
            />

            <div class="max-w-4xl z-10">
                <Staged stagger=hero::BADGE loaded=hero_loaded class="overflow-hidden mb-4">
                    <Badge class="border-accent text-accent bg-accent/5">"Available for Hire"</Badge>
                </Staged>
                <Staged stagger=hero::HEADLINE_TOP loaded=hero_loaded class="overflow-hidden">
                    <h1 class="text-6xl md:text-8xl lg:text-9xl font-bold tracking-tighter leading-[0.9] mb-2">
                        "CREATIVE"
                    </h1>
                </Staged>
                <Staged stagger=hero::HEADLINE_BOTTOM loaded=hero_loaded class="overflow-hidden">
                    <h1 class="text-6xl md:text-8xl lg:text-9xl font-bold tracking-tighter leading-[0.9] text-accent">
                        "DESIGNER"
                    </h1>
                </Staged>
                <Staged stagger=hero::TAGLINE loaded=hero_loaded class="overflow-hidden mt-6">
                    <p class="text-lg md:text-2xl text-ink/60 max-w-2xl font-medium leading-relaxed">
                        "& " <span class="text-ink italic font-serif">"Visual Storyteller"</span>
                        " based in Indonesia. Specializing in Branding, Social Media Management, and Motion Graphics."
                    </p>
                </Staged>
                <Staged stagger=hero::ACTIONS loaded=hero_loaded class="overflow-hidden mt-10 flex gap-4">
                    <div class="flex gap-4">
                        <Button size=Size::Lg class="group">
                            "Let's Collaborate"
                            <IconSvg
                                icon=Icon::ArrowRight
                                size=20
                                class="ml-2 group-hover:translate-x-1 transition-transform"
                            />
                        </Button>
                        <ButtonLink
                            href=RESUME_PATH
                            download=RESUME_FILENAME
                            variant=Variant::Outline
                            size=Size::Lg
                        >
                            "Download CV"
                            <IconSvg icon=Icon::Download size=16 class="ml-2" />
                        </ButtonLink>
                    </div>
                </Staged>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce text-ink/30 hidden md:block">
                <IconSvg icon=Icon::MousePointer />
            </div>
        </section>
    }
}

/// A hero element that enters once `loaded` flips, at its own point in the cascade.
#[component]
fn Staged(
    stagger: Stagger,
    loaded: ReadSignal<bool>,
    #[prop(into)] class: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=move || format!("{class} {}", stagger.class(loaded.get()))
            style=stagger.style()
        >
            {children.map(|c| c())}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_starts_unloaded() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Hero /> }.to_html());

        assert_eq!(html.matches("translate-y-12 opacity-0").count(), 5);
        assert_eq!(html.matches("scale-0 opacity-0").count(), 2);
        assert!(!html.contains("opacity-100"));
        assert!(html.contains("transition-duration: 1000ms; transition-delay: 700ms"));
    }
}
