use leptos::prelude::*;

use super::{
    icons::IconSvg,
    reveal::RevealOnScroll,
    ui::{Badge, Card},
};
use crate::content::{Job, SkillBody, SkillGroup, EDUCATION, JOBS, SKILL_GROUPS};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-24 px-6 md:px-20 relative">
            <div class="flex flex-col md:flex-row gap-12 md:gap-24">
                <div class="md:w-1/3">
                    <div class="sticky top-32">
                        <RevealOnScroll>
                            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                                "Professional " <br />
                                <span class="text-accent italic font-serif">"Experience"</span>
                            </h2>
                            <p class="text-ink/60 mt-4 mb-8">
                                "A timeline of my journey in the creative industry, working with brands to tell their stories."
                            </p>
                        </RevealOnScroll>
                    </div>
                </div>
                <div class="md:w-2/3 space-y-12">
                    {JOBS.iter().map(|job| view! { <JobEntry job=*job /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn JobEntry(job: Job) -> impl IntoView {
    let dot = if job.current { "bg-accent" } else { "bg-ink/20" };
    view! {
        <RevealOnScroll delay=job.reveal_delay_ms>
            <div class="relative pl-8 border-l border-ink/10">
                <div class=format!(
                    "absolute -left-[5px] top-2 w-2.5 h-2.5 rounded-full {dot}",
                ) />
                <span class="text-sm font-mono text-ink/50 mb-2 block">{job.period}</span>
                <h3 class="text-2xl font-bold">{job.company}</h3>
                <p class="text-accent font-medium mb-4">{job.role}</p>
                <ul class="space-y-3 text-ink/70">
                    {job
                        .highlights
                        .iter()
                        .map(|h| {
                            view! {
                                <li class="flex items-start gap-2">
                                    <div class="w-1.5 h-1.5 rounded-full bg-ink/30 mt-2 shrink-0" />
                                    <span>
                                        <strong>{h.lead}</strong>
                                        " "
                                        {h.text}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </RevealOnScroll>
    }
}

#[component]
pub fn EducationBanner() -> impl IntoView {
    view! {
        <section class="py-12">
            <div class="container mx-auto px-6 md:px-20">
                <RevealOnScroll>
                    <div class="bg-ink text-paper rounded-3xl p-8 md:p-12 flex flex-col md:flex-row justify-between items-center gap-8 relative overflow-hidden group">
                        <div class="absolute top-0 right-0 w-64 h-64 bg-accent rounded-full blur-[100px] opacity-20 group-hover:opacity-40 transition-opacity" />
                        <div class="relative z-10">
                            <Badge class="bg-paper/10 text-paper border-none mb-4">"Education"</Badge>
                            <h3 class="text-3xl md:text-4xl font-bold">{EDUCATION.institution}</h3>
                            <p class="text-paper/60 text-lg mt-2">{EDUCATION.summary()}</p>
                        </div>
                        <div class="text-center md:text-right relative z-10 border-t md:border-t-0 md:border-l border-paper/20 pt-6 md:pt-0 md:pl-12 w-full md:w-auto">
                            <div class="text-5xl md:text-6xl font-bold text-accent">
                                {EDUCATION.gpa}
                            </div>
                            <div class="text-sm tracking-widest uppercase opacity-60 mt-1">
                                "GPA Score"
                            </div>
                        </div>
                    </div>
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-24 px-6 md:px-20 bg-white/30">
            <RevealOnScroll>
                <div class="mb-16 text-center max-w-2xl mx-auto">
                    <h2 class="text-4xl font-bold mb-4">
                        "My " <span class="text-accent italic font-serif">"Creative Arsenal"</span>
                    </h2>
                    <p class="text-ink/60">"Tools and methodologies I use to bring ideas to life."</p>
                </div>
            </RevealOnScroll>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {SKILL_GROUPS.iter().map(|group| view! { <SkillCard group=*group /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: SkillGroup) -> impl IntoView {
    let body = match group.body {
        SkillBody::Badges(skills) => view! {
            <div class="flex flex-wrap gap-2">
                {skills
                    .iter()
                    .map(|skill| view! { <Badge class="bg-white">{*skill}</Badge> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SkillBody::Proficiencies { blurb, items } => view! {
            <p class="text-sm text-ink/60 mb-4">{blurb}</p>
            <div class="space-y-2">
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        let row = if i == 0 {
                            "flex items-center justify-between text-sm font-medium"
                        } else {
                            "flex items-center justify-between text-sm font-medium mt-3"
                        };
                        view! {
                            <div class=row>
                                <span>{p.tool}</span>
                                <span class="text-accent">{p.label()}</span>
                            </div>
                            <div class="w-full bg-ink/5 rounded-full h-1.5">
                                <div class="bg-accent h-1.5 rounded-full" style=p.bar_width() />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <RevealOnScroll delay=group.reveal_delay_ms class="h-full">
            <Card class="h-full hover:border-accent/30 group">
                <div class="w-12 h-12 bg-accent/10 rounded-full flex items-center justify-center text-accent mb-6 group-hover:bg-accent group-hover:text-white transition-colors">
                    <IconSvg icon=group.icon />
                </div>
                <h3 class="text-xl font-bold mb-4">{group.title}</h3>
                {body}
            </Card>
        </RevealOnScroll>
    }
}
