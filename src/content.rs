//! Static page content.
//!
//! Every section of the page renders by mapping over the arrays in this
//! module, so copy changes never touch the components.

pub const OWNER_NAME: &str = "Chevhin Walidain";
pub const BRAND: &str = "CHEVHIN.";
pub const CONTACT_EMAIL: &str = "hello@chevhin.design";
pub const CONTACT_MAILTO: &str = "mailto:hello@chevhin.design";
pub const BEHANCE_URL: &str =
    "https://www.behance.net/gallery/225930295/Portfolio-Chevhin-Walidain-25#";

/// Same-origin path of the résumé served from the assets dir.
pub const RESUME_PATH: &str = "/Chevhin-porto.pdf";
/// Filename the browser suggests when the résumé is downloaded.
pub const RESUME_FILENAME: &str = "Chevhin Porto.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Download,
    Instagram,
    Layers,
    Linkedin,
    Mail,
    MousePointer,
    PenTool,
    Play,
}

#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub lead: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub period: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    /// The current position gets the accent timeline dot.
    pub current: bool,
    pub highlights: &'static [Highlight],
    pub reveal_delay_ms: u32,
}

pub const JOBS: &[Job] = &[
    Job {
        period: "Oct 2023 - Present",
        company: "Golden The Tiger",
        role: "Creative Content Specialist & Social Media Handler",
        current: true,
        highlights: &[
            Highlight {
                lead: "Creative Vision:",
                text: "Led development of brand's creative vision and identity.",
            },
            Highlight {
                lead: "Content Creation:",
                text: "Managed end-to-end creation including photoshoots and post-production.",
            },
            Highlight {
                lead: "Strategy:",
                text: "Implemented strategies to enhance brand presence and community growth.",
            },
        ],
        reveal_delay_ms: 200,
    },
    Job {
        period: "Sept 2023 - Nov 2023",
        company: "Nataroe Active",
        role: "Graphic & Motion Designer (Intern)",
        current: false,
        highlights: &[
            Highlight {
                lead: "Asset Assembly:",
                text: "Sourced and assembled assets into cohesive designs.",
            },
            Highlight {
                lead: "Visual Consistency:",
                text: "Ensured brand alignment across all digital platforms.",
            },
        ],
        reveal_delay_ms: 400,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub year: u16,
    /// Kept as text so the banner shows the exact figure.
    pub gpa: &'static str,
}

impl Education {
    pub fn summary(&self) -> String {
        format!("{}, {}", self.degree, self.year)
    }
}

pub const EDUCATION: Education = Education {
    institution: "Telkom University",
    degree: "Bachelor of Design",
    year: 2025,
    gpa: "3.52",
};

#[derive(Debug, Clone, Copy)]
pub struct Proficiency {
    pub tool: &'static str,
    pub percent: u8,
}

impl Proficiency {
    /// Width for the filled part of the bar, clamped to a full bar.
    pub fn bar_width(&self) -> String {
        format!("width: {}%", self.percent.min(100))
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SkillBody {
    Badges(&'static [&'static str]),
    Proficiencies {
        blurb: &'static str,
        items: &'static [Proficiency],
    },
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub icon: Icon,
    pub title: &'static str,
    pub body: SkillBody,
    pub reveal_delay_ms: u32,
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        icon: Icon::PenTool,
        title: "Design & Branding",
        body: SkillBody::Badges(&[
            "Graphic Design",
            "Visual Storytelling",
            "Layouting",
            "Brand Identity",
        ]),
        reveal_delay_ms: 100,
    },
    SkillGroup {
        icon: Icon::Play,
        title: "Motion & Content",
        body: SkillBody::Badges(&[
            "Motion Design",
            "Content Creation",
            "Digital Imaging",
            "Video Editing",
        ]),
        reveal_delay_ms: 200,
    },
    SkillGroup {
        icon: Icon::Layers,
        title: "Software Stack",
        body: SkillBody::Proficiencies {
            blurb: "Mastery in industry standard tools.",
            items: &[
                Proficiency {
                    tool: "Adobe Creative Cloud",
                    percent: 90,
                },
                Proficiency {
                    tool: "Affinity Suite",
                    percent: 85,
                },
            ],
        },
        reveal_delay_ms: 300,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

// No public profiles yet, the buttons are placeholders.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Instagram",
        href: "#",
        icon: Icon::Instagram,
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: Icon::Linkedin,
    },
];

/// Desktop navigation buttons, followed by the "Contact Me" link.
pub const NAV_ITEMS: &[&str] = &["Works", "About"];

pub const COPYRIGHT: &str = "© 2025 Chevhin Portfolio.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_delays_are_staggered() {
        let delays = JOBS.iter().map(|j| j.reveal_delay_ms).collect::<Vec<_>>();
        assert_eq!(delays, vec![200, 400]);
        assert!(JOBS[0].current);
        assert!(JOBS.iter().skip(1).all(|j| !j.current));
    }

    #[test]
    fn test_skill_card_delays() {
        let delays = SKILL_GROUPS
            .iter()
            .map(|g| g.reveal_delay_ms)
            .collect::<Vec<_>>();
        assert_eq!(delays, vec![100, 200, 300]);
    }

    #[test]
    fn test_proficiencies_in_range() {
        for group in SKILL_GROUPS {
            if let SkillBody::Proficiencies { items, .. } = group.body {
                assert!(!items.is_empty());
                for item in items {
                    assert!(item.percent <= 100, "{} out of range", item.tool);
                }
            }
        }
    }

    #[test]
    fn test_proficiency_bar_clamps() {
        let p = Proficiency {
            tool: "Overachiever",
            percent: 140,
        };
        assert_eq!(p.bar_width(), "width: 100%");
        assert_eq!(p.label(), "140%");

        let p = Proficiency {
            tool: "Affinity Suite",
            percent: 85,
        };
        assert_eq!(p.bar_width(), "width: 85%");
    }

    #[test]
    fn test_badge_groups_have_four_skills() {
        let badge_groups = SKILL_GROUPS
            .iter()
            .filter_map(|g| match g.body {
                SkillBody::Badges(b) => Some(b),
                SkillBody::Proficiencies { .. } => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(badge_groups.len(), 2);
        assert!(badge_groups.iter().all(|b| b.len() == 4));
    }

    #[test]
    fn test_resume_download() {
        assert!(RESUME_PATH.starts_with('/'));
        assert!(RESUME_PATH.ends_with(".pdf"));
        assert_eq!(RESUME_FILENAME, "Chevhin Porto.pdf");
    }

    #[test]
    fn test_mailto_matches_email() {
        assert_eq!(CONTACT_MAILTO, format!("mailto:{CONTACT_EMAIL}"));
    }

    #[test]
    fn test_education_summary() {
        assert_eq!(EDUCATION.summary(), "Bachelor of Design, 2025");
        assert_eq!(EDUCATION.gpa, "3.52");
    }
}
