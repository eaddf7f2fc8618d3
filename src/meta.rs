//! Document-level configuration: metadata, social previews, fonts, palette.

use serde::Serialize;

use crate::{
    content::{EDUCATION, JOBS, OWNER_NAME, SOCIAL_LINKS},
    error::SiteError,
};

pub const SITE_URL: &str = "https://chevhin-walidain.netlify.app/";
pub const TITLE: &str = "Chevhin Walidain Portfolio";
pub const DESCRIPTION: &str = "Portfolio of Chevhin Walidain";
pub const LANG: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OgImage {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub site_name: &'static str,
    pub image: OgImage,
    pub locale: &'static str,
    pub kind: &'static str,
}

pub const OPEN_GRAPH: OpenGraph = OpenGraph {
    title: TITLE,
    description: DESCRIPTION,
    url: SITE_URL,
    site_name: TITLE,
    image: OgImage {
        url: "https://chevhin-walidain.netlify.app/og.png",
        width: 1200,
        height: 630,
        alt: TITLE,
    },
    locale: "id_ID",
    kind: "website",
};

#[derive(Debug, Clone, Copy)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
}

pub const TWITTER_CARD: TwitterCard = TwitterCard {
    card: "summary_large_image",
    title: TITLE,
    description: DESCRIPTION,
    images: &[OPEN_GRAPH.image.url],
};

/// A web font and the CSS variable the stylesheet reads it from.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    pub family: &'static str,
    pub css_var: &'static str,
}

pub const SANS: Font = Font {
    family: "Geist",
    css_var: "--font-geist-sans",
};

pub const MONO: Font = Font {
    family: "Geist Mono",
    css_var: "--font-geist-mono",
};

/// Google Fonts stylesheet carrying both families.
pub fn fonts_href() -> String {
    let families = [SANS, MONO]
        .iter()
        .map(|f| format!("family={}:wght@100..900", f.family.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");
    format!("https://fonts.googleapis.com/css2?{families}&display=swap")
}

/// Brand colors the document head needs. The full theme lives in `input.css`.
pub mod palette {
    pub const PAPER: &str = "#fdfcf6";
}

#[derive(Serialize, Debug)]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PersonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    job_title: &'static str,
    description: &'static str,
    url: &'static str,
    image: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    works_for: Option<Organization>,
    alumni_of: Organization,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    same_as: Vec<&'static str>,
}

/// `schema.org/Person` description of the page owner, rendered as JSON-LD.
pub fn person_json_ld() -> Result<String, SiteError> {
    let current = JOBS.iter().find(|j| j.current);
    let schema = PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: OWNER_NAME,
        job_title: current.map(|j| j.role).unwrap_or("Creative Designer"),
        description: DESCRIPTION,
        url: SITE_URL,
        image: OPEN_GRAPH.image.url,
        works_for: current.map(|j| Organization {
            kind: "Organization",
            name: j.company,
        }),
        alumni_of: Organization {
            kind: "CollegeOrUniversity",
            name: EDUCATION.institution,
        },
        same_as: SOCIAL_LINKS
            .iter()
            .map(|l| l.href)
            .filter(|href| href.starts_with("http"))
            .collect(),
    };
    // inlined into a script element, so no raw '<' may appear
    Ok(serde_json::to_string(&schema)?.replace('<', "\\u003c"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_graph_image() {
        assert_eq!(OPEN_GRAPH.image.width, 1200);
        assert_eq!(OPEN_GRAPH.image.height, 630);
        assert!(OPEN_GRAPH.image.url.starts_with(SITE_URL));
        assert_eq!(OPEN_GRAPH.locale, "id_ID");
    }

    #[test]
    fn test_twitter_card_reuses_og_image() {
        assert_eq!(TWITTER_CARD.card, "summary_large_image");
        assert_eq!(TWITTER_CARD.images, &[OPEN_GRAPH.image.url]);
    }

    #[test]
    fn test_fonts_href() {
        let href = fonts_href();
        assert!(href.starts_with("https://fonts.googleapis.com/css2?"));
        assert!(href.contains("family=Geist:wght"));
        assert!(href.contains("family=Geist+Mono:wght"));
        assert!(href.ends_with("display=swap"));
    }

    #[test]
    fn test_paper_matches_stylesheet_theme() {
        let css = include_str!("../input.css");
        assert!(css.contains(&format!("--color-paper: {};", palette::PAPER)));
    }

    #[test]
    fn test_person_json_ld() {
        let raw = person_json_ld().expect("should serialize");
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], "Chevhin Walidain");
        assert_eq!(value["worksFor"]["name"], "Golden The Tiger");
        assert_eq!(value["alumniOf"]["name"], "Telkom University");
        // placeholder social links are not real profiles
        assert!(value.get("sameAs").is_none());
    }
}
