//! Per-profile page copy
//!
//! Placeholder datasets for the two personas. Every content-bearing view
//! selects its copy through `for_profile`, so the swap point in the
//! transition cycle is the only place the active dataset changes.

use crate::types::Profile;

#[derive(Debug, Clone, Copy)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ProfileContent {
    pub name: &'static str,
    pub mode_title: &'static str,
    pub mode_tagline: &'static str,
    pub glyph: &'static str,
    pub hero_intro: &'static str,
    pub hero_titles: &'static [&'static str],
    pub about: &'static str,
    pub stats: &'static [(u32, &'static str)],
    pub resume_summary: &'static str,
    pub resume_url: &'static str,
    pub skills: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub projects: &'static [ProjectEntry],
    pub certifications: &'static [&'static str],
    pub contact_email: &'static str,
    pub contact_blurb: &'static str,
}

static TECHNICAL: ProfileContent = ProfileContent {
    name: "Alex Moreau",
    mode_title: "Technical Mode",
    mode_tagline: "AI, Development & Innovation",
    glyph: "</>",
    hero_intro: "Hi, I'm Alex —",
    hero_titles: &[
        "AI/ML Engineer",
        "Full Stack Developer",
        "Data Scientist",
        "Systems Tinkerer",
        "Problem Solver",
    ],
    about: "I build machine-learning pipelines and the products around them. \
            Five years across research prototypes and production services, \
            with a soft spot for tools that make other engineers faster.",
    stats: &[(32, "Projects shipped"), (5, "Years experience"), (14, "Open-source contributions")],
    resume_summary: "Engineering roles from startup prototyping to platform \
                     teams; details in the full resume.",
    resume_url: "https://alexmoreau.dev/resume-technical.pdf",
    skills: &[
        "Rust", "Python", "TypeScript", "PyTorch", "PostgreSQL", "Kubernetes", "AWS",
    ],
    achievements: &[
        "Top-3 finish, regional ML competition 2024",
        "Speaker, two community conferences",
        "Maintainer of a 1k-star open-source crate",
    ],
    projects: &[
        ProjectEntry {
            title: "Inference Mesh",
            summary: "Self-hosted model serving with autoscaling workers.",
            tags: &["Rust", "gRPC", "CUDA"],
            link: "https://github.com/alexmoreau/inference-mesh",
        },
        ProjectEntry {
            title: "Queryboard",
            summary: "Analytics dashboards generated straight from SQL.",
            tags: &["TypeScript", "PostgreSQL"],
            link: "https://github.com/alexmoreau/queryboard",
        },
        ProjectEntry {
            title: "Tracehound",
            summary: "Distributed tracing explorer for async services.",
            tags: &["Rust", "OpenTelemetry"],
            link: "https://github.com/alexmoreau/tracehound",
        },
    ],
    certifications: &[
        "AWS Solutions Architect - Associate",
        "TensorFlow Developer Certificate",
    ],
    contact_email: "alex@alexmoreau.dev",
    contact_blurb: "Open to consulting and interesting systems problems.",
};

static COPYWRITING: ProfileContent = ProfileContent {
    name: "Alex Moreau",
    mode_title: "Copywriting Mode",
    mode_tagline: "Creative Storytelling & Marketing",
    glyph: "✎",
    hero_intro: "Hi, I'm Alex —",
    hero_titles: &[
        "Copywriter",
        "Brand Storyteller",
        "Content Strategist",
        "Editor",
    ],
    about: "I turn product jargon into stories people actually read. \
            Campaigns, landing pages, and long-form pieces for teams that \
            would rather ship than wordsmith.",
    stats: &[(120, "Articles published"), (6, "Brands served"), (40, "Campaigns launched")],
    resume_summary: "Writing and strategy engagements across tech and \
                     consumer brands; details in the full resume.",
    resume_url: "https://alexmoreau.dev/resume-copywriting.pdf",
    skills: &[
        "Brand voice", "Long-form", "Email campaigns", "SEO", "Editing", "UX writing",
    ],
    achievements: &[
        "Campaign featured in an industry year-in-review",
        "Newsletter grown to 12k subscribers",
        "Two ghostwritten pieces in national outlets",
    ],
    projects: &[
        ProjectEntry {
            title: "Launch Narrative, Devtools Startup",
            summary: "Positioning and launch copy for a developer platform.",
            tags: &["Positioning", "Web copy"],
            link: "https://alexmoreau.dev/work/devtools-launch",
        },
        ProjectEntry {
            title: "The Fieldnotes Newsletter",
            summary: "Weekly essays on writing for technical audiences.",
            tags: &["Newsletter", "Long-form"],
            link: "https://fieldnotes.alexmoreau.dev",
        },
    ],
    certifications: &["Content Marketing Certification"],
    contact_email: "words@alexmoreau.dev",
    contact_blurb: "Taking on a limited number of writing clients.",
};

pub fn for_profile(profile: Profile) -> &'static ProfileContent {
    match profile {
        Profile::Technical => &TECHNICAL,
        Profile::Copywriting => &COPYWRITING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_have_distinct_datasets() {
        let tech = for_profile(Profile::Technical);
        let copy = for_profile(Profile::Copywriting);
        assert_ne!(tech.mode_title, copy.mode_title);
        assert_ne!(tech.resume_url, copy.resume_url);
        assert!(!tech.hero_titles.is_empty());
        assert!(!copy.hero_titles.is_empty());
    }

    #[test]
    fn test_every_profile_has_stats_and_projects() {
        for profile in [Profile::Technical, Profile::Copywriting] {
            let content = for_profile(profile);
            assert!(!content.stats.is_empty());
            assert!(!content.projects.is_empty());
            assert!(!content.skills.is_empty());
        }
    }
}
