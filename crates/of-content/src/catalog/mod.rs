//! Static content tables

mod experience;
mod links;
mod projects;

pub use experience::{Experience, ExperienceKind, EXPERIENCES};
pub use links::{NavLink, SocialLink, NAV_LINKS, SOCIAL_LINKS};
pub use projects::{Project, PROJECTS};

use of_core::navigation::Surface;

/// Hero copy
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub name: &'static str,
    pub subtitles: &'static [&'static str],
    pub actions: &'static [&'static str],
    pub owner: &'static str,
}

pub static HERO: Hero = Hero {
    name: "ABHISHEK CHUKKA",
    subtitles: &[
        "Full Stack Developer",
        "Machine Learning Engineer",
        "Creative Problem Solver",
    ],
    actions: &["Portfolio", "About", "Contact"],
    owner: "Abhishek Chukka",
};

/// Technologies shown as badges in the About section
pub static TECH_SKILLS: &[&str] = &[
    "C", "CSS", "Dart", "Express", "Firebase", "Flask", "GitHub", "Java", "MySQL",
    "Next.js", "Node.js", "PostgreSQL", "Postman", "Python", "PyTorch", "React",
    "Tailwind", "TypeScript", "VS Code", "Vite",
];

/// Number of items behind a navigable surface
pub fn surface_len(surface: Surface) -> usize {
    match surface {
        Surface::Projects => PROJECTS.len(),
        Surface::Timeline | Surface::JourneyCards => EXPERIENCES.len(),
        Surface::Subtitles => HERO.subtitles.len(),
    }
}
