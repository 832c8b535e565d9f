//! Work and volunteering history shown on the timeline

use serde::{Serialize, Deserialize};

use crate::color::Rgb;

/// Kind of engagement; drives the accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Internship,
    Freelance,
    FullTime,
    Volunteer,
}

impl ExperienceKind {
    pub fn color(self) -> Rgb {
        match self {
            ExperienceKind::Internship => Rgb::hex(0xffaa00),
            ExperienceKind::Freelance => Rgb::hex(0x87ceeb),
            ExperienceKind::FullTime => Rgb::hex(0xff6b35),
            // No dedicated accent
            ExperienceKind::Volunteer => Rgb::hex(0xffaa00),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceKind::Internship => "Internship",
            ExperienceKind::Freelance => "Freelance",
            ExperienceKind::FullTime => "Full-time",
            ExperienceKind::Volunteer => "Volunteer",
        }
    }
}

/// One timeline entry
#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub kind: ExperienceKind,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub achievement: &'static str,
}

impl Experience {
    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Skills shown on the compact mobile card
    pub fn headline_skills(&self) -> &'static [&'static str] {
        &self.skills[..self.skills.len().min(5)]
    }
}

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Frontend Intern",
        company: "Woodesy",
        period: "2024",
        kind: ExperienceKind::Internship,
        description: "Built interactive UI components and optimized website performance. Collaborated with the team to deliver seamless user experiences using modern React patterns. Focused on creating responsive designs that work across all device types.",
        skills: &["Next.js", "React", "Microsoft SQL Server", "Performance Optimization", "Responsive Design"],
        achievement: "Crafted responsive UI components with Next.js",
    },
    Experience {
        role: "Full Stack Developer",
        company: "Daycare Center",
        period: "2024",
        kind: ExperienceKind::Freelance,
        description: "Handled end-to-end development from design to deployment. Matched the client's needs with designs and color patterns, built user-friendly interfaces, and ensured smooth functionality.",
        skills: &["Next.js", "Client Management", "UI/UX Design"],
        achievement: "Delivered the required application on time",
    },
    Experience {
        role: "Creative Volunteer",
        company: "NGO BASS",
        period: "2023-present",
        kind: ExperienceKind::Volunteer,
        description: "Created presentations and digital content for community awareness campaigns and reports. Developed engaging visual content that communicated important social messages.",
        skills: &["Content Creation", "Presentation Design", "Community Outreach", "Visual Design"],
        achievement: "Reached 500+ community members through digital campaigns",
    },
];
