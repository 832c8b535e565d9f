//! Footer social links and in-page navigation

use crate::color::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    pub color: Rgb,
    pub description: &'static str,
}

/// Jump target inside the page
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub anchor: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: "🐱",
        url: "https://github.com/abhishekchukka",
        color: Rgb::hex(0x333333),
        description: "Code repositories",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "💼",
        url: "https://linkedin.com/in/abhishekchukka",
        color: Rgb::hex(0x0077b5),
        description: "Professional network",
    },
    SocialLink {
        name: "Email",
        icon: "📧",
        url: "mailto:john.chukka@gmail.com",
        color: Rgb::hex(0xea4335),
        description: "Direct contact",
    },
    SocialLink {
        name: "Youtube",
        icon: "⭐",
        url: "https://www.youtube.com/@abhichukka6568",
        color: Rgb::hex(0xff0000),
        description: "Video content",
    },
    SocialLink {
        name: "Instagram",
        icon: "📷",
        url: "https://instagram.com/abhishekchukka",
        color: Rgb::hex(0xe4405f),
        description: "Visual stories",
    },
    SocialLink {
        name: "Portfolio",
        icon: "🌐",
        url: "https://portfolio-seven-eosin-klhkdkfb6e.vercel.app/",
        color: Rgb::hex(0xffaa00),
        description: "Portfolio",
    },
];

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { name: "About", anchor: "about" },
    NavLink { name: "Projects", anchor: "projects" },
    NavLink { name: "Contact", anchor: "contact" },
];
