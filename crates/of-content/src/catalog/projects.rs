//! Project showcase entries, one planet each

use crate::color::Rgb;

/// A showcased project
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub tech_stack: &'static [&'static str],
    pub description: &'static str,
    pub link: &'static str,
    pub color: Rgb,
    pub icon: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Blog Application",
        summary: "A futuristic storytelling hub where words meet design.",
        tech_stack: &["React", "Firebase", "Tailwind CSS"],
        description: "A full-stack blogging platform with a sleek UI that allows users to create, edit, and manage blog posts. Integrated Firebase authentication ensures secure login while CRUD functionality provides smooth content management. Designed to be scalable for personal blogging or community-driven platforms.",
        link: "https://github.com/yourusername/blog-app",
        color: Rgb::hex(0xffaa00),
        icon: "📖",
    },
    Project {
        id: 2,
        title: "YouTube Clone",
        summary: "A next-gen video streaming clone that mimics YouTube's DNA.",
        tech_stack: &["React", "RapidAPI", "Material UI", "React Router"],
        description: "A modern clone of YouTube leveraging RapidAPI for video data. The platform supports authentication, video browsing, and search, offering a seamless streaming experience with React Router for navigation and Material UI for a polished interface.",
        link: "https://github.com/yourusername/youtube-clone",
        color: Rgb::hex(0xff4444),
        icon: "▶",
    },
    Project {
        id: 3,
        title: "Fitness Generator",
        summary: "Your AI-powered fitness coach in your pocket.",
        tech_stack: &["React", "Express.js", "Gemini API"],
        description: "An AI-powered fitness and meal recommendation system that generates tailored workout plans and recipes based on user details. The backend API integrates with Gemini to deliver smart, personalized health insights.",
        link: "https://github.com/yourusername/fitness-gen",
        color: Rgb::hex(0x00ff88),
        icon: "💪",
    },
    Project {
        id: 4,
        title: "Watch Movie Platform",
        summary: "A pocket cinema with your personal movie vault.",
        tech_stack: &["React", "Local Storage"],
        description: "A movie discovery app that lets users search for films, save favorites, and rate them locally. Focused on simplicity and exploring React concepts.",
        link: "https://github.com/yourusername/movie-app",
        color: Rgb::hex(0x9d4edd),
        icon: "🎬",
    },
    Project {
        id: 5,
        title: "Campus Connect",
        summary: "The ultimate survival kit for every college student.",
        tech_stack: &["React", "Node.js", "Express.js", "MongoDB", "Firebase Auth"],
        description: "A campus platform designed to solve real student struggles. From forming study groups and finding help with assignments to earning money through micro-tasks, Campus Connect makes college life easier. Groups cost a small fee to create, keeping spam away.",
        link: "https://github.com/yourusername/campus-connect",
        color: Rgb::hex(0x87ceeb),
        icon: "🎭",
    },
    Project {
        id: 6,
        title: "E-Commerce Platform",
        summary: "A digital marketplace with dual power: Admin + Customer.",
        tech_stack: &["React", "Node.js", "Express", "MongoDB", "Firebase Auth", "Stripe API"],
        description: "A full-fledged e-commerce application built with separate Admin and Customer dashboards. Admins manage products, inventory, and orders, while customers can browse, add to cart, and make purchases securely.",
        link: "https://github.com/yourusername/ecommerce-platform",
        color: Rgb::hex(0x06d6a0),
        icon: "🛍",
    },
    Project {
        id: 7,
        title: "Itinerary Generator",
        summary: "Your AI-powered travel planner that never sleeps.",
        tech_stack: &["Streamlit", "Gemini Flash API", "Python"],
        description: "A smart travel itinerary generator built with Streamlit and Gemini Flash API. It tailors trip schedules based on user preferences, location, and time.",
        link: "https://github.com/yourusername/itinerary-generator",
        color: Rgb::hex(0xff6b35),
        icon: "🌍",
    },
    Project {
        id: 8,
        title: "AI News Classifier",
        summary: "An AI journalist that reads, understands, and sorts the news.",
        tech_stack: &["Python", "BeautifulSoup", "Word2Vec", "ANN", "Scikit-learn"],
        description: "A news classification engine using Word2Vec embeddings and a simple ANN model to classify articles. Combined with a web crawler built in BeautifulSoup, it scrapes fresh articles and classifies them in real time.",
        link: "https://github.com/yourusername/ai-news-classifier",
        color: Rgb::hex(0x4ecdc4),
        icon: "📰",
    },
    Project {
        id: 9,
        title: "Hotel Complaint Classification",
        summary: "Turning hotel rants into structured insights with AI.",
        tech_stack: &["PyTorch", "Python", "NLP", "Scikit-learn"],
        description: "A machine learning pipeline for classifying hotel complaints into categories using NLP and PyTorch. It automates complaint management for hospitality businesses by quickly identifying the root cause.",
        link: "https://github.com/yourusername/hotel-complaint-nlp",
        color: Rgb::hex(0xf7931e),
        icon: "🏨",
    },
    Project {
        id: 10,
        title: "Little Soldiers Family Daycare",
        summary: "A safe digital home for kids' first learning journey.",
        tech_stack: &["Next.js", "React", "Tailwind CSS"],
        description: "A client project built with Next.js to showcase a daycare center's services. The site highlights facilities, enrollment processes, and testimonials.",
        link: "https://github.com/yourusername/daycare-website",
        color: Rgb::hex(0xff69b4),
        icon: "👶",
    },
];
