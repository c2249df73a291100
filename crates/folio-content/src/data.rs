#![forbid(unsafe_code)]

//! Compiled-in portfolio content.
//!
//! Everything here is `'static` and immutable; the renderer is a pure
//! function of these tables plus the runtime snapshot.

/// A left-to-right gradient given by its color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub stops: &'static [&'static str],
}

impl Gradient {
    pub const PURPLE_PINK: Self = Self::new(&["#a855f7", "#ec4899"]);
    pub const BLUE_CYAN: Self = Self::new(&["#3b82f6", "#06b6d4"]);
    pub const GREEN_EMERALD: Self = Self::new(&["#22c55e", "#10b981"]);
    pub const ORANGE_RED: Self = Self::new(&["#f97316", "#ef4444"]);
    pub const GREEN_TEAL: Self = Self::new(&["#22c55e", "#10b981", "#14b8a6"]);
    pub const PURPLE_INDIGO: Self = Self::new(&["#a855f7", "#8b5cf6", "#6366f1"]);

    #[must_use]
    pub const fn new(stops: &'static [&'static str]) -> Self {
        Self { stops }
    }

    /// `linear-gradient(...)` value.
    #[must_use]
    pub fn css(&self) -> String {
        format!("linear-gradient(to right, {})", self.stops.join(", "))
    }
}

/// Decorative icons used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Code,
    Brain,
    Terminal,
    Book,
    Award,
    Github,
    Linkedin,
    Mail,
    ArrowRight,
    ExternalLink,
    Menu,
    Close,
}

impl IconKind {
    /// Stable name used in the `icon-*` class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Brain => "brain",
            Self::Terminal => "terminal",
            Self::Book => "book",
            Self::Award => "award",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Mail => "mail",
            Self::ArrowRight => "arrow-right",
            Self::ExternalLink => "external-link",
            Self::Menu => "menu",
            Self::Close => "close",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Technology tags, in display order.
    pub tech: &'static [&'static str],
    pub theme: Gradient,
    pub achievement: Option<&'static str>,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: IconKind,
    pub items: &'static [&'static str],
    pub theme: Gradient,
}

/// Small pill shown under the hero headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub text: &'static str,
    pub theme: Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
}

impl SocialLink {
    /// Links leaving the site open in a new tab.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub graduation: &'static str,
    pub grade: &'static str,
    pub grade_note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub headline: &'static str,
    /// Text before the highlighted institution in the hero line.
    pub role: &'static str,
    pub institution: &'static str,
    pub tagline: &'static str,
    pub badges: &'static [Badge],
    pub featured_demo: &'static str,
    pub social: &'static [SocialLink],
    pub about: &'static str,
    pub education: Education,
    pub contact_lead: &'static str,
    /// Highlighted areas of interest in the contact pitch.
    pub interests: &'static [&'static str],
    pub email: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub copyright: &'static str,
}

impl Profile {
    /// `mailto:` link for the contact address.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "UTKARSH SINGH",
    greeting: "<Hello World />",
    headline: "Software & Full-Stack Developer & ML Enthusiast",
    role: "B.Tech CSE Student at",
    institution: "NIT Manipur",
    tagline: "Building scalable systems & AI-powered solutions",
    badges: &[
        Badge {
            text: "🎓 CGPA: 8.71",
            theme: Gradient::PURPLE_PINK,
        },
        Badge {
            text: "💻 400+ DSA Problems",
            theme: Gradient::BLUE_CYAN,
        },
        Badge {
            text: "🏆 Hackathon Winner",
            theme: Gradient::GREEN_EMERALD,
        },
    ],
    featured_demo: "https://food-sync-sigma.vercel.app/",
    social: &[
        SocialLink {
            label: "GitHub",
            href: "https://github.com/Utkarsh-Singh-u",
            icon: IconKind::Github,
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://linkedin.com/in/utkarsh-singh-275866288/",
            icon: IconKind::Linkedin,
        },
        SocialLink {
            label: "Email",
            href: "mailto:utkarshsingh7104@gmail.com",
            icon: IconKind::Mail,
        },
    ],
    about: "Passionate about building impactful solutions that bridge technology and \
            real-world problems. Currently seeking opportunities to apply my skills in \
            Software Development, full-stack development and AI.",
    education: Education {
        degree: "B.Tech Computer Science",
        institution: "NIT Manipur",
        graduation: "Expected Graduation: 2027",
        grade: "CGPA: 8.71",
        grade_note: "(over 4 semesters)",
    },
    contact_lead: "Currently seeking internship opportunities in",
    interests: &[
        "Full-Stack Development",
        "Machine Learning",
        "Software Development",
    ],
    email: "utkarshsingh7104@gmail.com",
    phone_display: "📞 +91 9889775335",
    phone_href: "tel:+919889775335",
    location: "📍 Manipur, India",
    availability: "Open to remote opportunities and relocation",
    copyright: "© 2025 Utkarsh Singh.",
};

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "FoodSync – Food Waste Management",
        description: "Full-stack MERN platform connecting NGOs, surplus food providers, and \
                      upcycling industries with role-based authentication and real-time \
                      dashboards.",
        tech: &["MongoDB", "Express.js", "React.js", "Node.js", "Tailwind CSS"],
        theme: Gradient::GREEN_TEAL,
        achievement: Some("🏆 2nd Runner-Up at REGEN Hackathon 2025 (Pan-India)"),
        link: Some("https://food-sync-sigma.vercel.app/"),
    },
    Project {
        title: "Neural Network Text & Sentiment Analysis",
        description: "Deep learning models using LSTM, GRU, and RNN for next-word prediction \
                      and movie review sentiment classification.",
        tech: &["Python", "TensorFlow", "LSTM", "GRU", "RNN", "NLP"],
        theme: Gradient::PURPLE_INDIGO,
        achievement: Some("Advanced ML/AI Implementation"),
        link: Some("https://github.com/Utkarsh-Singh-u/Sentiment-Analysis-on-Movie-Review"),
    },
];

pub const SKILLS: [Skill; 3] = [
    Skill {
        name: "Full-Stack Development",
        icon: IconKind::Code,
        items: &["MERN Stack", "React.js", "Node.js", "Express.js", "MongoDB"],
        theme: Gradient::BLUE_CYAN,
    },
    Skill {
        name: "Machine Learning & AI",
        icon: IconKind::Brain,
        items: &["Deep Learning", "Neural Networks", "NLP", "LSTM/GRU/RNN"],
        theme: Gradient::PURPLE_PINK,
    },
    Skill {
        name: "Programming & DSA",
        icon: IconKind::Terminal,
        items: &["C++", "C", "Python", "400+ Problems Solved"],
        theme: Gradient::ORANGE_RED,
    },
];

pub const ACHIEVEMENTS: [&str; 4] = [
    "🏆 2nd Runner-Up at REGEN Hackathon 2025 (Pan-India)",
    "💻 400+ Problems Solved on LeetCode & GeeksforGeeks",
    "🎓 8.71 CGPA at NIT Manipur",
    "🚀 Multiple Full-Stack Projects Deployed",
];

pub const ADDITIONAL_TECH: [&str; 9] = [
    "Git",
    "GitHub",
    "VS Code",
    "Postman",
    "Bootstrap",
    "Tailwind CSS",
    "SQL",
    "Java",
    "C",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(PROJECTS.len(), 2);
        assert_eq!(SKILLS.len(), 3);
        assert_eq!(ACHIEVEMENTS.len(), 4);
        assert_eq!(ADDITIONAL_TECH.len(), 9);
        assert_eq!(PROFILE.badges.len(), 3);
    }

    #[test]
    fn project_tech_order_is_kept() {
        assert_eq!(PROJECTS[0].tech.first(), Some(&"MongoDB"));
        assert_eq!(PROJECTS[1].tech.last(), Some(&"NLP"));
    }

    #[test]
    fn social_links() {
        let external: Vec<_> = PROFILE.social.iter().filter(|l| l.is_external()).collect();
        assert_eq!(external.len(), 2);
        assert_eq!(PROFILE.mailto(), PROFILE.social[2].href);
    }

    #[test]
    fn gradient_css() {
        assert_eq!(
            Gradient::BLUE_CYAN.css(),
            "linear-gradient(to right, #3b82f6, #06b6d4)"
        );
    }
}
