//! Everything the page displays. Compiled in; there is no runtime fetch.

use std::fmt;

macro_rules! unsplash {
    ($photo:literal) => {
        concat!(
            "https://images.unsplash.com/",
            $photo,
            "?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80"
        )
    };
}

pub const OWNER_NAME: &str = "John Doe";
pub const SITE_LOGO: &str = "Vision";
pub const PROFILE_IMAGE: &str = "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200";
pub const GITHUB_URL: &str = "https://github.com/VisionShikwambane";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/vision-shikwambane/";

/// Résumé offered by the About section's download button.
pub const CV_URL: &str = "/cv.pdf";

pub const CONTACT_EMAIL: &str = "contact@example.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_LOCATION: &str = "San Francisco, CA";

/// Role titles cycled by the hero typewriter.
pub static HERO_TITLES: &[&str] = &["Frontend Developer", "UI/UX Designer", "Problem Solver"];

/// Paragraphs introducing the owner in the About section.
pub static ABOUT_INTRO: &[&str] = &[
    "I'm a passionate frontend developer with 5+ years of experience in building modern web applications. I specialize in React and love creating beautiful, responsive user interfaces.",
    "My journey in web development started with a curiosity about how websites work, and it has evolved into a career where I get to build amazing digital experiences every day.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Work,
    Education,
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub company: Option<&'static str>,
    pub kind: TimelineKind,
    pub description: &'static str,
}

pub static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "Aug 2024 - Present",
        title: "Junior Software Developer",
        company: Some("CCG Systems"),
        kind: TimelineKind::Work,
        description: "Assisted in developing and maintaining ERP modules with Angular, .NET, and SQL, collaborated with senior developers on debugging and code reviews, and worked with cross-functional teams to gather requirements and deliver solutions.",
    },
    TimelineEntry {
        period: "Feb 2024 - Jul 2024",
        title: "Software Developer Trainee",
        company: Some("CCG Systems"),
        kind: TimelineKind::Work,
        description: "Assisted in ERP development using Angular, .NET, and SQL, collaborated on debugging, code reviews, and requirement gathering with cross-functional teams.",
    },
    TimelineEntry {
        period: "Jan 2023 - Nov 2023",
        title: "Full Stack Software Developer Intern",
        company: None,
        kind: TimelineKind::Education,
        description: "Developed an Electronic Document Management System (EDMS) using ASP.NET CORE 6, Angular, Microsoft SQL and Azure",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Terminal,
    Database,
    Palette,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: SkillIcon,
    pub skills: &'static [Skill],
}

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        icon: SkillIcon::Code,
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "Angular", level: 95 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "CSS/SASS", level: 90 },
            Skill { name: "Tailwind CSS", level: 95 },
        ],
    },
    SkillCategory {
        title: "Backend",
        icon: SkillIcon::Terminal,
        skills: &[
            Skill { name: "Node.js", level: 80 },
            Skill { name: "ASP.NET", level: 96 },
            Skill { name: "REST APIs", level: 95 },
        ],
    },
    SkillCategory {
        title: "Databases",
        icon: SkillIcon::Database,
        skills: &[
            Skill { name: "Microsoft SQL Server (MSSQL)", level: 95 },
            Skill { name: "MySql", level: 90 },
        ],
    },
    SkillCategory {
        title: "Tools",
        icon: SkillIcon::Palette,
        skills: &[
            Skill { name: "Git", level: 90 },
            Skill { name: "Azure DevOps", level: 75 },
            Skill { name: "MS Office", level: 70 },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    WebApp,
    UiDesign,
    DataViz,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::All, Self::WebApp, Self::UiDesign, Self::DataViz];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::WebApp => "Web App",
            Self::UiDesign => "UI Design",
            Self::DataViz => "Data Viz",
        }
    }

    pub fn includes(&self, project: &Project) -> bool {
        *self == Self::All || *self == project.category
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
    pub category: Category,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-featured e-commerce platform built with React and Node.js",
        images: &[
            unsplash!("photo-1557821552-17105176677c"),
            unsplash!("photo-1472851294608-062f824d29cc"),
            unsplash!("photo-1607082349566-187342175e2f"),
            unsplash!("photo-1515378791036-0648a3ef77b2"),
        ],
        category: Category::WebApp,
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        github: "https://github.com",
        live: "https://example.com",
    },
    Project {
        title: "Task Management App",
        description: "A beautiful and intuitive task management application",
        images: &[
            unsplash!("photo-1540350394557-8d14678e7f91"),
            unsplash!("photo-1484480974693-6ca0a78fb36b"),
            unsplash!("photo-1531403009284-440f080d1e12"),
            unsplash!("photo-1629904853716-f0bc54eea481"),
        ],
        category: Category::WebApp,
        technologies: &["React", "Firebase", "Tailwind CSS"],
        github: "https://github.com",
        live: "https://example.com",
    },
    Project {
        title: "Portfolio Website",
        description: "A modern portfolio website with dark mode support",
        images: &[
            unsplash!("photo-1460925895917-afdab827c52f"),
            unsplash!("photo-1517180102446-f3ece451e9d8"),
            unsplash!("photo-1545239351-ef35f43d514b"),
            unsplash!("photo-1599420186946-7b6fb4e297f0"),
        ],
        category: Category::UiDesign,
        technologies: &["React", "Tailwind CSS", "Framer Motion"],
        github: "https://github.com",
        live: "https://example.com",
    },
    Project {
        title: "Weather Dashboard",
        description: "A weather dashboard with beautiful visualizations",
        images: &[
            unsplash!("photo-1592210454359-9043f067919b"),
            unsplash!("photo-1530563885674-66db50a1af19"),
            unsplash!("photo-1534088568595-a066f410bcda"),
            unsplash!("photo-1598965914211-6ee311be1d6f"),
        ],
        category: Category::DataViz,
        technologies: &["React", "D3.js", "OpenWeather API"],
        github: "https://github.com",
        live: "https://example.com",
    },
];

pub fn projects_in(category: Category) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| category.includes(p))
}

/// Splits a heading into per-letter spans with a staggered animation delay
/// (seconds). Spaces become non-breaking so they keep their width.
pub fn animated_letters(text: &str) -> Vec<(String, f64)> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let c = if c == ' ' { '\u{00A0}' } else { c };
            (c.to_string(), 0.05 * i as f64)
        })
        .collect()
}

/// Entrance delay (seconds) of the `index`-th visible project card.
pub fn card_delay(index: usize) -> f64 {
    0.1 + index as f64 * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter() {
        assert_eq!(projects_in(Category::All).count(), PROJECTS.len());
        let web = projects_in(Category::WebApp)
            .map(|p| p.title)
            .collect::<Vec<_>>();
        assert_eq!(web, vec!["E-Commerce Platform", "Task Management App"]);
        assert_eq!(projects_in(Category::DataViz).count(), 1);
    }

    #[test]
    fn test_every_project_has_slides() {
        assert!(PROJECTS.iter().all(|p| !p.images.is_empty()));
        assert!(PROJECTS[0].images[0].starts_with("https://images.unsplash.com/photo-"));
    }

    #[test]
    fn test_about_has_intro_and_cv() {
        assert_eq!(ABOUT_INTRO.len(), 2);
        assert!(ABOUT_INTRO.iter().all(|p| !p.trim().is_empty()));
        assert!(CV_URL.ends_with(".pdf"));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS
            .iter()
            .flat_map(|c| c.skills)
            .all(|s| s.level <= 100));
    }

    #[test]
    fn test_animated_letters() {
        let letters = animated_letters("My Work");
        assert_eq!(letters.len(), 7);
        assert_eq!(letters[2].0, "\u{00A0}");
        assert_eq!(letters[0].1, 0.0);
        assert!((letters[6].1 - 0.3).abs() < 1e-9);
        assert!((card_delay(2) - 0.3).abs() < 1e-9);
    }
}
