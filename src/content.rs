//! Static site content: persona details, skills, and the project entries that
//! drive the scroll-synced showcase. Defined once, never mutated - entry order
//! determines vertical position and the index-to-highlight mapping.

pub const FULL_NAME: &str = "Franco Sebastian C. Magno";
pub const SHORT_NAME: &str = "Franco Magno";
pub const TAGLINE: &str = "Information Technology Student | Web Developer";
pub const CONTACT_EMAIL: &str = "franco.magno159@gmail.com";
pub const CONTACT_PHONE: &str = "+63 905 342 0933";
pub const RESUME_PATH: &str = "/Magno_Resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Franco_Magno_Resume.pdf";
pub const PROFILE_IMAGE: &str = "/profile.jpg";

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/franco-sebastian-magno-896601317/";
pub const GITHUB_URL: &str = "https://github.com/Maggins08";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/francosebastian.magno/";

pub const SKILLS: &[&str] = &[
    "HTML/CSS",
    "JavaScript",
    "Rust",
    "Leptos",
    "React.js",
    "Node.js",
    "Java Spring Boot",
    "PostgreSQL",
    "MySQL",
    "Git & GitHub",
    "REST APIs",
    "Postman",
    "Spring Initializr",
    "Bootstrap",
    "Tailwind CSS",
    "Figma",
    "Visual Studio Code",
    "IntelliJ IDEA",
    "Eclipse IDE",
    "Maven",
];

/// A labelled outbound link on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// One entry in the project showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub links: &'static [ProjectLink],
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Quill",
        description: "A blockchain-powered notes app integrated with Lace Wallet - every CRUD operation requires a secure micro-transaction.",
        image: "/Quill.svg",
        image_alt: "Quill Logo",
        links: &[ProjectLink {
            label: "GitHub",
            href: "https://github.com/Kato-Neko/Quill.git",
        }],
    },
    ProjectEntry {
        title: "Civili.fy",
        description: "Lawyer recruitment platform with real-time chat, connecting clients to verified legal experts across multiple fields.",
        image: "/logoiconwhite.png",
        image_alt: "Civili.fy Logo",
        links: &[ProjectLink {
            label: "GitHub",
            href: "https://github.com/keithruezyl1/Civili.fy.git",
        }],
    },
    ProjectEntry {
        title: "StartupSphere 2.0",
        description: "Capstone project: A national digital hub connecting Filipino startups with funding, government programs, and resources.",
        image: "/startupsphere.png",
        image_alt: "StartupSphere Logo",
        links: &[
            ProjectLink {
                label: "Live Demo",
                href: "https://startupsphere-azure.vercel.app/",
            },
            ProjectLink {
                label: "Frontend",
                href: "https://github.com/princeprog/startupspherev2-frontend.git",
            },
            ProjectLink {
                label: "Backend",
                href: "https://github.com/princeprog/startupspherev2-backend.git",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_are_defined() {
        assert!(!PROJECTS.is_empty());
    }

    #[test]
    fn test_every_project_is_complete() {
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.links.is_empty(), "{} has no links", project.title);
            for link in project.links {
                assert!(link.href.starts_with("https://"), "{}: {}", project.title, link.href);
                assert!(!link.label.is_empty());
            }
        }
    }

    #[test]
    fn test_asset_paths_are_absolute() {
        assert!(PROFILE_IMAGE.starts_with('/'));
        assert!(RESUME_PATH.starts_with('/'));
        for project in PROJECTS {
            assert!(project.image.starts_with('/'), "{}", project.title);
        }
    }

    #[test]
    fn test_project_titles_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn test_skills_are_non_empty_and_unique() {
        assert!(!SKILLS.is_empty());
        for (i, a) in SKILLS.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &SKILLS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
