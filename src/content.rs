//! Static content: persona, projects, experience, skills, command table
//!
//! The terminal interpreter and the CLI treat this module as
//! configuration. Nothing here carries logic.

use serde::{Deserialize, Serialize};

/// Resume location opened by the `resume` command
pub const RESUME_URL: &str = "/resume.pdf";

/// Fixed launch table for `demo <n>`.
///
/// Three curated entries; the project list below is longer. The launch
/// table is maintained by hand and has not kept up with the projects.
pub const DEMO_URLS: [&str; 3] = [
    "https://nebula-eats.netlify.app/",
    "https://pixelpurge.netlify.app/",
    "https://github.com/arisvale/resumelens",
];

/// Identity and contact details surfaced by the terminal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub resume_url: String,
    pub bio: String,
}

/// The owner persona shown across the experience
pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Aris Vale".to_string(),
        role: "Full Stack Developer".to_string(),
        tagline: "Building scalable systems with Spring Boot & React".to_string(),
        email: "aris@voidterminal.dev".to_string(),
        github: "https://github.com/arisvale".to_string(),
        linkedin: "https://www.linkedin.com/in/aris-vale/".to_string(),
        resume_url: RESUME_URL.to_string(),
        bio: "Full stack developer focused on scalable backend services and \
              terminal-flavored frontends, with hands-on delivery of real-world projects."
            .to_string(),
    }
}

/// A showcased project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub github: String,
    pub demo: String,
    pub featured: bool,
}

/// All showcased projects, featured first
pub fn projects() -> Vec<Project> {
    fn project(
        id: &str,
        title: &str,
        description: &str,
        tags: &[&str],
        github: &str,
        demo: &str,
        featured: bool,
    ) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            github: github.to_string(),
            demo: demo.to_string(),
            featured,
        }
    }

    vec![
        project(
            "nebula-eats",
            "Nebula Eats",
            "Food delivery and restaurant discovery platform with live order tracking and payments.",
            &["React", "Spring Boot", "MongoDB", "Tailwind"],
            "https://github.com/arisvale/nebula-eats",
            "https://nebula-eats.netlify.app/",
            true,
        ),
        project(
            "pixelpurge",
            "PixelPurge",
            "SaaS background removal tool with cloud-side processing.",
            &["React", "Spring Boot", "MySQL", "Tailwind"],
            "https://github.com/arisvale/pixelpurge",
            "https://pixelpurge.netlify.app/",
            true,
        ),
        project(
            "resumelens",
            "ResumeLens",
            "Extracts skills and structured data from resumes with NLP.",
            &["Java", "OpenNLP", "PdfBox"],
            "https://github.com/arisvale/resumelens",
            "#",
            true,
        ),
        project(
            "orbitdesk",
            "OrbitDesk",
            "Marketing site showcasing scroll-driven animation patterns.",
            &["Tailwind", "JavaScript"],
            "https://github.com/arisvale/orbitdesk",
            "#",
            false,
        ),
        project(
            "gadgetsphere",
            "GadgetSphere",
            "E-commerce storefront with full cart and checkout flow.",
            &["Java", "JEE", "JSP", "Servlet"],
            "#",
            "#",
            false,
        ),
        project(
            "techscroll",
            "TechScroll",
            "Blogging platform for technology articles and comments.",
            &["Java", "JEE", "MySQL"],
            "https://github.com/arisvale/techscroll",
            "#",
            false,
        ),
        project(
            "echochat",
            "EchoChat",
            "Real-time chat application over WebSockets.",
            &["Java", "Spring Boot", "WebSocket"],
            "#",
            "#",
            false,
        ),
        project(
            "warpdeck",
            "WarpDeck",
            "Kanban board with drag-and-drop and offline sync.",
            &["React", "TypeScript", "IndexedDB"],
            "https://github.com/arisvale/warpdeck",
            "#",
            false,
        ),
    ]
}

/// A work experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub tech_stack: Vec<String>,
}

/// Work history, most recent first
pub fn experiences() -> Vec<Experience> {
    vec![Experience {
        id: "exp-1".to_string(),
        role: "Backend Developer Intern".to_string(),
        company: "Vantage Systems".to_string(),
        period: "July 2025 - Feb 2026".to_string(),
        description: "Built workflow automation and backend services with Spring Boot \
                      and a microservices architecture."
            .to_string(),
        achievements: vec![
            "Built scalable backend services from the ground up".to_string(),
            "Implemented event-driven processing with Kafka".to_string(),
            "Optimized storage and retrieval with Redis caching and PostgreSQL".to_string(),
        ],
        tech_stack: vec![
            "Java".to_string(),
            "Spring Boot".to_string(),
            "Kafka".to_string(),
            "Redis".to_string(),
            "PostgreSQL".to_string(),
        ],
    }]
}

/// A node in the skill graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Proficiency 1-5
    pub level: u8,
    pub connections: Vec<String>,
}

/// The skill graph rendered by the scan section
pub fn skills() -> Vec<SkillNode> {
    fn skill(id: &str, name: &str, category: &str, level: u8, connections: &[&str]) -> SkillNode {
        SkillNode {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            level,
            connections: connections.iter().map(|c| c.to_string()).collect(),
        }
    }

    vec![
        skill("java", "Java", "language", 5, &["springboot", "dsa"]),
        skill("javascript", "JavaScript", "language", 4, &["react"]),
        skill("typescript", "TypeScript", "language", 3, &["react", "nextjs"]),
        skill("springboot", "Spring Boot", "backend", 5, &["java", "restapi", "mysql"]),
        skill("restapi", "REST API", "backend", 5, &["springboot"]),
        skill("react", "React", "frontend", 4, &["javascript", "typescript", "tailwind"]),
        skill("nextjs", "Next.js", "frontend", 3, &["react", "typescript"]),
        skill("tailwind", "Tailwind CSS", "frontend", 4, &["react"]),
        skill("mysql", "MySQL", "database", 4, &["springboot"]),
        skill("mongodb", "MongoDB", "database", 4, &["springboot"]),
        skill("git", "Git", "tools", 4, &["docker"]),
        skill("docker", "Docker", "tools", 3, &["git"]),
        skill("dsa", "DSA", "fundamental", 4, &["java"]),
    ]
}

/// Built-in command → response pairs for the void terminal
///
/// Responses may span multiple lines; they are rendered pre-formatted.
pub fn default_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "help",
            "Available commands:\n  \
             whoami    - Who is Aris?\n  \
             skills    - View technical skills\n  \
             projects  - List all projects\n  \
             contact   - Get contact information\n  \
             hire      - Why you should hire me\n  \
             resume    - Download resume\n  \
             demo <n>  - Launch a featured project\n  \
             clear     - Clear terminal\n  \
             secret    - ???",
        ),
        (
            "whoami",
            "> Aris Vale\n  \
             Full Stack Developer | Spring Boot Specialist\n  \n  \
             Building scalable backend systems and terminal-flavored frontends.\n  \
             Passionate about clean code and solving hard problems.",
        ),
        (
            "skills",
            "> Core Stack:\n  \
             ├── Backend: Java, Spring Boot, REST APIs\n  \
             ├── Frontend: React, Next.js, Tailwind CSS\n  \
             ├── Database: MySQL, MongoDB\n  \
             └── Tools: Git, Docker, Maven",
        ),
        (
            "projects",
            "> Featured Projects:\n  \
             [1] Nebula Eats  - Food delivery platform\n  \
             [2] PixelPurge   - Background removal SaaS\n  \
             [3] ResumeLens   - NLP skills extractor\n  \n  \
             Type 'demo <number>' to visit project",
        ),
        (
            "contact",
            "> Connect with me:\n  \
             📧 Email: aris@voidterminal.dev\n  \
             💼 LinkedIn: /in/aris-vale\n  \
             🐙 GitHub: /arisvale",
        ),
        (
            "hire",
            "> Why hire me?\n  \
             ✓ Years of Java and Spring Boot experience\n  \
             ✓ Full-stack capable with modern React\n  \
             ✓ Real-world project delivery\n  \
             ✓ Clean, maintainable code philosophy\n  \n  \
             Let's build something great together.",
        ),
        (
            "secret",
            "> You found the secret! 🎉\n  \n  \
             Easter egg unlocked: the void remembers your curiosity.\n  \
             Type 'matrix' for a surprise...",
        ),
        (
            "matrix",
            "> Initiating Matrix protocol...\n  \
             Wake up, Neo...\n  \
             The Matrix has you...",
        ),
        ("clear", "CLEAR"),
    ]
}

// =============================================================================
// TESTS
// =============================================================================
