use once_cell::sync::Lazy;

use crate::entities::skill::{Catalog, Proficiency::*, Skill, SkillCategory};

/// The site's skill inventory, built on first access.
///
/// Panics on first access if the built-in data breaks catalog integrity;
/// `static_catalog_is_well_formed` below guards against that.
pub static SKILL_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(skill_categories()).expect("static skill catalog must be well-formed")
});

pub fn skill_catalog() -> &'static Catalog {
    &SKILL_CATALOG
}

fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory::new(
            "Frontend Development",
            "Building responsive and interactive user interfaces",
            "palette",
            1,
            vec![
                Skill::new("React.js", "layers", Expert)
                    .color("#61DAFB")
                    .years(4.0)
                    .description("Modern UI development with hooks and context")
                    .highlighted(),
                Skill::new("Next.js", "code", Advanced)
                    .color("white")
                    .years(3.0)
                    .description("Full-stack React framework with SSR/SSG")
                    .highlighted(),
                Skill::new("TypeScript", "type", Advanced)
                    .color("#3178C6")
                    .years(3.0)
                    .description("Type-safe JavaScript development"),
                Skill::new("JavaScript", "code", Expert)
                    .color("#F7DF1E")
                    .years(5.0)
                    .description("Core language and modern ES6+ features"),
                Skill::new("Tailwind CSS", "wind", Advanced)
                    .color("#38B2AC")
                    .years(3.0)
                    .description("Utility-first CSS framework"),
                Skill::new("HTML5", "globe", Expert)
                    .color("#E34F26")
                    .years(6.0)
                    .description("Semantic markup and accessibility"),
                Skill::new("CSS3", "palette", Advanced)
                    .color("#1572B6")
                    .years(5.0)
                    .description("Modern styling with Flexbox and Grid"),
            ],
        ),
        SkillCategory::new(
            "Backend Development",
            "Creating robust and scalable server-side applications",
            "server",
            2,
            vec![
                Skill::new("Node.js", "server", Advanced)
                    .color("#339933")
                    .years(4.0)
                    .description("Server-side JavaScript runtime")
                    .highlighted(),
                Skill::new("Express.js", "code", Advanced)
                    .color("white")
                    .years(4.0)
                    .description("Web application framework for Node.js"),
                Skill::new("GraphQL", "database", Beginner)
                    .color("#E535AB")
                    .years(2.0)
                    .description("Query language for APIs"),
                Skill::new("MongoDB", "database", Advanced)
                    .color("#47A248")
                    .years(3.0)
                    .description("NoSQL document database"),
                Skill::new("PostgreSQL", "database", Intermediate)
                    .color("#4479A1")
                    .years(2.0)
                    .description("Relational database management"),
                Skill::new("Firebase", "flame", Beginner)
                    .color("#FFCA28")
                    .years(2.0)
                    .description("Backend-as-a-Service platform"),
            ],
        ),
        SkillCategory::new(
            "DevOps & Tools",
            "Tools and technologies for deployment and development",
            "cloud",
            3,
            vec![
                Skill::new("Git", "gitBranch", Advanced)
                    .color("#F05032")
                    .years(4.0)
                    .description("Version control and collaboration"),
                Skill::new("GitHub", "github", Advanced)
                    .color("white")
                    .years(4.0)
                    .description("Code hosting and collaboration platform"),
                Skill::new("Docker", "container", Beginner)
                    .color("#2496ED")
                    .years(2.0)
                    .description("Containerization and deployment"),
                Skill::new("AWS", "cloud", Beginner)
                    .color("#FF9900")
                    .years(2.0)
                    .description("Cloud computing services"),
                Skill::new("Vercel", "zap", Advanced)
                    .color("white")
                    .years(3.0)
                    .description("Frontend deployment platform"),
                Skill::new("npm", "package", Advanced)
                    .color("#CB3837")
                    .years(4.0)
                    .description("Package management and scripting"),
            ],
        ),
    ]
}
