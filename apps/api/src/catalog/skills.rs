use std::fmt;

use serde::Serialize;

/// Fixed skill taxonomy shared by the extractor and the insight generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SkillCategory {
    Programming,
    Web,
    Database,
    Cloud,
    Data,
    Design,
    Mobile,
    Devops,
}

/// Enumeration order. Ties between categories resolve to the earlier entry.
pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory::Programming,
    SkillCategory::Web,
    SkillCategory::Database,
    SkillCategory::Cloud,
    SkillCategory::Data,
    SkillCategory::Design,
    SkillCategory::Mobile,
    SkillCategory::Devops,
];

impl SkillCategory {
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Programming => &[
                "python", "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust", "swift",
                "kotlin",
            ],
            Self::Web => &[
                "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
            ],
            Self::Database => &["sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch"],
            Self::Cloud => &["aws", "azure", "gcp", "docker", "kubernetes", "terraform"],
            Self::Data => &[
                "pandas", "numpy", "tensorflow", "pytorch", "tableau", "power bi", "spark",
            ],
            Self::Design => &["figma", "sketch", "adobe", "photoshop", "illustrator", "ui/ux"],
            Self::Mobile => &["ios", "android", "react native", "flutter", "xamarin"],
            Self::Devops => &["jenkins", "gitlab", "ansible", "prometheus", "grafana", "linux"],
        }
    }

    /// Lower-case name used in insight sentences.
    pub fn label(self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::Web => "web",
            Self::Database => "database",
            Self::Cloud => "cloud",
            Self::Data => "data",
            Self::Design => "design",
            Self::Mobile => "mobile",
            Self::Devops => "devops",
        }
    }

    /// Title-case name used as the key of extracted skill categories.
    pub fn title(self) -> &'static str {
        match self {
            Self::Programming => "Programming",
            Self::Web => "Web",
            Self::Database => "Database",
            Self::Cloud => "Cloud",
            Self::Data => "Data",
            Self::Design => "Design",
            Self::Mobile => "Mobile",
            Self::Devops => "Devops",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
