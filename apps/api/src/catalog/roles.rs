use super::JobRole;

/// Job roles understood by the resume analyzer. Anything else falls back to
/// the generic scoring formula.
pub const JOB_ROLES: &[JobRole] = &[
    JobRole {
        name: "Software Developer",
        required_skills: &["python", "javascript", "java", "html", "css", "sql", "git"],
        preferred_skills: &["react", "node.js", "docker", "aws", "mongodb", "typescript"],
        experience_keywords: &[
            "development", "programming", "coding", "software", "application",
        ],
        education_keywords: &[
            "computer science", "software engineering", "information technology",
        ],
    },
    JobRole {
        name: "Data Scientist",
        required_skills: &[
            "python", "r", "sql", "machine learning", "statistics", "pandas", "numpy",
        ],
        preferred_skills: &["tensorflow", "pytorch", "tableau", "power bi", "spark", "hadoop"],
        experience_keywords: &[
            "data analysis", "machine learning", "statistics", "modeling", "research",
        ],
        education_keywords: &["data science", "statistics", "mathematics", "computer science"],
    },
    JobRole {
        name: "Frontend Developer",
        required_skills: &["javascript", "html", "css", "react", "vue", "angular"],
        preferred_skills: &["typescript", "sass", "webpack", "figma", "responsive design"],
        experience_keywords: &[
            "frontend", "ui", "user interface", "web development", "responsive",
        ],
        education_keywords: &["computer science", "web development", "design"],
    },
    JobRole {
        name: "Backend Developer",
        required_skills: &["python", "java", "node.js", "sql", "api", "microservices"],
        preferred_skills: &["docker", "kubernetes", "aws", "mongodb", "redis", "graphql"],
        experience_keywords: &["backend", "server", "api", "database", "microservices"],
        education_keywords: &["computer science", "software engineering"],
    },
    JobRole {
        name: "UX Designer",
        required_skills: &[
            "figma", "sketch", "adobe creative suite", "user research", "prototyping",
        ],
        preferred_skills: &["html", "css", "javascript", "user testing", "wireframing"],
        experience_keywords: &["ux", "user experience", "design", "prototyping", "research"],
        education_keywords: &["design", "human computer interaction", "psychology"],
    },
    JobRole {
        name: "DevOps Engineer",
        required_skills: &["docker", "kubernetes", "aws", "jenkins", "terraform", "linux"],
        preferred_skills: &["ansible", "prometheus", "grafana", "helm", "git"],
        experience_keywords: &[
            "devops", "infrastructure", "deployment", "automation", "ci/cd",
        ],
        education_keywords: &["computer science", "information technology", "engineering"],
    },
    JobRole {
        name: "Product Manager",
        required_skills: &[
            "product strategy", "user research", "analytics", "agile", "roadmapping",
        ],
        preferred_skills: &["sql", "figma", "jira", "a/b testing", "market research"],
        experience_keywords: &[
            "product management", "strategy", "roadmap", "stakeholder", "agile",
        ],
        education_keywords: &["business", "mba", "engineering", "computer science"],
    },
];
