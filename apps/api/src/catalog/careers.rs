use super::{CareerProfile, ExperienceLevel, GrowthPotential, SalaryBand};

use ExperienceLevel::{Entry, Mid, Senior};

const ALL_LEVELS: &[ExperienceLevel] = &[Entry, Mid, Senior];
const EXPERIENCED_ONLY: &[ExperienceLevel] = &[Mid, Senior];

/// Career table for the recommender. Order matters: it breaks ranking ties.
pub const CAREERS: &[CareerProfile] = &[
    CareerProfile {
        name: "Software Engineer",
        required_skills: &[
            "python", "javascript", "java", "react", "node.js", "sql", "git", "html", "css",
        ],
        preferred_skills: &[
            "docker", "kubernetes", "aws", "mongodb", "typescript", "angular", "vue",
        ],
        industries: &["Technology", "Finance", "Healthcare", "E-commerce", "Gaming"],
        experience_levels: ALL_LEVELS,
        salary_range: SalaryBand { min: 65_000, max: 150_000 },
        growth_potential: GrowthPotential::High,
        remote_friendly: true,
        interest_tags: &["problem solving", "technology", "coding", "innovation"],
    },
    CareerProfile {
        name: "Data Scientist",
        required_skills: &[
            "python", "r", "sql", "machine learning", "statistics", "pandas", "numpy",
        ],
        preferred_skills: &["tensorflow", "pytorch", "tableau", "power bi", "spark", "hadoop"],
        industries: &["Technology", "Finance", "Healthcare", "Retail", "Consulting"],
        experience_levels: EXPERIENCED_ONLY,
        salary_range: SalaryBand { min: 75_000, max: 160_000 },
        growth_potential: GrowthPotential::VeryHigh,
        remote_friendly: true,
        interest_tags: &["data analysis", "research", "statistics", "problem solving"],
    },
    CareerProfile {
        name: "Frontend Developer",
        required_skills: &["javascript", "html", "css", "react", "vue", "angular"],
        preferred_skills: &["typescript", "sass", "webpack", "figma", "responsive design"],
        industries: &["Technology", "Media", "E-commerce", "Startups"],
        experience_levels: ALL_LEVELS,
        salary_range: SalaryBand { min: 55_000, max: 130_000 },
        growth_potential: GrowthPotential::High,
        remote_friendly: true,
        interest_tags: &["user experience", "design", "web development", "creativity"],
    },
    CareerProfile {
        name: "Backend Developer",
        required_skills: &["python", "java", "node.js", "sql", "api", "microservices"],
        preferred_skills: &["docker", "kubernetes", "aws", "mongodb", "redis", "graphql"],
        industries: &["Technology", "Finance", "Healthcare", "E-commerce"],
        experience_levels: ALL_LEVELS,
        salary_range: SalaryBand { min: 60_000, max: 140_000 },
        growth_potential: GrowthPotential::High,
        remote_friendly: true,
        interest_tags: &["system architecture", "databases", "scalability", "performance"],
    },
    CareerProfile {
        name: "Product Manager",
        required_skills: &[
            "product strategy", "user research", "analytics", "agile", "roadmapping",
        ],
        preferred_skills: &["sql", "figma", "jira", "a/b testing", "market research"],
        industries: &["Technology", "Finance", "Healthcare", "E-commerce", "Consulting"],
        experience_levels: EXPERIENCED_ONLY,
        salary_range: SalaryBand { min: 80_000, max: 170_000 },
        growth_potential: GrowthPotential::VeryHigh,
        remote_friendly: true,
        interest_tags: &["strategy", "user experience", "business", "leadership"],
    },
    CareerProfile {
        name: "UX/UI Designer",
        required_skills: &[
            "figma", "sketch", "adobe creative suite", "user research", "prototyping",
        ],
        preferred_skills: &["html", "css", "javascript", "user testing", "wireframing"],
        industries: &["Technology", "Media", "E-commerce", "Advertising"],
        experience_levels: ALL_LEVELS,
        salary_range: SalaryBand { min: 50_000, max: 120_000 },
        growth_potential: GrowthPotential::High,
        remote_friendly: true,
        interest_tags: &["design", "user experience", "creativity", "psychology"],
    },
    CareerProfile {
        name: "DevOps Engineer",
        required_skills: &["docker", "kubernetes", "aws", "jenkins", "terraform", "linux"],
        preferred_skills: &["ansible", "prometheus", "grafana", "helm", "git", "python"],
        industries: &["Technology", "Finance", "Healthcare", "Cloud Services"],
        experience_levels: EXPERIENCED_ONLY,
        salary_range: SalaryBand { min: 70_000, max: 155_000 },
        growth_potential: GrowthPotential::VeryHigh,
        remote_friendly: true,
        interest_tags: &["automation", "infrastructure", "scalability", "efficiency"],
    },
    CareerProfile {
        name: "Business Analyst",
        required_skills: &[
            "sql", "excel", "business analysis", "requirements gathering", "documentation",
        ],
        preferred_skills: &["tableau", "power bi", "jira", "agile", "process improvement"],
        industries: &["Finance", "Healthcare", "Consulting", "Technology", "Government"],
        experience_levels: ALL_LEVELS,
        salary_range: SalaryBand { min: 55_000, max: 110_000 },
        growth_potential: GrowthPotential::Medium,
        remote_friendly: true,
        interest_tags: &["business", "analysis", "problem solving", "communication"],
    },
    CareerProfile {
        name: "Cybersecurity Specialist",
        required_skills: &[
            "network security", "penetration testing", "risk assessment", "compliance",
        ],
        preferred_skills: &["python", "linux", "wireshark", "metasploit", "nmap", "cissp"],
        industries: &["Technology", "Finance", "Government", "Healthcare", "Defense"],
        experience_levels: EXPERIENCED_ONLY,
        salary_range: SalaryBand { min: 75_000, max: 165_000 },
        growth_potential: GrowthPotential::VeryHigh,
        remote_friendly: true,
        interest_tags: &["security", "ethical hacking", "risk management", "technology"],
    },
    CareerProfile {
        name: "Mobile Developer",
        required_skills: &["swift", "kotlin", "react native", "flutter", "mobile ui/ux"],
        preferred_skills: &[
            "firebase", "app store optimization", "push notifications", "api integration",
        ],
        industries: &["Technology", "Gaming", "E-commerce", "Social Media"],
        experience_levels: ALL_LEVELS,
        salary_range: SalaryBand { min: 60_000, max: 135_000 },
        growth_potential: GrowthPotential::High,
        remote_friendly: true,
        interest_tags: &["mobile technology", "user experience", "app development", "innovation"],
    },
];
