//! Mock catalog generator
//!
//! Fabricates a session catalog from a seeded RNG. The same options always
//! produce the same catalog, ids included, so a seed is enough to reproduce
//! what a user saw.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::{Catalog, CatalogError};
use crate::model::{CategoryId, Contact, Developer, Project, ProjectCategory, ProjectStatus};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_PROJECTS: usize = 12;

/// Projects are created within this many days before `MockOptions::now`
const CREATED_WITHIN_DAYS: i64 = 30;

const CATEGORIES: [(&str, &str); 8] = [
    ("AI & Machine Learning", "brain"),
    ("Blockchain & Web3", "link"),
    ("IoT & Hardware", "cpu"),
    ("Mobile Apps", "smartphone"),
    ("Web Applications", "globe"),
    ("Fintech", "credit-card"),
    ("Healthcare", "heart"),
    ("EdTech", "book-open"),
];

const TECH_STACKS: [[&str; 3]; 8] = [
    ["React", "Node.js", "MongoDB"],
    ["Angular", "TypeScript", "PostgreSQL"],
    ["Vue.js", "Python", "Django"],
    ["React Native", "Firebase", "GraphQL"],
    ["Flutter", "Dart", "AWS"],
    ["Next.js", "Prisma", "Supabase"],
    ["Svelte", "FastAPI", "Redis"],
    ["Nuxt.js", "Express", "MySQL"],
];

const TITLES: [&str; 12] = [
    "AI-Powered Code Review Assistant",
    "Decentralized Identity Management",
    "Smart Home Energy Optimizer",
    "Real-time Language Translator",
    "Blockchain Supply Chain Tracker",
    "Mental Health Monitoring App",
    "Automated Trading Algorithm",
    "Virtual Reality Learning Platform",
    "IoT-based Agricultural Monitor",
    "Predictive Maintenance System",
    "Social Impact Investment Platform",
    "Augmented Reality Shopping Assistant",
];

const EXTRA_SKILLS: [&str; 6] = ["Docker", "Kubernetes", "AWS", "Azure", "Git", "CI/CD"];

const TAGS: [&str; 6] = [
    "innovative",
    "scalable",
    "disruptive",
    "sustainable",
    "ai-powered",
    "user-friendly",
];

const FIRST_NAMES: [&str; 12] = [
    "Amara", "Bruno", "Chen", "Dalia", "Emeka", "Freya", "Goran", "Hana", "Ines", "Jonas",
    "Keiko", "Luca",
];

const LAST_NAMES: [&str; 12] = [
    "Okafor", "Silva", "Wei", "Haddad", "Nwosu", "Larsen", "Petrov", "Sato", "Moreno",
    "Becker", "Tanaka", "Rossi",
];

const JOB_TITLES: [&str; 8] = [
    "Senior Software Engineer",
    "Full Stack Developer",
    "Machine Learning Engineer",
    "Embedded Systems Engineer",
    "Mobile Developer",
    "Data Scientist",
    "Platform Engineer",
    "Research Engineer",
];

const LOCATIONS: [&str; 10] = [
    "Lagos, Nigeria",
    "São Paulo, Brazil",
    "Shenzhen, China",
    "Beirut, Lebanon",
    "Copenhagen, Denmark",
    "Belgrade, Serbia",
    "Osaka, Japan",
    "Madrid, Spain",
    "Berlin, Germany",
    "Milan, Italy",
];

const PRODUCT_ADJECTIVES: [&str; 6] = [
    "Adaptive",
    "Distributed",
    "Quantum",
    "Open",
    "Secure",
    "Edge",
];

const PRODUCT_NOUNS: [&str; 6] = [
    "Ledger",
    "Assistant",
    "Analytics Hub",
    "Sensor Grid",
    "Marketplace",
    "Planner",
];

const WORDS: [&str; 24] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim",
    "veniam", "quis", "nostrud", "exercitation", "ullamco",
];

#[derive(Debug, Clone)]
pub struct MockOptions {
    pub seed: u64,
    pub projects: usize,
    /// Reference instant; creation dates fall in the 30 days before it
    pub now: DateTime<Utc>,
}

impl MockOptions {
    pub fn new(seed: u64, projects: usize, now: DateTime<Utc>) -> Self {
        Self {
            seed,
            projects,
            now,
        }
    }
}

/// Generate a catalog for the given options
///
/// Categories come from the fixed list and ids are random 128-bit values,
/// so validation only fails on an id collision.
pub fn generate(options: &MockOptions) -> Result<Catalog, CatalogError> {
    let mut rng = StdRng::seed_from_u64(options.seed);

    let categories = default_categories();
    let projects = (0..options.projects)
        .map(|i| generate_project(&mut rng, i, &categories, options.now))
        .collect();

    Catalog::new(categories, projects)
}

/// The fixed category list, ids "1" to "8"
pub fn default_categories() -> Vec<ProjectCategory> {
    CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, (name, icon))| ProjectCategory {
            id: CategoryId::new((i + 1).to_string()),
            name: name.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

fn generate_project(
    rng: &mut StdRng,
    index: usize,
    categories: &[ProjectCategory],
    now: DateTime<Utc>,
) -> Project {
    let category = &categories[rng.gen_range(0..categories.len())];
    let tech: Vec<String> = TECH_STACKS[rng.gen_range(0..TECH_STACKS.len())]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let developer = generate_developer(rng, &tech);

    let funding_goal = rng.gen_range(50_000..=500_000u64);
    let current_funding = rng.gen_range(0..=(funding_goal as f64 * 0.8) as u64);

    let title = match TITLES.get(index) {
        Some(title) => title.to_string(),
        None => format!(
            "{} {}",
            pick(rng, &PRODUCT_ADJECTIVES),
            pick(rng, &PRODUCT_NOUNS)
        ),
    };

    let age = Duration::seconds(rng.gen_range(0..=CREATED_WITHIN_DAYS * 24 * 60 * 60));

    Project {
        id: random_id(rng),
        title,
        description: (0..3).map(|_| paragraph(rng)).collect::<Vec<_>>().join("\n\n"),
        short_description: sentence(rng),
        category: category.id.clone(),
        tech_stack: tech,
        status: ProjectStatus::ALL[rng.gen_range(0..ProjectStatus::ALL.len())],
        funding_goal,
        current_funding,
        created_at: now - age,
        developer,
        images: vec![
            photo_url(rng, "w=800&h=400&fit=crop"),
            photo_url(rng, "w=800&h=400&fit=crop"),
        ],
        demo_url: rng.gen_bool(0.5).then(|| site_url(rng, "demo")),
        github_url: rng.gen_bool(0.7).then(|| site_url(rng, "github")),
        tags: sample(rng, &TAGS, 3),
    }
}

fn generate_developer(rng: &mut StdRng, tech: &[String]) -> Developer {
    let first = pick(rng, &FIRST_NAMES);
    let last = pick(rng, &LAST_NAMES);
    let handle = format!("{}.{}", first.to_lowercase(), last.to_lowercase());

    let mut skills = tech.to_vec();
    skills.extend(sample(rng, &EXTRA_SKILLS, 3));

    Developer {
        id: random_id(rng),
        name: format!("{first} {last}"),
        avatar: photo_url(rng, "w=400&h=400&fit=crop&crop=face"),
        title: pick(rng, &JOB_TITLES).to_string(),
        location: pick(rng, &LOCATIONS).to_string(),
        experience: rng.gen_range(2..=15),
        skills,
        bio: paragraph(rng),
        contact: Contact {
            email: format!("{handle}@example.com"),
            linkedin: Some(format!("https://linkedin.com/in/{handle}")),
            github: Some(format!(
                "https://github.com/{}{}",
                first.to_lowercase(),
                last.to_lowercase()
            )),
            website: Some(format!("https://{}.dev", last.to_lowercase())),
        },
    }
}

fn random_id(rng: &mut StdRng) -> String {
    uuid::Builder::from_random_bytes(rng.gen())
        .into_uuid()
        .to_string()
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn sample(rng: &mut StdRng, items: &[&str], amount: usize) -> Vec<String> {
    items
        .choose_multiple(rng, amount)
        .map(|s| s.to_string())
        .collect()
}

fn photo_url(rng: &mut StdRng, params: &str) -> String {
    let photo = 1_500_000_000_000u64 + rng.gen_range(0..100_000_000u64);
    format!("https://images.unsplash.com/photo-{photo}?{params}")
}

fn site_url(rng: &mut StdRng, kind: &str) -> String {
    format!("https://{kind}.example.com/{}", pick(rng, &WORDS))
}

fn sentence(rng: &mut StdRng) -> String {
    let len = rng.gen_range(6..=12);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, &WORDS)).collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

fn paragraph(rng: &mut StdRng) -> String {
    let len = rng.gen_range(3..=6);
    (0..len).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
}
