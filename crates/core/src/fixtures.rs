//! Fixture builders shared by the unit tests

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::catalog::Catalog;
use crate::model::{CategoryId, Contact, Developer, Project, ProjectCategory, ProjectStatus};

pub fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(n)
}

pub fn category(id: &str, name: &str) -> ProjectCategory {
    ProjectCategory {
        id: CategoryId::new(id),
        name: name.to_string(),
        icon: "globe".to_string(),
    }
}

pub fn developer(name: &str) -> Developer {
    Developer {
        id: format!("dev-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        avatar: "https://example.com/avatar.png".to_string(),
        title: "Software Engineer".to_string(),
        location: "Lisbon, Portugal".to_string(),
        experience: 5,
        skills: vec!["Rust".to_string()],
        bio: "Builds things.".to_string(),
        contact: Contact {
            email: "dev@example.com".to_string(),
            linkedin: None,
            github: None,
            website: None,
        },
    }
}

pub fn project(id: &str, title: &str, category: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} long description"),
        short_description: format!("{title} in a sentence"),
        category: CategoryId::new(category),
        tech_stack: vec!["Rust".to_string()],
        status: ProjectStatus::Concept,
        funding_goal: 100_000,
        current_funding: 0,
        created_at: day(0),
        developer: developer("Ada Lovelace"),
        images: vec!["https://example.com/cover.png".to_string()],
        demo_url: None,
        github_url: None,
        tags: vec![],
    }
}

/// The two-project catalog used throughout the query scenarios
pub fn sample_catalog() -> Catalog {
    let mut ai_bot = project("ai-bot", "AI Bot", "1");
    ai_bot.status = ProjectStatus::Mvp;
    ai_bot.current_funding = 30_000;
    ai_bot.funding_goal = 100_000;
    ai_bot.created_at = day(1);
    ai_bot.tech_stack = vec!["Python".to_string(), "PyTorch".to_string()];

    let mut web_app = project("web-app", "Web App", "2");
    web_app.status = ProjectStatus::Concept;
    web_app.current_funding = 0;
    web_app.funding_goal = 50_000;
    web_app.created_at = day(2);
    web_app.tech_stack = vec!["React".to_string(), "Node.js".to_string()];
    web_app.developer = developer("Grace Hopper");

    Catalog::new(
        vec![category("1", "AI"), category("2", "Web")],
        vec![ai_bot, web_app],
    )
    .unwrap()
}
