//! Demo content loaded into a fresh store at server start.
//!
//! Seed records use short fixed ids (`prog1`, `proj1`, ...) so the demo UI
//! can deep-link to them. Re-seeding replaces records with the same ids.

use crate::model::blog_post::BlogPost;
use crate::model::program::{Program, ProgramStatus};
use crate::model::project::{Project, ProjectStatus};
use crate::model::task::{Task, TaskPriority, TaskStatus};
use crate::model::user::{User, UserRole};
use crate::model::Timestamp;
use crate::repo::memory_store::MemoryStore;
use chrono::{TimeZone, Utc};
use log::info;

/// Counts of records written by [`seed_demo_data`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub programs: usize,
    pub projects: usize,
    pub tasks: usize,
    pub blog_posts: usize,
}

/// Writes the demo users, programs, projects, tasks and blog posts.
pub fn seed_demo_data(store: &MemoryStore) -> SeedReport {
    let now = Utc::now();
    let mut report = SeedReport::default();

    for user in demo_users(now) {
        store.users().put(user);
        report.users += 1;
    }
    for program in demo_programs(now) {
        store.programs().put(program);
        report.programs += 1;
    }
    for project in demo_projects(now) {
        store.projects().put(project);
        report.projects += 1;
    }
    for task in demo_tasks(now) {
        store.tasks().put(task);
        report.tasks += 1;
    }
    for post in demo_blog_posts(now) {
        store.blog_posts().put(post);
        report.blog_posts += 1;
    }

    info!(
        "event=seed module=seed status=ok users={} programs={} projects={} tasks={} blog_posts={}",
        report.users, report.programs, report.projects, report.tasks, report.blog_posts
    );
    report
}

fn date(year: i32, month: u32, day: u32) -> Option<Timestamp> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

fn demo_users(now: Timestamp) -> Vec<User> {
    [
        ("1", "mark.hazleton", "mark@projectmechanics.com", "Mark Hazleton", UserRole::Admin),
        ("2", "sarah.johnson", "sarah@projectmechanics.com", "Sarah Johnson", UserRole::Manager),
        ("3", "alex.chen", "alex@projectmechanics.com", "Alex Chen", UserRole::User),
    ]
    .into_iter()
    .map(|(id, username, email, full_name, role)| User {
        id: id.to_string(),
        username: username.to_string(),
        password: "password123".to_string(),
        email: email.to_string(),
        full_name: full_name.to_string(),
        role,
        created_at: now,
        updated_at: now,
    })
    .collect()
}

fn demo_programs(now: Timestamp) -> Vec<Program> {
    vec![
        Program {
            id: "prog1".to_string(),
            name: "Digital Transformation".to_string(),
            description: Some("Modernizing legacy systems and processes".to_string()),
            status: ProgramStatus::Active,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
            manager_id: Some("1".to_string()),
            created_at: now,
            updated_at: now,
        },
        Program {
            id: "prog2".to_string(),
            name: "Infrastructure Modernization".to_string(),
            description: Some("Upgrading IT infrastructure and cloud migration".to_string()),
            status: ProgramStatus::Active,
            start_date: date(2024, 3, 1),
            end_date: date(2025, 2, 28),
            manager_id: Some("2".to_string()),
            created_at: now,
            updated_at: now,
        },
    ]
}

fn demo_projects(now: Timestamp) -> Vec<Project> {
    vec![
        Project {
            id: "proj1".to_string(),
            name: "Customer Portal Redesign".to_string(),
            description: Some("Redesign and modernize customer-facing portal".to_string()),
            status: ProjectStatus::Active,
            progress: 75,
            program_id: Some("prog1".to_string()),
            manager_id: Some("1".to_string()),
            start_date: date(2024, 9, 1),
            end_date: date(2024, 12, 15),
            created_at: now,
            updated_at: now,
        },
        Project {
            id: "proj2".to_string(),
            name: "API Integration Platform".to_string(),
            description: Some("Build centralized API integration platform".to_string()),
            status: ProjectStatus::Planning,
            progress: 25,
            program_id: Some("prog2".to_string()),
            manager_id: Some("2".to_string()),
            start_date: date(2024, 11, 1),
            end_date: date(2025, 1, 30),
            created_at: now,
            updated_at: now,
        },
    ]
}

fn demo_tasks(now: Timestamp) -> Vec<Task> {
    vec![
        Task {
            id: "task1".to_string(),
            title: "Update user authentication flow".to_string(),
            description: Some("Implement OAuth 2.0 authentication".to_string()),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            project_id: Some("proj1".to_string()),
            assignee_id: Some("3".to_string()),
            due_date: date(2024, 12, 10),
            completed_at: None,
            created_at: now,
            updated_at: now,
        },
        Task {
            id: "task2".to_string(),
            title: "Database migration testing".to_string(),
            description: Some("Test database migration scripts".to_string()),
            status: TaskStatus::Completed,
            priority: TaskPriority::Medium,
            project_id: Some("proj1".to_string()),
            assignee_id: Some("2".to_string()),
            due_date: date(2024, 11, 30),
            completed_at: Some(now),
            created_at: now,
            updated_at: now,
        },
    ]
}

fn demo_blog_posts(now: Timestamp) -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "post1".to_string(),
            title: "Effective Stakeholder Communication Strategies".to_string(),
            slug: "effective-stakeholder-communication-strategies".to_string(),
            content: "<p>Learn how to master the art of communication with clients, staff, and management throughout the project lifecycle...</p>".to_string(),
            excerpt: Some("Learn how to master the art of communication with clients, staff, and management throughout the project lifecycle.".to_string()),
            featured_image: Some("https://images.unsplash.com/photo-1586281380349-632531db7ed4?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400".to_string()),
            category: "Project Management".to_string(),
            tags: vec![
                "communication".to_string(),
                "stakeholders".to_string(),
                "project management".to_string(),
            ],
            author_id: Some("1".to_string()),
            published: true,
            published_at: date(2024, 12, 5),
            created_at: now,
            updated_at: now,
        },
        BlogPost {
            id: "post2".to_string(),
            title: "PMI Framework Integration in Practice".to_string(),
            slug: "pmi-framework-integration-in-practice".to_string(),
            content: "<p>Discover how to seamlessly integrate PMI standards with Project Mechanics methodology for better outcomes...</p>".to_string(),
            excerpt: Some("Discover how to seamlessly integrate PMI standards with Project Mechanics methodology for better outcomes.".to_string()),
            featured_image: Some("https://images.unsplash.com/photo-1553877522-43269d4ea984?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400".to_string()),
            category: "Best Practices".to_string(),
            tags: vec![
                "PMI".to_string(),
                "framework".to_string(),
                "methodology".to_string(),
            ],
            author_id: Some("2".to_string()),
            published: true,
            published_at: date(2024, 12, 1),
            created_at: now,
            updated_at: now,
        },
    ]
}
