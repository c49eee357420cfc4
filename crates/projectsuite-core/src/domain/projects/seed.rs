//! Demo data set

use chrono::NaiveDate;

use crate::domain::notifications::{Notification, NotificationKind};

use super::entity::{Project, ProjectCategory, ProjectId, ProjectPriority, ProjectStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The four demo projects, ids 1 to 4
pub fn demo_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId(1),
            title: "AI-Powered Website Redesign".to_string(),
            description: "Complete overhaul with machine learning recommendations and modern UI/UX principles".to_string(),
            status: ProjectStatus::Active,
            priority: ProjectPriority::High,
            start_date: date(2024, 9, 28),
            end_date: date(2024, 11, 15),
            progress: 65,
            category: ProjectCategory::Design,
            team_members: strings(&["Alice Johnson", "Bob Smith", "Carol Davis"]),
            budget: 50000.0,
            spent: 32500.0,
            tasks: 24,
            completed_tasks: 16,
            tags: strings(&["urgent", "client-facing", "revenue-critical", "ai"]),
            last_activity: date(2024, 9, 29),
            starred: true,
            archived: false,
        },
        Project {
            id: ProjectId(2),
            title: "Cross-Platform Mobile Suite".to_string(),
            description: "React Native application with advanced analytics dashboard and real-time notifications".to_string(),
            status: ProjectStatus::Planning,
            priority: ProjectPriority::Medium,
            start_date: date(2024, 10, 15),
            end_date: date(2025, 2, 28),
            progress: 15,
            category: ProjectCategory::Development,
            team_members: strings(&["David Wilson", "Eve Martinez", "Frank Thompson"]),
            budget: 80000.0,
            spent: 12000.0,
            tasks: 45,
            completed_tasks: 7,
            tags: strings(&["mobile", "analytics", "cross-platform", "react-native"]),
            last_activity: date(2024, 9, 28),
            starred: false,
            archived: false,
        },
        Project {
            id: ProjectId(3),
            title: "Cloud Infrastructure Migration".to_string(),
            description: "Kubernetes deployment with auto-scaling capabilities and improved security protocols".to_string(),
            status: ProjectStatus::Completed,
            priority: ProjectPriority::High,
            start_date: date(2024, 8, 1),
            end_date: date(2024, 9, 15),
            progress: 100,
            category: ProjectCategory::Infrastructure,
            team_members: strings(&["Grace Lee", "Henry Park"]),
            budget: 35000.0,
            spent: 33800.0,
            tasks: 18,
            completed_tasks: 18,
            tags: strings(&["infrastructure", "scalability", "performance", "kubernetes"]),
            last_activity: date(2024, 9, 15),
            starred: false,
            archived: false,
        },
        Project {
            id: ProjectId(4),
            title: "Market Research Analysis".to_string(),
            description: "Comprehensive competitor analysis with AI insights and market trend predictions".to_string(),
            status: ProjectStatus::OnHold,
            priority: ProjectPriority::Low,
            start_date: date(2024, 11, 1),
            end_date: date(2024, 12, 15),
            progress: 5,
            category: ProjectCategory::Research,
            team_members: strings(&["Ivy Chen", "Jack Robinson"]),
            budget: 25000.0,
            spent: 1250.0,
            tasks: 12,
            completed_tasks: 1,
            tags: strings(&["research", "market-analysis", "competitive", "ai-insights"]),
            last_activity: date(2024, 9, 20),
            starred: false,
            archived: false,
        },
    ]
}

/// The three demo notifications, newest first
pub fn demo_notifications() -> Vec<Notification> {
    vec![
        Notification::new(
            1,
            NotificationKind::Success,
            "Website Redesign milestone reached - 65% complete",
            "2024-09-29 10:30",
        ),
        Notification::new(
            2,
            NotificationKind::Warning,
            "Mobile Suite task deadline approaching in 2 days",
            "2024-09-29 09:15",
        ),
        Notification::new(
            3,
            NotificationKind::Error,
            "Budget threshold exceeded for Infrastructure project",
            "2024-09-28 16:45",
        ),
    ]
}
