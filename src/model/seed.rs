use chrono::{DateTime, Local, TimeZone, Utc};

use super::task::Task;

/// The fixed tasks present when the process starts. This is the only
/// at-rest state the application has; it is embedded here, not loaded
/// from anywhere.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Set up the super todo app".to_string(),
            description: Some(
                "Configure the application structure and basic functionality".to_string(),
            ),
            reporter: "Infra".to_string(),
            created_at: seed_date(2025, 1, 1),
            updated_at: seed_date(2025, 1, 1),
            completed: true,
        },
        Task {
            id: "2".to_string(),
            title: "Add task management features".to_string(),
            description: Some("Implement create, edit, and search functionality".to_string()),
            reporter: "Developer".to_string(),
            created_at: seed_date(2025, 5, 1),
            updated_at: seed_date(2025, 5, 1),
            completed: true,
        },
        Task {
            id: "3".to_string(),
            title: "Test the application".to_string(),
            description: None,
            reporter: "QA Team".to_string(),
            created_at: seed_date(2025, 7, 3),
            updated_at: seed_date(2025, 7, 3),
            completed: false,
        },
    ]
}

/// Seed dates are UTC midnights, converted to the local zone for display.
fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Local> {
    // with_ymd_and_hms is single-valued for any valid UTC date
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap()
        .with_timezone(&Local)
}
