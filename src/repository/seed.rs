//! Demo fixtures for an explorable out-of-the-box setup

use chrono::Utc;

use crate::models::instructor::{Instructor, InstructorToolStatus};
use crate::models::tool::{Tool, ToolCondition, ToolStatus};
use crate::models::user::{User, UserRole, UserStatus};

use super::Store;

/// Load the demo instructors, their starter inventory and matching
/// accounts. Everything starts fully stocked with no open transactions.
pub fn load_demo_data(store: &mut Store) {
    let instructors = [
        ("Prof. Richard Anderson", "r.anderson@dpraviation.edu", "14:00"),
        ("Dr. Sarah Mitchell", "s.mitchell@dpraviation.edu", "20:00"),
        ("Eng. Michael Torres", "m.torres@dpraviation.edu", "16:00"),
    ];
    for (name, email, shift_end_time) in instructors {
        let id = store.next_instructor_id();
        store.instructors.insert(
            id.clone(),
            Instructor {
                id,
                name: name.to_string(),
                email: email.to_string(),
                tool_status: InstructorToolStatus::NoTools,
                shift_end_time: shift_end_time.to_string(),
            },
        );
        let user_id = store.next_user_id();
        store.users.insert(
            user_id.clone(),
            User {
                id: user_id,
                name: name.to_string(),
                email: email.to_string(),
                role: UserRole::Instructor,
                status: UserStatus::Active,
                join_date: Utc::now().date_naive(),
                tool_status: Some(InstructorToolStatus::NoTools),
            },
        );
    }

    let tools = [
        ("Torque Wrench", "Hand Tools", "Cabinet A1", 5, "I-001"),
        ("Digital Multimeter", "Testing Equipment", "Cabinet B2", 10, "I-001"),
        ("Socket Set (42pc)", "Hand Tools", "Cabinet A3", 8, "I-001"),
        ("Wire Stripper", "Hand Tools", "Cabinet C1", 15, "I-002"),
        ("Cordless Drill Set", "Power Tools", "Cabinet D2", 3, "I-002"),
        ("Micrometer Set", "Measuring Tools", "Cabinet B1", 6, "I-002"),
        ("Safety Wire Pliers", "Hand Tools", "Cabinet A2", 12, "I-003"),
        ("Rivet Gun", "Hand Tools", "Cabinet C3", 4, "I-003"),
    ];
    for (name, category, location, qty, instructor_id) in tools {
        let id = store.next_tool_id();
        store.tools.insert(
            id.clone(),
            Tool {
                id,
                name: name.to_string(),
                category: category.to_string(),
                location: location.to_string(),
                image: String::new(),
                total_qty: qty,
                available_qty: qty,
                status: ToolStatus::Available,
                condition: ToolCondition::Good,
                instructor_id: instructor_id.to_string(),
            },
        );
    }
}
