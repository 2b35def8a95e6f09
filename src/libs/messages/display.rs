//! Display implementation for taskberry messages.
//!
//! All user-facing text lives here so commands only ever deal with
//! [`Message`] values.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("[{}] Task added.", id),
            Message::TaskUpdated(id) => format!("[{}] Task updated.", id),
            Message::TaskCompleted(id) => format!("[{}] Task marked as done.", id),
            Message::TaskReopened(id) => format!("[{}] Task marked as not done.", id),
            Message::TaskDeleted(id) => format!("[{}] Task deleted.", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),

            // === VALIDATION MESSAGES ===
            Message::TaskTitleRequired => "Please enter a task title.".to_string(),
            Message::InvalidTaskId => "Please enter a valid Task ID.".to_string(),

            // === LISTING MESSAGES ===
            Message::NoTasks => "0 tasks.".to_string(),
            Message::TasksHeader => "Tasks".to_string(),
            Message::TasksCategoryHeader(category) => format!("Tasks in '{}'", category),
            Message::CompletedTasksHeader => "Completed".to_string(),
            Message::TasksCount(count) => match count {
                1 => "1 task.".to_string(),
                _ => format!("{} tasks.", count),
            },

            // === GENERAL MESSAGES ===
            Message::UnknownCommand(command) => format!("Unknown command '{}'.", command),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_messages_carry_id() {
        assert_eq!(Message::TaskCreated(3).to_string(), "[3] Task added.");
        assert_eq!(Message::TaskDeleted(12).to_string(), "[12] Task deleted.");
    }

    #[test]
    fn test_tasks_count_pluralization() {
        assert_eq!(Message::TasksCount(0).to_string(), "0 tasks.");
        assert_eq!(Message::TasksCount(1).to_string(), "1 task.");
        assert_eq!(Message::TasksCount(4).to_string(), "4 tasks.");
    }
}
