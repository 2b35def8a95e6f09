#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),

    // === VALIDATION MESSAGES ===
    TaskTitleRequired,
    InvalidTaskId,

    // === LISTING MESSAGES ===
    NoTasks,
    TasksHeader,
    TasksCategoryHeader(String), // category
    CompletedTasksHeader,
    TasksCount(usize),

    // === GENERAL MESSAGES ===
    UnknownCommand(String), // command name
}
