/// A single to-do record.
///
/// `id` is `None` until the task has been persisted; the store assigns it on
/// the first save and every later save updates that row in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub category: String,
    pub is_completed: bool,
    pub is_important: bool,
}

impl Task {
    pub fn new(title: &str, category: &str, is_important: bool) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            category: category.to_string(),
            is_completed: false,
            is_important,
        }
    }
}

/// Row selection for `Tasks::fetch`.
#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    /// Exact, case-sensitive match on `category`.
    Category(String),
    /// Match on `category` after Unicode lower-casing both sides.
    CategoryFolded(String),
}
