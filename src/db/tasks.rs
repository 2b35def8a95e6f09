//! Task persistence over the single `task` table.
//!
//! Rows are always returned important-first, then open before completed, then
//! by ascending id. Saving a task without an id inserts it; saving a task with
//! an id rewrites that row (last writer wins).

use super::db::{Db, StoreConfig};
use super::error::{Result, StoreError};
use crate::libs::task::{Task, TaskFilter};
use rusqlite::{params, Row};
use tracing::debug;

const SCHEMA_TASK: &str = "CREATE TABLE IF NOT EXISTS task (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    category TEXT DEFAULT '',
    is_completed INTEGER NOT NULL DEFAULT 0,
    is_important INTEGER NOT NULL DEFAULT 0
);";
const INSERT_TASK: &str = "INSERT INTO task (title, category, is_completed, is_important) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TASK: &str = "UPDATE task SET title = ?2, category = ?3, is_completed = ?4, is_important = ?5 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM task WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, COALESCE(category, ''), is_completed, is_important FROM task";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_CATEGORY: &str = "WHERE category = ?1";
const ORDER_TASKS: &str = "ORDER BY is_important DESC, is_completed ASC, id ASC";

pub struct Tasks {
    config: StoreConfig,
}

impl Tasks {
    /// Creates a store for the given database and makes sure the `task`
    /// table exists.
    pub fn new(config: StoreConfig) -> Result<Tasks> {
        let tasks = Tasks { config };
        tasks.ensure_schema()?;

        Ok(tasks)
    }

    /// Creates the `task` table if it is missing. Safe to call repeatedly.
    pub fn ensure_schema(&self) -> Result<()> {
        let db = Db::open(&self.config)?;
        db.conn.execute(SCHEMA_TASK, [])?;

        Ok(())
    }

    /// Inserts a new task or updates an existing one, returning its id.
    ///
    /// On insert the assigned id is written back into `task.id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when `task.id` is set but no such row exists.
    pub fn save(&self, task: &mut Task) -> Result<i64> {
        let db = Db::open(&self.config)?;

        match task.id {
            None => {
                db.conn.execute(INSERT_TASK, params![task.title, task.category, task.is_completed, task.is_important])?;
                let id = db.conn.last_insert_rowid();
                task.id = Some(id);
                debug!(id, "task inserted");

                Ok(id)
            }
            Some(id) => {
                let affected = db.conn.execute(
                    UPDATE_TASK,
                    params![id, task.title, task.category, task.is_completed, task.is_important],
                )?;
                if affected == 0 {
                    return Err(StoreError::NotFound(id));
                }
                debug!(id, "task updated");

                Ok(id)
            }
        }
    }

    pub fn get_all(&self) -> Result<Vec<Task>> {
        self.fetch(TaskFilter::All)
    }

    /// Tasks whose category matches exactly (case-sensitive).
    pub fn get_by_category(&self, category: &str) -> Result<Vec<Task>> {
        self.fetch(TaskFilter::Category(category.to_string()))
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let db = Db::open(&self.config)?;
        let mut stmt = db.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_ID))?;
        let mut task_iter = stmt.query_map(params![id], map_task)?;

        match task_iter.next() {
            Some(Ok(task)) => Ok(Some(task)),
            Some(Err(e)) => Err(e.into()),
            None => Ok(None),
        }
    }

    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (sql, param) = match filter {
            TaskFilter::All => (format!("{} {}", SELECT_TASKS, ORDER_TASKS), None),
            TaskFilter::Category(category) => (format!("{} {} {}", SELECT_TASKS, WHERE_CATEGORY, ORDER_TASKS), Some(category)),
            // SQLite's lower() folds ASCII only
            TaskFilter::CategoryFolded(category) => {
                let folded = category.to_lowercase();
                let tasks = self.fetch(TaskFilter::All)?;
                return Ok(tasks.into_iter().filter(|task| task.category.to_lowercase() == folded).collect());
            }
        };

        let db = Db::open(&self.config)?;
        let mut stmt = db.conn.prepare(&sql)?;
        let task_iter = match &param {
            Some(category) => stmt.query_map(params![category], map_task)?,
            None => stmt.query_map([], map_task)?,
        };

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        debug!(count = tasks.len(), "tasks fetched");

        Ok(tasks)
    }

    /// Removes the task's row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotPersisted`] for a task without an id (the database
    /// is not touched) and [`StoreError::NotFound`] when no row was removed.
    pub fn delete(&self, task: &Task) -> Result<()> {
        let id = task.id.ok_or(StoreError::NotPersisted)?;
        let db = Db::open(&self.config)?;
        let affected = db.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, "task deleted");

        Ok(())
    }
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        is_completed: row.get(3)?,
        is_important: row.get(4)?,
    })
}
