//! Terminal rendering of tasks and command feedback.
//!
//! Commands never print directly; they hand tasks and [`Message`]s to a
//! [`View`]. [`TableView`] is the terminal implementation built on prettytable.

use super::messages::Message;
use super::task::Task;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use prettytable::{format, row, Cell, Row, Table};

/// How a task listing should be presented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Category label the listing was filtered by, if any.
    pub category: Option<String>,
    /// Draw completed tasks in their own section.
    pub include_completed: bool,
}

pub trait View {
    fn tasks(&mut self, tasks: &[Task], options: &ListOptions) -> Result<()>;
    fn success(&mut self, msg: Message);
    fn error(&mut self, msg: Message);
    fn info(&mut self, msg: Message);
    fn usage(&mut self, text: &str);
}

pub struct TableView;

impl View for TableView {
    fn tasks(&mut self, tasks: &[Task], options: &ListOptions) -> Result<()> {
        let header = match &options.category {
            Some(category) => Message::TasksCategoryHeader(category.clone()),
            None => Message::TasksHeader,
        };
        msg_print!(header, true);

        if tasks.is_empty() {
            msg_print!(Message::NoTasks);
            return Ok(());
        }

        let (completed, open): (Vec<&Task>, Vec<&Task>) = tasks.iter().partition(|task| task.is_completed);
        if !open.is_empty() {
            task_table(&open).printstd();
        }
        if options.include_completed && !completed.is_empty() {
            msg_print!(Message::CompletedTasksHeader, true);
            task_table(&completed).printstd();
        }
        msg_print!(Message::TasksCount(tasks.len()), true);

        Ok(())
    }

    fn success(&mut self, msg: Message) {
        msg_success!(msg);
    }

    fn error(&mut self, msg: Message) {
        msg_error!(msg);
    }

    fn info(&mut self, msg: Message) {
        msg_info!(msg);
    }

    fn usage(&mut self, text: &str) {
        msg_print!(text);
    }
}

fn task_table(tasks: &[&Task]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row!["ID", "", "TITLE", "CATEGORY"]);

    for task in tasks {
        // Completed rows are dimmed, important open rows highlighted.
        let style = match (task.is_completed, task.is_important) {
            (true, _) => "FD",
            (false, true) => "Fy",
            (false, false) => "",
        };
        let marker = if task.is_important { "!" } else { "" };
        let id = task.id.map(|id| id.to_string()).unwrap_or_default();

        table.add_row(Row::new(vec![
            Cell::new(&id).style_spec(style),
            Cell::new(marker).style_spec(style),
            Cell::new(&task.title).style_spec(style),
            Cell::new(&task.category).style_spec(style),
        ]));
    }

    table
}
