//! Command-line interface for taskberry.
//!
//! Each invocation runs exactly one operation. Subcommands receive their raw
//! trailing tokens and derive structured fields through [`crate::libs::parser`],
//! so `add Buy milk --category Errand` needs no quoting.
//!
//! Validation problems (missing title, bad id, unknown task) are reported
//! through the [`View`] and end the run normally. Storage failures propagate
//! to `main`.

pub mod add;
pub mod delete;
pub mod done;
pub mod list;
pub mod update;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::parser::ParseError;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::view::{ListOptions, TableView, View};
use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// Raw tokens following a subcommand.
#[derive(Debug, Args)]
pub struct TokenArgs {
    #[arg(value_name = "ARGS", num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task: add <title...> [--category <name>] [--important]")]
    Add(TokenArgs),
    #[command(
        about = "Replace a task's title, category and importance: update <id> <title...> [--category <name>] [--important]",
        visible_alias = "edit"
    )]
    Update(TokenArgs),
    #[command(about = "Mark a task as done: done <id>")]
    Done(TokenArgs),
    #[command(about = "Mark a task as not done: undone <id>")]
    Undone(TokenArgs),
    #[command(about = "Delete a task: delete <id>")]
    Delete(TokenArgs),
    #[command(about = "List tasks: list [<category>] [all]")]
    List(TokenArgs),
    #[command(about = "Show this help")]
    Help,
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[derive(Debug, Parser)]
#[command(name = "taskberry", author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parses the process arguments and runs the requested operation against
    /// the configured store, rendering to the terminal.
    pub fn menu() -> Result<()> {
        let cli = match Self::from_args(std::env::args_os()) {
            Ok(cli) => cli,
            Err(err) => err.exit(),
        };

        let mut view = TableView;
        if cli.show_usage(&mut view) {
            return Ok(());
        }

        let config = Config::read()?;
        let tasks = Tasks::new(config.store_config(cli.db.clone())?)?;

        cli.run(&tasks, &config, &mut view)
    }

    /// Parses `args` (program name first). An unrecognized leading flag or
    /// command is treated like an unknown command and ends in usage, not a
    /// parse failure. `--help`, `--version` and malformed known options still
    /// come back as clap errors.
    pub fn from_args<I, T>(args: I) -> std::result::Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(err) if matches!(err.kind(), ErrorKind::UnknownArgument | ErrorKind::InvalidSubcommand) => {
                let name = [ContextKind::InvalidArg, ContextKind::InvalidSubcommand]
                    .into_iter()
                    .find_map(|kind| match err.get(kind) {
                        Some(ContextValue::String(name)) => Some(name.clone()),
                        _ => None,
                    });
                debug!(?name, "unrecognized argument");

                Ok(Cli {
                    db: None,
                    command: Some(Commands::Other(name.into_iter().collect())),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Renders usage for `help` and unrecognized commands. Returns `false`
    /// for every other command, which needs the store.
    pub fn show_usage(&self, view: &mut dyn View) -> bool {
        match &self.command {
            Some(Commands::Help) => view.usage(&usage()),
            Some(Commands::Other(args)) => {
                if let Some(name) = args.first() {
                    view.info(Message::UnknownCommand(name.clone()));
                }
                view.usage(&usage());
            }
            _ => return false,
        }

        true
    }

    pub fn run(self, tasks: &Tasks, config: &Config, view: &mut dyn View) -> Result<()> {
        if self.show_usage(view) {
            return Ok(());
        }

        let mut ctx = Context { tasks, config, view };
        debug!(command = ?self.command, "dispatching");

        match self.command {
            None => ctx.show_default_listing(),
            Some(Commands::Add(args)) => add::cmd(&mut ctx, &args.tokens),
            Some(Commands::Update(args)) => update::cmd(&mut ctx, &args.tokens),
            Some(Commands::Done(args)) => done::cmd(&mut ctx, &args.tokens, true),
            Some(Commands::Undone(args)) => done::cmd(&mut ctx, &args.tokens, false),
            Some(Commands::Delete(args)) => delete::cmd(&mut ctx, &args.tokens),
            Some(Commands::List(args)) => list::cmd(&mut ctx, &args.tokens),
            Some(Commands::Help | Commands::Other(_)) => Ok(()),
        }
    }
}

/// Rendered help text for the whole command line.
pub fn usage() -> String {
    Cli::command().render_long_help().to_string()
}

/// Everything a single operation needs: the store, settings and output.
pub struct Context<'a> {
    pub tasks: &'a Tasks,
    pub config: &'a Config,
    pub view: &'a mut dyn View,
}

impl Context<'_> {
    pub fn default_list_options(&self) -> ListOptions {
        ListOptions {
            category: None,
            include_completed: self.config.show_completed,
        }
    }

    pub fn show_default_listing(&mut self) -> Result<()> {
        let options = self.default_list_options();
        self.show_listing(&options)
    }

    /// Fetches the tasks selected by `options` and hands them to the view.
    /// Completed tasks are dropped unless the options ask for them.
    pub fn show_listing(&mut self, options: &ListOptions) -> Result<()> {
        let tasks = match &options.category {
            Some(category) => self.tasks.fetch(TaskFilter::CategoryFolded(category.clone()))?,
            None => self.tasks.get_all()?,
        };
        let visible: Vec<Task> = tasks
            .into_iter()
            .filter(|task| options.include_completed || !task.is_completed)
            .collect();

        self.view.tasks(&visible, options)
    }

    /// Looks up a task for an id-addressed operation, reporting a missing
    /// row as a validation error.
    pub fn find_task(&mut self, id: i64) -> Result<Option<Task>> {
        let task = self.tasks.get_by_id(id)?;
        if task.is_none() {
            self.reject(Message::TaskNotFoundWithId(id))?;
        }

        Ok(task)
    }

    /// Reports a validation failure after the default listing.
    pub fn reject(&mut self, msg: Message) -> Result<()> {
        debug!(reason = %msg, "operation rejected");
        self.show_default_listing()?;
        self.view.error(msg);

        Ok(())
    }

    /// Shows the default listing followed by a success message.
    pub fn confirm(&mut self, msg: Message) -> Result<()> {
        self.show_default_listing()?;
        self.view.success(msg);

        Ok(())
    }
}

impl From<ParseError> for Message {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::MissingTitle => Message::TaskTitleRequired,
            ParseError::MissingId | ParseError::InvalidId(_) => Message::InvalidTaskId,
        }
    }
}
