use super::Context;
use crate::libs::messages::Message;
use crate::libs::parser::parse_id;
use anyhow::Result;

/// `done <id>` when `completed` is true, `undone <id>` otherwise.
pub fn cmd(ctx: &mut Context, tokens: &[String], completed: bool) -> Result<()> {
    let id = match parse_id(tokens.first().map(String::as_str)) {
        Ok(id) => id,
        Err(err) => return ctx.reject(err.into()),
    };
    let Some(mut task) = ctx.find_task(id)? else {
        return Ok(());
    };

    task.is_completed = completed;
    ctx.tasks.save(&mut task)?;

    let msg = if completed { Message::TaskCompleted(id) } else { Message::TaskReopened(id) };
    ctx.confirm(msg)
}
