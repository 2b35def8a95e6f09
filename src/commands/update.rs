use super::Context;
use crate::libs::messages::Message;
use crate::libs::parser::parse_update;
use anyhow::Result;

/// `update <id> <title...> [--category <name>] [--important]`
///
/// Title, category and importance are replaced; completion is kept.
pub fn cmd(ctx: &mut Context, tokens: &[String]) -> Result<()> {
    let (id, fields) = match parse_update(tokens) {
        Ok(parsed) => parsed,
        Err(err) => return ctx.reject(err.into()),
    };
    let Some(mut task) = ctx.find_task(id)? else {
        return Ok(());
    };

    task.title = fields.title;
    task.category = fields.category;
    task.is_important = fields.is_important;
    ctx.tasks.save(&mut task)?;

    ctx.confirm(Message::TaskUpdated(id))
}
