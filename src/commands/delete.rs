use super::Context;
use crate::libs::messages::Message;
use crate::libs::parser::parse_id;
use anyhow::Result;

/// `delete <id>`
pub fn cmd(ctx: &mut Context, tokens: &[String]) -> Result<()> {
    let id = match parse_id(tokens.first().map(String::as_str)) {
        Ok(id) => id,
        Err(err) => return ctx.reject(err.into()),
    };
    let Some(task) = ctx.find_task(id)? else {
        return Ok(());
    };

    ctx.tasks.delete(&task)?;

    ctx.confirm(Message::TaskDeleted(id))
}
