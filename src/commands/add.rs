use super::Context;
use crate::libs::messages::Message;
use crate::libs::parser::parse_fields;
use crate::libs::task::Task;
use anyhow::Result;

/// `add <title...> [--category <name>] [--important]`
pub fn cmd(ctx: &mut Context, tokens: &[String]) -> Result<()> {
    let fields = match parse_fields(tokens) {
        Ok(fields) => fields,
        Err(err) => return ctx.reject(err.into()),
    };

    let mut task = Task::new(&fields.title, &fields.category, fields.is_important);
    let id = ctx.tasks.save(&mut task)?;

    ctx.confirm(Message::TaskCreated(id))
}
