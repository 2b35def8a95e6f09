use super::Context;
use crate::libs::view::ListOptions;
use anyhow::Result;

/// Listing keyword that includes completed tasks.
pub const ALL_KEYWORD: &str = "all";

/// `list [<category>] [all]`
pub fn cmd(ctx: &mut Context, tokens: &[String]) -> Result<()> {
    let options = list_options(tokens, ctx.config.show_completed);
    ctx.show_listing(&options)
}

/// Reads `list` tokens: `all` (any case) includes completed tasks, the first
/// other token is the category filter.
pub fn list_options(tokens: &[String], show_completed: bool) -> ListOptions {
    ListOptions {
        category: tokens.iter().find(|token| !is_all(token)).cloned(),
        include_completed: show_completed || tokens.iter().any(|token| is_all(token)),
    }
}

fn is_all(token: &str) -> bool {
    token.eq_ignore_ascii_case(ALL_KEYWORD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_list_options_defaults() {
        let options = list_options(&[], false);
        assert_eq!(options, ListOptions::default());

        let options = list_options(&[], true);
        assert!(options.include_completed);
    }

    #[test]
    fn test_list_options_category_and_all() {
        let options = list_options(&tokens(&["Home", "ALL"]), false);
        assert_eq!(options.category.as_deref(), Some("Home"));
        assert!(options.include_completed);

        let options = list_options(&tokens(&["all", "work"]), false);
        assert_eq!(options.category.as_deref(), Some("work"));
        assert!(options.include_completed);
    }
}
