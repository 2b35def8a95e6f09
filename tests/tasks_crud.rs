#[cfg(test)]
mod tests {
    use taskberry::db::db::StoreConfig;
    use taskberry::db::error::StoreError;
    use taskberry::db::tasks::Tasks;
    use taskberry::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
    }

    impl StoreTestContext {
        fn config(&self) -> StoreConfig {
            StoreConfig::new(self.temp_dir.path().join("taskberry.db"))
        }

        fn tasks(&self) -> Tasks {
            Tasks::new(self.config()).unwrap()
        }
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            StoreTestContext { temp_dir }
        }
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().filter_map(|t| t.id).collect()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_task_round_trip(ctx: &mut StoreTestContext) {
        let tasks = ctx.tasks();

        let mut task = Task::new("Buy milk", "Errand", true);
        let id = tasks.save(&mut task).unwrap();
        assert_eq!(task.id, Some(id));

        let fetched = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.title, "Buy milk");
        assert_eq!(fetched.category, "Errand");
        assert!(fetched.is_important);
        assert!(!fetched.is_completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_ensure_schema_is_idempotent(ctx: &mut StoreTestContext) {
        let tasks = ctx.tasks();
        let mut task = Task::new("Keep me", "", false);
        tasks.save(&mut task).unwrap();

        tasks.ensure_schema().unwrap();
        tasks.ensure_schema().unwrap();
        let reopened = ctx.tasks();

        let all = reopened.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Keep me");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_existing_updates_in_place(ctx: &mut StoreTestContext) {
        let tasks = ctx.tasks();
        let mut task = Task::new("Original", "Home", false);
        let id = tasks.save(&mut task).unwrap();

        task.title = "Renamed".to_string();
        task.category = "Work".to_string();
        task.is_completed = true;
        assert_eq!(tasks.save(&mut task).unwrap(), id);

        let all = tasks.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, Some(id));
        assert_eq!(all[0].title, "Renamed");
        assert_eq!(all[0].category, "Work");
        assert!(all[0].is_completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_unknown_id_is_not_found(ctx: &mut StoreTestContext) {
        let tasks = ctx.tasks();
        let mut task = Task::new("Ghost", "", false);
        task.id = Some(42);

        assert!(matches!(tasks.save(&mut task), Err(StoreError::NotFound(42))));
        assert!(tasks.get_all().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_get_all_ordering(ctx: &mut StoreTestContext) {
        let tasks = ctx.tasks();

        // (important, completed) for ids 1..=6
        let flags = [(false, true), (true, false), (false, false), (true, true), (true, false), (false, false)];
        for (i, (important, completed)) in flags.iter().enumerate() {
            let mut task = Task::new(&format!("Task {}", i + 1), "", *important);
            task.is_completed = *completed;
            tasks.save(&mut task).unwrap();
        }

        let all = tasks.get_all().unwrap();
        assert_eq!(ids(&all), vec![2, 5, 4, 3, 6, 1]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_empty_store_returns_empty_list(ctx: &mut StoreTestContext) {
        let tasks = ctx.tasks();
        assert!(tasks.get_all().unwrap().is_empty());
        assert!(tasks.get_by_category("Home").unwrap().is_empty());
        assert!(tasks.get_by_id(1).unwrap().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_category_filters(ctx: &mut StoreTestContext) {
        let tasks = ctx.tasks();
        for (title, category) in [("Dishes", "Home"), ("Report", "Work"), ("Garden", "home"), ("Loose", "")] {
            tasks.save(&mut Task::new(title, category, false)).unwrap();
        }

        let exact = tasks.get_by_category("Home").unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].title, "Dishes");

        let folded = tasks.fetch(TaskFilter::CategoryFolded("HOME".to_string())).unwrap();
        assert_eq!(ids(&folded), vec![1, 3]);

        let uncategorized = tasks.get_by_category("").unwrap();
        assert_eq!(uncategorized.len(), 1);
        assert_eq!(uncategorized[0].title, "Loose");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_folded_category_handles_non_ascii(ctx: &mut StoreTestContext) {
        let tasks = ctx.tasks();
        tasks.save(&mut Task::new("Soup", "Küche", false)).unwrap();
        tasks.save(&mut Task::new("Oven", "KÜCHE", true)).unwrap();
        tasks.save(&mut Task::new("Desk", "Büro", false)).unwrap();

        let folded = tasks.fetch(TaskFilter::CategoryFolded("küCHE".to_string())).unwrap();
        assert_eq!(ids(&folded), vec![2, 1]);
        assert_eq!(tasks.get_by_category("KÜCHE").unwrap().len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut StoreTestContext) {
        let tasks = ctx.tasks();
        let mut keep = Task::new("Keep", "", false);
        let mut gone = Task::new("Drop", "", false);
        tasks.save(&mut keep).unwrap();
        tasks.save(&mut gone).unwrap();

        tasks.delete(&gone).unwrap();

        let remaining = tasks.get_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Keep");
        assert!(matches!(tasks.delete(&gone), Err(StoreError::NotFound(_))));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_unsaved_task_is_rejected(ctx: &mut StoreTestContext) {
        let tasks = ctx.tasks();
        tasks.save(&mut Task::new("Existing", "", false)).unwrap();

        let unsaved = Task::new("Never saved", "", false);
        assert!(unsaved.id.is_none());
        assert!(matches!(tasks.delete(&unsaved), Err(StoreError::NotPersisted)));
        assert_eq!(tasks.get_all().unwrap().len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_database_parent_directory_is_created(ctx: &mut StoreTestContext) {
        let path = ctx.temp_dir.path().join("nested").join("dir").join("tasks.db");
        let tasks = Tasks::new(StoreConfig::new(&path)).unwrap();
        tasks.save(&mut Task::new("Nested", "", false)).unwrap();

        assert!(path.exists());
    }
}
