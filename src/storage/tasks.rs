//! Owner-scoped task repository.
//!
//! Every query filters on the owner identity, so one chat identity can
//! only ever see or touch its own records. Cross-process coordination is
//! out of scope; callers get whatever `SQLite` gives them.

use chrono::{Duration, NaiveDate};
use rusqlite::params;
use serde::Serialize;

use crate::core::{Category, ParsedTask, Priority};
use crate::error::TaskbotError;

use super::Database;

/// Column list shared by every SELECT so row mapping stays in one place.
const TASK_COLUMNS: &str =
    "id, owner, title, description, category, priority, tags, due_date, \
     completed, created_at, completed_at";

/// A stored task record.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub owner: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: String,
    pub completed_at: Option<String>,
}

impl Task {
    /// Whether the task is past due relative to `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }
}

/// Aggregate task counts for one owner.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TaskStats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
}

impl TaskStats {
    /// Completion rate in percent, 0 for an empty set.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Task store backed by the taskbot database.
pub struct TaskStore {
    db: Database,
}

impl TaskStore {
    /// Wrap an open database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the store at the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, TaskbotError> {
        Database::open().map(Self::new)
    }

    /// Open the store at a specific database path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_at(path: &std::path::Path) -> Result<Self, TaskbotError> {
        Database::open_at(path).map(Self::new)
    }

    /// Open an in-memory store (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_in_memory() -> Result<Self, TaskbotError> {
        Database::open_in_memory().map(Self::new)
    }

    /// Insert a parsed task and return its record id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add(
        &self,
        owner: &str,
        task: &ParsedTask,
        description: &str,
    ) -> Result<i64, TaskbotError> {
        let tags_json = serde_json::to_string(&task.tags)?;

        self.db
            .connection()
            .execute(
                "INSERT INTO tasks (owner, title, description, category, priority, tags, due_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    owner,
                    task.title,
                    description,
                    task.category.as_str(),
                    task.priority.as_value(),
                    tags_json,
                    task.due_date_iso(),
                ],
            )
            .map_err(|e| TaskbotError::Database(format!("Failed to add task: {e}")))?;

        Ok(self.db.connection().last_insert_rowid())
    }

    /// Fetch one task by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, owner: &str, id: i64) -> Result<Option<Task>, TaskbotError> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE owner = ?1 AND id = ?2");
        let mut tasks = self.query_tasks(&sql, params![owner, id])?;
        Ok(tasks.pop())
    }

    /// List pending or completed tasks, optionally filtered by category.
    ///
    /// Ordered by priority, then due date, then most recently created.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(
        &self,
        owner: &str,
        completed: bool,
        category: Option<Category>,
    ) -> Result<Vec<Task>, TaskbotError> {
        const ORDER: &str = " ORDER BY priority ASC, due_date ASC, created_at DESC";

        match category {
            Some(category) => {
                let sql = format!(
                    "SELECT {TASK_COLUMNS} FROM tasks \
                     WHERE owner = ?1 AND completed = ?2 AND category = ?3{ORDER}"
                );
                self.query_tasks(&sql, params![owner, i64::from(completed), category.as_str()])
            }
            None => {
                let sql = format!(
                    "SELECT {TASK_COLUMNS} FROM tasks \
                     WHERE owner = ?1 AND completed = ?2{ORDER}"
                );
                self.query_tasks(&sql, params![owner, i64::from(completed)])
            }
        }
    }

    /// Mark a task completed. Returns false if the id does not exist for
    /// this owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn complete(&self, owner: &str, id: i64) -> Result<bool, TaskbotError> {
        let changed = self
            .db
            .connection()
            .execute(
                "UPDATE tasks SET completed = 1, completed_at = datetime('now')
                 WHERE owner = ?1 AND id = ?2",
                params![owner, id],
            )
            .map_err(|e| TaskbotError::Database(format!("Failed to complete task: {e}")))?;

        Ok(changed > 0)
    }

    /// Delete a task. Returns false if the id does not exist for this owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, owner: &str, id: i64) -> Result<bool, TaskbotError> {
        let changed = self
            .db
            .connection()
            .execute(
                "DELETE FROM tasks WHERE owner = ?1 AND id = ?2",
                params![owner, id],
            )
            .map_err(|e| TaskbotError::Database(format!("Failed to delete task: {e}")))?;

        Ok(changed > 0)
    }

    /// Substring search across title, description, and tags of pending
    /// tasks, most urgent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search(&self, owner: &str, keyword: &str) -> Result<Vec<Task>, TaskbotError> {
        let pattern = format!("%{keyword}%");
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks \
             WHERE owner = ?1 AND completed = 0 \
             AND (title LIKE ?2 OR description LIKE ?2 OR tags LIKE ?2) \
             ORDER BY priority ASC"
        );
        self.query_tasks(&sql, params![owner, pattern])
    }

    /// Aggregate counts for one owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn stats(&self, owner: &str) -> Result<TaskStats, TaskbotError> {
        let (total, completed) = self
            .db
            .connection()
            .query_row(
                "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM tasks WHERE owner = ?1",
                params![owner],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
            )
            .map_err(|e| TaskbotError::Database(format!("Failed to get stats: {e}")))?;

        Ok(TaskStats {
            total,
            completed,
            pending: total - completed,
        })
    }

    /// Pending tasks due within `within_days` of `today`, including any
    /// already overdue, soonest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn upcoming(
        &self,
        owner: &str,
        within_days: i64,
        today: NaiveDate,
    ) -> Result<Vec<Task>, TaskbotError> {
        let limit = (today + Duration::days(within_days))
            .format("%Y-%m-%d")
            .to_string();
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks \
             WHERE owner = ?1 AND completed = 0 AND due_date IS NOT NULL AND due_date <= ?2 \
             ORDER BY due_date ASC"
        );
        self.query_tasks(&sql, params![owner, limit])
    }

    /// Pending task counts per category, in display order, zeros included.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn category_counts(&self, owner: &str) -> Result<Vec<(Category, i64)>, TaskbotError> {
        let mut stmt = self
            .db
            .connection()
            .prepare(
                "SELECT category, COUNT(*) FROM tasks \
                 WHERE owner = ?1 AND completed = 0 GROUP BY category",
            )
            .map_err(|e| TaskbotError::Database(format!("Failed to count categories: {e}")))?;

        let rows = stmt
            .query_map(params![owner], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .map_err(|e| TaskbotError::Database(format!("Failed to count categories: {e}")))?;

        let mut counts = std::collections::HashMap::new();
        for row in rows {
            let (name, count) =
                row.map_err(|e| TaskbotError::Database(format!("Failed to read row: {e}")))?;
            counts.insert(Category::from_str_lossy(&name), count);
        }

        Ok(Category::ALL
            .iter()
            .map(|category| (*category, counts.get(category).copied().unwrap_or(0)))
            .collect())
    }

    /// Delete every task for an owner. Returns the number removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&self, owner: &str) -> Result<usize, TaskbotError> {
        self.db
            .connection()
            .execute("DELETE FROM tasks WHERE owner = ?1", params![owner])
            .map_err(|e| TaskbotError::Database(format!("Failed to clear tasks: {e}")))
    }

    /// Every task for an owner, completed included, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn export(&self, owner: &str) -> Result<Vec<Task>, TaskbotError> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE owner = ?1 ORDER BY id ASC");
        self.query_tasks(&sql, params![owner])
    }

    fn query_tasks<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
    ) -> Result<Vec<Task>, TaskbotError> {
        let mut stmt = self
            .db
            .connection()
            .prepare(sql)
            .map_err(|e| TaskbotError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, task_from_row)
            .map_err(|e| TaskbotError::Database(format!("Query failed: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| TaskbotError::Database(format!("Failed to read row: {e}")))
    }
}

fn task_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    let tags_json: String = row.get(6)?;
    let due_date: Option<String> = row.get(7)?;

    Ok(Task {
        id: row.get(0)?,
        owner: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        category: Category::from_str_lossy(&row.get::<_, String>(4)?),
        priority: Priority::from_value(row.get(5)?),
        // We wrote the column ourselves; anything unreadable becomes empty.
        tags: serde_json::from_str(&tags_json).unwrap_or_default(),
        due_date: due_date.and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
        completed: row.get::<_, i64>(8)? != 0,
        created_at: row.get(9)?,
        completed_at: row.get(10)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse;

    /// 2024-06-10 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn store() -> TaskStore {
        TaskStore::open_in_memory().unwrap()
    }

    fn add(store: &TaskStore, owner: &str, text: &str) -> i64 {
        store.add(owner, &parse(text, monday()), "").unwrap()
    }

    #[test]
    fn test_add_and_get_roundtrip() {
        let store = store();
        let id = add(&store, "u1", "#work Finish report #q3 by friday");

        let task = store.get("u1", id).unwrap().unwrap();
        assert_eq!(task.title, "Finish report");
        assert_eq!(task.category, Category::Work);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.tags, vec!["q3"]);
        assert_eq!(
            task.due_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
        );
        assert!(!task.completed);
    }

    #[test]
    fn test_get_scoped_to_owner() {
        let store = store();
        let id = add(&store, "u1", "private task");

        assert!(store.get("u2", id).unwrap().is_none());
    }

    #[test]
    fn test_list_orders_by_priority() {
        let store = store();
        add(&store, "u1", "background chore #low");
        add(&store, "u1", "fire drill #urgent");
        add(&store, "u1", "normal errand");

        let tasks = store.list("u1", false, None).unwrap();
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["fire drill", "normal errand", "background chore"]);
    }

    #[test]
    fn test_list_filters_by_category() {
        let store = store();
        add(&store, "u1", "buy eggs #shopping");
        add(&store, "u1", "review PR #work");

        let shopping = store.list("u1", false, Some(Category::Shopping)).unwrap();
        assert_eq!(shopping.len(), 1);
        assert_eq!(shopping[0].title, "buy eggs");
    }

    #[test]
    fn test_complete_moves_between_lists() {
        let store = store();
        let id = add(&store, "u1", "one-off");

        assert!(store.complete("u1", id).unwrap());
        assert!(store.list("u1", false, None).unwrap().is_empty());

        let done = store.list("u1", true, None).unwrap();
        assert_eq!(done.len(), 1);
        assert!(done[0].completed);
        assert!(done[0].completed_at.is_some());
    }

    #[test]
    fn test_complete_wrong_owner_is_noop() {
        let store = store();
        let id = add(&store, "u1", "mine");

        assert!(!store.complete("u2", id).unwrap());
        assert!(!store.get("u1", id).unwrap().unwrap().completed);
    }

    #[test]
    fn test_delete() {
        let store = store();
        let id = add(&store, "u1", "ephemeral");

        assert!(store.delete("u1", id).unwrap());
        assert!(!store.delete("u1", id).unwrap());
        assert!(store.get("u1", id).unwrap().is_none());
    }

    #[test]
    fn test_search_matches_title_and_tags() {
        let store = store();
        add(&store, "u1", "renew passport #travel");
        add(&store, "u1", "water plants");

        let by_title = store.search("u1", "passport").unwrap();
        assert_eq!(by_title.len(), 1);

        let by_tag = store.search("u1", "travel").unwrap();
        assert_eq!(by_tag.len(), 1);

        assert!(store.search("u1", "nothing").unwrap().is_empty());
    }

    #[test]
    fn test_search_skips_completed() {
        let store = store();
        let id = add(&store, "u1", "archive me");
        store.complete("u1", id).unwrap();

        assert!(store.search("u1", "archive").unwrap().is_empty());
    }

    #[test]
    fn test_stats() {
        let store = store();
        add(&store, "u1", "a");
        add(&store, "u1", "b");
        let id = add(&store, "u1", "c");
        store.complete("u1", id).unwrap();

        let stats = store.stats("u1").unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
        assert!((stats.completion_rate() - 33.333).abs() < 0.01);

        let empty = store.stats("u2").unwrap();
        assert_eq!(empty.total, 0);
        assert!((empty.completion_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_upcoming_window_includes_overdue() {
        let store = store();
        add(&store, "u1", "close call by friday");
        add(&store, "u1", "far out by 2024-12-31");
        add(&store, "u1", "overdue by 2024-06-01");
        add(&store, "u1", "no date at all");

        let upcoming = store.upcoming("u1", 7, monday()).unwrap();
        let titles: Vec<&str> = upcoming.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["overdue", "close call"]);
        assert!(upcoming[0].is_overdue(monday()));
        assert!(!upcoming[1].is_overdue(monday()));
    }

    #[test]
    fn test_category_counts_include_zeros() {
        let store = store();
        add(&store, "u1", "buy eggs #shopping");
        add(&store, "u1", "buy milk #shopping");

        let counts = store.category_counts("u1").unwrap();
        assert_eq!(counts.len(), Category::ALL.len());

        let shopping = counts
            .iter()
            .find(|(c, _)| *c == Category::Shopping)
            .unwrap();
        assert_eq!(shopping.1, 2);

        let health = counts.iter().find(|(c, _)| *c == Category::Health).unwrap();
        assert_eq!(health.1, 0);
    }

    #[test]
    fn test_clear_scoped_to_owner() {
        let store = store();
        add(&store, "u1", "a");
        add(&store, "u1", "b");
        add(&store, "u2", "keep me");

        assert_eq!(store.clear("u1").unwrap(), 2);
        assert!(store.list("u1", false, None).unwrap().is_empty());
        assert_eq!(store.list("u2", false, None).unwrap().len(), 1);
    }

    #[test]
    fn test_export_includes_completed() {
        let store = store();
        add(&store, "u1", "open one");
        let id = add(&store, "u1", "done one");
        store.complete("u1", id).unwrap();

        let all = store.export("u1").unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_tags_preserve_order_and_duplicates() {
        let store = store();
        let id = add(&store, "u1", "task #b #a #b");

        let task = store.get("u1", id).unwrap().unwrap();
        assert_eq!(task.tags, vec!["b", "a", "b"]);
    }
}
