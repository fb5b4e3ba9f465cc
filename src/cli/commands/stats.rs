//! Stats command implementation.

use crate::cli::args::OutputFormat;
use crate::error::TaskbotError;
use crate::output;
use crate::storage::TaskStore;

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn stats(
    store: &TaskStore,
    owner: &str,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    let stats = store.stats(owner)?;
    output::format_stats(&stats, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse;
    use chrono::NaiveDate;

    #[test]
    fn test_stats_counts() {
        let store = TaskStore::open_in_memory().unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        store.add("u1", &parse("a", monday), "").unwrap();
        store.add("u1", &parse("b", monday), "").unwrap();
        store.complete("u1", 1).unwrap();

        let output = stats(&store, "u1", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["completed"], 1);
        assert_eq!(value["pending"], 1);
    }
}
