//! Task text parser.
//!
//! Parses free-form instructions like "#work Finish report by tomorrow"
//! into structured task fields. Tokens starting with `#` encode a
//! category, a priority keyword, or a free tag; `by <expr>` and
//! `due <expr>` introduce a due date; everything else is title text.

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::dates::resolve_date;

/// Task categories.
///
/// The six named categories are recognized as `#` keywords; `General` is
/// the default for tasks that name none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Study,
    Shopping,
    Health,
    Other,
    #[default]
    General,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 7] = [
        Self::Work,
        Self::Personal,
        Self::Study,
        Self::Shopping,
        Self::Health,
        Self::Other,
        Self::General,
    ];

    /// Look up a normalized (lowercase) keyword.
    ///
    /// `general` is intentionally not a keyword: it is only ever the default.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        CATEGORY_KEYWORDS.get(keyword).copied()
    }

    /// The stable name used in storage and output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Study => "study",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Other => "other",
            Self::General => "general",
        }
    }

    /// Parse a stored name, falling back to `General` for anything unknown.
    #[must_use]
    pub fn from_str_lossy(name: &str) -> Self {
        if name == "general" {
            Self::General
        } else {
            Self::from_keyword(name).unwrap_or(Self::General)
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority, stored as 1 (urgent) / 2 (medium) / 3 (low).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Look up a normalized (lowercase) priority keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        PRIORITY_KEYWORDS.get(keyword).copied()
    }

    /// Numeric value used in storage (lower sorts first).
    #[must_use]
    pub const fn as_value(&self) -> u8 {
        match self {
            Self::Urgent => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Parse a stored numeric value, falling back to `Medium` for anything
    /// out of range.
    #[must_use]
    pub const fn from_value(value: i64) -> Self {
        match value {
            1 => Self::Urgent,
            3 => Self::Low,
            _ => Self::Medium,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Urgent => "urgent",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }
}

// Fixed keyword vocabularies, built once. Category keywords are checked
// before priority keywords; the two sets must not overlap.
static CATEGORY_KEYWORDS: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    HashMap::from([
        ("work", Category::Work),
        ("personal", Category::Personal),
        ("study", Category::Study),
        ("shopping", Category::Shopping),
        ("health", Category::Health),
        ("other", Category::Other),
    ])
});

static PRIORITY_KEYWORDS: Lazy<HashMap<&'static str, Priority>> = Lazy::new(|| {
    HashMap::from([
        ("urgent", Priority::Urgent),
        ("important", Priority::Urgent),
        ("high", Priority::Urgent),
        ("medium", Priority::Medium),
        ("low", Priority::Low),
    ])
});

/// Structured result of parsing one task instruction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedTask {
    /// Title text with all markers and date pairs removed. Falls back to
    /// the original input when tokenization strips everything.
    pub title: String,
    /// Category, `general` unless a category keyword appeared.
    pub category: Category,
    /// Priority, medium unless a priority keyword appeared.
    pub priority: Priority,
    /// Free tags in order of appearance, lowercased, duplicates kept.
    pub tags: Vec<String>,
    /// Resolved due date, if any expression resolved.
    pub due_date: Option<NaiveDate>,
}

impl ParsedTask {
    /// Due date as an ISO `YYYY-MM-DD` string.
    #[must_use]
    pub fn due_date_iso(&self) -> Option<String> {
        self.due_date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

/// Parse a raw task instruction.
///
/// This is a total function: it never fails. Worst case the entire input
/// becomes the title and every other field keeps its default. The
/// reference date is passed in explicitly so relative expressions like
/// "tomorrow" resolve deterministically.
///
/// Repeated category, priority, or date tokens overwrite earlier ones;
/// last-wins is a deliberate contract so users can correct themselves by
/// repetition. An unresolvable date expression is consumed silently and
/// leaves any earlier resolved date in place.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskbot::core::{parse, Category};
///
/// let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let task = parse("#work Finish report by tomorrow", monday);
/// assert_eq!(task.title, "Finish report");
/// assert_eq!(task.category, Category::Work);
/// assert_eq!(task.due_date_iso(), Some("2024-06-11".to_string()));
/// ```
#[must_use]
pub fn parse(text: &str, reference_date: NaiveDate) -> ParsedTask {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut task = ParsedTask::default();
    let mut title_tokens = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];

        if let Some(marker) = token.strip_prefix('#') {
            let keyword = marker.to_lowercase();
            if let Some(category) = Category::from_keyword(&keyword) {
                task.category = category;
            } else if let Some(priority) = Priority::from_keyword(&keyword) {
                task.priority = priority;
            } else {
                task.tags.push(keyword);
            }
        } else if (token == "by" || token == "due") && i + 1 < tokens.len() {
            // The expression token is consumed whether or not it resolves;
            // a failed resolution keeps any earlier due date.
            if let Some(date) = resolve_date(tokens[i + 1], reference_date) {
                task.due_date = Some(date);
            }
            i += 1;
        } else {
            title_tokens.push(token);
        }

        i += 1;
    }

    let title = title_tokens.join(" ").trim().to_string();
    task.title = if title.is_empty() {
        text.to_string()
    } else {
        title
    };

    task
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2024-06-10 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ===================
    // Basic Parsing Tests
    // ===================

    #[test]
    fn test_parse_plain_title() {
        let task = parse("Buy milk from the store", monday());
        assert_eq!(task.title, "Buy milk from the store");
        assert_eq!(task.category, Category::General);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.tags.is_empty());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let task = parse("  call the dentist  ", monday());
        assert_eq!(task.title, "call the dentist");
    }

    #[test]
    fn test_parse_preserves_title_case() {
        let task = parse("Email John about Q3", monday());
        assert_eq!(task.title, "Email John about Q3");
    }

    // ======================
    // Marker Token Tests
    // ======================

    #[test]
    fn test_parse_category_marker() {
        let task = parse("#work Finish report by tomorrow", monday());
        assert_eq!(task.title, "Finish report");
        assert_eq!(task.category, Category::Work);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.tags.is_empty());
        assert_eq!(task.due_date, Some(date(2024, 6, 11)));
    }

    #[test]
    fn test_parse_category_case_insensitive() {
        let task = parse("review notes #Study", monday());
        assert_eq!(task.category, Category::Study);
    }

    #[test]
    fn test_parse_last_category_wins() {
        // Both tokens name categories, so the second overwrites the first
        // and neither lands in the free tags.
        let task = parse("Buy milk #personal #shopping", monday());
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.category, Category::Shopping);
        assert!(task.tags.is_empty());
    }

    #[test]
    fn test_parse_priority_keywords() {
        let task = parse("Team meeting #urgent by Friday", monday());
        assert_eq!(task.title, "Team meeting");
        assert_eq!(task.priority, Priority::Urgent);
        assert_eq!(task.due_date, Some(date(2024, 6, 14)));

        assert_eq!(parse("x #important", monday()).priority, Priority::Urgent);
        assert_eq!(parse("x #high", monday()).priority, Priority::Urgent);
        assert_eq!(parse("x #medium", monday()).priority, Priority::Medium);
        assert_eq!(parse("x #low", monday()).priority, Priority::Low);
    }

    #[test]
    fn test_parse_last_priority_wins() {
        let task = parse("deploy #low #urgent", monday());
        assert_eq!(task.priority, Priority::Urgent);
        assert!(task.tags.is_empty());
    }

    #[test]
    fn test_parse_free_tags_lowercased_in_order() {
        let task = parse("fix the build #CI #backend #ci", monday());
        assert_eq!(task.title, "fix the build");
        assert_eq!(task.tags, vec!["ci", "backend", "ci"]);
    }

    #[test]
    fn test_parse_general_is_not_a_keyword() {
        // `general` is only ever the default, so the marker stays a free tag.
        let task = parse("sort inbox #general", monday());
        assert_eq!(task.category, Category::General);
        assert_eq!(task.tags, vec!["general"]);
    }

    #[test]
    fn test_parse_category_keyword_never_a_tag() {
        let task = parse("groceries #shopping #errands", monday());
        assert_eq!(task.category, Category::Shopping);
        assert_eq!(task.tags, vec!["errands"]);
    }

    // ===============
    // Due Date Tests
    // ===============

    #[test]
    fn test_parse_due_keyword() {
        let task = parse("submit taxes due 2024-04-15", monday());
        assert_eq!(task.title, "submit taxes");
        assert_eq!(task.due_date, Some(date(2024, 4, 15)));
    }

    #[test]
    fn test_parse_last_resolvable_date_wins() {
        let task = parse("plan trip by monday due 2024-07-01", monday());
        assert_eq!(task.due_date, Some(date(2024, 7, 1)));
        assert_eq!(task.title, "plan trip");
    }

    #[test]
    fn test_parse_unresolvable_date_dropped_silently() {
        let task = parse("water plants by whenever", monday());
        assert_eq!(task.title, "water plants");
        assert!(task.due_date.is_none());
        assert!(task.tags.is_empty());
    }

    #[test]
    fn test_parse_failed_date_keeps_earlier_resolution() {
        let task = parse("ship release by friday by whenever", monday());
        assert_eq!(task.due_date, Some(date(2024, 6, 14)));
    }

    #[test]
    fn test_parse_trailing_by_is_title_text() {
        // "by" with no follower is an ordinary word.
        let task = parse("walk by", monday());
        assert_eq!(task.title, "walk by");
        assert!(task.due_date.is_none());
    }

    // ===============
    // Fallback Tests
    // ===============

    #[test]
    fn test_parse_only_markers_falls_back_to_input() {
        let task = parse("#work #urgent", monday());
        assert_eq!(task.title, "#work #urgent");
        assert_eq!(task.category, Category::Work);
        assert_eq!(task.priority, Priority::Urgent);
    }

    #[test]
    fn test_parse_only_date_pair_falls_back_to_input() {
        let task = parse("by tomorrow", monday());
        assert_eq!(task.title, "by tomorrow");
        assert_eq!(task.due_date, Some(date(2024, 6, 11)));
    }

    #[test]
    fn test_parse_empty_input() {
        let task = parse("", monday());
        assert_eq!(task.title, "");
        assert_eq!(task, ParsedTask::default());
    }

    #[test]
    fn test_parse_bare_marker_becomes_empty_tag() {
        let task = parse("note this #", monday());
        assert_eq!(task.tags, vec![""]);
    }

    // ===============
    // Purity Tests
    // ===============

    #[test]
    fn test_parse_is_deterministic() {
        let a = parse("release #work #v2 by friday", monday());
        let b = parse("release #work #v2 by friday", monday());
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_unicode_title() {
        let task = parse("买牛奶 #shopping by tomorrow", monday());
        assert_eq!(task.title, "买牛奶");
        assert_eq!(task.category, Category::Shopping);
    }

    // ===============
    // Enum Tests
    // ===============

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str_lossy(category.as_str()), category);
        }
        assert_eq!(Category::from_str_lossy("bogus"), Category::General);
    }

    #[test]
    fn test_priority_values() {
        assert_eq!(Priority::Urgent.as_value(), 1);
        assert_eq!(Priority::Medium.as_value(), 2);
        assert_eq!(Priority::Low.as_value(), 3);
        assert_eq!(Priority::from_value(1), Priority::Urgent);
        assert_eq!(Priority::from_value(99), Priority::Medium);
    }

    #[test]
    fn test_due_date_iso() {
        let task = parse("pay rent by 2024-07-01", monday());
        assert_eq!(task.due_date_iso(), Some("2024-07-01".to_string()));
        assert_eq!(parse("pay rent", monday()).due_date_iso(), None);
    }
}
