//! Todoist REST API models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A personal label as returned by `GET /labels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
}

impl Label {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Due information attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Due {
    /// Due date in `YYYY-MM-DD` form.
    pub date: String,
    #[serde(default)]
    pub is_recurring: bool,
}

impl Due {
    /// Parsed due date, if the service sent a plain date.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        // Datetimes arrive as "2024-01-31T10:00:00", the date part is enough here.
        let date = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }

    /// Number of whole days this due date lies before `today`, if it does.
    pub fn days_overdue(&self, today: NaiveDate) -> Option<i64> {
        let days = (today - self.naive_date()?).num_days();
        (days > 0).then_some(days)
    }
}

/// A task as returned by `GET /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub due: Option<Due>,
    #[serde(default)]
    pub url: String,
    /// Label names currently on the task.
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl Task {
    /// Nesting depth is only tracked as top-level (1) or not.
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// A task whose content ends with a colon (e.g. "Errands:") is a heading
    /// for the tasks below it. Headings are not actionable and are never
    /// prompted for.
    pub fn is_heading(&self) -> bool {
        self.content.ends_with(':')
    }

    pub fn is_recurring(&self) -> bool {
        self.due.as_ref().is_some_and(|due| due.is_recurring)
    }

    /// Attach a label locally. Call `save` on the flow to persist it.
    pub fn add_label(&mut self, label: &Label) {
        if !self.labels.iter().any(|name| name == &label.name) {
            self.labels.push(label.name.clone());
        }
    }

    pub fn add_labels<'a>(&mut self, labels: impl IntoIterator<Item = &'a Label>) {
        for label in labels {
            self.add_label(label);
        }
    }
}

/// Body for `POST /tasks/{id}`.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateTaskBody<'a> {
    pub labels: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(content: &str) -> Task {
        Task {
            id: "1".to_string(),
            content: content.to_string(),
            due: None,
            url: String::new(),
            labels: vec![],
            parent_id: None,
        }
    }

    #[test]
    fn test_heading_detection() {
        assert!(task("Errands:").is_heading());
        assert!(!task("Errands:  ").is_heading());
        assert!(!task("Buy milk").is_heading());
        assert!(!task("Note: call mum").is_heading());
    }

    #[test]
    fn test_add_label_does_not_duplicate() {
        let mut t = task("Buy milk");
        let morning = Label::new("1", "time/morning");
        t.add_label(&morning);
        t.add_labels([&morning, &Label::new("2", "focus/deep")]);
        assert_eq!(t.labels, vec!["time/morning", "focus/deep"]);
    }

    #[test]
    fn test_deserialize_task() {
        let json = r#"{
            "id": "2995104339",
            "content": "Buy Milk",
            "due": {"date": "2016-09-01", "is_recurring": true, "string": "every day"},
            "url": "https://todoist.com/showTask?id=2995104339",
            "labels": ["time/morning"],
            "parent_id": null,
            "priority": 1
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.is_top_level());
        assert!(task.is_recurring());
        assert_eq!(task.labels, vec!["time/morning"]);
    }

    #[test]
    fn test_days_overdue() {
        let due = Due {
            date: "2024-03-01T09:00:00".to_string(),
            is_recurring: false,
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(due.days_overdue(today), Some(3));
        let same_day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(due.days_overdue(same_day), None);
    }
}
