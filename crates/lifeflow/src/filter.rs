//! Typed builder for Todoist filter expressions.
//!
//! Queries are composed as a small expression tree and only turned into the
//! Todoist filter grammar (`@label`, `&`, `|`, `!`, parentheses) when they
//! are sent, via [`std::fmt::Display`].
//!
//! ```
//! use lifeflow::filter::Filter;
//!
//! let filter = Filter::and([!Filter::label("meta"), Filter::or([Filter::today(), Filter::overdue()])]);
//! assert_eq!(filter.to_string(), "(!(@meta) & (today | overdue))");
//! ```

use std::fmt;

use crate::aspect::Aspect;

/// Label that marks a task as bookkeeping rather than real work.
pub const META_LABEL: &str = "meta";

/// Label that opts a task out of time slotting.
pub const IGNORE_TIME_LABEL: &str = "ignore/time";

/// A boolean filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// A predicate passed through verbatim, e.g. `today` or `@time/morning`.
    Literal(String),
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
}

impl Filter {
    pub fn literal(predicate: impl Into<String>) -> Self {
        Self::Literal(predicate.into())
    }

    /// Tasks carrying the given label.
    pub fn label(name: &str) -> Self {
        Self::Literal(format!("@{name}"))
    }

    pub fn today() -> Self {
        Self::literal("today")
    }

    pub fn overdue() -> Self {
        Self::literal("overdue")
    }

    pub fn no_date() -> Self {
        Self::literal("no date")
    }

    pub fn no_due_date() -> Self {
        Self::literal("no due date")
    }

    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::And(filters.into_iter().collect())
    }

    pub fn or(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::Or(filters.into_iter().collect())
    }

    /// Tasks carrying any of the given aspects' labels.
    pub fn any_aspect<'a>(aspects: impl IntoIterator<Item = &'a Aspect>) -> Self {
        Self::or(aspects.into_iter().map(|a| Self::label(&a.label_name())))
    }
}

impl std::ops::Not for Filter {
    type Output = Filter;

    fn not(self) -> Self::Output {
        Filter::Not(Box::new(self))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(predicate) => f.write_str(predicate),
            Self::And(filters) => write_joined(f, filters, " & "),
            Self::Or(filters) => write_joined(f, filters, " | "),
            Self::Not(inner) => match inner.as_ref() {
                Self::Literal(predicate) => write!(f, "!({predicate})"),
                other => write!(f, "!{other}"),
            },
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, filters: &[Filter], separator: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{filter}")?;
    }
    f.write_str(")")
}

/// Tasks that have none of the given aspects.
///
/// `meta` and `ignore/time` tasks are left out. With `ignore_future` only
/// tasks due today, overdue or without a date are kept. Returns `None` when
/// there are no aspects to test against.
pub fn missing_aspect_query(aspects: &[Aspect], ignore_future: bool) -> Option<Filter> {
    if aspects.is_empty() {
        return None;
    }

    let filter = Filter::and([
        !Filter::label(META_LABEL),
        !Filter::label(IGNORE_TIME_LABEL),
        !Filter::any_aspect(aspects),
    ]);

    if ignore_future {
        Some(Filter::and([
            filter,
            Filter::or([Filter::today(), Filter::overdue(), Filter::no_date()]),
        ]))
    } else {
        Some(filter)
    }
}

/// Tasks that have at least one of the given aspects, `meta` tasks excluded.
pub fn has_aspect_query(aspects: &[Aspect]) -> Option<Filter> {
    if aspects.is_empty() {
        return None;
    }

    Some(Filter::and([
        !Filter::label(META_LABEL),
        Filter::any_aspect(aspects),
    ]))
}

/// Tasks currently scheduled into one slot: actionable now and labelled.
pub fn slot_load_query(label_name: &str) -> Filter {
    Filter::and([
        Filter::or([Filter::today(), Filter::overdue(), Filter::no_due_date()]),
        Filter::label(label_name),
    ])
}
