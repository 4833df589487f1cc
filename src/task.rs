use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// A temporal value tagged with its precision. Events require both of
/// their ends to carry the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateValue {
    pub fn same_precision(&self, other: &DateValue) -> bool {
        matches!(
            (self, other),
            (DateValue::Date(_), DateValue::Date(_))
                | (DateValue::DateTime(_), DateValue::DateTime(_))
        )
    }
}

impl fmt::Display for DateValue {
    /// Renders in the same fixed form the parser accepts, so the storage
    /// file round-trips through `parse_temporal`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Date(d) => write!(f, "{}", d.format("%d-%m-%Y")),
            DateValue::DateTime(dt) => write!(f, "{}", dt.format("%d-%m-%Y %H%M")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Todo {
        description: String,
        done: bool,
    },
    Deadline {
        description: String,
        done: bool,
        by: DateValue,
    },
    Event {
        description: String,
        done: bool,
        from: DateValue,
        to: DateValue,
    },
}

impl Task {
    pub fn description(&self) -> &str {
        match self {
            Task::Todo { description, .. }
            | Task::Deadline { description, .. }
            | Task::Event { description, .. } => description,
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            Task::Todo { done, .. } | Task::Deadline { done, .. } | Task::Event { done, .. } => {
                *done
            }
        }
    }

    pub fn set_done(&mut self, value: bool) {
        match self {
            Task::Todo { done, .. } | Task::Deadline { done, .. } | Task::Event { done, .. } => {
                *done = value;
            }
        }
    }

    pub fn type_tag(&self) -> &'static str {
        match self {
            Task::Todo { .. } => "T",
            Task::Deadline { .. } => "D",
            Task::Event { .. } => "E",
        }
    }

    pub fn status_icon(&self) -> &'static str {
        if self.is_done() {
            "X"
        } else {
            " "
        }
    }

    /// One pipe-delimited storage record: `TYPE | doneFlag | description`
    /// plus the variant's dates.
    pub fn data_string(&self) -> String {
        let done = if self.is_done() { "1" } else { "0" };
        match self {
            Task::Todo { description, .. } => {
                format!("{} | {} | {}", self.type_tag(), done, description)
            }
            Task::Deadline {
                description, by, ..
            } => format!("{} | {} | {} | {}", self.type_tag(), done, description, by),
            Task::Event {
                description,
                from,
                to,
                ..
            } => format!(
                "{} | {} | {} | {} | {}",
                self.type_tag(),
                done,
                description,
                from,
                to
            ),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.type_tag(),
            self.status_icon(),
            self.description()
        )?;
        match self {
            Task::Todo { .. } => Ok(()),
            Task::Deadline { by, .. } => write!(f, " (by: {by})"),
            Task::Event { from, to, .. } => write!(f, " (from: {from} to: {to})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_temporal;

    #[test]
    fn todo_renders_with_status() {
        let mut t = Task::Todo {
            description: "read book".into(),
            done: false,
        };
        assert_eq!(t.to_string(), "[T][ ] read book");
        t.set_done(true);
        assert_eq!(t.to_string(), "[T][X] read book");
    }

    #[test]
    fn deadline_renders_date_and_time() {
        let t = Task::Deadline {
            description: "submit report".into(),
            done: false,
            by: parse_temporal("01-12-2024 1800").unwrap(),
        };
        assert_eq!(t.to_string(), "[D][ ] submit report (by: 01-12-2024 1800)");
        assert_eq!(t.data_string(), "D | 0 | submit report | 01-12-2024 1800");
    }

    #[test]
    fn event_data_string_keeps_both_dates() {
        let t = Task::Event {
            description: "trip".into(),
            done: true,
            from: parse_temporal("01-12-2024").unwrap(),
            to: parse_temporal("02-12-2024").unwrap(),
        };
        assert_eq!(t.data_string(), "E | 1 | trip | 01-12-2024 | 02-12-2024");
    }

    #[test]
    fn date_display_reparses_to_the_same_value() {
        for text in ["05-01-2023", "05-01-2023 0930"] {
            let v = parse_temporal(text).unwrap();
            assert_eq!(parse_temporal(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn precision_tags_compare() {
        let d = parse_temporal("01-12-2024").unwrap();
        let dt = parse_temporal("01-12-2024 1000").unwrap();
        assert!(d.same_precision(&d));
        assert!(dt.same_precision(&dt));
        assert!(!d.same_precision(&dt));
    }
}
