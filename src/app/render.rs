//! What the course list shows, independent of where it is drawn.

use crate::error::Error;
use crate::model::Course;

pub const LOADING_TEXT: &str = "Загрузка…";
pub const EMPTY_TEXT: &str = "Курсов пока нет";
pub const SUBMIT_FAILED_PREFIX: &str = "Не удалось добавить: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    /// The backend answered with a non-2xx status.
    Failed(u16),
    /// No usable answer at all (network failure, broken body).
    Unreachable(String),
    Empty,
    Courses(Vec<Course>),
}

impl ListState {
    pub fn from_courses(courses: Vec<Course>) -> Self {
        if courses.is_empty() {
            ListState::Empty
        } else {
            ListState::Courses(courses)
        }
    }

    pub fn from_error(err: &Error) -> Self {
        match err.status() {
            Some(status) => ListState::Failed(status),
            None => ListState::Unreachable(err.to_string()),
        }
    }

    /// Text of every list item, in display order.
    pub fn items(&self) -> Vec<String> {
        match self {
            ListState::Loading => vec![LOADING_TEXT.to_string()],
            ListState::Failed(status) => vec![format!("Ошибка {status}")],
            ListState::Unreachable(reason) => vec![format!("Ошибка: {reason}")],
            ListState::Empty => vec![EMPTY_TEXT.to_string()],
            ListState::Courses(courses) => courses.iter().map(course_item).collect(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ListState::Failed(_) | ListState::Unreachable(_))
    }
}

pub fn course_item(course: &Course) -> String {
    format!("[{}] {}", course.id, course.title)
}

/// Alert text for a rejected submission: the server's own message when it
/// gave one, the HTTP status otherwise.
pub fn submit_failure_message(err: &Error) -> String {
    let detail = match (err.server_message(), err.status()) {
        (Some(message), _) => message.to_string(),
        (None, Some(status)) => status.to_string(),
        (None, None) => err.to_string(),
    };
    format!("{SUBMIT_FAILED_PREFIX}{detail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn course(id: u64, title: &str) -> Course {
        Course {
            id,
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn empty_collection_renders_placeholder() {
        let state = ListState::from_courses(Vec::new());
        assert_eq!(state, ListState::Empty);
        assert_eq!(state.items(), vec!["Курсов пока нет".to_string()]);
    }

    #[test]
    fn courses_render_one_item_each_in_order() {
        let state = ListState::from_courses(vec![course(2, "Rust"), course(1, "Go")]);
        assert_eq!(state.items(), vec!["[2] Rust".to_string(), "[1] Go".to_string()]);
    }

    #[test]
    fn status_errors_render_the_status_code() {
        let err = ErrorKind::ApiError {
            status: 503,
            message: None,
        }
        .into();
        let state = ListState::from_error(&err);
        assert_eq!(state, ListState::Failed(503));
        assert_eq!(state.items(), vec!["Ошибка 503".to_string()]);
        assert!(state.is_error());
    }

    #[test]
    fn transport_errors_render_the_reason() {
        let err = ErrorKind::ParseError("connection refused".to_string()).into();
        let items = ListState::from_error(&err).items();
        assert_eq!(items.len(), 1);
        assert!(items[0].starts_with("Ошибка: "));
        assert!(items[0].contains("connection refused"));
    }

    #[test]
    fn failure_message_prefers_server_text() {
        let err = ErrorKind::ApiError {
            status: 400,
            message: Some("title required".to_string()),
        }
        .into();
        assert_eq!(
            submit_failure_message(&err),
            "Не удалось добавить: title required"
        );
    }

    #[test]
    fn failure_message_falls_back_to_status() {
        let err = ErrorKind::ApiError {
            status: 403,
            message: None,
        }
        .into();
        assert_eq!(submit_failure_message(&err), "Не удалось добавить: 403");
    }
}
