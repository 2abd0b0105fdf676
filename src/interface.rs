#![allow(async_fn_in_trait)] // the futures only ever run on a single-threaded executor

use crate::app::render::ListState;
use crate::error::Result;
use crate::model::{Course, NewCourse};

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client talking to the backend at `base_url`.
    /// An empty base URL means "same origin" and is only useful in the browser.
    async fn new(base_url: &str) -> Result<Self>
    where
        Self: Sized;
}

/// The two course endpoints of the backend
pub trait CourseApi {
    /// `GET /api/courses`. A non-2xx answer is an `ErrorKind::ApiError`.
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// `POST /api/courses`. Returns the created course when the server sends it back.
    async fn create_course(&self, course: NewCourse<'_>) -> Result<Option<Course>>;
}

/// Surface the course page draws on
pub trait CourseView {
    /// Replace the whole list with `state`.
    fn render_list(&self, state: &ListState);

    /// Blocking notification about a failed action.
    fn alert(&self, message: &str);

    /// Clear the add-course form.
    fn reset_form(&self);
}
