//! Course page controller
//!
//! Loads the course list into the view and handles submissions of the
//! add-course form. Both the browser and the terminal front ends drive
//! this same controller; only the `CourseApi` and `CourseView` differ.

use crate::app::render::{submit_failure_message, ListState};
use crate::interface::{CourseApi, CourseView};
use crate::model::{Course, NewCourse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank title, nothing was sent.
    Skipped,
    Created(Option<Course>),
    /// The alert text that was shown.
    Rejected(String),
}

#[derive(Debug)]
pub struct CoursePage<A, V> {
    api: A,
    view: V,
}

impl<A: CourseApi, V: CourseView> CoursePage<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch the collection and draw it. Returns what ended up on screen.
    pub async fn render_courses(&self) -> ListState {
        self.view.render_list(&ListState::Loading);

        let state = match self.api.list_courses().await {
            Ok(courses) => {
                log::debug!("loaded {} courses", courses.len());
                ListState::from_courses(courses)
            }
            Err(e) => {
                log::debug!("failed to load courses: {e}");
                ListState::from_error(&e)
            }
        };

        self.view.render_list(&state);
        state
    }

    /// Handle one submission of the add-course form.
    pub async fn submit_course(&self, raw_title: &str) -> SubmitOutcome {
        let title = raw_title.trim();
        if title.is_empty() {
            return SubmitOutcome::Skipped;
        }

        match self.api.create_course(NewCourse { title }).await {
            Ok(created) => {
                match created {
                    Some(ref course) => {
                        log::info!("course [{}] {} created", course.id, course.title)
                    }
                    None => log::info!("course {title} created"),
                }
                self.view.reset_form();
                self.render_courses().await;
                SubmitOutcome::Created(created)
            }
            Err(e) => {
                log::debug!("failed to add course {title:?}: {e}");
                let message = submit_failure_message(&e);
                self.view.alert(&message);
                SubmitOutcome::Rejected(message)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
