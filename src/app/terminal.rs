//! Terminal front end for no-WASM builds

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::page::{CoursePage, SubmitOutcome};
use crate::app::render::ListState;
use crate::config::Command;
use crate::error::Result;
use crate::interface::{CourseApi, CourseView};

/// Prints list items to stdout and alerts to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalView;

impl CourseView for TerminalView {
    fn render_list(&self, state: &ListState) {
        // A terminal cannot take back a printed line, so the loading marker is skipped.
        if matches!(state, ListState::Loading) {
            log::debug!("loading courses");
            return;
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for item in state.items() {
            let _ = writeln!(out, "{item}");
        }
        let _ = out.flush();
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn reset_form(&self) {}
}

/// What a terminal session ended with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Result of the `list` command.
    pub list: Option<ListState>,
    /// Last submission that actually reached the server; blank titles do not count.
    pub last_submission: Option<SubmitOutcome>,
}

impl RunReport {
    /// Whether the process should exit non-zero.
    pub fn failed(&self) -> bool {
        matches!(self.last_submission, Some(SubmitOutcome::Rejected(_)))
            || self.list.as_ref().is_some_and(ListState::is_error)
    }

    fn record(&mut self, outcome: SubmitOutcome) {
        if outcome != SubmitOutcome::Skipped {
            self.last_submission = Some(outcome);
        }
    }
}

/// Run one CLI command against the page. Without a command the list is
/// rendered and every line of `input` is submitted as a title until EOF.
pub async fn run<A, V, R>(
    page: &CoursePage<A, V>,
    command: Option<Command>,
    input: R,
) -> Result<RunReport>
where
    A: CourseApi,
    V: CourseView,
    R: AsyncBufRead + Unpin,
{
    let mut report = RunReport::default();

    match command {
        Some(Command::List) => {
            report.list = Some(page.render_courses().await);
        }
        Some(Command::Add { title }) => {
            report.record(page.submit_course(&title).await);
        }
        None => {
            page.render_courses().await;

            let mut lines = input.lines();
            while let Some(line) = lines.next_line().await? {
                report.record(page.submit_course(&line).await);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
