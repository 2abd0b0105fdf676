//! Command-line configuration for the native client

use clap::{Parser, Subcommand};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const BASE_URL_ENV: &str = "MOODLE_LIGHT_URL";

#[derive(Debug, Parser)]
#[command(
    name = "moodle-light",
    version,
    about = "Course list client for the Moodle Light backend"
)]
pub struct Cli {
    /// Backend root, the course endpoints live under `/api/courses`
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Without a command every stdin line is submitted as a new course title
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the course list
    List,
    /// Add a course, then print the refreshed list
    Add {
        /// Course title, surrounding whitespace is ignored
        title: String,
    },
}
