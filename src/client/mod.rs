//! Request module - handles HTTP requests for both WASM and no-WASM environments
//!
//! This module provides the `CourseApi` implementations: reqwest for native
//! builds and gloo_net (the browser's fetch API) for WASM builds.

use url::Url;

use crate::error::{ErrorKind, Result};

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

pub const COURSES_PATH: &str = "/api/courses";

/// Endpoint of the course collection below an absolute http(s) base URL.
/// Any query or fragment on the base is dropped.
pub fn courses_endpoint(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ErrorKind::ParseError(format!("invalid base URL {base_url:?}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ErrorKind::ParseError(format!(
            "base URL must use http or https, got {base_url:?}"
        ))
        .into());
    }

    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| ErrorKind::ParseError(format!("base URL {base_url:?} cannot have a path")))?
        .pop_if_empty()
        .extend(COURSES_PATH.trim_start_matches('/').split('/'));

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(base: &str) -> String {
        courses_endpoint(base).expect("valid base").to_string()
    }

    #[test]
    fn joins_root_with_or_without_trailing_slash() {
        assert_eq!(endpoint("http://127.0.0.1:5000"), "http://127.0.0.1:5000/api/courses");
        assert_eq!(endpoint("http://127.0.0.1:5000/"), "http://127.0.0.1:5000/api/courses");
    }

    #[test]
    fn keeps_a_path_prefix() {
        assert_eq!(endpoint("https://host/moodle/"), "https://host/moodle/api/courses");
        assert_eq!(endpoint("https://host/moodle"), "https://host/moodle/api/courses");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(endpoint("HTTP://127.0.0.1:5000"), "http://127.0.0.1:5000/api/courses");
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        assert_eq!(endpoint("http://h/?x=1"), "http://h/api/courses");
        assert_eq!(endpoint("http://h/#top"), "http://h/api/courses");
    }

    #[test]
    fn rejects_missing_host_and_other_schemes() {
        assert!(courses_endpoint("http://").is_err());
        assert!(courses_endpoint("ftp://example.org").is_err());
        assert!(courses_endpoint("mailto:someone@example.org").is_err());
        assert!(courses_endpoint("127.0.0.1:5000").is_err());
        assert!(courses_endpoint("").is_err());
    }
}
