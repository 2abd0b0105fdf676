//! WASM HTTP client implementation using gloo_net
//!
//! This module provides the course endpoints for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::error::{Error, ErrorKind, Result};
use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::{RequestCredentials, RequestMode};

use super::{courses_endpoint, COURSES_PATH};
use crate::interface::{CourseApi, HttpClient};
use crate::model::{ApiErrorBody, Course, NewCourse};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    courses_url: String,
}

impl HttpClient for WasmClient {
    /// An empty base URL targets the page's own origin.
    async fn new(base_url: &str) -> Result<Self> {
        let courses_url = if base_url.is_empty() {
            COURSES_PATH.to_string()
        } else {
            courses_endpoint(base_url)?.to_string()
        };

        Ok(Self { courses_url })
    }
}

impl WasmClient {
    /// Build a request with common headers and settings
    fn build_request(builder: RequestBuilder) -> RequestBuilder {
        builder
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json")
    }

    /// Turn a non-2xx response into an `ApiError`. A body that is not the
    /// expected `{"error": ...}` object counts as carrying no message.
    async fn rejection(resp: Response) -> Error {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let body = serde_json::from_str::<ApiErrorBody>(&text).unwrap_or_default();

        log::debug!("{status} from server, body: {text}");

        ErrorKind::ApiError {
            status,
            message: body.error,
        }
        .into()
    }
}

impl CourseApi for WasmClient {
    async fn list_courses(&self) -> Result<Vec<Course>> {
        log::debug!("GET {}", self.courses_url);

        let resp = Self::build_request(Request::get(&self.courses_url))
            .send()
            .await?;
        if !resp.ok() {
            return Err(Self::rejection(resp).await);
        }

        Ok(resp.json::<Vec<Course>>().await?)
    }

    async fn create_course(&self, course: NewCourse<'_>) -> Result<Option<Course>> {
        log::debug!("POST {} title={:?}", self.courses_url, course.title);

        // `json` also sets `Content-Type: application/json`
        let resp = Self::build_request(Request::post(&self.courses_url))
            .json(&course)?
            .send()
            .await?;
        if !resp.ok() {
            return Err(Self::rejection(resp).await);
        }

        // a 2xx status means created, even when the body cannot be read
        let created = resp
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<Course>(&text).ok());
        Ok(created)
    }
}
