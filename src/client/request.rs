//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides the course endpoints for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::error::{Error, ErrorKind, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Response, Url,
};

use super::courses_endpoint;
use crate::interface::{CourseApi, HttpClient};
use crate::model::{ApiErrorBody, Course, NewCourse};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    courses_url: Url,
}

impl HttpClient for NoWasmClient {
    async fn new(base_url: &str) -> Result<Self> {
        let courses_url = courses_endpoint(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            courses_url,
        })
    }
}

impl NoWasmClient {
    pub fn courses_url(&self) -> &Url {
        &self.courses_url
    }

    /// Turn a non-2xx response into an `ApiError`. A body that is not the
    /// expected `{"error": ...}` object counts as carrying no message.
    async fn rejection(resp: Response) -> Error {
        let status = resp.status().as_u16();
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

impl CourseApi for NoWasmClient {
    async fn list_courses(&self) -> Result<Vec<Course>> {
        log::debug!("GET {}", self.courses_url);

        let resp = self.client.get(self.courses_url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }

        Ok(resp.json::<Vec<Course>>().await?)
    }

    async fn create_course(&self, course: NewCourse<'_>) -> Result<Option<Course>> {
        log::debug!("POST {} title={:?}", self.courses_url, course.title);

        let resp = self
            .client
            .post(self.courses_url.clone())
            .json(&course)
            .send()
            .await?;
        if !resp.status().is_success() {
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

#[cfg(test)]
#[path = "tests/request_tests.rs"]
mod tests;
