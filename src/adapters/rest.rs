use crate::domain::model::Exam;
use crate::domain::ports::{ConfigProvider, ExamSource};
use crate::utils::error::{Result, ShopError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Exam source backed by a PostgREST-style endpoint: one GET returning the
/// full `exams` table, ordered by exam date ascending on the server side.
pub struct RestExamSource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> RestExamSource<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> ExamSource for RestExamSource<C> {
    async fn list_exams(&self) -> Result<Vec<Exam>> {
        tracing::debug!("Fetching exams from: {}", self.config.api_endpoint());

        let mut request = self
            .client
            .get(self.config.api_endpoint())
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .query(&[("select", "*"), ("order", "exam_date.asc")]);

        if let Some(key) = self.config.api_key() {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await?;
        tracing::debug!("Backend response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ShopError::BackendError {
                status: response.status().as_u16(),
            });
        }

        let payload: Vec<serde_json::Value> = response.json().await?;

        // Tolerate individual bad rows rather than failing the whole fetch.
        let mut exams = Vec::with_capacity(payload.len());
        for value in payload {
            match serde_json::from_value::<Exam>(value) {
                Ok(exam) => exams.push(exam),
                Err(e) => tracing::warn!("Skipping malformed exam record: {}", e),
            }
        }

        tracing::debug!("Fetched {} exam records", exams.len());
        Ok(exams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct MockConfig {
        api_endpoint: String,
        api_key: Option<String>,
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn api_key(&self) -> Option<&str> {
            self.api_key.as_deref()
        }

        fn timeout_seconds(&self) -> u64 {
            5
        }
    }

    fn exam_json(id: &str, date: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "subject": "Mathematics",
            "paper_code": "121/1",
            "exam_date": date,
            "exam_time": "8:00 AM",
            "session": 1,
            "duration": "2h 30m",
            "description": "Paper 1",
            "price": 500.0,
            "image_url": null,
            "category": "Sciences"
        })
    }

    #[tokio::test]
    async fn test_list_exams_success() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/rest/v1/exams")
                .query_param("select", "*")
                .query_param("order", "exam_date.asc");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    exam_json("a", "2025-11-05"),
                    exam_json("b", "2025-11-06"),
                ]));
        });

        let source = RestExamSource::new(MockConfig {
            api_endpoint: server.url("/rest/v1/exams"),
            api_key: None,
        });

        let exams = source.list_exams().await.unwrap();

        api_mock.assert();
        assert_eq!(exams.len(), 2);
        assert_eq!(exams[0].id, "a");
        assert_eq!(exams[1].id, "b");
    }

    #[tokio::test]
    async fn test_list_exams_sends_api_key_headers() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/rest/v1/exams")
                .header("apikey", "secret")
                .header("Authorization", "Bearer secret");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let source = RestExamSource::new(MockConfig {
            api_endpoint: server.url("/rest/v1/exams"),
            api_key: Some("secret".to_string()),
        });

        let exams = source.list_exams().await.unwrap();

        api_mock.assert();
        assert!(exams.is_empty());
    }

    #[tokio::test]
    async fn test_list_exams_backend_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/exams");
            then.status(500);
        });

        let source = RestExamSource::new(MockConfig {
            api_endpoint: server.url("/rest/v1/exams"),
            api_key: None,
        });

        let err = source.list_exams().await.unwrap_err();
        match err {
            ShopError::BackendError { status } => assert_eq!(status, 500),
            other => panic!("expected BackendError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_exams_skips_malformed_rows() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/exams");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    exam_json("a", "2025-11-05"),
                    {"id": "broken"},
                ]));
        });

        let source = RestExamSource::new(MockConfig {
            api_endpoint: server.url("/rest/v1/exams"),
            api_key: None,
        });

        let exams = source.list_exams().await.unwrap();
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].id, "a");
    }
}
