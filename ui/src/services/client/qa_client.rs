use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;
use tracing::{debug, instrument};

use super::errors::{ClientError, ClientResult};
use super::types::ServerReply;
use crate::services::config::QaClientConfig;

/// Backend exchange used by the form controller.
///
/// WASM-first: futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait QaBackend {
    /// Submit a video URL for processing
    async fn process_video(&self, video_url: &str) -> ClientResult<ServerReply>;

    /// Ask a question about the most recently processed video
    async fn ask_question(&self, question: &str) -> ClientResult<ServerReply>;
}

/// HTTP client for the video Q&A endpoints
#[derive(Clone)]
pub struct QaClient {
    pub(crate) http_client: Client,
    pub(crate) config: QaClientConfig,
}

impl QaClient {
    pub fn new(config: QaClientConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    /// POST a single-field multipart form and decode the JSON body.
    ///
    /// The HTTP status is not inspected: the backend sends its error bodies
    /// with 4xx/5xx codes and they are parsed like any other reply.
    async fn post_form(&self, path: &str, field: &str, value: &str) -> ClientResult<ServerReply> {
        let url = self.config.endpoint(path);
        let form = Form::new().text(field.to_string(), value.to_string());

        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::from)?;

        debug!("{} answered with status {}", url, response.status());

        response
            .json::<ServerReply>()
            .await
            .map_err(|e| ClientError::decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl QaBackend for QaClient {
    #[instrument(skip(self), err)]
    async fn process_video(&self, video_url: &str) -> ClientResult<ServerReply> {
        self.post_form(
            &self.config.process_video_path,
            &self.config.video_url_field,
            video_url,
        )
        .await
    }

    #[instrument(skip(self), err)]
    async fn ask_question(&self, question: &str) -> ClientResult<ServerReply> {
        self.post_form(
            &self.config.ask_question_path,
            &self.config.question_field,
            question,
        )
        .await
    }
}
