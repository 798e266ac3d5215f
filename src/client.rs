use crate::errors::ClientError;
use crate::models::{HistoryResponse, RateReceipt, RatingEvent, RatingType, StatsSnapshot};
use reqwest::{Client, Response};
use std::future::Future;

/// The three rating-service calls the controllers depend on.
pub trait RatingApi: Send + Sync + 'static {
    fn stats(&self) -> impl Future<Output = Result<StatsSnapshot, ClientError>> + Send;

    fn submit(&self, rating: RatingType) -> impl Future<Output = Result<RateReceipt, ClientError>> + Send;

    fn history(&self) -> impl Future<Output = Result<Vec<RatingEvent>, ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpRatingApi {
    client: Client,
    base_url: String,
}

impl HttpRatingApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::Url(base_url));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl RatingApi for HttpRatingApi {
    async fn stats(&self) -> Result<StatsSnapshot, ClientError> {
        let res = self.client.get(self.url("/api/stats")).send().await?;
        Ok(ensure_ok(res)?.json().await?)
    }

    async fn submit(&self, rating: RatingType) -> Result<RateReceipt, ClientError> {
        let res = self
            .client
            .post(self.url("/api/avaliar"))
            .json(&serde_json::json!({ "tipo": rating.code() }))
            .send()
            .await?;
        Ok(ensure_ok(res)?.json().await?)
    }

    async fn history(&self) -> Result<Vec<RatingEvent>, ClientError> {
        let res = self.client.get(self.url("/api/avaliacoes")).send().await?;
        let body: HistoryResponse = ensure_ok(res)?.json().await?;
        Ok(body.into_events())
    }
}

fn ensure_ok(res: Response) -> Result<Response, ClientError> {
    if res.status().is_success() {
        Ok(res)
    } else {
        Err(ClientError::Status(res.status()))
    }
}
