use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::RemoteGateway;
use crate::types::{Quote, QuoteError, RemoteAck, RemoteRecord};

/// JSON-over-HTTP gateway: `GET endpoint` lists records, `POST endpoint` creates one.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    endpoint: Url,
}

impl HttpGateway {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("building HTTP client")?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn fetch_remote(&self) -> Result<Vec<RemoteRecord>, QuoteError> {
        log::debug!("fetching remote quotes from {}", self.endpoint);
        let records = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<RemoteRecord>>()
            .await?;
        log::debug!("fetched {} remote records", records.len());
        Ok(records)
    }

    async fn push_local(&self, quote: &Quote) -> Result<RemoteAck, QuoteError> {
        let ack = self
            .client
            .post(self.endpoint.clone())
            .json(quote)
            .send()
            .await?
            .error_for_status()?
            .json::<RemoteAck>()
            .await?;
        log::info!("📤 Pushed quote {}, server ack: {}", quote.id, ack);
        Ok(ack)
    }
}
