use std::{fmt::Debug, sync::Arc};

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, LINK},
    Client,
    Response,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{config::PlatformConfig, helpers::next_page_url, PlatformApiError};

/// Upper bound on pages followed for a single listing, in case a platform keeps handing out `next` links.
const MAX_PAGES: usize = 100;

#[derive(Clone)]
pub struct PlatformClient {
    client: Arc<Client>,
}

impl Debug for PlatformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PlatformClient")
    }
}

impl PlatformClient {
    pub fn new(config: PlatformConfig) -> Result<Self, PlatformApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        if !config.access_token.is_empty() {
            let val = HeaderValue::from_str(&format!("Bearer {}", config.access_token.reveal()))
                .map_err(|e| PlatformApiError::Initialization(e.to_string()))?;
            headers.insert(AUTHORIZATION, val);
        }
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| PlatformApiError::Initialization(e.to_string()))?;
        Ok(Self { client: Arc::new(client) })
    }

    /// GETs `url` and every page after it (following `Link: rel="next"` headers), returning each page's body.
    pub async fn get_all_pages<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
        accept: &'static str,
    ) -> Result<Vec<T>, PlatformApiError> {
        let mut pages = Vec::new();
        let mut next = Some(url.to_string());
        let mut first = true;
        while let Some(url) = next.take() {
            if pages.len() >= MAX_PAGES {
                warn!("🎓️ Stopped following pages after {MAX_PAGES} pages at {url}");
                break;
            }
            trace!("🎓️ GET {url}");
            let mut req = self.client.get(&url).header(ACCEPT, accept);
            // Subsequent page URLs already carry the query
            if first && !params.is_empty() {
                req = req.query(params);
            }
            first = false;
            let response = req.send().await.map_err(|e| PlatformApiError::RequestError(e.to_string()))?;
            let response = check_status(response).await?;
            next = response.headers().get(LINK).and_then(|v| v.to_str().ok()).and_then(next_page_url);
            let page = response.json::<T>().await.map_err(|e| PlatformApiError::JsonError(e.to_string()))?;
            pages.push(page);
        }
        Ok(pages)
    }

    /// POSTs `body` to `url`, returning the status and the (possibly empty) response body.
    pub async fn post_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        content_type: &'static str,
    ) -> Result<(u16, Value), PlatformApiError> {
        trace!("🎓️ POST {url}");
        let payload = serde_json::to_vec(body).map_err(|e| PlatformApiError::JsonError(e.to_string()))?;
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(payload)
            .send()
            .await
            .map_err(|e| PlatformApiError::RequestError(e.to_string()))?;
        let response = check_status(response).await?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| PlatformApiError::ResponseError(e.to_string()))?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok((status, body))
    }

    pub async fn post_for<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        content_type: &'static str,
    ) -> Result<T, PlatformApiError> {
        let (_, value) = self.post_json(url, body, content_type).await?;
        serde_json::from_value(value).map_err(|e| PlatformApiError::JsonError(e.to_string()))
    }
}

async fn check_status(response: Response) -> Result<Response, PlatformApiError> {
    if response.status().is_success() {
        trace!("🎓️ Request successful. {}", response.status());
        Ok(response)
    } else {
        let status = response.status().as_u16();
        let message = response.text().await.map_err(|e| PlatformApiError::ResponseError(e.to_string()))?;
        debug!("🎓️ Request failed. {status}: {message}");
        Err(PlatformApiError::QueryError { status, message })
    }
}
