use crate::types::Envelope;

use log::{ debug, warn };
use reqwest::{ self, Client, RequestBuilder, StatusCode };
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequesterError {
    #[error("reqwest error {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("could not decode response envelope: {0}")]
    Envelope(#[source] serde_json::Error),
    #[error("{url} responded with status {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("{url} responded with code {code}")]
    Code {
        url: String,
        code: i64,
    },
}

impl RequesterError {
    /// The non-zero envelope code, if the API itself reported the failure.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Code { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Sends requests relative to a base url and unwraps the `{code, data}` envelope.
#[derive(Debug, Clone)]
pub struct Requester {
    client: Client,
    base_url: String,
}
impl Requester {
    pub fn new(client:Client, base_url:&str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path:&str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, url:&str, query:&[(&str, &str)]) -> Result<Value, RequesterError> {
        let req = self.client.get(url).query(query);
        self.send(url, req).await
    }

    /// The body is serialised up front; `&()` sends a JSON `null`.
    pub async fn post<B:Serialize + ?Sized>(&self, url:&str, query:&[(&str, &str)], body:&B) -> Result<Value, RequesterError> {
        let req = self.client.post(url).query(query).json(body);
        self.send(url, req).await
    }

    async fn send(&self, url:&str, req:RequestBuilder) -> Result<Value, RequesterError> {
        let req = req.build()?;
        debug!("{} {}", req.method(), req.url());

        let res = self.client.execute(req).await?;
        let status = res.status();
        let body = res.text().await?;

        let envelope = match serde_json::from_str::<Envelope>(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(RequesterError::Status {
                url: url.to_string(),
                status,
                body,
            }),
            Err(e) => return Err(RequesterError::Envelope(e)),
        };

        if envelope.code != 0 {
            warn!("{} responded with code {}", url, envelope.code);
            return Err(RequesterError::Code {
                url: url.to_string(),
                code: envelope.code,
            });
        }

        Ok(envelope.data)
    }
}
