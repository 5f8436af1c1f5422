// src/api.rs
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::error::DeployError;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeployRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeployResponse {
    pub site_url: String,
}

impl DeployResponse {
    pub fn into_site_url(self) -> Result<String, DeployError> {
        let site_url = self.site_url.trim();
        if site_url.is_empty() {
            return Err(DeployError::EmptySiteUrl);
        }
        Ok(site_url.to_string())
    }
}

/// One best-effort deploy call: GitHub URL in, site URL out.
#[allow(async_fn_in_trait)]
pub trait DeployApi {
    async fn deploy(&self, github_url: &str) -> Result<String, DeployError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpDeployApi {
    endpoint: String,
}

impl HttpDeployApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl DeployApi for HttpDeployApi {
    async fn deploy(&self, github_url: &str) -> Result<String, DeployError> {
        let resp = Request::post(&self.endpoint)
            .json(&DeployRequest { url: github_url })
            .map_err(|e| DeployError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeployError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(DeployError::Status {
                status: resp.status(),
            });
        }

        resp.json::<DeployResponse>()
            .await
            .map_err(|e| DeployError::Decode(e.to_string()))?
            .into_site_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_string(&DeployRequest {
            url: "https://github.com/user/repo",
        })
        .unwrap();
        assert_eq!(body, r#"{"url":"https://github.com/user/repo"}"#);
    }

    #[test]
    fn response_reads_site_url_and_ignores_extras() {
        let resp: DeployResponse =
            serde_json::from_str(r#"{"siteUrl":"https://x.example","buildId":42}"#).unwrap();
        assert_eq!(resp.into_site_url().unwrap(), "https://x.example");
    }

    #[test]
    fn response_without_site_url_fails_to_decode() {
        assert!(serde_json::from_str::<DeployResponse>(r#"{"url":"https://x.example"}"#).is_err());
    }

    #[test]
    fn empty_site_url_is_an_error() {
        let resp = DeployResponse {
            site_url: "  ".to_string(),
        };
        assert!(matches!(resp.into_site_url(), Err(DeployError::EmptySiteUrl)));
    }
}
