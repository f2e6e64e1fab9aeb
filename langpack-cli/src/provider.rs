//! HTTP-backed translation provider.
//!
//! Speaks the LibreTranslate wire protocol: `POST <endpoint>/translate`
//! with `{ q, source, target, api_key? }`, answered by
//! `{ "translatedText": "..." }`. One blocking request per leaf string;
//! failures propagate to the caller and abort the run.

use std::time::Duration;

use langpack::{Error, Translate};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const TIMEOUT_SECS: u64 = 60;

pub struct HttpTranslator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

impl HttpTranslator {
    pub fn new(endpoint: &str, api_key: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;

        Ok(HttpTranslator {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

impl Translate for HttpTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, Error> {
        let request = TranslateRequest {
            q: text,
            source,
            target,
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/translate", self.endpoint))
            .json(&request)
            .send()
            .map_err(|e| Error::translation_error("request failed", Some(Box::new(e))))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::translation_error(
                format!("server returned {status}: {body}"),
                None,
            ));
        }

        let body: TranslateResponse = response
            .json()
            .map_err(|e| Error::translation_error("malformed response body", Some(Box::new(e))))?;

        Ok(body.translated_text)
    }
}
