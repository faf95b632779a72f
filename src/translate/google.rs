use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

use super::{TranslateError, Translation, Translator};
use crate::app::config::TranslatorSettings;

/// Blocking client for the `translate_a/single?client=gtx` endpoint
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn from_settings(settings: &TranslatorSettings) -> Result<Self, TranslateError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if settings.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: settings.endpoint.clone(),
        })
    }
}

impl Translator for GoogleTranslator {
    fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, TranslateError> {
        debug!("Translating {} characters {} -> {}", text.len(), source, target);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        parse_gtx_response(&response.text()?)
    }
}

/// Parse the nested array returned by the gtx endpoint.
///
/// Element 0 holds one `[translated, original, ...]` entry per sentence;
/// element 2 is the detected source language.
pub fn parse_gtx_response(body: &str) -> Result<Translation, TranslateError> {
    let value: Value = serde_json::from_str(body)?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or(TranslateError::UnexpectedShape("missing sentence list"))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() && !segments.is_empty() {
        return Err(TranslateError::UnexpectedShape("sentences carry no text"));
    }

    let detected_source = value.get(2).and_then(Value::as_str).map(str::to_string);

    Ok(Translation {
        text,
        detected_source,
    })
}
