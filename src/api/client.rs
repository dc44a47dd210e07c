use std::rc::Rc;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, FormData, Request, RequestInit, Response, UrlSearchParams, Window};

use super::{Endpoint, Method};
use crate::{config::Config, error::ApiError};

/// Body of a POST. Entity forms go out as multipart so file inputs (test files, SSH keys) are
/// carried along; the raw XML forms are plain URL-encoded.
pub enum Body {
    Multipart(FormData),
    UrlEncoded(UrlSearchParams),
}

impl Body {
    fn as_js(&self) -> &JsValue {
        match self {
            Body::Multipart(data) => data.as_ref(),
            Body::UrlEncoded(params) => params.as_ref(),
        }
    }
}

/// Thin `fetch` wrapper bound to the configured API base.
#[derive(Clone)]
pub struct ApiClient {
    window: Window,
    config: Rc<Config>,
}

impl ApiClient {
    pub fn new(window: &Window, config: Rc<Config>) -> Self {
        Self {
            window: window.clone(),
            config,
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        self.config.url(&endpoint.path())
    }

    /// GET `endpoint` and decode its JSON body.
    pub async fn get_json<T>(
        &self,
        endpoint: Endpoint,
        signal: Option<&AbortSignal>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let body = self.send(endpoint, None, signal).await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// POST `body` to `endpoint`, returning the raw response text. Mutations are usually sent
    /// without a signal: once the backend may have acted on them, they are never aborted.
    pub async fn post(
        &self,
        endpoint: Endpoint,
        body: &Body,
        signal: Option<&AbortSignal>,
    ) -> Result<String, ApiError> {
        self.send(endpoint, Some(body), signal).await
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        body: Option<&Body>,
        signal: Option<&AbortSignal>,
    ) -> Result<String, ApiError> {
        let method = endpoint.method();
        let url = self.url(endpoint);

        log::debug!("{} {url}", method.as_str());

        let init = RequestInit::new();
        init.set_method(method.as_str());
        init.set_signal(signal);
        if let (Method::Post, Some(body)) = (method, body) {
            init.set_body(body.as_js());
        }

        let request =
            Request::new_with_str_and_init(&url, &init).map_err(ApiError::from_rejection)?;

        let response: Response = JsFuture::from(self.window.fetch_with_request(&request))
            .await
            .map_err(ApiError::from_rejection)?
            .dyn_into()
            .map_err(ApiError::from_rejection)?;

        let text = JsFuture::from(response.text().map_err(ApiError::from_rejection)?)
            .await
            .map_err(ApiError::from_rejection)?
            .as_string()
            .unwrap_or_default();

        if response.ok() {
            Ok(text)
        } else {
            log::warn!("{url} answered {}", response.status());

            Err(ApiError::Server {
                status: response.status(),
                status_text: response.status_text(),
                body: text,
            })
        }
    }
}
