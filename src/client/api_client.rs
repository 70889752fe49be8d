// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Envelope-aware API client

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::ClientConfig;
use crate::browser::{
    MemoryNavigator, MemorySessionStorage, Navigator, Notification, Notifier, SessionStorage,
    TracingNotifier,
};
use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::http::{HttpClient, Request, Response, Transport};
use crate::pipeline::{Classification, Pipeline, TransportFailure};
use crate::session::{ReverificationGuard, SessionVerifier};

/// API client wrapping a transport with the interception pipeline
///
/// Every call runs the request stages, sends the request, then classifies
/// the answer. Only envelope code 200 resolves; everything else is an `Err`.
/// Clones share the transport, the notifier and the reverification guard.
///
/// # Example
///
/// ```rust,no_run
/// use casgate::{ApiClient, ClientConfig, Request};
///
/// # async fn run() -> casgate::Result<()> {
/// let config = ClientConfig::new().base_url("https://shop.example.com".parse()?);
/// let client = ApiClient::new(config)?;
///
/// let shops = client
///     .request_json::<serde_json::Value>(Request::post("/api/shop/list").alert_on_error(false))
///     .await?;
/// println!("{:?}", shops.data);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    pipeline: Pipeline,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
    verifier: SessionVerifier,
    guard: ReverificationGuard,
}

impl ApiClient {
    /// Create a client with the reqwest transport and default collaborators
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    /// Start building a client
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder::new(config)
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Interception pipeline
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Whether a session check is running right now
    pub fn is_reverifying(&self) -> bool {
        self.guard.is_held()
    }

    /// New request using the configured default method
    pub fn new_request(&self, url: impl Into<String>) -> Request {
        Request::new(self.config.default_method.clone(), url)
    }

    /// Send a request and return the raw response of a successful call
    pub async fn request(&self, request: Request) -> Result<Response> {
        let request = self.pipeline.process_request(request);

        let response = match self.transport.send(request.clone()).await {
            Ok(response) => response,
            Err(error) if !error.is_transport() => {
                tracing::warn!(
                    method = %request.method,
                    url = %request.url,
                    %error,
                    "Request not sent"
                );
                return Err(error);
            }
            Err(error) => return Err(self.transport_failed(&request, error)),
        };

        let status = response.status;
        let envelope = response.envelope::<serde_json::Value>();
        let classification = self
            .pipeline
            .classify(&request, status, envelope.as_ref().ok());

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            redirected = response.redirected,
            code = ?envelope.as_ref().ok().map(|e| e.code),
            ?classification,
            "Response classified"
        );

        match classification {
            Classification::Success => Ok(response),
            Classification::BusinessError { notice } => {
                if let Some(message) = notice {
                    self.notifier.notify(Notification::error(message));
                }
                Err(Error::Business {
                    envelope: require_envelope(envelope, status)?,
                })
            }
            Classification::SessionInvalid => {
                self.reverify().await;
                Err(Error::SessionExpired {
                    envelope: envelope.ok(),
                    status: status.as_u16(),
                })
            }
            Classification::Rejected => Err(Error::Rejected {
                envelope: require_envelope(envelope, status)?,
            }),
            Classification::Malformed => {
                let error = Error::MalformedEnvelope {
                    status: status.as_u16(),
                    reason: match envelope {
                        Err(e) => e.to_string(),
                        Ok(_) => "rejected by classifier".to_string(),
                    },
                };
                // a non-2xx answer without an envelope never reached the API
                if status.is_success() {
                    Err(error)
                } else {
                    Err(self.transport_failed(&request, error))
                }
            }
        }
    }

    /// Send a request and decode the envelope with a typed payload
    pub async fn request_json<T>(&self, request: Request) -> Result<Envelope<T>>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.request(request).await?;
        response.envelope()
    }

    /// GET `url`
    pub async fn get<T>(&self, url: impl Into<String>) -> Result<Envelope<T>>
    where
        T: DeserializeOwned + Default,
    {
        self.request_json(Request::get(url)).await
    }

    /// POST `body` as JSON to `url`
    pub async fn post_json<T, B>(&self, url: impl Into<String>, body: &B) -> Result<Envelope<T>>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.request_json(Request::post(url).json(body)?).await
    }

    /// Take the page saved before a CAS login redirect
    pub fn take_saved_location(&self) -> Option<String> {
        self.verifier.take_saved_location()
    }

    /// Run the CAS check unless one is already in flight
    async fn reverify(&self) {
        let Some(_permit) = self.guard.try_acquire() else {
            tracing::debug!("Session check already in flight, skipping");
            return;
        };

        match self.verifier.verify().await {
            Ok(outcome) => tracing::info!(?outcome, "Session check finished"),
            Err(error) => tracing::warn!(%error, "Session check failed"),
        }
    }

    fn transport_failed(&self, request: &Request, error: Error) -> Error {
        let failure = TransportFailure::classify(&error);
        tracing::warn!(
            method = %request.method,
            url = %request.url,
            ?failure,
            %error,
            "Request failed"
        );
        self.notifier.notify(failure.notification());
        error
    }
}

fn require_envelope(
    envelope: std::result::Result<Envelope, Error>,
    status: StatusCode,
) -> Result<Envelope> {
    envelope.map_err(|e| Error::MalformedEnvelope {
        status: status.as_u16(),
        reason: e.to_string(),
    })
}

/// Builder for `ApiClient`
pub struct ApiClientBuilder {
    config: ClientConfig,
    pipeline: Option<Pipeline>,
    transport: Option<Arc<dyn Transport>>,
    notifier: Option<Arc<dyn Notifier>>,
    storage: Option<Arc<dyn SessionStorage>>,
    navigator: Option<Arc<dyn Navigator>>,
    guard: Option<ReverificationGuard>,
}

impl ApiClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            pipeline: None,
            transport: None,
            notifier: None,
            storage: None,
            navigator: None,
            guard: None,
        }
    }

    /// Replace the standard pipeline
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Send through this transport instead of reqwest
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn notifier<N: Notifier + 'static>(mut self, notifier: N) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn session_storage<S: SessionStorage + 'static>(mut self, storage: S) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    pub fn navigator<N: Navigator + 'static>(mut self, navigator: N) -> Self {
        self.navigator = Some(Arc::new(navigator));
        self
    }

    /// Share a reverification guard, e.g. with another client or a test probe
    pub fn guard(mut self, guard: ReverificationGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        self.config.validate()?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpClient::with_config(self.config.http_config()?)?),
        };
        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(TracingNotifier));
        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(MemorySessionStorage::new()));
        let navigator = match self.navigator {
            Some(navigator) => navigator,
            None => {
                let here = self
                    .config
                    .base_url
                    .as_ref()
                    .map(|u| u.to_string())
                    .unwrap_or_default();
                Arc::new(MemoryNavigator::new(here))
            }
        };

        let pipeline = self
            .pipeline
            .unwrap_or_else(|| Pipeline::standard(&self.config.api_version));

        let verifier = SessionVerifier::new(Arc::clone(&transport), storage, navigator)
            .verify_path(self.config.verify_path.as_str())
            .redirect_key(self.config.redirect_storage_key.as_str());

        Ok(ApiClient {
            config: self.config,
            pipeline,
            transport,
            notifier,
            verifier,
            guard: self.guard.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_uses_default_method() {
        let client = ApiClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.new_request("/api/foo").method, reqwest::Method::POST);

        let client =
            ApiClient::new(ClientConfig::new().default_method(reqwest::Method::GET)).unwrap();
        assert_eq!(client.new_request("/api/foo").method, reqwest::Method::GET);
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let result = ApiClient::builder(ClientConfig::new().api_version("")).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_unresolvable_url_is_not_announced() {
        let notifier = crate::browser::RecordingNotifier::new();
        let client = ApiClient::builder(ClientConfig::default())
            .notifier(notifier.clone())
            .build()
            .unwrap();

        let err = client.request(Request::post("/api/foo")).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_clones_share_guard() {
        let client = ApiClient::new(ClientConfig::default()).unwrap();
        let other = client.clone();
        let _permit = client.guard.try_acquire().unwrap();
        assert!(other.is_reverifying());
    }
}
