use std::sync::Arc;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use url::Url;

use crate::{
    encode,
    error::{ConduitError, RemoteError},
    transport::HttpClient,
};

/// Parameters for a single call: an ordered map of JSON values.
pub type Params = serde_json::Map<String, Value>;

/// The immutable identity shared by every call made through one client:
/// the resolved API root and the token it authenticates with.
struct Endpoint<C> {
    api_root: Url,
    token: String,
    http: C,
}

impl<C> std::fmt::Debug for Endpoint<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token stays out of logs.
        f.debug_struct("Endpoint")
            .field("api_root", &self.api_root.as_str())
            .finish_non_exhaustive()
    }
}

/// A client bound to one Conduit install and API token.
///
/// Cloning is cheap; every clone and every [`Method`] handle derived from
/// it shares the same endpoint identity.
#[derive(Clone, Debug)]
pub struct Conduit<C: HttpClient> {
    endpoint: Arc<Endpoint<C>>,
}

#[cfg(feature = "__reqwest")]
#[cfg_attr(docsrs, doc(cfg(feature = "__reqwest")))]
impl Conduit<reqwest::Client> {
    /// Bind a client to `host` and `token` using the bundled reqwest
    /// transport.
    ///
    /// `host` is resolved once to the absolute API root `<host>/api/`.
    /// Standard URL join semantics apply, so an install served under a
    /// path prefix needs a trailing slash
    /// (`https://example.com/phabricator/`).
    pub fn new(host: impl AsRef<str>, token: impl Into<String>) -> Result<Self, url::ParseError> {
        Self::with_client(host, token, reqwest::Client::new())
    }
}

impl<C: HttpClient> Conduit<C> {
    /// Bind a client to `host` and `token` with an injected transport.
    pub fn with_client(
        host: impl AsRef<str>,
        token: impl Into<String>,
        http: C,
    ) -> Result<Self, url::ParseError> {
        let api_root = Url::parse(host.as_ref())?.join("api/")?;
        Ok(Conduit {
            endpoint: Arc::new(Endpoint {
                api_root,
                token: token.into(),
                http,
            }),
        })
    }

    /// Start a method path at its first segment.
    pub fn method(&self, segment: impl Into<String>) -> Method<C> {
        Method {
            endpoint: self.endpoint.clone(),
            path: vec![segment.into()],
        }
    }

    /// Build a handle for a full segment sequence in one step.
    ///
    /// This is the escape hatch for methods the typed facade does not
    /// know. The namespace is open-ended and nothing is validated client
    /// side; an unknown name is the server's to reject.
    pub fn method_path<I>(&self, segments: I) -> Method<C>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Method {
            endpoint: self.endpoint.clone(),
            path: segments.into_iter().map(Into::into).collect(),
        }
    }
}

/// A path-addressable handle on one remote procedure.
///
/// Handles are immutable: [`extend`](Method::extend) returns a new handle
/// and leaves its parent untouched, so a partially built path can serve
/// as the root of several deeper ones.
#[derive(Clone, Debug)]
pub struct Method<C: HttpClient> {
    endpoint: Arc<Endpoint<C>>,
    path: Vec<String>,
}

impl<C: HttpClient> Method<C> {
    /// Append a path segment, producing a new handle.
    pub fn extend(&self, segment: impl Into<String>) -> Method<C> {
        let mut path = self.path.clone();
        path.push(segment.into());
        Method {
            endpoint: self.endpoint.clone(),
            path,
        }
    }

    /// The dot-joined method name this handle addresses.
    pub fn name(&self) -> String {
        self.path.join(".")
    }

    /// Invoke the remote procedure and yield the raw `result` value.
    ///
    /// Exactly one round-trip: the token is sent under `api.token`,
    /// followed by `params` in their map order. A caller-supplied
    /// `api.token` silently replaces the client's token.
    pub async fn call(&self, params: Params) -> Result<Value, ConduitError<C::Error>> {
        let method = self.name();
        let url = self
            .endpoint
            .api_root
            .join(&method)
            .map_err(ConduitError::Url)?;

        let mut form = Params::with_capacity(params.len() + 1);
        form.insert(
            "api.token".to_owned(),
            Value::String(self.endpoint.token.clone()),
        );
        for (key, value) in params {
            form.insert(key, value);
        }

        tracing::debug!(method = %method, "conduit call");
        let body = self
            .endpoint
            .http
            .post_form(url, encode::flatten(&form))
            .await
            .map_err(ConduitError::Transport)?;

        let envelope: Envelope = serde_json::from_slice(&body).map_err(ConduitError::Decode)?;
        if let Some(code) = envelope.error_code.filter(|code| !code.is_empty()) {
            return Err(ConduitError::Remote(RemoteError::new(
                code,
                envelope.error_info.unwrap_or_default(),
            )));
        }
        Ok(envelope.result)
    }

    /// Invoke the remote procedure with typed parameters and deserialize
    /// its `result` into `T`.
    ///
    /// `params` must serialize to a JSON object (or `null`).
    pub async fn call_with<P, T>(&self, params: &P) -> Result<T, ConduitError<C::Error>>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let params = encode::to_params(params).map_err(ConduitError::Decode)?;
        let value = self.call(params).await?;
        serde_json::from_value(value).map_err(ConduitError::Decode)
    }
}

/// The JSON envelope every Conduit response arrives in.
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error_info: Option<String>,
    #[serde(default)]
    result: Value,
}
