//! The HTTP collaborator seam.
//!
//! The core never talks to the network directly: it posts form fields
//! through [`HttpClient`] and parses whatever bytes come back. TLS,
//! timeouts, retries and connection pooling all live behind this trait,
//! configured on whatever client the caller injects.

use bytes::Bytes;
use url::Url;

/// A "POST a form, await the raw response body" capability.
pub trait HttpClient: Clone + Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    /// POST `fields` to `url` as an `application/x-www-form-urlencoded`
    /// body and return the response bytes.
    ///
    /// HTTP status is not interpreted here; Conduit reports failures
    /// in-band through the JSON envelope.
    fn post_form(
        &self,
        url: Url,
        fields: Vec<(String, String)>,
    ) -> impl Future<Output = Result<Bytes, Self::Error>> + Send + '_;
}

#[cfg(feature = "__reqwest")]
#[cfg_attr(docsrs, doc(cfg(feature = "__reqwest")))]
impl HttpClient for reqwest::Client {
    type Error = reqwest::Error;

    async fn post_form(
        &self,
        url: Url,
        fields: Vec<(String, String)>,
    ) -> Result<Bytes, Self::Error> {
        let response = self.post(url).form(&fields).send().await?;
        response.bytes().await
    }
}
