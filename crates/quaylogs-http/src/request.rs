//! Single registry request.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument, trace};

use quaylogs_core::{AuthToken, Error, Result};

use crate::client::transport_error;
use crate::response::RawResponse;

/// HTTP methods the executor knows how to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            _ => Err(Error::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Username/password pair for HTTP basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Everything needed to issue one request against the registry API.
///
/// The URL is a template: `{name}` placeholders are replaced with the
/// percent-encoded value of the matching path parameter when the request
/// is invoked. The method is kept as given and only checked at invoke
/// time, so an unsupported verb fails without touching the network.
///
/// # Example
///
/// ```
/// use quaylogs_http::HttpRequest;
///
/// let req = HttpRequest::get("https://quay.io/api/v1/repository/{namespace}/{name}/logs")
///     .path_param("namespace", "openebs")
///     .path_param("name", "jiva")
///     .query("next_page", "");
/// assert_eq!(req.resolved_url(), "https://quay.io/api/v1/repository/openebs/jiva/logs");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub url: String,
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub query_params: Vec<(String, String)>,
    pub path_params: Vec<(String, String)>,
    pub body: Option<String>,
    pub auth_token: Option<AuthToken>,
    pub basic_auth: Option<BasicAuth>,
}

impl HttpRequest {
    /// A request with an arbitrary method string.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            ..Default::default()
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get.as_str(), url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post.as_str(), url)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn bearer(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuth::new(username, password));
        self
    }

    /// The URL with every path parameter substituted.
    pub fn resolved_url(&self) -> String {
        self.path_params
            .iter()
            .fold(self.url.clone(), |url, (name, value)| {
                url.replace(&format!("{{{}}}", name), &urlencoding::encode(value))
            })
    }

    /// Send the request and return the raw response.
    ///
    /// Non-2xx statuses are returned as responses, not errors; deciding
    /// what they mean is up to the caller. No retry is attempted.
    #[instrument(skip(self, client), fields(method = %self.method))]
    pub async fn invoke(&self, client: &reqwest::Client) -> Result<RawResponse> {
        let method: Method = self.method.parse()?;
        let url = self.resolved_url();
        debug!(%url, "Invoking registry request");
        trace!(query = ?self.query_params, "query parameters");

        let mut builder = match method {
            Method::Get => client.get(&url),
            Method::Post => client.post(&url),
        };

        if !self.query_params.is_empty() {
            builder = builder.query(&self.query_params);
        }
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(token) = &self.auth_token
            && !token.is_empty()
        {
            builder = builder.bearer_auth(token.as_str());
        }
        if let Some(basic) = &self.basic_auth {
            builder = builder.basic_auth(&basic.username, Some(&basic.password));
        }
        if let Some(body) = &self.body
            && !body.is_empty()
        {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(|e| Error::Transport {
            url: url.clone(),
            source: transport_error(e),
        })?;

        let status = response.status().as_u16();
        let error_header = response
            .headers()
            .get("error")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport {
                url: url.clone(),
                source: transport_error(e),
            })?
            .to_vec();

        trace!(status, bytes = body.len(), "registry response");

        Ok(RawResponse {
            status,
            error_header,
            body,
        })
    }
}
