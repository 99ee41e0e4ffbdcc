use reqwest::{header, Client, StatusCode, Url};
use std::time::Duration;

/// Listing pages larger than this are refused.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("http client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request for page {page} failed: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("page {page} returned HTTP {status}")]
    Status { page: u32, status: StatusCode },

    #[error("page {page} is larger than 2 MiB")]
    TooLarge { page: u32 },
}

/// Downloads listing pages one at a time.
pub struct Fetcher {
    client: Client,
    base: Url,
}

impl Fetcher {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        // a trailing slash makes Url::join append instead of replacing the last segment
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, base })
    }

    pub fn page_url(&self, page: u32) -> Result<Url, FetchError> {
        Ok(self.base.join(&format!("page{page}/"))?)
    }

    pub async fn fetch(&self, page: u32) -> Result<String, FetchError> {
        let url = self.page_url(page)?;
        tracing::debug!(%url, "fetching page");
        let transport = |source| FetchError::Transport { page, source };

        let resp = self
            .client
            .get(url)
            .header(header::ACCEPT, "text/html")
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { page, status });
        }
        let bytes = resp.bytes().await.map_err(transport)?;
        if bytes.len() > MAX_BODY_BYTES {
            return Err(FetchError::TooLarge { page });
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
