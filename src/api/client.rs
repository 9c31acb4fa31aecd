use crate::api::query::ContentsQuery;
use crate::error::{ApkFileError, Result};
use crate::user_agent;
use attohttpc::{RequestBuilder, Session};
use log::{debug, trace};

pub const ALPINE_CONTENTS_SEARCH_URI: &str = "https://pkgs.alpinelinux.org/contents";

/// Blocking client for the Alpine package contents search.
#[derive(Debug, Clone)]
pub struct ContentsClient {
    pub(crate) session: Session,
    pub(crate) base_url: String,
}

impl ContentsClient {
    pub fn new() -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::search_client());

        Self {
            session,
            base_url: ALPINE_CONTENTS_SEARCH_URI.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Run the search and return the raw HTML of the result page.
    ///
    /// Any transport error, non-2xx status, unreadable body, or body that is
    /// not valid UTF-8 is an error.
    /// The response is owned by this function, so the connection is released
    /// on every return path.
    pub fn search(&self, query: &ContentsQuery) -> Result<String> {
        let mut request = self.build_request(query);
        let url = request_url(&mut request);
        debug!("requesting from {url}");

        let response = request.send().map_err(|source| ApkFileError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        trace!("Response status for {url}: {status}");
        if !response.is_success() {
            return Err(ApkFileError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .map_err(|source| ApkFileError::ResponseBody {
                url: url.clone(),
                source,
            })?;
        debug!("Received {} bytes from {url}", bytes.len());

        String::from_utf8(bytes).map_err(|source| ApkFileError::InvalidEncoding { url, source })
    }

    fn build_request(&self, query: &ContentsQuery) -> RequestBuilder {
        self.session.get(&self.base_url).params(query.params())
    }
}

impl Default for ContentsClient {
    fn default() -> Self {
        Self::new()
    }
}

fn request_url(request: &mut RequestBuilder) -> String {
    request.inspect().url().to_string()
}
