use thiserror::Error;

use crate::client::Resource;

/// Failure to turn a response body into domain records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not the JSON shape expected for the resource.
    #[error("invalid API response {:?}: {source}", preview(.body))]
    MalformedResponse {
        body: Vec<u8>,
        #[source]
        source: serde_json::Error,
    },

    /// A region forecast paragraph list held an entry without string `title`/`$` fields.
    #[error(
        "invalid API response {:?}: paragraph {index} of period {period:?}: {source}",
        preview(.body)
    )]
    MalformedParagraph {
        period: String,
        index: usize,
        body: Vec<u8>,
        #[source]
        source: serde_json::Error,
    },

    /// The body decoded but holds none of the elements the caller needs.
    #[error("invalid API response {:?}: want at least one {element} element", preview(.body))]
    EmptyResult { body: Vec<u8>, element: &'static str },
}

impl ParseError {
    pub(crate) fn malformed(body: &[u8], source: serde_json::Error) -> Self {
        Self::MalformedResponse { body: body.to_vec(), source }
    }

    pub(crate) fn empty(body: &[u8], element: &'static str) -> Self {
        Self::EmptyResult { body: body.to_vec(), element }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. } | Self::MalformedParagraph { .. })
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }

    /// The raw response body that failed to parse.
    pub fn body(&self) -> &[u8] {
        match self {
            Self::MalformedResponse { body, .. }
            | Self::MalformedParagraph { body, .. }
            | Self::EmptyResult { body, .. } => body,
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to build HTTP client")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("{resource} request requires a non-empty id")]
    MissingId { resource: Resource },

    #[error("failed to build {resource} URL")]
    Url {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to send {resource} request to DataPoint")]
    Request {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    #[error("DataPoint {resource} request failed with status {status}: {body}")]
    Status {
        resource: Resource,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to read DataPoint {resource} response body")]
    Body {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },
}

/// Anything that can go wrong while serving one CLI operation.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(
        "site {0:?} is not in the site list.\n\
         Hint: run `weather site find <NAME>` to search the available sites."
    )]
    SiteNotFound(String),
}

const PREVIEW_MAX: usize = 200;

pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() > PREVIEW_MAX {
        let mut end = PREVIEW_MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

fn preview(body: &[u8]) -> String {
    truncate_body(&String::from_utf8_lossy(body))
}
