use std::fmt::{self, Debug, Display, Formatter};

use derive_more::Display;

/// A set of errors that abort a decode: the request body cannot be
/// interpreted as `multipart/form-data` at all.
///
/// Malformations inside individual parts are never fatal; such parts are
/// skipped and the rest of the body still decodes (see
/// [`FormDecoder::decode`](crate::FormDecoder::decode)).
#[derive(Display)]
#[non_exhaustive]
pub enum Error {
    /// The `Content-Type` header is not `multipart/form-data`.
    #[display(fmt = "Content-Type is not multipart/form-data")]
    NoMultipart,

    /// Failed to convert the `Content-Type` to [`mime::Mime`] type.
    #[display(fmt = "Failed to convert Content-Type to `mime::Mime` type: {}", _0)]
    DecodeContentType(mime::FromStrError),

    /// No boundary found in the `Content-Type` header, or the boundary is
    /// empty.
    #[display(fmt = "multipart boundary not found in Content-Type")]
    NoBoundary,
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for Error {}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string().eq(&other.to_string())
    }
}

impl Eq for Error {}

/// Why a single part was dropped from the result. Logged, never surfaced:
/// a malformed part must not block an otherwise well-formed submission.
#[derive(Debug, Display)]
pub(crate) enum SkipReason {
    /// The part has no `\r\n\r\n` separating headers from payload.
    #[display(fmt = "no header/payload delimiter in part")]
    MissingHeaderDelimiter,

    /// The header block ended before a complete set of headers was read.
    #[display(fmt = "incomplete part headers")]
    IncompleteHeaders,

    /// The header block is not parseable as HTTP headers.
    #[display(fmt = "failed to read part headers: {}", _0)]
    ReadHeaderFailed(httparse::Error),

    /// A raw header name does not form a valid
    /// [`HeaderName`](http::header::HeaderName).
    #[display(fmt = "failed to decode part's raw header name: {}", _0)]
    DecodeHeaderName(http::header::InvalidHeaderName),

    /// A raw header value does not form a valid
    /// [`HeaderValue`](http::header::HeaderValue).
    #[display(fmt = "failed to decode part's raw header value: {}", _0)]
    DecodeHeaderValue(http::header::InvalidHeaderValue),

    /// Content-Disposition carries no `name="..."` attribute.
    #[display(fmt = "no name attribute in Content-Disposition")]
    MissingFieldName,
}
