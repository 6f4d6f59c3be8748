use bytes::Bytes;
use encoding_rs::{Encoding, UTF_8};
use http::header::{self, HeaderMap};

use crate::content_disposition::ContentDisposition;
use crate::error::SkipReason;
use crate::{constants, helpers, view};

/// One boundary-delimited segment of the body, split into parsed headers
/// and the payload slice of the text view.
///
/// Parts are transient: each one is consumed right after parsing while the
/// decoder folds it into the result, and borrows the segment text rather
/// than copying it.
pub(crate) struct Part<'v> {
    headers: HeaderMap,
    content_disposition: ContentDisposition,
    payload: &'v str,
}

impl<'v> Part<'v> {
    /// Parses one segment produced by splitting the body view on the
    /// boundary delimiter. Any malformation yields a [`SkipReason`] so the
    /// decoder can drop this part and keep going.
    pub(crate) fn parse(segment: &'v str) -> Result<Part<'v>, SkipReason> {
        // The segment opens with the remainder of the boundary line.
        let segment = segment.strip_prefix(constants::CRLF).unwrap_or(segment);

        let delim = segment
            .find(constants::CRLF_CRLF)
            .ok_or(SkipReason::MissingHeaderDelimiter)?;
        let payload_start = delim + constants::CRLF_CRLF.len();

        // Header bytes go through the view inverse so that httparse sees
        // the original octets, not a UTF-8 re-encoding of the view.
        let header_block = view::to_bytes(&segment[..payload_start]);

        let mut raw_headers = [httparse::EMPTY_HEADER; constants::MAX_HEADERS];
        let headers = match httparse::parse_headers(&header_block, &mut raw_headers) {
            Ok(httparse::Status::Complete((_, raw_headers))) => {
                helpers::convert_raw_headers_to_header_map(raw_headers)?
            }
            Ok(httparse::Status::Partial) => return Err(SkipReason::IncompleteHeaders),
            Err(err) => return Err(SkipReason::ReadHeaderFailed(err)),
        };

        let content_disposition = ContentDisposition::parse(&headers);
        if content_disposition.field_name.is_none() {
            return Err(SkipReason::MissingFieldName);
        }

        Ok(Part {
            headers,
            content_disposition,
            payload: &segment[payload_start..],
        })
    }

    pub(crate) fn name(&self) -> &str {
        // parse() rejects parts without a name attribute.
        self.content_disposition.field_name.as_deref().unwrap_or_default()
    }

    pub(crate) fn file_name(&self) -> Option<&str> {
        self.content_disposition.file_name.as_deref()
    }

    /// File inputs always emit a `filename` attribute, even when its value
    /// is empty; plain fields never do. Presence alone decides.
    pub(crate) fn is_file(&self) -> bool {
        self.content_disposition.file_name.is_some()
    }

    pub(crate) fn content_type(&self) -> Option<mime::Mime> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<mime::Mime>().ok())
    }

    /// Payload with the single CRLF the encoder appends before the next
    /// boundary stripped. A segment that does not end with CRLF is taken
    /// through to its end; searching backwards for an interior CRLF would
    /// discard real payload bytes.
    fn payload_view(&self) -> &str {
        self.payload.strip_suffix(constants::CRLF).unwrap_or(self.payload)
    }

    /// Raw payload of a file part. Never whitespace-trimmed: trailing bytes
    /// that happen to match whitespace values are legitimate file content.
    pub(crate) fn bytes(&self) -> Bytes {
        Bytes::from(view::to_bytes(self.payload_view()))
    }

    /// Text value of a field part, decoded with the charset declared on the
    /// part (UTF-8 when absent) and trimmed of surrounding whitespace.
    pub(crate) fn text(&self) -> String {
        let bytes = view::to_bytes(self.payload_view());

        let content_type = self.content_type();
        let encoding_name = content_type
            .as_ref()
            .and_then(|m| m.get_param(mime::CHARSET))
            .map(|charset| charset.as_str())
            .unwrap_or("utf-8");
        let encoding = Encoding::for_label(encoding_name.as_bytes()).unwrap_or(UTF_8);

        let (text, _, _) = encoding.decode(&bytes);

        text.trim().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_part() {
        let segment = "\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello world\r\n";
        let part = Part::parse(segment).unwrap();

        assert_eq!(part.name(), "note");
        assert!(!part.is_file());
        assert_eq!(part.file_name(), None);
        assert_eq!(part.content_type(), None);
        assert_eq!(part.text(), "hello world");
    }

    #[test]
    fn test_parse_file_part_keeps_trailing_whitespace_bytes() {
        let segment =
            "\r\nContent-Disposition: form-data; name=\"f\"; filename=\"a.bin\"\r\nContent-Type: application/octet-stream\r\n\r\n\u{1}\u{2} \t\r\n \r\n";
        let part = Part::parse(segment).unwrap();

        assert!(part.is_file());
        assert_eq!(part.file_name(), Some("a.bin"));
        assert_eq!(part.content_type(), Some(mime::APPLICATION_OCTET_STREAM));
        // Only the final encoder CRLF goes; the payload's own trailing
        // whitespace and interior CRLF stay.
        assert_eq!(&part.bytes()[..], b"\x01\x02 \t\r\n ");
    }

    #[test]
    fn test_parse_without_header_delimiter() {
        let segment = "\r\nContent-Disposition: form-data; name=\"x\"\r\nno payload delimiter";
        assert!(matches!(
            Part::parse(segment),
            Err(SkipReason::MissingHeaderDelimiter)
        ));
    }

    #[test]
    fn test_parse_without_name_attribute() {
        let segment = "\r\nContent-Disposition: form-data\r\n\r\nvalue\r\n";
        assert!(matches!(Part::parse(segment), Err(SkipReason::MissingFieldName)));
    }

    #[test]
    fn test_payload_without_trailing_crlf_is_kept_whole() {
        let segment = "\r\nContent-Disposition: form-data; name=\"f\"; filename=\"a\"\r\n\r\nabc\r\ndef";
        let part = Part::parse(segment).unwrap();
        assert_eq!(&part.bytes()[..], b"abc\r\ndef");
    }
}
