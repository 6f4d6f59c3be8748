use std::collections::HashMap;

use crate::form::{FormData, UploadedFile};
use crate::part::Part;
use crate::{constants, view};

/// Decoder for a fully buffered `multipart/form-data` body.
///
/// The decode is a pure, synchronous, single pass over the body: no I/O, no
/// shared state, so concurrent decodes from separate requests need no
/// coordination. The caller buffers the complete body first; nothing here
/// supports partially received input.
///
/// # Examples
///
/// ```
/// use formbody::FormDecoder;
///
/// # fn run() -> formbody::Result<()> {
/// let body = b"--X-BOUNDARY\r\nContent-Disposition: form-data; name=\"caption\"\r\n\r\nhello\r\n--X-BOUNDARY--\r\n";
/// let form = FormDecoder::new("X-BOUNDARY").decode(body)?;
///
/// assert_eq!(form.field("caption"), Some("hello"));
/// assert!(form.file().is_none());
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Debug)]
pub struct FormDecoder {
    boundary: String,
    fallback_file_name: String,
}

impl FormDecoder {
    /// Constructs a decoder for the given boundary token.
    pub fn new<B: Into<String>>(boundary: B) -> FormDecoder {
        FormDecoder {
            boundary: boundary.into(),
            fallback_file_name: constants::DEFAULT_FILE_NAME.to_owned(),
        }
    }

    /// Constructs a decoder by extracting the boundary from a raw
    /// `Content-Type` header value via [`parse_boundary`](crate::parse_boundary).
    pub fn from_content_type<T: AsRef<str>>(content_type: T) -> crate::Result<FormDecoder> {
        crate::parse_boundary(content_type).map(FormDecoder::new)
    }

    /// Sets the file name used when a file part carries an empty
    /// `filename=""` attribute.
    pub fn fallback_file_name<N: Into<String>>(mut self, name: N) -> FormDecoder {
        self.fallback_file_name = name.into();
        self
    }

    /// Decodes the body into text fields and at most one uploaded file.
    ///
    /// Only an unusable boundary is fatal. Malformed parts (no
    /// header/payload delimiter, unparseable headers, no `name` attribute)
    /// are logged and skipped, and the remaining parts still decode. A body
    /// with no parts at all is a valid empty submission.
    ///
    /// Duplicate field names and duplicate file parts are last-write-wins.
    /// This preserves the behavior of the form handlers this decoder was
    /// built against; rely on it for compatibility, not as a feature.
    ///
    /// Transient memory is proportional to the body: one copy for the text
    /// view plus one per extracted payload, so large uploads should expect
    /// a 2-3x multiplier while decoding.
    pub fn decode(&self, body: &[u8]) -> crate::Result<FormData> {
        if self.boundary.is_empty() {
            return Err(crate::Error::NoBoundary);
        }

        let delimiter = format!("{}{}", constants::BOUNDARY_EXT, self.boundary);
        let body_view = view::to_view(body);

        let mut fields: HashMap<String, String> = HashMap::new();
        let mut file: Option<UploadedFile> = None;

        // The first segment is the preamble; the closing marker opens with
        // "--" and ends the scan.
        for segment in body_view.split(delimiter.as_str()).skip(1) {
            if segment.starts_with(constants::BOUNDARY_EXT) {
                break;
            }

            let part = match Part::parse(segment) {
                Ok(part) => part,
                Err(reason) => {
                    log::debug!("skipping malformed part: {}", reason);
                    continue;
                }
            };

            if part.is_file() {
                let file_name = match part.file_name() {
                    Some(name) if !name.is_empty() => name.to_owned(),
                    _ => self.fallback_file_name.clone(),
                };
                let content_type = part.content_type().unwrap_or(mime::APPLICATION_OCTET_STREAM);

                file = Some(UploadedFile::new(file_name, content_type, part.bytes()));
            } else {
                fields.insert(part.name().to_owned(), part.text());
            }
        }

        Ok(FormData::new(fields, file))
    }
}

/// Decodes a buffered body using the boundary declared in the given raw
/// `Content-Type` header value.
pub fn decode<T: AsRef<str>>(body: &[u8], content_type: T) -> crate::Result<FormData> {
    FormDecoder::from_content_type(content_type)?.decode(body)
}
