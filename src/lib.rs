//! A synchronous decoder for buffered `multipart/form-data` request bodies.
//!
//! Give it a fully buffered body and the boundary from the `Content-Type`
//! header, and it returns the decoded text fields plus at most one uploaded
//! file. Binary payloads survive byte-exact: all boundary splitting happens
//! on a reversible single-byte-per-character text view of the body, never
//! on a lossy text decoding.
//!
//! # Examples
//!
//! ```
//! use formbody::FormDecoder;
//!
//! # fn run() -> formbody::Result<()> {
//! let content_type = "multipart/form-data; boundary=X-BOUNDARY";
//! let body = b"--X-BOUNDARY\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"cat.png\"\r\nContent-Type: image/png\r\n\r\n\x89PNG\r\n--X-BOUNDARY--\r\n";
//!
//! let form = FormDecoder::from_content_type(content_type)?.decode(body)?;
//!
//! let file = form.file().expect("file part");
//! assert_eq!(file.file_name(), "cat.png");
//! assert_eq!(&file.bytes()[..], b"\x89PNG");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

pub use decoder::{decode, FormDecoder};
pub use error::Error;
pub use form::{FormData, UploadedFile};

mod constants;
mod content_disposition;
mod decoder;
mod error;
mod form;
mod helpers;
mod part;
mod view;

/// A Result type often returned from methods that can have `formbody`
/// errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses the `Content-Type` header to extract the boundary value.
pub fn parse_boundary<T: AsRef<str>>(content_type: T) -> crate::Result<String> {
    let m = content_type
        .as_ref()
        .parse::<mime::Mime>()
        .map_err(Error::DecodeContentType)?;

    if !(m.type_() == mime::MULTIPART_FORM_DATA.type_() && m.subtype() == mime::MULTIPART_FORM_DATA.subtype()) {
        return Err(Error::NoMultipart);
    }

    m.get_param(mime::BOUNDARY)
        .map(|name| name.as_str().to_owned())
        .ok_or(Error::NoBoundary)
}
