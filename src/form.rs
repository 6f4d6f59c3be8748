use std::collections::HashMap;

use bytes::Bytes;

/// The decoded contents of a `multipart/form-data` body: text fields plus
/// at most one uploaded file.
///
/// Owns copies of everything extracted; the raw body can be dropped as soon
/// as decoding returns.
#[derive(Debug)]
pub struct FormData {
    fields: HashMap<String, String>,
    file: Option<UploadedFile>,
}

impl FormData {
    pub(crate) fn new(fields: HashMap<String, String>, file: Option<UploadedFile>) -> FormData {
        FormData { fields, file }
    }

    /// Returns the value of the named text field, if it was present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|value| value.as_str())
    }

    /// All decoded text fields, keyed by field name.
    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// The uploaded file, if the body contained a file part. Absence is not
    /// a decode error; whether a file was required is the caller's call.
    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    /// Consumes the form and returns the uploaded file, if any.
    pub fn into_file(self) -> Option<UploadedFile> {
        self.file
    }
}

/// An uploaded file extracted from a file part: its name, the content type
/// the client declared, and the raw payload bytes.
#[derive(Debug)]
pub struct UploadedFile {
    file_name: String,
    content_type: mime::Mime,
    bytes: Bytes,
}

impl UploadedFile {
    pub(crate) fn new(file_name: String, content_type: mime::Mime, bytes: Bytes) -> UploadedFile {
        UploadedFile {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }

    /// The content type declared by the client, `application/octet-stream`
    /// when the part carried none. Declared, not verified.
    pub fn content_type(&self) -> &mime::Mime {
        &self.content_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
