use http::header::{HeaderMap, HeaderName, HeaderValue};
use httparse::Header;

use crate::error::SkipReason;

pub(crate) fn convert_raw_headers_to_header_map(raw_headers: &[Header]) -> Result<HeaderMap, SkipReason> {
    let mut headers = HeaderMap::with_capacity(raw_headers.len());

    for raw_header in raw_headers {
        let name = HeaderName::try_from(raw_header.name).map_err(SkipReason::DecodeHeaderName)?;
        let value = HeaderValue::try_from(raw_header.value).map_err(SkipReason::DecodeHeaderValue)?;

        headers.insert(name, value);
    }

    Ok(headers)
}
