#![allow(dead_code)]

use super::headers::{header_count, header_value};
use cors_policy_rs::constants::header;
use http::Response;

pub fn assert_header_eq<B>(response: &Response<B>, name: &str, expected: &str) {
    assert_eq!(
        header_value(response, name),
        Some(expected),
        "unexpected value for {name}"
    );
}

/// Every CORS response header is present exactly once.
pub fn assert_cors_headers_present<B>(response: &Response<B>) {
    for name in header::CORS_RESPONSE_HEADERS {
        assert_eq!(
            header_count(response, name),
            1,
            "{name} should be present exactly once"
        );
    }
}

pub fn assert_vary_eq<B, I, S>(response: &Response<B>, expected: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected: Vec<String> = expected.into_iter().map(Into::into).collect();
    assert_eq!(super::headers::vary_values(response), expected);
}
