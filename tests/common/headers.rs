#![allow(dead_code)]

use cors_policy_rs::constants::header;
use http::Response;

pub fn header_value<'a, B>(response: &'a Response<B>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

pub fn header_count<B>(response: &Response<B>, name: &str) -> usize {
    response.headers().get_all(name).iter().count()
}

pub fn has_header<B>(response: &Response<B>, name: &str) -> bool {
    header_count(response, name) > 0
}

pub fn vary_values<B>(response: &Response<B>) -> Vec<String> {
    header_value(response, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
