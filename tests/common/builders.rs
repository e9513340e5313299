#![allow(dead_code)]

use cors_policy_rs::constants::{header, method};
use cors_policy_rs::{
    AllowOrigin, BoxError, CorsMiddleware, HeaderList, PolicyConfig, PreflightMode,
};
use http::{Request, Response, StatusCode};

#[derive(Default)]
pub struct PolicyBuilder {
    allow_origin: Option<AllowOrigin>,
    allow_methods: Option<Vec<String>>,
    allow_headers: Option<HeaderList>,
    expose_headers: Option<HeaderList>,
    max_age: Option<u64>,
    credentials: Option<bool>,
    preflight: Option<PreflightMode>,
    vary_origin: Option<bool>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: AllowOrigin) -> Self {
        self.allow_origin = Some(origin);
        self
    }

    pub fn origins<I, S>(self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origin(AllowOrigin::list(origins))
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_headers(mut self, headers: HeaderList) -> Self {
        self.allow_headers = Some(headers);
        self
    }

    pub fn exposed_headers(mut self, headers: HeaderList) -> Self {
        self.expose_headers = Some(headers);
        self
    }

    pub fn max_age(mut self, value: u64) -> Self {
        self.max_age = Some(value);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn preflight(mut self, mode: PreflightMode) -> Self {
        self.preflight = Some(mode);
        self
    }

    pub fn vary_origin(mut self, enabled: bool) -> Self {
        self.vary_origin = Some(enabled);
        self
    }

    pub fn policy(self) -> PolicyConfig {
        let PolicyConfig {
            allow_origin: default_origin,
            allow_methods: default_methods,
            allow_headers: default_allow_headers,
            expose_headers: default_expose_headers,
            max_age: default_max_age,
            credentials: default_credentials,
            preflight: default_preflight,
            vary_origin: default_vary_origin,
        } = PolicyConfig::default();

        PolicyConfig {
            allow_origin: self.allow_origin.unwrap_or(default_origin),
            allow_methods: self.allow_methods.unwrap_or(default_methods),
            allow_headers: self.allow_headers.unwrap_or(default_allow_headers),
            expose_headers: self.expose_headers.unwrap_or(default_expose_headers),
            max_age: self.max_age.unwrap_or(default_max_age),
            credentials: self.credentials.unwrap_or(default_credentials),
            preflight: self.preflight.unwrap_or(default_preflight),
            vary_origin: self.vary_origin.unwrap_or(default_vary_origin),
        }
    }

    pub fn build(self) -> CorsMiddleware {
        CorsMiddleware::new(self.policy())
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    path: String,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            origin: None,
            path: "/".into(),
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn build(self) -> Request<()> {
        let mut builder = Request::builder()
            .method(self.method.as_str())
            .uri(self.path.as_str());
        if let Some(origin) = &self.origin {
            builder = builder.header(header::ORIGIN, origin.as_str());
        }
        builder.body(()).expect("valid request")
    }

    /// Runs the request through `cors` in front of a handler answering `status`.
    pub fn send(self, cors: &CorsMiddleware, status: StatusCode) -> Response<String> {
        let request = self.build();
        cors.handle(&request, |_| Ok::<_, BoxError>(respond(status, "handler")))
            .expect("cors stage should succeed")
    }
}

pub fn respond(status: StatusCode, body: &str) -> Response<String> {
    let mut response = Response::new(body.to_string());
    *response.status_mut() = status;
    response
}

pub fn cors() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
