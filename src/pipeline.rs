use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Endpoint<Req, Resp> = dyn Fn(&Req) -> Result<Resp, BoxError> + Send + Sync;

/// A named stage of a [`Pipeline`].
pub trait Middleware<Req, Resp>: Send + Sync {
    fn name(&self) -> &str;

    fn process(&self, request: &Req, next: Next<'_, Req, Resp>) -> Result<Resp, BoxError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("no pipeline stage named `{anchor}`")]
    StageNotFound { anchor: String },
}

/// The stages after the current one, ending in the endpoint.
pub struct Next<'a, Req, Resp> {
    stages: &'a [Arc<dyn Middleware<Req, Resp>>],
    endpoint: &'a Endpoint<Req, Resp>,
}

impl<'a, Req, Resp> Next<'a, Req, Resp> {
    pub fn run(self, request: &Req) -> Result<Resp, BoxError> {
        match self.stages.split_first() {
            Some((stage, rest)) => stage.process(
                request,
                Next {
                    stages: rest,
                    endpoint: self.endpoint,
                },
            ),
            None => (self.endpoint)(request),
        }
    }
}

/// Ordered middleware stages in front of an endpoint.
pub struct Pipeline<Req, Resp> {
    stages: Vec<Arc<dyn Middleware<Req, Resp>>>,
    endpoint: Box<Endpoint<Req, Resp>>,
}

impl<Req, Resp> Pipeline<Req, Resp> {
    pub fn new<F>(endpoint: F) -> Self
    where
        F: Fn(&Req) -> Result<Resp, BoxError> + Send + Sync + 'static,
    {
        Self {
            stages: Vec::new(),
            endpoint: Box::new(endpoint),
        }
    }

    /// Appends `stage` after every existing stage.
    pub fn add<M>(&mut self, stage: M) -> &mut Self
    where
        M: Middleware<Req, Resp> + 'static,
    {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Inserts `stage` directly before the first stage named `anchor`.
    pub fn insert_before<M>(&mut self, anchor: &str, stage: M) -> Result<&mut Self, PipelineError>
    where
        M: Middleware<Req, Resp> + 'static,
    {
        let index = self
            .position(anchor)
            .ok_or_else(|| PipelineError::StageNotFound {
                anchor: anchor.to_string(),
            })?;
        self.stages.insert(index, Arc::new(stage));
        Ok(self)
    }

    /// Like [`insert_before`](Self::insert_before), but appends when `anchor`
    /// is not registered.
    pub fn insert_before_or_append<M>(&mut self, anchor: &str, stage: M) -> &mut Self
    where
        M: Middleware<Req, Resp> + 'static,
    {
        match self.position(anchor) {
            Some(index) => self.stages.insert(index, Arc::new(stage)),
            None => {
                debug!(
                    anchor,
                    stage = stage.name(),
                    "pipeline: anchor stage missing, appending"
                );
                self.stages.push(Arc::new(stage));
            }
        }
        self
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn handle(&self, request: &Req) -> Result<Resp, BoxError> {
        Next {
            stages: &self.stages,
            endpoint: self.endpoint.as_ref(),
        }
        .run(request)
    }

    fn position(&self, anchor: &str) -> Option<usize> {
        self.stages.iter().position(|stage| stage.name() == anchor)
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
