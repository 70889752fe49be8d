// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interception pipeline
//!
//! An explicit, ordered list of request stages followed by one response
//! classifier. Nothing is registered implicitly: the order stages are added
//! is the order they run.

mod classifier;
mod failure;
mod normalizer;
mod stage;

use std::sync::Arc;

use reqwest::StatusCode;

pub use classifier::{
    Classification, EnvelopeClassifier, ResponseClassifier, DEFAULT_BUSINESS_MESSAGE,
};
pub use failure::{TransportFailure, NETWORK_MESSAGE, TIMEOUT_MESSAGE};
pub use normalizer::{ApiVersionNormalizer, DEFAULT_API_VERSION};
pub use stage::{RequestLogger, RequestStage};

use crate::envelope::Envelope;
use crate::http::Request;

/// Ordered request stages plus a response classifier
#[derive(Clone)]
pub struct Pipeline {
    stages: Vec<Arc<dyn RequestStage>>,
    classifier: Arc<dyn ResponseClassifier>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard(DEFAULT_API_VERSION)
    }
}

impl Pipeline {
    /// Pipeline with no request stages
    pub fn new<C: ResponseClassifier + 'static>(classifier: C) -> Self {
        Self {
            stages: Vec::new(),
            classifier: Arc::new(classifier),
        }
    }

    /// Version normalizer, request logger and envelope classifier
    pub fn standard(api_version: &str) -> Self {
        Self::new(EnvelopeClassifier::default())
            .with_stage(ApiVersionNormalizer::new(api_version))
            .with_stage(RequestLogger::default())
    }

    /// Append a stage; it runs after every stage already present
    pub fn with_stage<S: RequestStage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Insert a stage at `index`
    pub fn insert_stage<S: RequestStage + 'static>(mut self, index: usize, stage: S) -> Self {
        let index = index.min(self.stages.len());
        self.stages.insert(index, Arc::new(stage));
        self
    }

    /// Names of the request stages in run order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run the request through every stage
    pub fn process_request(&self, request: Request) -> Request {
        self.stages
            .iter()
            .fold(request, |request, stage| stage.apply(request))
    }

    /// Classify a completed response
    pub fn classify(
        &self,
        request: &Request,
        status: StatusCode,
        envelope: Option<&Envelope>,
    ) -> Classification {
        self.classifier.classify(request, status, envelope)
    }
}
