// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport seam between the interception pipeline and the network

use std::sync::Arc;

use async_trait::async_trait;

use super::{Request, Response};
use crate::error::Result;

/// Sends one fully prepared request
///
/// `ApiClient` only talks to the network through this trait, so tests can
/// script answers and observe client state while a request is in flight.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request. `Err` means no response was received.
    async fn send(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Result<Response> {
        (**self).send(request).await
    }
}
