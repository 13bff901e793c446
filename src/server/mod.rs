//! gRPC surface over the [`Catalog`].
//!
//! Handlers never fail the call for domain errors: they answer with
//! `success = false` and a structured error JSON in `error`, and keep
//! `Status` for transport-level problems.
pub mod convert;
pub mod error_mapping;
pub mod handlers;
pub mod helpers;
pub mod structured_error;
mod trait_impl;

use crate::catalog::Catalog;
use std::sync::Arc;

pub mod proto {
    #![allow(clippy::pedantic)]
    #![allow(clippy::all)]
    tonic::include_proto!("syllabus");
}

pub struct SyllabusDaemonService {
    catalog: Arc<Catalog>,
}

impl SyllabusDaemonService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
