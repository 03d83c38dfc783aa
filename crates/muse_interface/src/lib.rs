//! Trait definitions for Muse model backends.
//!
//! This crate defines the boundary between the flow layer and the hosted
//! generative model. The flow invoker depends only on these traits, so
//! tests can substitute deterministic stub drivers and production code can
//! plug in any provider adapter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageGeneration, ModelDriver};
