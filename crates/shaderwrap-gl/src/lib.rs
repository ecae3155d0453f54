//! GL-facing half of shaderwrap: context creation, stage compilation,
//! program introspection, and the pipeline that feeds the core emitter.
//!
//! All raw GL calls go through the [`api::GlApi`] trait seam so the
//! compile/introspect orchestration can be exercised against a scripted
//! fake without a live context. The production implementation is
//! [`api::RawGl`], which loads function pointers once via `gl_loader` and
//! assumes the caller has made a context current (see [`context`]).

pub mod api;
pub mod compile;
pub mod context;
pub mod error;
pub mod introspect;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{GlApi, RawGl};
pub use compile::{compile, LinkedProgram};
pub use context::{GlContext, GlVersion, MIN_CONTEXT_VERSION};
pub use error::{CompileError, ContextError, PipelineError};
