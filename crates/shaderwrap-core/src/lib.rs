//! Core introspection-to-codegen pipeline for shaderwrap.
//!
//! This crate is deliberately free of any live OpenGL dependency (it uses the
//! [`gl`] crate only for its enum constants). It covers:
//!
//! - [`typemap`] — the mapping from native uniform-type tags to the closed
//!   logical type set, plus per-type wrapper code fragments.
//! - [`model`] — stage sources, uniform/attribute descriptors, generation
//!   options, and the assembled [`model::WrapperSpec`].
//! - [`emit`] — deterministic assembly of the generated wrapper's source
//!   text from a [`model::WrapperSpec`].
//!
//! Compiling, linking, and introspecting against a real GL context lives in
//! `shaderwrap-gl`; this crate only consumes the results.

pub mod emit;
pub mod error;
pub mod model;
pub mod typemap;

pub use emit::emit;
pub use error::TypeError;
pub use model::{
    ActiveAttribute, ActiveUniform, AttributeDescriptor, CompileOutcome, GenerationOptions,
    StageKind, StageOutcome, StageSource, UniformDescriptor, WrapperSpec,
};
pub use typemap::{draw_command, logical_type_of, tag_name, type_name, LogicalType, VecElem};
