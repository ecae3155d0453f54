//! Errors raised while creating a context, compiling stages, and running
//! the wrapper pipeline.

use shaderwrap_core::{StageOutcome, TypeError};

use crate::context::GlVersion;

/// A failure while turning stage sources into a linked program.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileError {
    /// A compute stage was requested alongside a non-compute stage, in
    /// either order.
    #[error("compute shaders cannot be compiled with other shader types")]
    MixedStageKind,

    /// One or more stages failed to compile. Linking was not attempted;
    /// every stage outcome gathered up to that point is carried along.
    #[error("one or more shader stages failed to compile:\n{}", stage_logs(.stages))]
    StageCompile { stages: Vec<StageOutcome> },

    /// Every stage compiled but the program did not link.
    #[error("shader program failed to link:\n{log}")]
    Link { log: String },
}

fn stage_logs(stages: &[StageOutcome]) -> String {
    stages
        .iter()
        .filter(|s| !s.succeeded)
        .map(|s| format!("[{}] {}", s.kind.name(), s.log.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A failure while bringing up the hidden-window OpenGL context.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContextError {
    #[error("failed to create event loop: {0}")]
    EventLoop(String),

    #[error(
        "OpenGL version is not high enough: expected version {requested} or greater, \
         got version {actual}"
    )]
    Version {
        requested: GlVersion,
        actual: GlVersion,
    },
}

/// Any failure between "stages are on disk" and "wrapper text exists".
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    UnsupportedType(#[from] TypeError),
}
