//! End-to-end pipeline: compile, link, introspect, emit.

use shaderwrap_core::{emit, GenerationOptions, StageSource, WrapperSpec};
use tracing::{debug, info};

use crate::api::GlApi;
use crate::compile::compile;
use crate::error::PipelineError;

/// Turn stage sources into wrapper class text.
///
/// The linked program only lives long enough to be introspected; it is
/// released before any text is produced.
pub fn run<A: GlApi>(
    api: &mut A,
    options: GenerationOptions,
    stages: Vec<StageSource>,
) -> Result<String, PipelineError> {
    info!(stages = stages.len(), class = %options.class_name, "compiling shader program");
    let (mut linked, outcome) = compile(api, &stages)?;
    if !outcome.link_log.is_empty() {
        debug!(log = %outcome.link_log, "link log");
    }

    let (uniforms, attributes) = linked.introspect();
    debug!(
        uniforms = uniforms.len(),
        attributes = attributes.len(),
        "introspected linked program"
    );
    drop(linked);

    let spec = WrapperSpec::assemble(options, stages, uniforms, attributes)?;
    Ok(emit(&spec))
}
