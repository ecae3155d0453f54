//! Stage compilation and program linking.
//!
//! Every stage is compiled and its info log captured even when an earlier
//! stage has already failed, so the caller sees all diagnostics at once.
//! Linking is only attempted once every stage compiled. Stage shader
//! handles never outlive this function; the program handle is owned by the
//! returned [`LinkedProgram`] guard.

use gl::types::GLuint;
use shaderwrap_core::{CompileOutcome, StageKind, StageOutcome, StageSource};
use tracing::{debug, warn};

use crate::api::GlApi;
use crate::error::CompileError;

/// A successfully linked program handle, deleted on drop.
pub struct LinkedProgram<'a, A: GlApi> {
    pub(crate) api: &'a mut A,
    pub(crate) program: GLuint,
}

impl<A: GlApi> std::fmt::Debug for LinkedProgram<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedProgram")
            .field("program", &self.program)
            .finish()
    }
}

impl<A: GlApi> LinkedProgram<'_, A> {
    pub fn program(&self) -> GLuint {
        self.program
    }
}

impl<A: GlApi> Drop for LinkedProgram<'_, A> {
    fn drop(&mut self) {
        self.api.delete_program(self.program);
    }
}

/// Compile every stage against a fresh program object and link.
///
/// A compute stage mixed with any other kind fails before that stage is
/// compiled. A stage compile failure still lets the remaining stages
/// compile (their logs are wanted) but skips the link. Driver logs have
/// their `0(` line prefixes rewritten to the stage's source path.
pub fn compile<'a, A: GlApi>(
    api: &'a mut A,
    stages: &[StageSource],
) -> Result<(LinkedProgram<'a, A>, CompileOutcome), CompileError> {
    let program = api.create_program();
    let mut outcome = CompileOutcome::default();
    let mut handles: Vec<GLuint> = Vec::with_capacity(stages.len());
    let mut seen_compute = false;
    let mut seen_other = false;

    for stage in stages {
        let is_compute = stage.kind == StageKind::Compute;
        if (is_compute && seen_other) || (!is_compute && seen_compute) {
            release_all(api, program, &handles);
            return Err(CompileError::MixedStageKind);
        }
        seen_compute |= is_compute;
        seen_other |= !is_compute;

        let shader = api.create_shader(stage.kind);
        api.shader_source(shader, &stage.text);
        let succeeded = api.compile_shader(shader);
        api.attach_shader(program, shader);
        handles.push(shader);

        let raw_log = api.shader_info_log(shader);
        let log = raw_log.replace("0(", &format!("{}(", stage.path.display()));
        if succeeded {
            debug!(stage = stage.kind.name(), path = %stage.path.display(), "stage compiled");
        } else {
            warn!(stage = stage.kind.name(), path = %stage.path.display(), %log, "stage failed to compile");
        }
        outcome.stages.push(StageOutcome {
            kind: stage.kind,
            succeeded,
            log,
        });
    }

    if outcome.stages.iter().any(|s| !s.succeeded) {
        release_all(api, program, &handles);
        return Err(CompileError::StageCompile {
            stages: outcome.stages,
        });
    }

    outcome.linked = api.link_program(program);
    outcome.link_log = api.program_info_log(program);
    for &shader in &handles {
        api.detach_shader(program, shader);
        api.delete_shader(shader);
    }

    if !outcome.linked {
        let log = outcome.link_log.clone();
        api.delete_program(program);
        return Err(CompileError::Link { log });
    }

    Ok((LinkedProgram { api, program }, outcome))
}

fn release_all<A: GlApi>(api: &mut A, program: GLuint, handles: &[GLuint]) {
    for &shader in handles {
        api.detach_shader(program, shader);
        api.delete_shader(shader);
    }
    api.delete_program(program);
}
