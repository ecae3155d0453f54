//! Scripted [`GlApi`] fake used by the compile/introspect/pipeline tests.

use std::collections::{HashMap, HashSet};

use gl::types::{GLenum, GLuint};
use shaderwrap_core::StageKind;

use crate::api::GlApi;

/// In-memory GL double. Handles are allocated from a counter; shader and
/// program lifetimes are tracked so tests can assert nothing leaked.
#[derive(Default)]
pub(crate) struct FakeGl {
    next: GLuint,
    /// Stage kinds whose compilation is scripted to fail.
    pub fail: HashSet<StageKind>,
    /// Per-stage info log text returned after compilation.
    pub logs: HashMap<StageKind, String>,
    pub link_ok: bool,
    pub link_log: String,
    pub uniforms: Vec<(GLenum, String)>,
    pub attributes: Vec<(GLenum, String)>,

    programs: HashSet<GLuint>,
    shaders: HashSet<GLuint>,
    attached: HashMap<GLuint, Vec<GLuint>>,
    kinds: HashMap<GLuint, StageKind>,
    /// Stage kinds in the order glCompileShader was invoked on them.
    pub compiled: Vec<StageKind>,
    pub link_attempted: bool,
}

impl FakeGl {
    /// A fake whose link step succeeds.
    pub fn linking() -> Self {
        Self {
            link_ok: true,
            ..Self::default()
        }
    }

    /// True while any shader or program handle remains undeleted.
    pub fn leaked(&self) -> bool {
        !self.programs.is_empty() || !self.shaders.is_empty()
    }
}

impl GlApi for FakeGl {
    fn create_program(&mut self) -> GLuint {
        self.next += 1;
        self.programs.insert(self.next);
        self.attached.insert(self.next, Vec::new());
        self.next
    }

    fn delete_program(&mut self, program: GLuint) {
        assert!(self.programs.remove(&program), "double program delete");
    }

    fn create_shader(&mut self, kind: StageKind) -> GLuint {
        self.next += 1;
        self.shaders.insert(self.next);
        self.kinds.insert(self.next, kind);
        self.next
    }

    fn shader_source(&mut self, shader: GLuint, _text: &str) {
        assert!(self.shaders.contains(&shader));
    }

    fn compile_shader(&mut self, shader: GLuint) -> bool {
        let kind = self.kinds[&shader];
        self.compiled.push(kind);
        !self.fail.contains(&kind)
    }

    fn shader_info_log(&mut self, shader: GLuint) -> String {
        let kind = self.kinds[&shader];
        self.logs.get(&kind).cloned().unwrap_or_default()
    }

    fn attach_shader(&mut self, program: GLuint, shader: GLuint) {
        self.attached
            .get_mut(&program)
            .expect("attach to live program")
            .push(shader);
    }

    fn detach_shader(&mut self, program: GLuint, shader: GLuint) {
        let attached = self.attached.get_mut(&program).expect("detach from live program");
        let pos = attached
            .iter()
            .position(|&s| s == shader)
            .expect("detach of unattached shader");
        attached.remove(pos);
    }

    fn delete_shader(&mut self, shader: GLuint) {
        assert!(self.shaders.remove(&shader), "double shader delete");
    }

    fn link_program(&mut self, program: GLuint) -> bool {
        assert!(self.programs.contains(&program));
        self.link_attempted = true;
        self.link_ok
    }

    fn program_info_log(&mut self, _program: GLuint) -> String {
        self.link_log.clone()
    }

    fn active_attribute_count(&mut self, _program: GLuint) -> i32 {
        self.attributes.len() as i32
    }

    fn active_attribute(&mut self, _program: GLuint, index: u32) -> (GLenum, String) {
        self.attributes[index as usize].clone()
    }

    fn active_uniform_count(&mut self, _program: GLuint) -> i32 {
        self.uniforms.len() as i32
    }

    fn active_uniform(&mut self, _program: GLuint, index: u32) -> (GLenum, String) {
        self.uniforms[index as usize].clone()
    }
}
