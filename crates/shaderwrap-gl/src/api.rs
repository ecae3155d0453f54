//! Trait seam over the raw GL calls the compiler and introspector need,
//! plus the production implementation on top of the `gl` crate.

use std::sync::Once;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use shaderwrap_core::StageKind;

/// GL bounds active-variable names at 512 bytes here; longer names arrive
/// truncated from the driver and are surfaced as-is.
pub const MAX_NAME_LEN: usize = 512;

/// The subset of GL used by stage compilation and program introspection.
///
/// Status queries are folded into the calls that produce them
/// (`compile_shader`, `link_program`) since no caller ever wants one
/// without the other.
pub trait GlApi {
    fn create_program(&mut self) -> GLuint;
    fn delete_program(&mut self, program: GLuint);

    fn create_shader(&mut self, kind: StageKind) -> GLuint;
    fn shader_source(&mut self, shader: GLuint, text: &str);
    /// Compile and report whether compilation succeeded.
    fn compile_shader(&mut self, shader: GLuint) -> bool;
    fn shader_info_log(&mut self, shader: GLuint) -> String;
    fn attach_shader(&mut self, program: GLuint, shader: GLuint);
    fn detach_shader(&mut self, program: GLuint, shader: GLuint);
    fn delete_shader(&mut self, shader: GLuint);

    /// Link and report whether linking succeeded.
    fn link_program(&mut self, program: GLuint) -> bool;
    fn program_info_log(&mut self, program: GLuint) -> String;

    fn active_attribute_count(&mut self, program: GLuint) -> i32;
    fn active_attribute(&mut self, program: GLuint, index: u32) -> (GLenum, String);
    fn active_uniform_count(&mut self, program: GLuint) -> i32;
    fn active_uniform(&mut self, program: GLuint, index: u32) -> (GLenum, String);
}

static GL_INIT_ONCE: Once = Once::new();

/// Load GL function pointers exactly once via `gl_loader`.
pub(crate) fn ensure_loaded() {
    GL_INIT_ONCE.call_once(|| {
        gl_loader::init_gl();
        gl::load_with(|s| gl_loader::get_proc_address(s).cast());
    });
}

/// Production [`GlApi`] over the `gl` crate.
///
/// This assumes an OpenGL context has already been made current on the
/// calling thread (see [`crate::context::GlContext`]). Using it without a
/// current context is undefined behavior.
pub struct RawGl {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl RawGl {
    pub fn new() -> Self {
        ensure_loaded();
        Self {
            _not_send: std::marker::PhantomData,
        }
    }
}

impl Default for RawGl {
    fn default() -> Self {
        Self::new()
    }
}

fn stage_gl_enum(kind: StageKind) -> GLenum {
    match kind {
        StageKind::Vertex => gl::VERTEX_SHADER,
        StageKind::Fragment => gl::FRAGMENT_SHADER,
        StageKind::Geometry => gl::GEOMETRY_SHADER,
        StageKind::TessEval => gl::TESS_EVALUATION_SHADER,
        StageKind::TessControl => gl::TESS_CONTROL_SHADER,
        StageKind::Compute => gl::COMPUTE_SHADER,
    }
}

impl GlApi for RawGl {
    fn create_program(&mut self) -> GLuint {
        unsafe { gl::CreateProgram() }
    }

    fn delete_program(&mut self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn create_shader(&mut self, kind: StageKind) -> GLuint {
        unsafe { gl::CreateShader(stage_gl_enum(kind)) }
    }

    fn shader_source(&mut self, shader: GLuint, text: &str) {
        let ptr = text.as_ptr() as *const GLchar;
        let len = text.len() as GLint;
        unsafe { gl::ShaderSource(shader, 1, &ptr, &len) }
    }

    fn compile_shader(&mut self, shader: GLuint) -> bool {
        let mut status: GLint = 0;
        unsafe {
            gl::CompileShader(shader);
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        }
        status != 0
    }

    fn shader_info_log(&mut self, shader: GLuint) -> String {
        let mut len: GLint = 0;
        unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len) };
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u8; len as usize];
        let mut written: GLsizei = 0;
        unsafe {
            gl::GetShaderInfoLog(shader, len, &mut written, buf.as_mut_ptr() as *mut GLchar)
        };
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn attach_shader(&mut self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn detach_shader(&mut self, program: GLuint, shader: GLuint) {
        unsafe { gl::DetachShader(program, shader) }
    }

    fn delete_shader(&mut self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) }
    }

    fn link_program(&mut self, program: GLuint) -> bool {
        let mut status: GLint = 0;
        unsafe {
            gl::LinkProgram(program);
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        }
        status != 0
    }

    fn program_info_log(&mut self, program: GLuint) -> String {
        let mut len: GLint = 0;
        unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len) };
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u8; len as usize];
        let mut written: GLsizei = 0;
        unsafe {
            gl::GetProgramInfoLog(program, len, &mut written, buf.as_mut_ptr() as *mut GLchar)
        };
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn active_attribute_count(&mut self, program: GLuint) -> i32 {
        let mut count: GLint = 0;
        unsafe { gl::GetProgramiv(program, gl::ACTIVE_ATTRIBUTES, &mut count) };
        count
    }

    fn active_attribute(&mut self, program: GLuint, index: u32) -> (GLenum, String) {
        let mut name = [0u8; MAX_NAME_LEN];
        let mut written: GLsizei = 0;
        let mut size: GLint = 0;
        let mut tag: GLenum = 0;
        unsafe {
            gl::GetActiveAttrib(
                program,
                index,
                MAX_NAME_LEN as GLsizei,
                &mut written,
                &mut size,
                &mut tag,
                name.as_mut_ptr() as *mut GLchar,
            );
        }
        let end = written.clamp(0, MAX_NAME_LEN as i32) as usize;
        (tag, String::from_utf8_lossy(&name[..end]).into_owned())
    }

    fn active_uniform_count(&mut self, program: GLuint) -> i32 {
        let mut count: GLint = 0;
        unsafe { gl::GetProgramiv(program, gl::ACTIVE_UNIFORMS, &mut count) };
        count
    }

    fn active_uniform(&mut self, program: GLuint, index: u32) -> (GLenum, String) {
        let mut name = [0u8; MAX_NAME_LEN];
        let mut written: GLsizei = 0;
        let mut size: GLint = 0;
        let mut tag: GLenum = 0;
        unsafe {
            gl::GetActiveUniform(
                program,
                index,
                MAX_NAME_LEN as GLsizei,
                &mut written,
                &mut size,
                &mut tag,
                name.as_mut_ptr() as *mut GLchar,
            );
        }
        let end = written.clamp(0, MAX_NAME_LEN as i32) as usize;
        (tag, String::from_utf8_lossy(&name[..end]).into_owned())
    }
}
