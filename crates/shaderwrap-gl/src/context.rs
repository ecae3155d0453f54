//! Hidden-window OpenGL context bring-up and version checks.

use std::ffi::CStr;
use std::fmt;

use tracing::{debug, info};

use crate::api;
use crate::error::ContextError;

/// An OpenGL `major.minor` version pair, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse `"4.6"` or `"4"` (minor defaults to 0). Components past the
    /// minor, as in `"4.6.0 NVIDIA 550.54"` version strings stripped to
    /// their first token, are ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('.');
        let major = parts.next()?.trim().parse().ok()?;
        let minor = match parts.next() {
            Some(minor) => minor.trim().parse().ok()?,
            None => 0,
        };
        Some(Self { major, minor })
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Program introspection needs GL 2.0; requests below this are clamped up
/// to a comfortable floor.
pub const MIN_CONTEXT_VERSION: GlVersion = GlVersion::new(3, 0);

/// A live OpenGL context behind an invisible window.
///
/// The context is current on the creating thread for the lifetime of this
/// value. Field order pins drop order: the display goes before the window,
/// the window before its event loop.
pub struct GlContext {
    version: GlVersion,
    _display: glium::Display<glium::glutin::surface::WindowSurface>,
    _window: glium::winit::window::Window,
    _event_loop: glium::winit::event_loop::EventLoop<()>,
}

impl GlContext {
    /// Bring up a context and verify it meets `requested`.
    ///
    /// The window is created hidden; no event loop is ever run. On
    /// success the GL function pointers are loaded and the context is
    /// current on this thread.
    pub fn create(requested: GlVersion) -> Result<Self, ContextError> {
        let requested = requested.max(MIN_CONTEXT_VERSION);

        let event_loop = glium::winit::event_loop::EventLoop::builder()
            .build()
            .map_err(|e| ContextError::EventLoop(e.to_string()))?;
        let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
            .with_title("shaderwrap")
            .with_inner_size(1080, 720)
            .build(&event_loop);
        window.set_visible(false);

        api::ensure_loaded();

        let actual = read_context_version();
        info!(%requested, %actual, "created OpenGL context");
        if actual < requested {
            return Err(ContextError::Version { requested, actual });
        }

        Ok(Self {
            version: actual,
            _display: display,
            _window: window,
            _event_loop: event_loop,
        })
    }

    pub fn version(&self) -> GlVersion {
        self.version
    }
}

/// Read the current context's version, preferring the `GL_VERSION` string
/// and falling back to the GL 3.0 integer queries.
fn read_context_version() -> GlVersion {
    let raw = unsafe { gl::GetString(gl::VERSION) };
    if !raw.is_null() {
        let text = unsafe { CStr::from_ptr(raw.cast()) }.to_string_lossy();
        let token = text.split_whitespace().next().unwrap_or("");
        if let Some(version) = GlVersion::parse(token) {
            return version;
        }
        debug!(%text, "unparseable GL_VERSION string, falling back to integer queries");
    }

    let mut major: gl::types::GLint = 0;
    let mut minor: gl::types::GLint = 0;
    unsafe {
        gl::GetIntegerv(gl::MAJOR_VERSION, &mut major);
        gl::GetIntegerv(gl::MINOR_VERSION, &mut minor);
    }
    GlVersion::new(major.max(0) as u32, minor.max(0) as u32)
}
