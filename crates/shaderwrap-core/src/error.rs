//! Error type for the core mapping and emission steps.

use gl::types::GLenum;
use thiserror::Error;

/// Failure to classify a native uniform-type tag.
///
/// Image-unit and atomic-counter uniforms have no wrapper representation;
/// encountering one is a hard failure of the whole emission, not a default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("uniform type {name} (tag 0x{tag:04X}) is not supported at this time")]
    UnsupportedUniformType { tag: GLenum, name: &'static str },
}

impl TypeError {
    pub(crate) fn unsupported(tag: GLenum) -> Self {
        Self::UnsupportedUniformType {
            tag,
            name: crate::typemap::tag_name(tag),
        }
    }

    /// The offending native tag.
    pub fn tag(&self) -> GLenum {
        match self {
            Self::UnsupportedUniformType { tag, .. } => *tag,
        }
    }
}
