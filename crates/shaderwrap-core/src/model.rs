//! Data model carried through the pipeline: stage sources, compile
//! outcomes, introspected descriptors, and the assembled wrapper spec.
//!
//! Uniform and attribute ordering is introspection order everywhere —
//! captured once, never re-sorted — so the emitted text is reproducible for
//! a given linked program.

use std::path::PathBuf;

use gl::types::GLenum;

use crate::error::TypeError;
use crate::typemap::{logical_type_of, LogicalType};

/// One shader compilation unit of a specific kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Vertex,
    Fragment,
    Geometry,
    TessEval,
    TessControl,
    Compute,
}

impl StageKind {
    /// Stage name as used for generated members (`VertexSource`, local
    /// handle variables).
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "Vertex",
            Self::Fragment => "Fragment",
            Self::Geometry => "Geometry",
            Self::TessEval => "TessEval",
            Self::TessControl => "TessControl",
            Self::Compute => "Compute",
        }
    }

    /// The OpenTK `ShaderType` member referenced by generated code.
    pub fn gl_type_name(self) -> &'static str {
        match self {
            Self::Vertex => "VertexShader",
            Self::Fragment => "FragmentShader",
            Self::Geometry => "GeometryShader",
            Self::TessEval => "TessEvaluationShader",
            Self::TessControl => "TessControlShader",
            Self::Compute => "ComputeShader",
        }
    }
}

/// A stage source text captured from disk, immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSource {
    pub path: PathBuf,
    pub kind: StageKind,
    pub text: String,
}

/// Per-stage compile result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub kind: StageKind,
    pub succeeded: bool,
    /// Native diagnostic text with the stage's source path substituted for
    /// the driver's `0(` line prefix.
    pub log: String,
}

/// Program-level compile result: every stage outcome plus link status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutcome {
    pub stages: Vec<StageOutcome>,
    pub linked: bool,
    pub link_log: String,
}

/// An active uniform as enumerated from the linked program, not yet
/// classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveUniform {
    pub name: String,
    pub tag: GLenum,
}

/// An active attribute as enumerated from the linked program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAttribute {
    pub name: String,
    pub tag: GLenum,
}

/// A uniform with its resolved logical type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformDescriptor {
    pub name: String,
    pub tag: GLenum,
    pub logical: LogicalType,
}

/// An attribute slot. Attributes are resolved to a location but not
/// independently typed at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub name: String,
    pub tag: GLenum,
}

/// Options controlling the generated wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub namespace: String,
    pub class_name: String,
    /// When set, the wrapper re-reads each stage from its original path on
    /// every compile instead of embedding the source text.
    pub recompile_from_file: bool,
    /// Initial value of the wrapper's per-instance `TransposeMatrix` flag.
    pub default_transpose_matrix: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            namespace: "Shaders".to_owned(),
            class_name: "__Shader".to_owned(),
            recompile_from_file: false,
            default_transpose_matrix: false,
        }
    }
}

/// The assembled emitter input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperSpec {
    pub options: GenerationOptions,
    pub stages: Vec<StageSource>,
    pub uniforms: Vec<UniformDescriptor>,
    pub attributes: Vec<AttributeDescriptor>,
}

impl WrapperSpec {
    /// Resolve every introspected uniform to its logical type and assemble
    /// the emitter input, preserving introspection order.
    ///
    /// This is the only post-link step that can fail: an image or
    /// atomic-counter uniform yields [`TypeError::UnsupportedUniformType`]
    /// and no wrapper text is produced.
    pub fn assemble(
        options: GenerationOptions,
        stages: Vec<StageSource>,
        uniforms: Vec<ActiveUniform>,
        attributes: Vec<ActiveAttribute>,
    ) -> Result<Self, TypeError> {
        let uniforms = uniforms
            .into_iter()
            .map(|u| {
                Ok(UniformDescriptor {
                    logical: logical_type_of(u.tag)?,
                    name: u.name,
                    tag: u.tag,
                })
            })
            .collect::<Result<Vec<_>, TypeError>>()?;

        let attributes = attributes
            .into_iter()
            .map(|a| AttributeDescriptor {
                name: a.name,
                tag: a.tag,
            })
            .collect();

        Ok(Self {
            options,
            stages,
            uniforms,
            attributes,
        })
    }
}
