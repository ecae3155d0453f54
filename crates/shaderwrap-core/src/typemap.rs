//! Mapping from native uniform-type tags to the logical type set, and from
//! logical types to wrapper type names and draw-time set calls.
//!
//! The mapping is table-driven: const slices of `(tag, ...)` pairs folded
//! into lazily-built hash maps, so totality over the supported tag set can
//! be tested in isolation and new tags are a one-line addition.
//!
//! Every sampler variant collapses to [`LogicalType::Texture`] — the
//! draw-time binding protocol is identical for all of them (bind to a
//! sequential texture unit), so the sampler kind is not distinguished here.
//! Image-unit and atomic-counter tags map to no logical type at all.

use std::collections::HashMap;

use gl::types::GLenum;
use once_cell::sync::Lazy;

use crate::error::TypeError;

/// Element type of a vector uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VecElem {
    Float,
    Double,
}

/// The closed logical classification of uniform kinds, independent of the
/// native enumeration detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Bool,
    Int,
    UInt,
    Float,
    Double,
    Vector { dim: u8, elem: VecElem },
    Matrix { rows: u8, cols: u8 },
    Texture,
}

// ---------------------------------------------------------------------------
// Native tag tables
// ---------------------------------------------------------------------------

const SCALARS: &[(GLenum, LogicalType)] = &[
    (gl::BOOL, LogicalType::Bool),
    (gl::INT, LogicalType::Int),
    (gl::UNSIGNED_INT, LogicalType::UInt),
    (gl::FLOAT, LogicalType::Float),
    (gl::DOUBLE, LogicalType::Double),
];

const VECTORS: &[(GLenum, u8, VecElem)] = &[
    (gl::FLOAT_VEC2, 2, VecElem::Float),
    (gl::FLOAT_VEC3, 3, VecElem::Float),
    (gl::FLOAT_VEC4, 4, VecElem::Float),
    (gl::DOUBLE_VEC2, 2, VecElem::Double),
    (gl::DOUBLE_VEC3, 3, VecElem::Double),
    (gl::DOUBLE_VEC4, 4, VecElem::Double),
];

// Non-square matrices keep their distinct row/column dimensions.
const MATRICES: &[(GLenum, u8, u8)] = &[
    (gl::FLOAT_MAT2, 2, 2),
    (gl::FLOAT_MAT2x3, 2, 3),
    (gl::FLOAT_MAT2x4, 2, 4),
    (gl::FLOAT_MAT3, 3, 3),
    (gl::FLOAT_MAT3x2, 3, 2),
    (gl::FLOAT_MAT3x4, 3, 4),
    (gl::FLOAT_MAT4, 4, 4),
    (gl::FLOAT_MAT4x2, 4, 2),
    (gl::FLOAT_MAT4x3, 4, 3),
];

/// Every float/int/uint sampler across all dimensionality, array, shadow,
/// rect, buffer, and multisample variants.
const SAMPLERS: &[GLenum] = &[
    gl::SAMPLER_1D,
    gl::SAMPLER_1D_ARRAY,
    gl::SAMPLER_1D_ARRAY_SHADOW,
    gl::SAMPLER_1D_SHADOW,
    gl::SAMPLER_2D,
    gl::SAMPLER_2D_ARRAY,
    gl::SAMPLER_2D_ARRAY_SHADOW,
    gl::SAMPLER_2D_MULTISAMPLE,
    gl::SAMPLER_2D_MULTISAMPLE_ARRAY,
    gl::SAMPLER_2D_RECT,
    gl::SAMPLER_2D_RECT_SHADOW,
    gl::SAMPLER_2D_SHADOW,
    gl::SAMPLER_3D,
    gl::SAMPLER_BUFFER,
    gl::SAMPLER_CUBE,
    gl::SAMPLER_CUBE_MAP_ARRAY,
    gl::SAMPLER_CUBE_MAP_ARRAY_SHADOW,
    gl::SAMPLER_CUBE_SHADOW,
    gl::INT_SAMPLER_1D,
    gl::INT_SAMPLER_1D_ARRAY,
    gl::INT_SAMPLER_2D,
    gl::INT_SAMPLER_2D_ARRAY,
    gl::INT_SAMPLER_2D_MULTISAMPLE,
    gl::INT_SAMPLER_2D_MULTISAMPLE_ARRAY,
    gl::INT_SAMPLER_2D_RECT,
    gl::INT_SAMPLER_3D,
    gl::INT_SAMPLER_BUFFER,
    gl::INT_SAMPLER_CUBE,
    gl::INT_SAMPLER_CUBE_MAP_ARRAY,
    gl::UNSIGNED_INT_SAMPLER_1D,
    gl::UNSIGNED_INT_SAMPLER_1D_ARRAY,
    gl::UNSIGNED_INT_SAMPLER_2D,
    gl::UNSIGNED_INT_SAMPLER_2D_ARRAY,
    gl::UNSIGNED_INT_SAMPLER_2D_MULTISAMPLE,
    gl::UNSIGNED_INT_SAMPLER_2D_MULTISAMPLE_ARRAY,
    gl::UNSIGNED_INT_SAMPLER_2D_RECT,
    gl::UNSIGNED_INT_SAMPLER_3D,
    gl::UNSIGNED_INT_SAMPLER_BUFFER,
    gl::UNSIGNED_INT_SAMPLER_CUBE,
    gl::UNSIGNED_INT_SAMPLER_CUBE_MAP_ARRAY,
];

/// Image-unit tags. Explicitly unsupported: binding protocol is an image
/// unit, not a texture unit, and the wrapper does not model it.
const IMAGES: &[GLenum] = &[
    gl::IMAGE_1D,
    gl::IMAGE_1D_ARRAY,
    gl::IMAGE_2D,
    gl::IMAGE_2D_ARRAY,
    gl::IMAGE_2D_MULTISAMPLE,
    gl::IMAGE_2D_MULTISAMPLE_ARRAY,
    gl::IMAGE_2D_RECT,
    gl::IMAGE_3D,
    gl::IMAGE_BUFFER,
    gl::IMAGE_CUBE,
    gl::IMAGE_CUBE_MAP_ARRAY,
    gl::INT_IMAGE_1D,
    gl::INT_IMAGE_1D_ARRAY,
    gl::INT_IMAGE_2D,
    gl::INT_IMAGE_2D_ARRAY,
    gl::INT_IMAGE_2D_MULTISAMPLE,
    gl::INT_IMAGE_2D_MULTISAMPLE_ARRAY,
    gl::INT_IMAGE_2D_RECT,
    gl::INT_IMAGE_3D,
    gl::INT_IMAGE_BUFFER,
    gl::INT_IMAGE_CUBE,
    gl::INT_IMAGE_CUBE_MAP_ARRAY,
    gl::UNSIGNED_INT_IMAGE_1D,
    gl::UNSIGNED_INT_IMAGE_1D_ARRAY,
    gl::UNSIGNED_INT_IMAGE_2D,
    gl::UNSIGNED_INT_IMAGE_2D_ARRAY,
    gl::UNSIGNED_INT_IMAGE_2D_MULTISAMPLE,
    gl::UNSIGNED_INT_IMAGE_2D_MULTISAMPLE_ARRAY,
    gl::UNSIGNED_INT_IMAGE_2D_RECT,
    gl::UNSIGNED_INT_IMAGE_3D,
    gl::UNSIGNED_INT_IMAGE_BUFFER,
    gl::UNSIGNED_INT_IMAGE_CUBE,
    gl::UNSIGNED_INT_IMAGE_CUBE_MAP_ARRAY,
];

const ATOMIC_COUNTERS: &[GLenum] = &[gl::UNSIGNED_INT_ATOMIC_COUNTER];

static LOGICAL_TYPES: Lazy<HashMap<GLenum, LogicalType>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for &(tag, ty) in SCALARS {
        map.insert(tag, ty);
    }
    for &(tag, dim, elem) in VECTORS {
        map.insert(tag, LogicalType::Vector { dim, elem });
    }
    for &(tag, rows, cols) in MATRICES {
        map.insert(tag, LogicalType::Matrix { rows, cols });
    }
    for &tag in SAMPLERS {
        map.insert(tag, LogicalType::Texture);
    }
    map
});

/// Classify a native uniform-type tag.
///
/// Total over every scalar, float/double vector, float matrix, and sampler
/// tag; fails with [`TypeError::UnsupportedUniformType`] for image-unit and
/// atomic-counter tags as well as any tag outside the table (bool/int/uint
/// vectors and double matrices have no wrapper representation either).
pub fn logical_type_of(tag: GLenum) -> Result<LogicalType, TypeError> {
    LOGICAL_TYPES
        .get(&tag)
        .copied()
        .ok_or_else(|| TypeError::unsupported(tag))
}

// ---------------------------------------------------------------------------
// Diagnostic tag names
// ---------------------------------------------------------------------------

/// Human-readable names for every tag the tool knows about, supported or
/// not, so diagnostics can name the offending type.
const TAG_NAMES: &[(GLenum, &str)] = &[
    (gl::BOOL, "Bool"),
    (gl::INT, "Int"),
    (gl::UNSIGNED_INT, "UnsignedInt"),
    (gl::FLOAT, "Float"),
    (gl::DOUBLE, "Double"),
    (gl::BOOL_VEC2, "BoolVec2"),
    (gl::BOOL_VEC3, "BoolVec3"),
    (gl::BOOL_VEC4, "BoolVec4"),
    (gl::INT_VEC2, "IntVec2"),
    (gl::INT_VEC3, "IntVec3"),
    (gl::INT_VEC4, "IntVec4"),
    (gl::UNSIGNED_INT_VEC2, "UnsignedIntVec2"),
    (gl::UNSIGNED_INT_VEC3, "UnsignedIntVec3"),
    (gl::UNSIGNED_INT_VEC4, "UnsignedIntVec4"),
    (gl::FLOAT_VEC2, "FloatVec2"),
    (gl::FLOAT_VEC3, "FloatVec3"),
    (gl::FLOAT_VEC4, "FloatVec4"),
    (gl::DOUBLE_VEC2, "DoubleVec2"),
    (gl::DOUBLE_VEC3, "DoubleVec3"),
    (gl::DOUBLE_VEC4, "DoubleVec4"),
    (gl::FLOAT_MAT2, "FloatMat2"),
    (gl::FLOAT_MAT2x3, "FloatMat2x3"),
    (gl::FLOAT_MAT2x4, "FloatMat2x4"),
    (gl::FLOAT_MAT3, "FloatMat3"),
    (gl::FLOAT_MAT3x2, "FloatMat3x2"),
    (gl::FLOAT_MAT3x4, "FloatMat3x4"),
    (gl::FLOAT_MAT4, "FloatMat4"),
    (gl::FLOAT_MAT4x2, "FloatMat4x2"),
    (gl::FLOAT_MAT4x3, "FloatMat4x3"),
    (gl::DOUBLE_MAT2, "DoubleMat2"),
    (gl::DOUBLE_MAT2x3, "DoubleMat2x3"),
    (gl::DOUBLE_MAT2x4, "DoubleMat2x4"),
    (gl::DOUBLE_MAT3, "DoubleMat3"),
    (gl::DOUBLE_MAT3x2, "DoubleMat3x2"),
    (gl::DOUBLE_MAT3x4, "DoubleMat3x4"),
    (gl::DOUBLE_MAT4, "DoubleMat4"),
    (gl::DOUBLE_MAT4x2, "DoubleMat4x2"),
    (gl::DOUBLE_MAT4x3, "DoubleMat4x3"),
    (gl::SAMPLER_1D, "Sampler1D"),
    (gl::SAMPLER_1D_ARRAY, "Sampler1DArray"),
    (gl::SAMPLER_1D_ARRAY_SHADOW, "Sampler1DArrayShadow"),
    (gl::SAMPLER_1D_SHADOW, "Sampler1DShadow"),
    (gl::SAMPLER_2D, "Sampler2D"),
    (gl::SAMPLER_2D_ARRAY, "Sampler2DArray"),
    (gl::SAMPLER_2D_ARRAY_SHADOW, "Sampler2DArrayShadow"),
    (gl::SAMPLER_2D_MULTISAMPLE, "Sampler2DMultisample"),
    (gl::SAMPLER_2D_MULTISAMPLE_ARRAY, "Sampler2DMultisampleArray"),
    (gl::SAMPLER_2D_RECT, "Sampler2DRect"),
    (gl::SAMPLER_2D_RECT_SHADOW, "Sampler2DRectShadow"),
    (gl::SAMPLER_2D_SHADOW, "Sampler2DShadow"),
    (gl::SAMPLER_3D, "Sampler3D"),
    (gl::SAMPLER_BUFFER, "SamplerBuffer"),
    (gl::SAMPLER_CUBE, "SamplerCube"),
    (gl::SAMPLER_CUBE_MAP_ARRAY, "SamplerCubeMapArray"),
    (gl::SAMPLER_CUBE_MAP_ARRAY_SHADOW, "SamplerCubeMapArrayShadow"),
    (gl::SAMPLER_CUBE_SHADOW, "SamplerCubeShadow"),
    (gl::INT_SAMPLER_1D, "IntSampler1D"),
    (gl::INT_SAMPLER_1D_ARRAY, "IntSampler1DArray"),
    (gl::INT_SAMPLER_2D, "IntSampler2D"),
    (gl::INT_SAMPLER_2D_ARRAY, "IntSampler2DArray"),
    (gl::INT_SAMPLER_2D_MULTISAMPLE, "IntSampler2DMultisample"),
    (
        gl::INT_SAMPLER_2D_MULTISAMPLE_ARRAY,
        "IntSampler2DMultisampleArray",
    ),
    (gl::INT_SAMPLER_2D_RECT, "IntSampler2DRect"),
    (gl::INT_SAMPLER_3D, "IntSampler3D"),
    (gl::INT_SAMPLER_BUFFER, "IntSamplerBuffer"),
    (gl::INT_SAMPLER_CUBE, "IntSamplerCube"),
    (gl::INT_SAMPLER_CUBE_MAP_ARRAY, "IntSamplerCubeMapArray"),
    (gl::UNSIGNED_INT_SAMPLER_1D, "UnsignedIntSampler1D"),
    (gl::UNSIGNED_INT_SAMPLER_1D_ARRAY, "UnsignedIntSampler1DArray"),
    (gl::UNSIGNED_INT_SAMPLER_2D, "UnsignedIntSampler2D"),
    (gl::UNSIGNED_INT_SAMPLER_2D_ARRAY, "UnsignedIntSampler2DArray"),
    (
        gl::UNSIGNED_INT_SAMPLER_2D_MULTISAMPLE,
        "UnsignedIntSampler2DMultisample",
    ),
    (
        gl::UNSIGNED_INT_SAMPLER_2D_MULTISAMPLE_ARRAY,
        "UnsignedIntSampler2DMultisampleArray",
    ),
    (gl::UNSIGNED_INT_SAMPLER_2D_RECT, "UnsignedIntSampler2DRect"),
    (gl::UNSIGNED_INT_SAMPLER_3D, "UnsignedIntSampler3D"),
    (gl::UNSIGNED_INT_SAMPLER_BUFFER, "UnsignedIntSamplerBuffer"),
    (gl::UNSIGNED_INT_SAMPLER_CUBE, "UnsignedIntSamplerCube"),
    (
        gl::UNSIGNED_INT_SAMPLER_CUBE_MAP_ARRAY,
        "UnsignedIntSamplerCubeMapArray",
    ),
    (gl::IMAGE_1D, "Image1D"),
    (gl::IMAGE_1D_ARRAY, "Image1DArray"),
    (gl::IMAGE_2D, "Image2D"),
    (gl::IMAGE_2D_ARRAY, "Image2DArray"),
    (gl::IMAGE_2D_MULTISAMPLE, "Image2DMultisample"),
    (gl::IMAGE_2D_MULTISAMPLE_ARRAY, "Image2DMultisampleArray"),
    (gl::IMAGE_2D_RECT, "Image2DRect"),
    (gl::IMAGE_3D, "Image3D"),
    (gl::IMAGE_BUFFER, "ImageBuffer"),
    (gl::IMAGE_CUBE, "ImageCube"),
    (gl::IMAGE_CUBE_MAP_ARRAY, "ImageCubeMapArray"),
    (gl::INT_IMAGE_1D, "IntImage1D"),
    (gl::INT_IMAGE_1D_ARRAY, "IntImage1DArray"),
    (gl::INT_IMAGE_2D, "IntImage2D"),
    (gl::INT_IMAGE_2D_ARRAY, "IntImage2DArray"),
    (gl::INT_IMAGE_2D_MULTISAMPLE, "IntImage2DMultisample"),
    (
        gl::INT_IMAGE_2D_MULTISAMPLE_ARRAY,
        "IntImage2DMultisampleArray",
    ),
    (gl::INT_IMAGE_2D_RECT, "IntImage2DRect"),
    (gl::INT_IMAGE_3D, "IntImage3D"),
    (gl::INT_IMAGE_BUFFER, "IntImageBuffer"),
    (gl::INT_IMAGE_CUBE, "IntImageCube"),
    (gl::INT_IMAGE_CUBE_MAP_ARRAY, "IntImageCubeMapArray"),
    (gl::UNSIGNED_INT_IMAGE_1D, "UnsignedIntImage1D"),
    (gl::UNSIGNED_INT_IMAGE_1D_ARRAY, "UnsignedIntImage1DArray"),
    (gl::UNSIGNED_INT_IMAGE_2D, "UnsignedIntImage2D"),
    (gl::UNSIGNED_INT_IMAGE_2D_ARRAY, "UnsignedIntImage2DArray"),
    (
        gl::UNSIGNED_INT_IMAGE_2D_MULTISAMPLE,
        "UnsignedIntImage2DMultisample",
    ),
    (
        gl::UNSIGNED_INT_IMAGE_2D_MULTISAMPLE_ARRAY,
        "UnsignedIntImage2DMultisampleArray",
    ),
    (gl::UNSIGNED_INT_IMAGE_2D_RECT, "UnsignedIntImage2DRect"),
    (gl::UNSIGNED_INT_IMAGE_3D, "UnsignedIntImage3D"),
    (gl::UNSIGNED_INT_IMAGE_BUFFER, "UnsignedIntImageBuffer"),
    (gl::UNSIGNED_INT_IMAGE_CUBE, "UnsignedIntImageCube"),
    (
        gl::UNSIGNED_INT_IMAGE_CUBE_MAP_ARRAY,
        "UnsignedIntImageCubeMapArray",
    ),
    (gl::UNSIGNED_INT_ATOMIC_COUNTER, "UnsignedIntAtomicCounter"),
];

static TAG_NAME_MAP: Lazy<HashMap<GLenum, &'static str>> =
    Lazy::new(|| TAG_NAMES.iter().copied().collect());

/// Diagnostic name for a native tag, or `"UnknownType"` for tags outside
/// the table.
pub fn tag_name(tag: GLenum) -> &'static str {
    TAG_NAME_MAP.get(&tag).copied().unwrap_or("UnknownType")
}

// ---------------------------------------------------------------------------
// Wrapper code fragments
// ---------------------------------------------------------------------------

/// The target-language (C#/OpenTK) type backing a uniform of this logical
/// type in the generated wrapper.
pub fn type_name(ty: LogicalType) -> String {
    match ty {
        LogicalType::Bool => "bool".to_owned(),
        LogicalType::Int => "int".to_owned(),
        LogicalType::UInt => "uint".to_owned(),
        LogicalType::Float => "float".to_owned(),
        LogicalType::Double => "double".to_owned(),
        LogicalType::Vector { dim, elem } => match elem {
            VecElem::Float => format!("global::OpenTK.Vector{dim}"),
            VecElem::Double => format!("global::OpenTK.Vector{dim}d"),
        },
        LogicalType::Matrix { rows, cols } => format!("global::OpenTK.Matrix{}", dims(rows, cols)),
        LogicalType::Texture => "global::ShaderRuntime.Texture".to_owned(),
    }
}

/// The draw-time set call for a non-texture uniform, referencing the
/// wrapper's `__{name}` location field and `uniform_{name}` backing field.
///
/// Returns `None` for [`LogicalType::Texture`]: textures use a two-phase
/// protocol (bind in `UseShader`, unit-index publish in `PassUniforms`)
/// owned by the emitter.
pub fn draw_command(ty: LogicalType, name: &str) -> Option<String> {
    match ty {
        LogicalType::Bool
        | LogicalType::Int
        | LogicalType::UInt
        | LogicalType::Float
        | LogicalType::Double => Some(format!("GL.Uniform1(__{name}, uniform_{name});")),
        LogicalType::Vector { dim, .. } => {
            Some(format!("GL.Uniform{dim}(__{name}, uniform_{name});"))
        }
        LogicalType::Matrix { rows, cols } => Some(format!(
            "GL.UniformMatrix{}(__{name}, TransposeMatrix, ref uniform_{name});",
            dims(rows, cols)
        )),
        LogicalType::Texture => None,
    }
}

/// `"3"` for square dimensions, `"3x2"` otherwise — the suffix convention
/// shared by OpenTK's matrix types and its `GL.UniformMatrix*` overloads.
fn dims(rows: u8, cols: u8) -> String {
    if rows == cols {
        rows.to_string()
    } else {
        format!("{rows}x{cols}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_map_one_to_one() {
        assert_eq!(logical_type_of(gl::BOOL).unwrap(), LogicalType::Bool);
        assert_eq!(logical_type_of(gl::INT).unwrap(), LogicalType::Int);
        assert_eq!(logical_type_of(gl::UNSIGNED_INT).unwrap(), LogicalType::UInt);
        assert_eq!(logical_type_of(gl::FLOAT).unwrap(), LogicalType::Float);
        assert_eq!(logical_type_of(gl::DOUBLE).unwrap(), LogicalType::Double);
    }

    #[test]
    fn vectors_keep_dim_and_elem() {
        assert_eq!(
            logical_type_of(gl::FLOAT_VEC3).unwrap(),
            LogicalType::Vector {
                dim: 3,
                elem: VecElem::Float
            }
        );
        assert_eq!(
            logical_type_of(gl::DOUBLE_VEC2).unwrap(),
            LogicalType::Vector {
                dim: 2,
                elem: VecElem::Double
            }
        );
    }

    #[test]
    fn nonsquare_matrices_are_not_collapsed() {
        assert_eq!(
            logical_type_of(gl::FLOAT_MAT3x4).unwrap(),
            LogicalType::Matrix { rows: 3, cols: 4 }
        );
        assert_eq!(
            logical_type_of(gl::FLOAT_MAT4x3).unwrap(),
            LogicalType::Matrix { rows: 4, cols: 3 }
        );
    }

    #[test]
    fn mapping_is_total_over_the_supported_tables() {
        for &(tag, _) in SCALARS {
            logical_type_of(tag).unwrap();
        }
        for &(tag, _, _) in VECTORS {
            logical_type_of(tag).unwrap();
        }
        for &(tag, _, _) in MATRICES {
            logical_type_of(tag).unwrap();
        }
        for &tag in SAMPLERS {
            assert_eq!(logical_type_of(tag).unwrap(), LogicalType::Texture);
        }
    }

    #[test]
    fn every_image_and_atomic_tag_is_rejected() {
        for &tag in IMAGES.iter().chain(ATOMIC_COUNTERS) {
            let err = logical_type_of(tag).unwrap_err();
            assert_eq!(err.tag(), tag);
        }
    }

    #[test]
    fn unlisted_tags_are_rejected() {
        for tag in [
            gl::BOOL_VEC3,
            gl::INT_VEC4,
            gl::UNSIGNED_INT_VEC2,
            gl::DOUBLE_MAT4,
            0xFFFF_u32,
        ] {
            logical_type_of(tag).unwrap_err();
        }
    }

    #[test]
    fn unsupported_error_names_the_tag() {
        let err = logical_type_of(gl::IMAGE_2D).unwrap_err();
        assert!(err.to_string().contains("Image2D"));
    }

    #[test]
    fn type_names() {
        assert_eq!(type_name(LogicalType::UInt), "uint");
        assert_eq!(
            type_name(LogicalType::Vector {
                dim: 4,
                elem: VecElem::Double
            }),
            "global::OpenTK.Vector4d"
        );
        assert_eq!(
            type_name(LogicalType::Matrix { rows: 2, cols: 2 }),
            "global::OpenTK.Matrix2"
        );
        assert_eq!(
            type_name(LogicalType::Matrix { rows: 4, cols: 2 }),
            "global::OpenTK.Matrix4x2"
        );
        assert_eq!(
            type_name(LogicalType::Texture),
            "global::ShaderRuntime.Texture"
        );
    }

    #[test]
    fn draw_commands() {
        assert_eq!(
            draw_command(LogicalType::Float, "strength").unwrap(),
            "GL.Uniform1(__strength, uniform_strength);"
        );
        assert_eq!(
            draw_command(
                LogicalType::Vector {
                    dim: 3,
                    elem: VecElem::Float
                },
                "color"
            )
            .unwrap(),
            "GL.Uniform3(__color, uniform_color);"
        );
        assert_eq!(
            draw_command(LogicalType::Matrix { rows: 4, cols: 4 }, "mvp").unwrap(),
            "GL.UniformMatrix4(__mvp, TransposeMatrix, ref uniform_mvp);"
        );
        assert_eq!(
            draw_command(LogicalType::Matrix { rows: 2, cols: 3 }, "m").unwrap(),
            "GL.UniformMatrix2x3(__m, TransposeMatrix, ref uniform_m);"
        );
        assert!(draw_command(LogicalType::Texture, "tex0").is_none());
    }
}
