//! Command-line parsing.
//!
//! Options may be prefixed with `-` or `/`. Bare arguments are treated as
//! stage files whose kind is inferred from the extension. Arguments that
//! cannot be understood are warned about and skipped rather than aborting
//! the run.

use std::fs;
use std::path::PathBuf;

use shaderwrap_core::{GenerationOptions, StageKind, StageSource};
use shaderwrap_gl::{GlVersion, MIN_CONTEXT_VERSION};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub options: GenerationOptions,
    /// Explicit output path; defaults to the first stage's path with a
    /// `.cs` extension when absent.
    pub out: Option<PathBuf>,
    pub context_version: GlVersion,
    pub stages: Vec<StageSource>,
}

pub fn parse(args: &[String]) -> CliArgs {
    let mut parsed = CliArgs {
        options: GenerationOptions {
            class_name: default_class_name(args),
            ..GenerationOptions::default()
        },
        out: None,
        context_version: MIN_CONTEXT_VERSION,
        stages: Vec::new(),
    };

    for arg in args {
        if let Some(option) = arg.strip_prefix('-').or_else(|| arg.strip_prefix('/')) {
            match option {
                "r" => parsed.options.recompile_from_file = true,
                "s" => parsed.options.recompile_from_file = false,
                _ => parse_keyed_option(option, arg, &mut parsed),
            }
        } else {
            match stage_for_extension(arg) {
                Some(kind) => push_stage(&mut parsed.stages, arg, kind),
                None => warn!(
                    "unable to determine stage of file: '{arg}', argument will be ignored"
                ),
            }
        }
    }

    parsed
}

fn parse_keyed_option(option: &str, arg: &str, parsed: &mut CliArgs) {
    const STAGE_KEYS: [(&str, StageKind); 6] = [
        ("vert=", StageKind::Vertex),
        ("frag=", StageKind::Fragment),
        ("geom=", StageKind::Geometry),
        ("tessEval=", StageKind::TessEval),
        ("tessControl=", StageKind::TessControl),
        ("compute=", StageKind::Compute),
    ];

    if let Some(value) = option.strip_prefix("out=") {
        parsed.out = Some(PathBuf::from(trim_matching_quotes(value)));
    } else if let Some(value) = option.strip_prefix("name=") {
        parsed.options.class_name = trim_matching_quotes(value).to_owned();
    } else if let Some(value) = option.strip_prefix("namespace=") {
        parsed.options.namespace = trim_matching_quotes(value).to_owned();
    } else if let Some(value) = option.strip_prefix("contextVersion=") {
        match GlVersion::parse(trim_matching_quotes(value)) {
            Some(version) => parsed.context_version = version,
            None => warn!("invalid context version: '{value}'"),
        }
    } else if let Some((key, kind)) = STAGE_KEYS
        .iter()
        .find(|(key, _)| option.starts_with(key))
        .copied()
    {
        push_stage(
            &mut parsed.stages,
            trim_matching_quotes(&option[key.len()..]),
            kind,
        );
    } else {
        warn!("unknown argument: '{arg}'");
    }
}

/// Map a bare filename to its stage by extension, case-insensitively.
fn stage_for_extension(path: &str) -> Option<StageKind> {
    let ext = path.rsplit('.').next()?.to_ascii_lowercase();
    match ext.as_str() {
        "vert" | "vs" => Some(StageKind::Vertex),
        "frag" | "fs" => Some(StageKind::Fragment),
        "geom" | "gs" => Some(StageKind::Geometry),
        "tesseval" => Some(StageKind::TessEval),
        "tesscontrol" => Some(StageKind::TessControl),
        "compute" => Some(StageKind::Compute),
        _ => None,
    }
}

/// Read a stage file now; a missing or unreadable file is warned about and
/// the stage skipped.
fn push_stage(stages: &mut Vec<StageSource>, path: &str, kind: StageKind) {
    match fs::read_to_string(path) {
        Ok(text) => stages.push(StageSource {
            path: PathBuf::from(path),
            kind,
            text,
        }),
        Err(e) => warn!("error: file \"{path}\" could not be read: {e}"),
    }
}

fn trim_matching_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Stable per-invocation class name for when `name=` is absent: a short
/// FNV-1a digest over the raw argument list.
fn default_class_name(args: &[String]) -> String {
    let mut hash: u32 = 0x811c_9dc5;
    for arg in args {
        for &byte in arg.as_bytes() {
            hash ^= u32::from(byte);
            hash = hash.wrapping_mul(0x0100_0193);
        }
        hash ^= 0xff;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    format!("__Shader{hash}")
}
