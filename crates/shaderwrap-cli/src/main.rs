//! Command-line front end: parse arguments, bring up a hidden GL context,
//! run the compile/introspect/emit pipeline, and write the wrapper class.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shaderwrap_gl::{ContextError, GlContext, RawGl};

mod args;

const USAGE: &str = "Arguments: (May be prefixed with - or /)
  - r : Reloads the shader from files in the current directory whenever the shader is compiled
  - s : Embeds the shader as strings in the output file (this is the default)
  - out=[filename] : Sets the output file (The default is to use the first input file's name)
  - name=[string] : Sets the name of the shader (This will be the name of the output class)
  - [filename] : One of the files to compile as a shader stage (The stage of the shader is inferred from the extension)
  - vert=[filename] : Compiles the file as a vertex shader
  - frag=[filename] : Compiles the file as a fragment shader
  - geom=[filename] : Compiles the file as a geometry shader
  - tessEval=[filename] : Compiles the file as a tesselation evaluation shader
  - tessControl=[filename] : Compiles the file as a tesselation control shader
  - compute=[filename] : Compiles the file as a compute shader (This option cannot be specified with any of the other file types)
  - namespace=[string] : Sets the namespace of the shader (The default is 'Shaders')
  - contextVersion=[version] : Set the OpenGL context version. The minimum and default versions are 3.0.";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            // Failures report through the C-style -1 convention.
            ExitCode::from(255)
        }
    }
}

fn run(args: &[String]) -> anyhow::Result<ExitCode> {
    if args.is_empty() {
        error!("no arguments passed");
        return Ok(ExitCode::from(255));
    }
    if args[0] == "-help" || args[0] == "/help" {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }

    let parsed = args::parse(args);
    if parsed.stages.is_empty() {
        error!("no shader stage files given");
        return Ok(ExitCode::from(255));
    }

    let _context = match GlContext::create(parsed.context_version) {
        Ok(context) => context,
        Err(e @ ContextError::Version { .. }) => {
            // A too-old driver is reported but not treated as a tool
            // failure.
            error!("{e}");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(e).context("failed to create OpenGL context"),
    };

    let out = parsed
        .out
        .clone()
        .unwrap_or_else(|| default_output(&parsed.stages[0].path));

    let mut api = RawGl::new();
    match shaderwrap_gl::pipeline::run(&mut api, parsed.options, parsed.stages) {
        Ok(text) => {
            fs::write(&out, text)
                .with_context(|| format!("failed to write output file {}", out.display()))?;
            info!(path = %out.display(), "wrote wrapper class");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{e}");
            Ok(ExitCode::from(255))
        }
    }
}

/// Default output path: the first stage file's name with a `.cs` extension.
fn default_output(first_stage: &std::path::Path) -> PathBuf {
    first_stage.with_extension("cs")
}
