//! Deterministic assembly of the generated wrapper's source text.
//!
//! The emitter is a pure function of the [`WrapperSpec`]: identical specs
//! produce byte-identical output. Lines are accumulated into a vector and
//! joined at the end, so member order is fixed by construction.
//!
//! Naming conventions inside the generated class:
//!
//! - Location fields start with a double underscore (`__name`).
//! - CPU-side uniform value fields start with `uniform_`.
//! - Embedded stage sources are named by stage kind (`VertexSource`).

use crate::model::{StageKind, WrapperSpec};
use crate::typemap::{draw_command, type_name, LogicalType};

/// Line accumulator with tab indentation, mirroring the generated file's
/// C# formatting.
#[derive(Default)]
struct Writer {
    lines: Vec<String>,
}

impl Writer {
    fn put(&mut self, depth: usize, text: impl AsRef<str>) {
        let mut line = String::with_capacity(depth + text.as_ref().len());
        for _ in 0..depth {
            line.push('\t');
        }
        line.push_str(text.as_ref());
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Escape shader source for embedding in a C# string literal: backslash,
/// double quote, and all three newline conventions.
fn escape_source(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("\r\n", "\\n")
        .replace('\r', "\\n")
        .replace('\n', "\\n")
}

/// Texture uniforms receive unit indices `0..N-1` strictly in introspection
/// order. The same assignment feeds both the bind phase (`UseShader`) and
/// the index-publish phase (`PassUniforms`), so it is computed exactly once.
struct UniformCommands {
    /// `GL.ActiveTexture` + `GL.BindTexture` pairs for `UseShader`.
    bind: Vec<String>,
    /// Per-uniform set calls for `PassUniforms`, in introspection order,
    /// with texture unit publishes interleaved at the uniform's position.
    draw: Vec<String>,
}

fn uniform_commands(spec: &WrapperSpec) -> UniformCommands {
    let mut bind = Vec::new();
    let mut draw = Vec::new();
    let mut unit = 0usize;

    for u in &spec.uniforms {
        match draw_command(u.logical, &u.name) {
            Some(cmd) => draw.push(cmd),
            None => {
                bind.push(format!(
                    "GL.ActiveTexture(global::OpenTK.Graphics.OpenGL.TextureUnit.Texture{unit});"
                ));
                bind.push(format!(
                    "GL.BindTexture(uniform_{0}.Target, uniform_{0}.TextureID);",
                    u.name
                ));
                draw.push(format!("GL.Uniform1(__{}, {unit});", u.name));
                unit += 1;
            }
        }
    }

    UniformCommands { bind, draw }
}

/// Assemble the wrapper's source text from an assembled [`WrapperSpec`].
pub fn emit(spec: &WrapperSpec) -> String {
    let opts = &spec.options;
    let cmds = uniform_commands(spec);
    let mut w = Writer::default();

    // Generated-file banner.
    w.put(0, "// <auto-generated>");
    w.put(0, "//\tThis code was generated by a Tool.");
    w.put(0, "//");
    w.put(
        0,
        "//\tChanges to this file may cause incorrect behavior and will be lost if",
    );
    w.put(0, "//\tthe code is regenerated.");
    w.put(0, "// <auto-generated>");
    w.blank();

    w.put(0, "using System;");
    w.put(0, "using GL = global::OpenTK.Graphics.OpenGL.GL;");
    w.blank();
    w.put(0, "#pragma warning disable 168");
    w.blank();

    w.put(0, format!("namespace {}", opts.namespace));
    w.put(0, "{");
    w.put(
        1,
        format!(
            "[global::System.CodeDom.Compiler.GeneratedCodeAttribute(\"shaderwrap\", \"{}\")]",
            env!("CARGO_PKG_VERSION")
        ),
    );
    w.put(
        1,
        format!(
            "public class {} : global::ShaderRuntime.GLShader",
            opts.class_name
        ),
    );
    w.put(1, "{");

    emit_support_check(&mut w);
    emit_fields(&mut w, spec);
    emit_stage_sources(&mut w, spec);
    emit_compile(&mut w, spec);
    emit_set_parameter(&mut w, spec);
    emit_get_parameter(&mut w, spec);
    emit_get_parameter_location(&mut w, spec);
    emit_pass_uniforms(&mut w, &cmds);
    emit_use_shader(&mut w, spec, &cmds);
    emit_get_shader_id(&mut w, spec);
    emit_dispose(&mut w);
    emit_is_supported(&mut w);
    emit_get_uniform_names(&mut w, spec);

    w.put(1, "}");
    w.put(0, "}");
    w.finish()
}

fn emit_support_check(w: &mut Writer) {
    w.put(2, "public static bool ImplementationSupportsShaders");
    w.put(2, "{");
    w.put(3, "get");
    w.put(3, "{");
    w.put(4, "return (new Version(GL.GetString(global::OpenTK.Graphics.OpenGL.StringName.Version).Substring(0, 3)) >= new Version(2, 0) ? true : false);");
    w.put(3, "}");
    w.put(2, "}");
}

fn emit_fields(w: &mut Writer, spec: &WrapperSpec) {
    // One program handle and one set of locations shared by every instance
    // of the generated type; uniform values stay per-instance.
    w.put(2, "static int ProgramID;");
    w.put(2, "private static global::ShaderRuntime.Utility.Counter Ctr = new global::ShaderRuntime.Utility.Counter(new Action(delegate{ GL.DeleteProgram(ProgramID); ProgramID = 0; }));");
    w.put(
        2,
        format!(
            "public bool TransposeMatrix = {};",
            spec.options.default_transpose_matrix
        ),
    );

    for u in &spec.uniforms {
        w.put(2, format!("public static int __{};", u.name));
        w.put(
            2,
            format!("public {} uniform_{};", type_name(u.logical), u.name),
        );
    }
    for a in &spec.attributes {
        w.put(2, format!("public static int __{};", a.name));
    }
}

fn emit_stage_sources(w: &mut Writer, spec: &WrapperSpec) {
    if spec.options.recompile_from_file {
        for stage in &spec.stages {
            w.put(
                2,
                format!("private static string {}Source;", stage.kind.name()),
            );
        }
        w.put(2, "private static void LoadShaders()");
        w.put(2, "{");
        for stage in &spec.stages {
            w.put(
                3,
                format!(
                    "{}Source = global::System.IO.File.ReadAllText(@\"{}\");",
                    stage.kind.name(),
                    stage.path.display()
                ),
            );
        }
        w.put(2, "}");
    } else {
        for stage in &spec.stages {
            w.put(
                2,
                format!(
                    "private static string {}Source = \"{}\";",
                    stage.kind.name(),
                    escape_source(&stage.text)
                ),
            );
        }
    }
}

fn emit_compile(w: &mut Writer, spec: &WrapperSpec) {
    w.put(2, "public static void CompileShader()");
    w.put(2, "{");
    if spec.options.recompile_from_file {
        w.put(3, "LoadShaders();");
    }
    w.put(3, "ProgramID = GL.CreateProgram();");
    for stage in &spec.stages {
        let name = stage.kind.name();
        w.put(
            3,
            format!(
                "int {name} = GL.CreateShader(global::OpenTK.Graphics.OpenGL.ShaderType.{});",
                stage.kind.gl_type_name()
            ),
        );
        w.put(3, format!("GL.ShaderSource({name}, {name}Source);"));
        w.put(3, format!("GL.CompileShader({name});"));
        w.put(3, format!("GL.AttachShader(ProgramID, {name});"));
    }
    w.put(3, "GL.LinkProgram(ProgramID);");
    w.put(
        3,
        "global::System.Diagnostics.Debug.WriteLine(GL.GetProgramInfoLog(ProgramID));",
    );
    for stage in &spec.stages {
        let name = stage.kind.name();
        w.put(3, format!("GL.DetachShader(ProgramID, {name});"));
        w.put(3, format!("GL.DeleteShader({name});"));
    }
    for u in &spec.uniforms {
        w.put(
            3,
            format!(
                "__{0} = GL.GetUniformLocation(ProgramID, \"{0}\");",
                u.name
            ),
        );
    }
    for a in &spec.attributes {
        w.put(
            3,
            format!("__{0} = GL.GetAttribLocation(ProgramID, \"{0}\");", a.name),
        );
    }
    w.put(2, "}");

    w.put(2, "public void Recompile()");
    w.put(2, "{");
    w.put(3, "GL.DeleteProgram(ProgramID);");
    w.put(3, "ProgramID = 0;");
    w.put(3, "Compile();");
    w.put(2, "}");

    w.put(2, "public void Compile()");
    w.put(2, "{");
    w.put(3, "if(ProgramID == 0)");
    w.put(4, "CompileShader();");
    w.put(3, "Ctr++;");
    w.put(2, "}");
}

fn emit_set_parameter(w: &mut Writer, spec: &WrapperSpec) {
    w.put(2, "public void SetParameter<T>(string name, T value)");
    w.put(2, "{");
    w.put(3, "try");
    w.put(3, "{");
    w.put(4, "switch(name)");
    w.put(4, "{");
    for u in &spec.uniforms {
        w.put(5, format!("case \"{}\":", u.name));
        w.put(
            6,
            format!(
                "uniform_{} = ({})(object)value;",
                u.name,
                type_name(u.logical)
            ),
        );
        w.put(6, "break;");
    }
    w.put(5, "default:");
    w.put(6, "throw new global::ShaderRuntime.InvalidIdentifierException(\"There is no uniform variable named \" + name + \" in this shader.\");");
    w.put(4, "}");
    w.put(3, "}");
    w.put(3, "catch(InvalidCastException e)");
    w.put(3, "{");
    w.put(4, "throw new global::ShaderRuntime.InvalidParameterTypeException(\"Invalid parameter type: \" + name + \" is not convertible from the type \\\"\" + typeof(T).FullName + \"\\\".\");");
    w.put(3, "}");
    w.put(2, "}");
}

fn emit_get_parameter(w: &mut Writer, spec: &WrapperSpec) {
    w.put(2, "public T GetParameter<T>(string name)");
    w.put(2, "{");
    w.put(3, "try");
    w.put(3, "{");
    w.put(4, "switch(name)");
    w.put(4, "{");
    for u in &spec.uniforms {
        w.put(5, format!("case \"{}\":", u.name));
        w.put(6, format!("return (T)(object)uniform_{};", u.name));
    }
    w.put(5, "default:");
    w.put(6, "throw new global::ShaderRuntime.InvalidIdentifierException(\"There is no uniform variable named \" + name + \" in this shader.\");");
    w.put(4, "}");
    w.put(3, "}");
    w.put(3, "catch(InvalidCastException e)");
    w.put(3, "{");
    w.put(4, "throw new global::ShaderRuntime.InvalidParameterTypeException(\"Invalid parameter type: \" + name + \" is not convertible to the type \\\"\" + typeof(T).FullName + \"\\\".\");");
    w.put(3, "}");
    w.put(2, "}");
}

fn emit_get_parameter_location(w: &mut Writer, spec: &WrapperSpec) {
    w.put(2, "public int GetParameterLocation(string name)");
    w.put(2, "{");
    w.put(3, "switch(name)");
    w.put(3, "{");
    for u in &spec.uniforms {
        w.put(4, format!("case \"{}\":", u.name));
        w.put(5, format!("return __{};", u.name));
    }
    for a in &spec.attributes {
        w.put(4, format!("case \"{}\":", a.name));
        w.put(5, format!("return __{};", a.name));
    }
    w.put(4, "default:");
    w.put(5, "throw new global::ShaderRuntime.InvalidIdentifierException(\"There is no parameter named \" + name + \".\");");
    w.put(3, "}");
    w.put(2, "}");
}

fn emit_pass_uniforms(w: &mut Writer, cmds: &UniformCommands) {
    w.put(2, "public void PassUniforms()");
    w.put(2, "{");
    for cmd in &cmds.draw {
        w.put(3, cmd);
    }
    w.put(2, "}");
}

fn emit_use_shader(w: &mut Writer, spec: &WrapperSpec, cmds: &UniformCommands) {
    w.put(2, "public void UseShader()");
    w.put(2, "{");
    w.put(3, "GL.UseProgram(ProgramID);");
    for cmd in &cmds.bind {
        w.put(3, cmd);
    }
    for a in &spec.attributes {
        w.put(3, format!("GL.EnableVertexAttribArray(__{});", a.name));
    }
    w.put(2, "}");
}

fn emit_get_shader_id(w: &mut Writer, spec: &WrapperSpec) {
    w.put(2, "public int GetShaderID()");
    w.put(2, "{");
    w.put(3, "if(ProgramID != 0)");
    w.put(4, "return ProgramID;");
    w.put(3, format!("throw new global::ShaderRuntime.ShaderNotInitializedException(\"The shader \\\"{}\\\" has not been initialized. Call Compile() on one of the instances or CompileShader() to compile the shader\");", spec.options.class_name));
    w.put(2, "}");
}

fn emit_dispose(w: &mut Writer) {
    w.put(2, "public void Dispose()");
    w.put(2, "{");
    w.put(3, "Ctr--;");
    w.put(2, "}");
}

fn emit_is_supported(w: &mut Writer) {
    w.put(2, "public bool IsSupported");
    w.put(2, "{");
    w.put(3, "get");
    w.put(3, "{");
    w.put(4, "return ImplementationSupportsShaders;");
    w.put(3, "}");
    w.put(2, "}");
}

fn emit_get_uniform_names(w: &mut Writer, spec: &WrapperSpec) {
    w.put(
        2,
        "public global::System.Collections.Generic.IEnumerable<string> GetUniformNames()",
    );
    w.put(2, "{");
    for u in &spec.uniforms {
        w.put(3, format!("yield return \"{}\";", u.name));
    }
    if spec.uniforms.is_empty() {
        w.put(3, "yield break;");
    }
    w.put(2, "}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ActiveAttribute, ActiveUniform, GenerationOptions, StageSource, WrapperSpec,
    };
    use std::path::PathBuf;

    fn stage(kind: StageKind, path: &str, text: &str) -> StageSource {
        StageSource {
            path: PathBuf::from(path),
            kind,
            text: text.to_owned(),
        }
    }

    fn options(name: &str) -> GenerationOptions {
        GenerationOptions {
            class_name: name.to_owned(),
            ..GenerationOptions::default()
        }
    }

    fn basic_spec() -> WrapperSpec {
        WrapperSpec::assemble(
            options("BasicShader"),
            vec![
                stage(StageKind::Vertex, "basic.vert", "void main() {}"),
                stage(StageKind::Fragment, "basic.frag", "void main() {}"),
            ],
            vec![ActiveUniform {
                name: "strength".to_owned(),
                tag: gl::FLOAT,
            }],
            vec![ActiveAttribute {
                name: "position".to_owned(),
                tag: gl::FLOAT_VEC3,
            }],
        )
        .unwrap()
    }

    #[test]
    fn emit_is_deterministic() {
        let spec = basic_spec();
        assert_eq!(emit(&spec), emit(&spec.clone()));
    }

    #[test]
    fn scalar_uniform_gets_backing_field_and_draw_command() {
        let text = emit(&basic_spec());
        assert!(text.contains("public float uniform_strength;"));
        assert!(text.contains("public static int __strength;"));
        assert!(text.contains("GL.Uniform1(__strength, uniform_strength);"));
    }

    #[test]
    fn class_and_namespace_come_from_options() {
        let text = emit(&basic_spec());
        assert!(text.contains("namespace Shaders"));
        assert!(text.contains("public class BasicShader : global::ShaderRuntime.GLShader"));
    }

    #[test]
    fn single_texture_binds_unit_zero_and_publishes_index_zero() {
        let spec = WrapperSpec::assemble(
            options("TexShader"),
            vec![stage(StageKind::Fragment, "tex.frag", "void main() {}")],
            vec![ActiveUniform {
                name: "tex0".to_owned(),
                tag: gl::SAMPLER_2D,
            }],
            vec![],
        )
        .unwrap();
        let text = emit(&spec);
        assert!(
            text.contains("GL.ActiveTexture(global::OpenTK.Graphics.OpenGL.TextureUnit.Texture0);")
        );
        assert!(text.contains("GL.BindTexture(uniform_tex0.Target, uniform_tex0.TextureID);"));
        assert!(text.contains("GL.Uniform1(__tex0, 0);"));
    }

    #[test]
    fn texture_units_are_contiguous_in_introspection_order() {
        let spec = WrapperSpec::assemble(
            options("MultiTex"),
            vec![stage(StageKind::Fragment, "t.frag", "")],
            vec![
                ActiveUniform {
                    name: "a".to_owned(),
                    tag: gl::SAMPLER_2D,
                },
                ActiveUniform {
                    name: "scale".to_owned(),
                    tag: gl::FLOAT,
                },
                ActiveUniform {
                    name: "b".to_owned(),
                    tag: gl::SAMPLER_CUBE,
                },
            ],
            vec![],
        )
        .unwrap();
        let cmds = uniform_commands(&spec);
        assert_eq!(
            cmds.bind,
            vec![
                "GL.ActiveTexture(global::OpenTK.Graphics.OpenGL.TextureUnit.Texture0);"
                    .to_owned(),
                "GL.BindTexture(uniform_a.Target, uniform_a.TextureID);".to_owned(),
                "GL.ActiveTexture(global::OpenTK.Graphics.OpenGL.TextureUnit.Texture1);"
                    .to_owned(),
                "GL.BindTexture(uniform_b.Target, uniform_b.TextureID);".to_owned(),
            ]
        );
        // Draw commands stay in introspection order with the unit publishes
        // interleaved at the uniform's own position.
        assert_eq!(
            cmds.draw,
            vec![
                "GL.Uniform1(__a, 0);".to_owned(),
                "GL.Uniform1(__scale, uniform_scale);".to_owned(),
                "GL.Uniform1(__b, 1);".to_owned(),
            ]
        );
    }

    #[test]
    fn embedded_source_is_escaped() {
        let spec = WrapperSpec::assemble(
            options("Esc"),
            vec![stage(
                StageKind::Vertex,
                "esc.vert",
                "#version 330\r\nconst char q = '\"';\nvoid main() {}\n",
            )],
            vec![],
            vec![],
        )
        .unwrap();
        let text = emit(&spec);
        assert!(text.contains(
            "private static string VertexSource = \"#version 330\\nconst char q = '\\\"';\\nvoid main() {}\\n\";"
        ));
    }

    #[test]
    fn recompile_mode_emits_load_shaders_instead_of_embedded_text() {
        let mut spec = basic_spec();
        spec.options.recompile_from_file = true;
        let text = emit(&spec);
        assert!(text.contains("private static string VertexSource;"));
        assert!(text.contains("private static void LoadShaders()"));
        assert!(text.contains("VertexSource = global::System.IO.File.ReadAllText(@\"basic.vert\");"));
        // Embedded constant must not appear.
        assert!(!text.contains("VertexSource = \"void main()"));
        // LoadShaders runs at the start of compilation.
        let compile_at = text.find("public static void CompileShader()").unwrap();
        let load_call = text[compile_at..].find("LoadShaders();").unwrap();
        let create = text[compile_at..].find("GL.CreateProgram()").unwrap();
        assert!(load_call < create);
    }

    #[test]
    fn unknown_parameter_name_throws_invalid_identifier() {
        let text = emit(&basic_spec());
        // Dispatch defaults raise InvalidIdentifierException in all three
        // name-keyed members.
        assert_eq!(
            text.matches("global::ShaderRuntime.InvalidIdentifierException").count(),
            3
        );
        assert!(text.contains("There is no parameter named "));
    }

    #[test]
    fn get_parameter_location_covers_uniforms_and_attributes() {
        let text = emit(&basic_spec());
        let loc_at = text.find("public int GetParameterLocation").unwrap();
        let tail = &text[loc_at..];
        assert!(tail.contains("case \"strength\":"));
        assert!(tail.contains("case \"position\":"));
    }

    #[test]
    fn use_shader_enables_attribute_arrays() {
        let text = emit(&basic_spec());
        assert!(text.contains("GL.EnableVertexAttribArray(__position);"));
    }

    #[test]
    fn transpose_default_follows_options() {
        let mut spec = basic_spec();
        assert!(emit(&spec).contains("public bool TransposeMatrix = false;"));
        spec.options.default_transpose_matrix = true;
        assert!(emit(&spec).contains("public bool TransposeMatrix = true;"));
    }

    #[test]
    fn uniform_names_yield_in_introspection_order() {
        let spec = WrapperSpec::assemble(
            options("Names"),
            vec![stage(StageKind::Vertex, "n.vert", "")],
            vec![
                ActiveUniform {
                    name: "zeta".to_owned(),
                    tag: gl::FLOAT,
                },
                ActiveUniform {
                    name: "alpha".to_owned(),
                    tag: gl::INT,
                },
            ],
            vec![],
        )
        .unwrap();
        let text = emit(&spec);
        let zeta = text.find("yield return \"zeta\";").unwrap();
        let alpha = text.find("yield return \"alpha\";").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn empty_uniform_set_still_yields_valid_iterator() {
        let spec = WrapperSpec::assemble(
            options("Empty"),
            vec![stage(StageKind::Vertex, "e.vert", "")],
            vec![],
            vec![],
        )
        .unwrap();
        assert!(emit(&spec).contains("yield break;"));
    }
}
