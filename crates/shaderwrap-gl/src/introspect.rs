//! Active-variable enumeration on a linked program.

use shaderwrap_core::{ActiveAttribute, ActiveUniform};

use crate::api::GlApi;
use crate::compile::LinkedProgram;

impl<A: GlApi> LinkedProgram<'_, A> {
    /// Enumerate the program's active uniforms and attributes in the
    /// driver's own index order. That order is what the emitter preserves,
    /// so it is never re-sorted here.
    pub fn introspect(&mut self) -> (Vec<ActiveUniform>, Vec<ActiveAttribute>) {
        let program = self.program;

        let attribute_count = self.api.active_attribute_count(program);
        let mut attributes = Vec::with_capacity(attribute_count.max(0) as usize);
        for index in 0..attribute_count.max(0) as u32 {
            let (tag, name) = self.api.active_attribute(program, index);
            attributes.push(ActiveAttribute { name, tag });
        }

        let uniform_count = self.api.active_uniform_count(program);
        let mut uniforms = Vec::with_capacity(uniform_count.max(0) as usize);
        for index in 0..uniform_count.max(0) as u32 {
            let (tag, name) = self.api.active_uniform(program, index);
            uniforms.push(ActiveUniform { name, tag });
        }

        (uniforms, attributes)
    }
}
