//! Recursive layout of the nested sphere clusters.

use glam::DVec3;

use crate::{
    config::GeneratorConfig,
    scene::{Branch, Material, Palette, SceneDocument, SceneTree, SpherePrimitive, Subtree, SubtreeName},
    util::{
        math::{child_offset, child_radius},
        number::Scalar,
    },
};

/// Builds the template arena for a single max depth.
pub struct SceneBuilder {
    max_depth: usize,
    base_radius: u32,
    texture_file: String,
    definitions: Vec<Subtree>,
}

impl SceneBuilder {
    pub fn new(config: &GeneratorConfig, max_depth: usize) -> Self {
        Self {
            max_depth,
            base_radius: config.base_radius,
            texture_file: config.texture_file.clone(),
            definitions: Vec::with_capacity(max_depth + 1),
        }
    }

    pub fn build(mut self) -> SceneTree {
        let root_radius = Scalar::Int(i64::from(self.base_radius));
        self.build_level(DVec3::ZERO, root_radius, 0);
        SceneTree::new(self.max_depth, self.definitions)
    }

    /// Defines the template for `depth`, after first defining the next depth's
    /// template exactly once. Returns the name of the template just defined.
    fn build_level(&mut self, center: DVec3, radius: Scalar, depth: usize) -> SubtreeName {
        let name = SubtreeName(depth);
        let mut instances = Vec::new();

        if depth < self.max_depth {
            let offset = child_offset(radius.value());
            // Child templates are centered on the origin; instances move them into place.
            let child = self.build_level(
                DVec3::ZERO,
                Scalar::Real(child_radius(radius.value())),
                depth + 1,
            );
            instances.extend(Branch::layout(depth).map(|branch| branch.place(center, offset, child)));
        }

        tracing::debug!(%name, radius = radius.value(), instances = instances.len(), "built level");

        self.definitions.push(Subtree {
            name,
            sphere: SpherePrimitive {
                center,
                radius,
                material: Material {
                    palette: Palette::for_depth(depth),
                    texture_file: self.texture_file.clone(),
                },
            },
            instances,
        });
        name
    }
}

/// Builds the complete document for one max depth.
pub fn build_scene(config: &GeneratorConfig, max_depth: usize) -> SceneDocument {
    SceneDocument::new(SceneBuilder::new(config, max_depth).build())
}
