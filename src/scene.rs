//! In-memory model of one generated scene file.
//!
//! Geometry is kept as a tree of templates: one [`Subtree`] per depth, stored
//! in a [`SceneTree`] arena and addressed by depth. Children are never inlined;
//! a parent holds [`Instance`]s that place the shared next-depth template.

use std::fmt;

use glam::{DQuat, DVec3, IVec3};

use crate::{
    camera::Camera,
    util::{math::degree_to_radian, number::Scalar},
};

pub const SHININESS: f64 = 25.0;
pub const BLEND: f64 = 0.75;
pub const SPECULAR: DVec3 = DVec3::ONE;

/// Tint of a sphere, cycling with depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Red,
    Green,
    Blue,
}

impl Palette {
    pub fn for_depth(depth: usize) -> Self {
        match depth % 3 {
            0 => Palette::Red,
            1 => Palette::Green,
            _ => Palette::Blue,
        }
    }

    /// Used for both the reflective and the diffuse term.
    pub fn tint(self) -> DVec3 {
        match self {
            Palette::Red => DVec3::new(1.0, 0.75, 0.75),
            Palette::Green => DVec3::new(0.75, 1.0, 0.75),
            Palette::Blue => DVec3::new(0.75, 0.75, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub palette: Palette,
    pub texture_file: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpherePrimitive {
    pub center: DVec3,
    pub radius: Scalar,
    pub material: Material,
}

/// Name of the template defined for a depth: `root`, `level1`, `level2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubtreeName(pub usize);

impl SubtreeName {
    pub fn depth(self) -> usize {
        self.0
    }
}

impl fmt::Display for SubtreeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("root"),
            depth => write!(f, "level{depth}"),
        }
    }
}

/// One of the canonical child placements around a parent center.
///
/// The rotation turns the child template's +Y axis onto `direction`, so every
/// instanced cluster points away from its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub direction: DVec3,
    pub axis: IVec3,
    /// Degrees.
    pub angle: i32,
}

impl Branch {
    pub const STANDARD: [Branch; 6] = [
        Branch::new(DVec3::NEG_X, IVec3::Z, 90),
        Branch::new(DVec3::X, IVec3::Z, -90),
        Branch::new(DVec3::Y, IVec3::X, 0),
        Branch::new(DVec3::NEG_Y, IVec3::Z, 180),
        Branch::new(DVec3::NEG_Z, IVec3::X, -90),
        Branch::new(DVec3::Z, IVec3::X, 90),
    ];

    /// The root repeats this placement once more, right after the standard one.
    pub const ROOT_DUPLICATE: Branch = Branch::new(DVec3::NEG_Y, IVec3::Z, 180);

    pub const fn new(direction: DVec3, axis: IVec3, angle: i32) -> Self {
        Self {
            direction,
            axis,
            angle,
        }
    }

    /// Placements emitted by a non-leaf template at `depth`, in output order.
    pub fn layout(depth: usize) -> impl Iterator<Item = Branch> {
        Self::STANDARD.into_iter().flat_map(move |branch| {
            let copies = if depth == 0 && branch == Self::ROOT_DUPLICATE {
                2
            } else {
                1
            };
            std::iter::repeat(branch).take(copies)
        })
    }

    pub fn rotation(&self) -> DQuat {
        DQuat::from_axis_angle(self.axis.as_dvec3(), degree_to_radian(self.angle as f64))
    }

    pub fn place(&self, center: DVec3, offset: f64, target: SubtreeName) -> Instance {
        Instance {
            translate: center + self.direction * offset,
            axis: self.axis,
            angle: self.angle,
            target,
        }
    }
}

/// A `transblock` pointing at a named template.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub translate: DVec3,
    pub axis: IVec3,
    pub angle: i32,
    pub target: SubtreeName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subtree {
    pub name: SubtreeName,
    pub sphere: SpherePrimitive,
    pub instances: Vec<Instance>,
}

impl Subtree {
    pub fn depth(&self) -> usize {
        self.name.depth()
    }

    pub fn is_leaf(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Arena of templates, one per depth from 0 to `max_depth`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTree {
    max_depth: usize,
    /// Deepest first, which is also definition order in the file.
    definitions: Vec<Subtree>,
}

impl SceneTree {
    pub(crate) fn new(max_depth: usize, definitions: Vec<Subtree>) -> Self {
        debug_assert_eq!(definitions.len(), max_depth + 1);
        Self {
            max_depth,
            definitions,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn level(&self, depth: usize) -> Option<&Subtree> {
        let index = self.max_depth.checked_sub(depth)?;
        self.definitions.get(index)
    }

    pub fn root(&self) -> Option<&Subtree> {
        self.level(0)
    }

    /// Templates in the order they are written out.
    pub fn definitions(&self) -> impl Iterator<Item = &Subtree> {
        self.definitions.iter()
    }

    pub fn instance_count(&self) -> usize {
        self.definitions.iter().map(|s| s.instances.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalData {
    pub diffuse_coeff: f64,
    pub specular_coeff: f64,
    pub ambient_coeff: f64,
}

impl Default for GlobalData {
    fn default() -> Self {
        Self {
            diffuse_coeff: 0.7,
            specular_coeff: 0.54,
            ambient_coeff: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightKind {
    Point { position: DVec3 },
    Directional { direction: DVec3 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub id: u32,
    pub color: DVec3,
    /// Attenuation coefficients (constant, linear, quadratic).
    pub function: DVec3,
    pub kind: LightKind,
}

impl Light {
    /// One white point light and two white directional lights.
    pub fn default_rig() -> Vec<Light> {
        let white = |id, kind| Light {
            id,
            color: DVec3::ONE,
            function: DVec3::new(1.5, 0.0, 0.0),
            kind,
        };
        vec![
            white(
                0,
                LightKind::Point {
                    position: DVec3::splat(10.0),
                },
            ),
            white(
                1,
                LightKind::Directional {
                    direction: DVec3::new(0.25, 1.0, -1.0),
                },
            ),
            white(
                2,
                LightKind::Directional {
                    direction: DVec3::new(1.0, -1.8, -2.0),
                },
            ),
        ]
    }
}

/// A complete scene file: fixed metadata around one template tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDocument {
    pub global: GlobalData,
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub tree: SceneTree,
}

impl SceneDocument {
    pub fn new(tree: SceneTree) -> Self {
        Self {
            global: GlobalData::default(),
            camera: Camera::default(),
            lights: Light::default_rig(),
            tree,
        }
    }
}
