//! Text form of a [`SceneDocument`].
//!
//! The layout (tabs, blank lines, `" />"` on master objects, no prolog and no
//! trailing newline) is what existing renderer scene files look like, and is
//! reproduced exactly.

use std::fmt::{self, Display, Formatter};

use glam::{DVec3, IVec3};

use crate::{
    camera::Camera,
    scene::{
        GlobalData, Instance, Light, LightKind, Material, SceneDocument, SpherePrimitive, Subtree,
        BLEND, SHININESS, SPECULAR,
    },
    util::number::Scalar,
};

/// `x="…" y="…" z="…"` in shortest form.
struct Xyz(DVec3);

impl Display for Xyz {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, r#"x="{}" y="{}" z="{}""#, self.0.x, self.0.y, self.0.z)
    }
}

struct Rgb(DVec3);

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, r#"r="{}" g="{}" b="{}""#, self.0.x, self.0.y, self.0.z)
    }
}

/// Geometry coordinates keep the integer/float distinction of [`Scalar`].
struct Position(DVec3);

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"x="{}" y="{}" z="{}""#,
            Scalar::coordinate(self.0.x),
            Scalar::coordinate(self.0.y),
            Scalar::coordinate(self.0.z)
        )
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl Display for GlobalData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("\t<globaldata>\n")?;
        writeln!(f, "\t\t<diffusecoeff v=\"{}\"/>", self.diffuse_coeff)?;
        writeln!(f, "\t\t<specularcoeff v=\"{}\"/>", self.specular_coeff)?;
        writeln!(f, "\t\t<ambientcoeff v=\"{}\"/>", self.ambient_coeff)?;
        f.write_str("\t</globaldata>")
    }
}

impl Display for Camera {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("\t<cameradata>\n")?;
        writeln!(f, "\t\t<pos {}/>", Xyz(self.pos))?;
        writeln!(f, "\t\t<up {}/>", Xyz(self.up))?;
        f.write_str("\t\t\n")?;
        writeln!(f, "\t\t<heightangle v=\"{}\"/>", self.height_angle)?;
        writeln!(f, "\t\t<look {}/>", Xyz(self.look))?;
        f.write_str("\t</cameradata>")
    }
}

impl Display for Light {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("\t<lightdata>\n")?;
        writeln!(f, "\t\t<id v=\"{}\"/>", self.id)?;
        writeln!(f, "\t\t<color {}/>", Rgb(self.color))?;
        writeln!(
            f,
            "\t\t<function v1=\"{}\" v2=\"{}\" v3=\"{}\"/>",
            self.function.x, self.function.y, self.function.z
        )?;
        match self.kind {
            LightKind::Point { position } => writeln!(f, "\t\t<position {}/>", Xyz(position))?,
            LightKind::Directional { direction } => {
                f.write_str("\t\t<type v=\"directional\"/>\n")?;
                writeln!(f, "\t\t<direction {}/>", Xyz(direction))?;
            }
        }
        f.write_str("\t</lightdata>")
    }
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tint = Rgb(self.palette.tint());
        write!(f, "\n\t\t\t\t<reflective {tint}/>")?;
        write!(f, "\n\t\t\t\t<diffuse {tint}/>")?;
        write!(f, "\n\t\t\t\t<shininess v=\"{SHININESS}\"/>")?;
        write!(f, "\n\t\t\t\t<specular {}/>", Rgb(SPECULAR))?;
        write!(
            f,
            "\n\t\t\t\t<texture file=\"{}\" u=\"1\" v=\"1\"/>",
            xml_escape(&self.texture_file)
        )?;
        write!(f, "\n\t\t\t\t<blend v=\"{BLEND}\"/>")
    }
}

impl Display for SpherePrimitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let r = self.radius;
        f.write_str("\n\t\t<transblock>")?;
        write!(f, "\n\t\t\t<translate {}/>", Position(self.center))?;
        write!(f, "\n\t\t\t<scale x=\"{r}\" y=\"{r}\" z=\"{r}\"/>")?;
        write!(f, "\n\t\t\t<object type=\"primitive\" name=\"sphere\">{}", self.material)?;
        f.write_str("\n\t\t\t</object>")?;
        f.write_str("\n\t\t</transblock>")
    }
}

fn write_transform_reference(
    f: &mut impl fmt::Write,
    translate: DVec3,
    axis: IVec3,
    angle: i32,
    target: &dyn Display,
) -> fmt::Result {
    f.write_str("\n\t\t<transblock>")?;
    write!(f, "\n\t\t\t<translate {}/>", Position(translate))?;
    write!(
        f,
        "\n\t\t\t<rotate x=\"{}\" y=\"{}\" z=\"{}\" angle=\"{angle}\"/>",
        axis.x, axis.y, axis.z
    )?;
    write!(f, "\n\t\t\t<object type=\"master\" name=\"{target}\" />")?;
    f.write_str("\n\t\t</transblock>")
}

/// Placement block for one instance of the template called `target`.
pub fn transform_reference(translate: DVec3, axis: IVec3, angle: i32, target: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_transform_reference(&mut out, translate, axis, angle, &target);
    out
}

impl Display for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_transform_reference(f, self.translate, self.axis, self.angle, &self.target)
    }
}

impl Display for Subtree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\n\n\t<object type=\"tree\" name=\"{}\">{}", self.name, self.sphere)?;
        for instance in &self.instances {
            write!(f, "{instance}")?;
        }
        f.write_str("\n\t</object>")
    }
}

impl Display for SceneDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<scenefile>\n{}\n\n{}", self.global, self.camera)?;
        for light in &self.lights {
            write!(f, "\n\n{light}")?;
        }
        for subtree in self.tree.definitions() {
            write!(f, "{subtree}")?;
        }
        f.write_str("\n</scenefile>")
    }
}

pub fn serialize_scene(document: &SceneDocument) -> String {
    document.to_string()
}
