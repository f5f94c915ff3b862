// Structural checks on generated scene documents, parsed back with roxmltree

use recursive_spheres_lib::{builder::build_scene, config::GeneratorConfig, serialize::serialize_scene};
use roxmltree::{Document, Node};

fn scene_xml(max_depth: usize) -> String {
    serialize_scene(&build_scene(&GeneratorConfig::default(), max_depth))
}

fn count_tag(doc: &Document, tag: &str) -> usize {
    doc.descendants().filter(|n| n.has_tag_name(tag)).count()
}

fn object_of_type<'a, 'input>(node: Node<'a, 'input>, kind: &str) -> bool {
    node.has_tag_name("object") && node.attribute("type") == Some(kind)
}

fn trees<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
    doc.root_element()
        .children()
        .filter(|n| object_of_type(*n, "tree"))
        .collect()
}

/// Master references placed directly inside a tree definition.
fn references<'a, 'input>(tree: Node<'a, 'input>) -> Vec<&'a str> {
    tree.children()
        .filter(|n| n.has_tag_name("transblock"))
        .flat_map(|block| block.children())
        .filter(|n| object_of_type(*n, "master"))
        .filter_map(|n| n.attribute("name"))
        .collect()
}

fn tree_sphere<'a, 'input>(tree: Node<'a, 'input>) -> Node<'a, 'input> {
    tree.descendants()
        .find(|n| object_of_type(*n, "primitive"))
        .expect("every tree holds a sphere")
}

#[test]
fn test_every_depth_is_well_formed_with_fixed_metadata() {
    for max_depth in 1..=10 {
        let xml = scene_xml(max_depth);
        let doc = Document::parse(&xml).expect("generated XML should parse");

        assert!(doc.root_element().has_tag_name("scenefile"));
        assert_eq!(count_tag(&doc, "scenefile"), 1);
        assert_eq!(count_tag(&doc, "globaldata"), 1);
        assert_eq!(count_tag(&doc, "cameradata"), 1);
        assert_eq!(count_tag(&doc, "lightdata"), 3);
    }
}

#[test]
fn test_definition_count_grows_linearly() {
    for max_depth in 1..=10 {
        let xml = scene_xml(max_depth);
        let doc = Document::parse(&xml).unwrap();
        let names: Vec<_> = trees(&doc).iter().filter_map(|t| t.attribute("name")).collect();

        assert_eq!(names.len(), max_depth + 1);
        assert_eq!(names.last(), Some(&"root"));
        assert_eq!(names.first().copied(), Some(format!("level{max_depth}").as_str()));
    }
}

#[test]
fn test_reference_counts_per_level() {
    for max_depth in 1..=10 {
        let xml = scene_xml(max_depth);
        let doc = Document::parse(&xml).unwrap();

        for tree in trees(&doc) {
            let name = tree.attribute("name").unwrap();
            let refs = references(tree);
            let expected = match name {
                "root" => 7,
                _ if name == format!("level{max_depth}") => 0,
                _ => 6,
            };
            assert_eq!(refs.len(), expected, "{name} at max depth {max_depth}");
            assert_eq!(tree_sphere(tree).attribute("name"), Some("sphere"));
        }
    }
}

#[test]
fn test_references_point_at_earlier_definitions() {
    let xml = scene_xml(6);
    let doc = Document::parse(&xml).unwrap();

    let mut defined = Vec::new();
    for tree in trees(&doc) {
        for target in references(tree) {
            assert!(defined.contains(&target), "{target} referenced before definition");
        }
        defined.push(tree.attribute("name").unwrap());
    }
}

#[test]
fn test_colors_cycle_by_depth() {
    let xml = scene_xml(10);
    let doc = Document::parse(&xml).unwrap();

    for tree in trees(&doc) {
        let depth = match tree.attribute("name").unwrap() {
            "root" => 0,
            name => name.trim_start_matches("level").parse::<usize>().unwrap(),
        };
        let diffuse = tree_sphere(tree)
            .children()
            .find(|n| n.has_tag_name("diffuse"))
            .unwrap();
        let channel = |c: &str| diffuse.attribute(c).unwrap();
        let full = match depth % 3 {
            0 => "r",
            1 => "g",
            _ => "b",
        };
        for c in ["r", "g", "b"] {
            let expected = if c == full { "1" } else { "0.75" };
            assert_eq!(channel(c), expected, "depth {depth} channel {c}");
        }
    }
}

#[test]
fn test_radius_and_offset_per_depth() {
    let xml = scene_xml(10);
    let doc = Document::parse(&xml).unwrap();

    for tree in trees(&doc) {
        let depth = match tree.attribute("name").unwrap() {
            "root" => 0,
            name => name.trim_start_matches("level").parse::<i32>().unwrap(),
        };
        let radius = 6.0 * 0.5f64.powi(depth);

        let scale = tree
            .descendants()
            .find(|n| n.has_tag_name("scale"))
            .unwrap();
        for axis in ["x", "y", "z"] {
            let value: f64 = scale.attribute(axis).unwrap().parse().unwrap();
            assert_eq!(value, radius);
        }

        for block in tree.children().filter(|n| n.has_tag_name("transblock")).skip(1) {
            let translate = block.children().find(|n| n.has_tag_name("translate")).unwrap();
            let distance: f64 = ["x", "y", "z"]
                .iter()
                .map(|a| translate.attribute(*a).unwrap().parse::<f64>().unwrap().abs())
                .sum();
            assert_eq!(distance, radius * 0.75);
        }
    }
}

#[test]
fn test_depth_one_end_to_end() {
    let xml = scene_xml(1);
    let doc = Document::parse(&xml).unwrap();
    let trees = trees(&doc);

    let level1 = trees[0];
    assert_eq!(level1.attribute("name"), Some("level1"));
    assert!(references(level1).is_empty());
    let scale = level1.descendants().find(|n| n.has_tag_name("scale")).unwrap();
    assert_eq!(scale.attribute("x"), Some("3.0"));

    let root = trees[1];
    assert_eq!(root.attribute("name"), Some("root"));
    assert_eq!(references(root), vec!["level1"; 7]);
    let scale = root.descendants().find(|n| n.has_tag_name("scale")).unwrap();
    assert_eq!(scale.attribute("x"), Some("6"));
    let diffuse = tree_sphere(root).children().find(|n| n.has_tag_name("diffuse")).unwrap();
    assert_eq!(diffuse.attribute("r"), Some("1"));
    assert_eq!(diffuse.attribute("g"), Some("0.75"));
}
