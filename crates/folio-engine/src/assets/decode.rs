//! Scene asset decoding: glTF / GLB bytes → one descriptor per mesh node.

use glam::Vec3;
use crate::errors::AssetError;

/// A mesh-bearing node found in the asset.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDesc {
    /// Node name, or empty if the exporter did not name it.
    pub name: String,
    /// Node translation relative to its parent.
    pub rest: Vec3,
}

/// Decode a glTF (JSON) or GLB (binary) scene and collect every node that
/// carries a mesh, depth first from the default scene's roots.
/// Non-mesh nodes (groups, lights, cameras) are walked but not collected.
///
/// Only the node graph is read. Mesh data is never touched, so compressed
/// primitives (`KHR_draco_mesh_compression`) and accessors without a buffer
/// view load fine.
#[cfg(feature = "gltf")]
pub fn decode_scene(bytes: &[u8]) -> Result<Vec<ElementDesc>, AssetError> {
    let gltf = gltf::Gltf::from_slice_without_validation(bytes)?;
    check_node_graph(gltf.as_json())?;

    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or(AssetError::NoScene)?;

    let mut out = Vec::new();
    let mut visited = vec![false; gltf.as_json().nodes.len()];
    for root in scene.nodes() {
        collect_meshes(&root, &mut visited, &mut out);
    }
    log::info!("decoded scene asset: {} mesh nodes", out.len());
    Ok(out)
}

/// The graph walk follows raw indices, so they must all be in range.
#[cfg(feature = "gltf")]
fn check_node_graph(root: &gltf::json::Root) -> Result<(), AssetError> {
    let nodes = root.nodes.len();
    let bad = |what: &str, index: usize| AssetError::Parse(format!("{} index {} out of range", what, index));

    if let Some(scene) = root.scene {
        if scene.value() >= root.scenes.len() {
            return Err(bad("scene", scene.value()));
        }
    }
    for scene in &root.scenes {
        if let Some(node) = scene.nodes.iter().find(|n| n.value() >= nodes) {
            return Err(bad("node", node.value()));
        }
    }
    for node in &root.nodes {
        if let Some(mesh) = node.mesh {
            if mesh.value() >= root.meshes.len() {
                return Err(bad("mesh", mesh.value()));
            }
        }
        let children = node.children.as_deref().unwrap_or_default();
        if let Some(child) = children.iter().find(|c| c.value() >= nodes) {
            return Err(bad("node", child.value()));
        }
    }
    Ok(())
}

#[cfg(feature = "gltf")]
fn collect_meshes(node: &gltf::Node<'_>, visited: &mut [bool], out: &mut Vec<ElementDesc>) {
    // Cyclic or shared children are visited once.
    if std::mem::replace(&mut visited[node.index()], true) {
        return;
    }
    if node.mesh().is_some() {
        let (translation, _rotation, _scale) = node.transform().decomposed();
        out.push(ElementDesc {
            name: node.name().unwrap_or_default().to_string(),
            rest: Vec3::from_array(translation),
        });
    }
    for child in node.children() {
        collect_meshes(&child, visited, out);
    }
}

#[cfg(not(feature = "gltf"))]
pub fn decode_scene(_bytes: &[u8]) -> Result<Vec<ElementDesc>, AssetError> {
    Err(AssetError::Unsupported)
}

#[cfg(all(test, feature = "gltf"))]
mod tests {
    use super::*;

    /// Two meshes under a group node, one mesh at the root, one empty node.
    const HOUSE: &str = r#"{
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [ { "nodes": [0, 3] } ],
        "nodes": [
            { "name": "walls_group", "translation": [0.0, 0.0, 0.0], "children": [1, 2] },
            { "name": "wall_left", "mesh": 0, "translation": [-1.0, 1.0, 0.0] },
            { "name": "door", "mesh": 0, "translation": [0.0, 0.9, 1.5] },
            { "name": "roof", "mesh": 0, "translation": [0.0, 2.5, 0.0], "children": [4] },
            { "name": "marker" }
        ],
        "meshes": [
            { "primitives": [ { "attributes": { "POSITION": 0 } } ] }
        ],
        "accessors": [
            {
                "componentType": 5126,
                "count": 3,
                "type": "VEC3",
                "min": [0.0, 0.0, 0.0],
                "max": [1.0, 1.0, 0.0]
            }
        ]
    }"#;

    #[test]
    fn collects_mesh_nodes_depth_first() {
        let descs = decode_scene(HOUSE.as_bytes()).unwrap();
        let names: Vec<&str> = descs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["wall_left", "door", "roof"]);
        assert_eq!(descs[1].rest, Vec3::new(0.0, 0.9, 1.5));
    }

    /// Draco-compressed house: primitives carry the extension and the
    /// accessors have no buffer view of their own.
    const DRACO_HOUSE: &str = r#"{
        "asset": { "version": "2.0" },
        "extensionsUsed": ["KHR_draco_mesh_compression"],
        "extensionsRequired": ["KHR_draco_mesh_compression"],
        "scene": 0,
        "scenes": [ { "nodes": [0, 1] } ],
        "nodes": [
            { "name": "walls", "mesh": 0, "translation": [0.0, 1.0, 0.0] },
            { "name": "roof", "mesh": 0, "translation": [0.0, 2.4, 0.0] }
        ],
        "meshes": [
            { "primitives": [ {
                "attributes": { "POSITION": 0 },
                "extensions": {
                    "KHR_draco_mesh_compression": { "bufferView": 0, "attributes": { "POSITION": 0 } }
                }
            } ] }
        ],
        "accessors": [
            { "componentType": 5126, "count": 3, "type": "VEC3",
              "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] }
        ],
        "bufferViews": [ { "buffer": 0, "byteLength": 12 } ],
        "buffers": [ { "byteLength": 12 } ]
    }"#;

    #[test]
    fn draco_compressed_asset_decodes() {
        let descs = decode_scene(DRACO_HOUSE.as_bytes()).unwrap();
        let names: Vec<&str> = descs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["walls", "roof"]);
        assert_eq!(descs[1].rest, Vec3::new(0.0, 2.4, 0.0));
    }

    #[test]
    fn dangling_child_index_is_a_parse_error() {
        let json = r#"{
            "asset": { "version": "2.0" },
            "scenes": [ { "nodes": [0] } ],
            "nodes": [ { "name": "walls", "children": [7] } ]
        }"#;
        let err = decode_scene(json.as_bytes()).unwrap_err();
        assert!(matches!(err, AssetError::Parse(_)));
    }

    #[test]
    fn child_cycle_is_walked_once() {
        let json = r#"{
            "asset": { "version": "2.0" },
            "scenes": [ { "nodes": [0] } ],
            "nodes": [
                { "name": "a", "mesh": 0, "children": [1] },
                { "name": "b", "mesh": 0, "children": [0] }
            ],
            "meshes": [ { "primitives": [ { "attributes": {} } ] } ]
        }"#;
        let descs = decode_scene(json.as_bytes()).unwrap();
        assert_eq!(descs.len(), 2);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = decode_scene(b"definitely not a model").unwrap_err();
        assert!(matches!(err, AssetError::Parse(_)));
    }

    #[test]
    fn file_without_scenes_is_rejected() {
        let json = r#"{ "asset": { "version": "2.0" } }"#;
        let err = decode_scene(json.as_bytes()).unwrap_err();
        assert!(matches!(err, AssetError::NoScene));
    }
}
