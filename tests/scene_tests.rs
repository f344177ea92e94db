// Host-side tests for geometry, pointer picking, post chain and options.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;
use glam::{Vec2, Vec3};
use std::collections::HashMap;

#[test]
fn plane_has_grid_vertices_and_two_triangles_per_cell() {
    let g = plane_geometry(1.0, 1.0, 10, 10);
    assert_eq!(g.vertices.len(), 11 * 11);
    assert_eq!(g.indices.len(), 10 * 10 * 6);
    assert!(g.indices.iter().all(|&i| (i as usize) < g.vertices.len()));
}

#[test]
fn plane_spans_unit_square_with_bottom_left_uv_origin() {
    let g = plane_geometry(1.0, 1.0, 1, 1);
    let top_left = g.vertices[0];
    assert_eq!(top_left.position, [-0.5, 0.5, 0.0]);
    assert_eq!(top_left.uv, [0.0, 1.0]);
    let bottom_right = g.vertices[3];
    assert_eq!(bottom_right.position, [0.5, -0.5, 0.0]);
    assert_eq!(bottom_right.uv, [1.0, 0.0]);
}

#[test]
fn plane_triangles_face_the_camera() {
    let g = plane_geometry(2.0, 1.0, 3, 2);
    for tri in g.indices.chunks_exact(3) {
        let p = |i: u32| Vec3::from_array(g.vertices[i as usize].position);
        let n = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        assert!(n.z > 0.0);
    }
}

#[test]
fn box_has_outward_counter_clockwise_faces() {
    let g = box_geometry(0.2);
    assert_eq!(g.vertices.len(), 24);
    assert_eq!(g.indices.len(), 36);
    for tri in g.indices.chunks_exact(3) {
        let v = |i: u32| g.vertices[i as usize];
        let p = |i: u32| Vec3::from_array(v(i).position);
        let face = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        assert!(face.dot(Vec3::from_array(v(tri[0]).normal)) > 0.0);
    }
    for vert in &g.vertices {
        assert!(vert.position.iter().all(|c| (c.abs() - 0.1).abs() < 1e-6));
    }
}

#[test]
fn wireframe_lists_each_edge_once() {
    let g = plane_geometry(1.0, 1.0, 2, 2);
    let wire = g.wireframe_indices();
    // Horizontal + vertical grid edges plus one diagonal per cell
    assert_eq!(wire.len() / 2, 2 * 2 * 3 + 2 * 2);
    let mut counts: HashMap<(u32, u32), u32> = HashMap::new();
    for pair in wire.chunks_exact(2) {
        *counts.entry((pair[0], pair[1])).or_default() += 1;
    }
    assert!(counts.values().all(|&c| c == 1));
}

#[test]
fn geometry_keys_build_expected_meshes() {
    assert_eq!(Geometry::build(GeometryKey::Cube).vertices.len(), 24);
    assert_eq!(Geometry::build(GeometryKey::ShadedPlane).vertices.len(), 16 * 16);
    assert_eq!(
        Geometry::build(GeometryKey::UnitPlane { segments: 30 }).indices.len(),
        30 * 30 * 6
    );
}

#[test]
fn model_matrix_applies_scale_then_translation() {
    let mut mesh = MeshInstance::new(GeometryKey::UnitPlane { segments: 10 }, MaterialKind::Image);
    mesh.position = Vec3::new(-175.0, 175.0, 0.0);
    mesh.scale = Vec3::new(50.0, 50.0, 1.0);
    let corner = mesh.model_matrix().transform_point3(Vec3::new(0.5, 0.5, 0.0));
    assert!((corner - Vec3::new(-150.0, 200.0, 0.0)).length() < 1e-4);
}

#[test]
fn textured_materials_are_flagged() {
    assert!(MaterialKind::Image.is_textured());
    assert!(MaterialKind::Ocean { wireframe: false }.is_textured());
    assert!(!MaterialKind::Normal.is_textured());
    assert!(!MaterialKind::Shaded.is_textured());
}

#[test]
fn client_to_ndc_maps_corners() {
    let size = Vec2::new(800.0, 600.0);
    assert_eq!(pick::client_to_ndc(Vec2::ZERO, size), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(pick::client_to_ndc(size, size), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(pick::client_to_ndc(Vec2::ZERO, Vec2::new(0.0, 600.0)), None);
}

#[test]
fn ray_rect_reports_uv_from_bottom_left() {
    let hit = pick::ray_rect(
        Vec3::new(10.0, -20.0, 600.0),
        Vec3::NEG_Z,
        Vec3::ZERO,
        Vec2::new(100.0, 100.0),
    );
    let (t, uv) = hit.unwrap();
    assert!((t - 600.0).abs() < 1e-4);
    assert!((uv - Vec2::new(0.6, 0.3)).length() < 1e-5);
}

#[test]
fn ray_rect_rejects_misses_and_empty_rects() {
    let ro = Vec3::new(0.0, 0.0, 600.0);
    assert!(pick::ray_rect(ro, Vec3::NEG_Z, Vec3::new(200.0, 0.0, 0.0), Vec2::splat(100.0)).is_none());
    assert!(pick::ray_rect(ro, Vec3::NEG_Z, Vec3::ZERO, Vec2::ZERO).is_none());
    assert!(pick::ray_rect(ro, Vec3::Z, Vec3::ZERO, Vec2::splat(100.0)).is_none());
}

#[test]
fn nearest_hit_prefers_closest_plane() {
    let ro = Vec3::new(0.0, 0.0, 600.0);
    let candidates = vec![
        (4, Vec3::new(0.0, 0.0, 0.0), Vec2::splat(100.0)),
        (9, Vec3::new(0.0, 0.0, 50.0), Vec2::splat(100.0)),
    ];
    let (index, uv) = pick::nearest_hit(ro, Vec3::NEG_Z, candidates).unwrap();
    assert_eq!(index, 9);
    assert!((uv - Vec2::splat(0.5)).length() < 1e-5);
}

#[test]
fn post_chain_updates_only_scroll_pass() {
    let mut chain = PostChain::scroll_and_shift(0.01, 1.0);
    chain.set_scroll_speed(2.5);
    assert_eq!(chain.passes[0], PostPass::ScrollDistort { scroll_speed: 2.5 });
    assert_eq!(chain.passes[1], PostPass::RgbShift { amount: 0.01, angle: 1.0 });
    assert!(PostChain::default().is_empty());
}

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn options_default_to_post_variant() {
    let opts = SketchOptions::from_lookup(lookup(&[]));
    assert_eq!(opts, SketchOptions::default());
    assert_eq!(opts.variant, Variant::Post);
    assert!(!opts.orbit);
    assert_eq!(opts.camera_distance, 600.0);
    assert_eq!(opts.image_selector, "img");
}

#[test]
fn options_parse_data_attributes() {
    let opts = SketchOptions::from_lookup(lookup(&[
        ("variant", " Ocean "),
        ("camera-distance", "800"),
        ("wireframe", "true"),
        ("ocean-selector", ".sea"),
        ("rgb-amount", "0.02"),
        ("log-level", "debug"),
    ]));
    assert_eq!(opts.variant, Variant::Ocean);
    assert_eq!(opts.camera_distance, 800.0);
    assert!(opts.wireframe);
    assert_eq!(opts.ocean_selector, ".sea");
    assert_eq!(opts.rgb_amount, 0.02);
    assert_eq!(opts.log_level, log::LevelFilter::Debug);
}

#[test]
fn primitive_variants_enable_orbit_by_default() {
    let opts = SketchOptions::from_lookup(lookup(&[("variant", "cube")]));
    assert!(opts.orbit);
    let opts = SketchOptions::from_lookup(lookup(&[("variant", "plane"), ("orbit", "false")]));
    assert!(!opts.orbit);
}

#[test]
fn malformed_options_fall_back_to_defaults() {
    let opts = SketchOptions::from_lookup(lookup(&[
        ("variant", "teapot"),
        ("camera-distance", "-5"),
        ("orbit", "sometimes"),
        ("image-selector", "  "),
    ]));
    assert_eq!(opts.variant, Variant::Post);
    assert_eq!(opts.camera_distance, 600.0);
    assert!(!opts.orbit);
    assert_eq!(opts.image_selector, "img");
}

#[test]
fn variant_names_round_trip_through_parsing() {
    for variant in [
        Variant::Cube,
        Variant::Plane,
        Variant::Ocean,
        Variant::Images,
        Variant::Post,
    ] {
        assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
    }
}
