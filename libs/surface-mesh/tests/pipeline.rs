use approx::assert_relative_eq;
use config::constants::{TextureConfig, DEFAULT_PHI_DIVISIONS, DEFAULT_THETA_DIVISIONS};
use glam::{DVec2, DVec3};
use rayon::prelude::*;
use surface_mesh::data::{ScatterDataset, TerrainModel};
use surface_mesh::surface::{
    bounding_box_outline, scatter_plot, scatter_plot_default, terrain_surface, SurfaceTexture,
};
use surface_mesh::texture::{apply_texture, ScatterValue};
use surface_mesh::{build_frame, IndexRange, Mesh, MeshBuilder, SurfaceError};

/// Terrain rising 1 unit per column towards +x.
fn east_ramp(rows: usize, columns: usize) -> TerrainModel {
    let heights = (0..rows * columns).map(|i| (i % columns) as f64).collect();
    TerrainModel::new(DVec2::ZERO, DVec2::ONE, columns, heights).unwrap()
}

fn assert_aligned(mesh: &Mesh) {
    assert_eq!(mesh.vertex_count(), mesh.normals().len());
    assert_eq!(mesh.vertex_count(), mesh.texture_coordinates().len());
    assert!(mesh.validate().is_ok());
    for uv in mesh.texture_coordinates() {
        assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y));
    }
}

#[test]
fn terrain_slope_angle_saturates_on_steep_ramp() {
    let mesh = terrain_surface(&east_ramp(3, 4), SurfaceTexture::SlopeAngle, &TextureConfig::default()).unwrap();
    assert_aligned(&mesh);
    assert_eq!(mesh.triangle_count(), 12);
    // 45 degrees is past the 40 degree saturation
    assert!(mesh.texture_coordinates().iter().all(|uv| *uv == DVec2::ONE));
}

#[test]
fn terrain_slope_angle_honours_calibration() {
    let config = TextureConfig::new(90.0, 1e-12).unwrap();
    let mesh = terrain_surface(&east_ramp(2, 2), SurfaceTexture::SlopeAngle, &config).unwrap();
    for uv in mesh.texture_coordinates() {
        assert_relative_eq!(uv.x, 0.5, epsilon = 1e-9);
    }
}

#[test]
fn terrain_slope_direction_faces_downhill() {
    let mesh = terrain_surface(&east_ramp(3, 3), SurfaceTexture::SlopeDirection, &TextureConfig::default()).unwrap();
    assert_aligned(&mesh);
    // Normals lean west, 180 degrees round the wheel
    for uv in mesh.texture_coordinates() {
        assert_relative_eq!(uv.x, 0.5, epsilon = 1e-9);
        assert_eq!(uv.x, uv.y);
    }
}

#[test]
fn scatter_plot_maps_values_per_glyph() {
    let data = ScatterDataset::new(
        vec![DVec3::ZERO, DVec3::X, DVec3::Y],
        vec![10.0, 20.0, 30.0],
    )
    .unwrap();
    let plot = scatter_plot(&data, 0.2, 8, 6).unwrap();
    assert_aligned(&plot.mesh);
    assert_eq!(plot.mesh.vertex_count(), 3 * 8 * 6);

    for (glyph, expected) in plot.glyphs.iter().zip([0.0, 0.5, 1.0]) {
        assert_eq!(glyph.len(), 48);
        for uv in &plot.mesh.texture_coordinates()[glyph.iter()] {
            assert_eq!(*uv, DVec2::splat(expected));
        }
    }
}

#[test]
fn scatter_plot_substitutes_constant_for_equal_values() {
    let data = ScatterDataset::new(vec![DVec3::ZERO, DVec3::Z], vec![5.0, 5.0]).unwrap();
    let plot = scatter_plot(&data, 0.5, 6, 4).unwrap();
    assert!(plot
        .mesh
        .texture_coordinates()
        .iter()
        .all(|uv| *uv == DVec2::splat(0.5)));
}

#[test]
fn scatter_strategy_raises_degenerate_range() {
    let data = ScatterDataset::new(vec![DVec3::ZERO; 3], vec![5.0, 5.0, 5.0]).unwrap();
    let plot = scatter_plot(&data, 0.5, 6, 4).unwrap();
    let strategy = ScatterValue::new(data.values().to_vec(), plot.glyphs.clone());
    assert_eq!(
        apply_texture(plot.mesh, &strategy),
        Err(SurfaceError::DegenerateRange { value: 5.0 })
    );
}

#[test]
fn scatter_plot_rejects_bad_glyphs() {
    let data = ScatterDataset::new(vec![DVec3::ZERO], vec![1.0]).unwrap();
    assert!(matches!(
        scatter_plot(&data, 1.0, 2, 8),
        Err(SurfaceError::InvalidDivision { .. })
    ));
}

#[test]
fn scatter_plot_default_uses_default_resolution() {
    let data = ScatterDataset::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![0.0, 1.0, 2.0]).unwrap();
    let plot = scatter_plot_default(&data, 0.2).unwrap();
    let per_glyph = (DEFAULT_THETA_DIVISIONS * DEFAULT_PHI_DIVISIONS) as usize;

    assert_eq!(plot.mesh.vertex_count(), 3 * per_glyph);
    assert!(plot.glyphs.iter().all(|g| g.len() == per_glyph));
    assert_eq!(plot, scatter_plot(&data, 0.2, DEFAULT_THETA_DIVISIONS, DEFAULT_PHI_DIVISIONS).unwrap());
}

#[test]
fn outline_encloses_scatter_plot() {
    let data = ScatterDataset::new(vec![DVec3::ZERO, DVec3::splat(4.0)], vec![0.0, 1.0]).unwrap();
    let plot = scatter_plot(&data, 1.0, 12, 8).unwrap();
    let outline = bounding_box_outline(&plot.mesh, 0.05).unwrap();
    assert_aligned(&outline);

    let inner = plot.mesh.bounds().unwrap();
    let outer = outline.bounds().unwrap();
    assert!(outer.min.cmple(inner.min).all());
    assert!(outer.max.cmpge(inner.max).all());

    assert!(bounding_box_outline(&Mesh::default(), 0.05).unwrap().is_empty());
    assert!(bounding_box_outline(&plot.mesh, 0.0).is_err());
}

#[test]
fn parallel_sub_meshes_merge_like_one_builder() {
    let centers: Vec<DVec3> = (0..8).map(|i| DVec3::new(i as f64 * 3.0, 0.0, 0.0)).collect();

    let parts: Vec<Mesh> = centers
        .par_iter()
        .map(|center| {
            let mut builder = MeshBuilder::new();
            builder.append_sphere(*center, 1.0, 10, 6).unwrap();
            builder.finish()
        })
        .collect();
    let mut merged = Mesh::default();
    for part in &parts {
        merged.merge(part);
    }

    let mut builder = MeshBuilder::new();
    for center in &centers {
        builder.append_sphere(*center, 1.0, 10, 6).unwrap();
    }
    let sequential = builder.finish();

    assert_eq!(merged, sequential);
    assert_aligned(&merged);
}

#[test]
fn placed_glyph_keeps_texture_coordinates() {
    let mut builder = MeshBuilder::new();
    let glyph = builder.append_sphere(DVec3::ZERO, 1.0, 8, 6).unwrap();
    builder.fill_texture_coordinates(glyph, DVec2::splat(0.3)).unwrap();
    let mesh = builder.finish();

    let frame = build_frame(DVec3::X, DVec3::Z, DVec3::new(2.0, 3.0, 4.0)).unwrap();
    let placed = mesh.transformed(&frame);
    assert_eq!(placed.texture_coordinates(), mesh.texture_coordinates());
    for v in placed.vertices() {
        assert_relative_eq!((*v - DVec3::new(2.0, 3.0, 4.0)).length(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn mesh_serializes_for_host() {
    let mut builder = MeshBuilder::new();
    let range = builder.append_box(DVec3::ZERO, DVec3::ONE);
    let mesh = builder.finish();

    let json = serde_json::to_value(&mesh).unwrap();
    assert_eq!(json["vertices"].as_array().unwrap().len(), 24);
    assert_eq!(json["triangles"].as_array().unwrap().len(), 12);

    let back: Mesh = serde_json::from_value(json).unwrap();
    assert_eq!(back, mesh);
    assert_eq!(range, IndexRange::new(0, 24));
}

#[test]
fn misaligned_mesh_payload_is_rejected() {
    let json = r#"{
        "vertices": [[0.0, 0.0, 0.0]],
        "normals": [],
        "texture_coordinates": [[0.0, 0.0], [5.0, 5.0], [0.5, 0.5]],
        "triangles": [[0, 7, 9]]
    }"#;
    let err = serde_json::from_str::<Mesh>(json).unwrap_err();
    assert!(err.to_string().contains("normals"), "{err}");

    let out_of_range = r#"{
        "vertices": [[0.0, 0.0, 0.0]],
        "normals": [[0.0, 0.0, 1.0]],
        "texture_coordinates": [[5.0, 5.0]],
        "triangles": []
    }"#;
    assert!(serde_json::from_str::<Mesh>(out_of_range).is_err());

    let bad_index = r#"{
        "vertices": [[0.0, 0.0, 0.0]],
        "normals": [[0.0, 0.0, 1.0]],
        "texture_coordinates": [[0.0, 0.0]],
        "triangles": [[0, 7, 9]]
    }"#;
    assert!(serde_json::from_str::<Mesh>(bad_index).is_err());
}
