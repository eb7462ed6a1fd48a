//! Integration tests for the frame workflow
//!
//! Builds a small scene through the public API (camera, layers, actors),
//! drives frames through a host, and checks the draw calls the host receives.
//!
//! Run with: cargo test --test frame_integration_tests

use tessera_renderer::glam::{Vec2, Vec3};
use tessera_renderer::tessera::{
    DrawPass, Error, FrameDriver, FrameHost, RendererConfig, RendererState, Result,
};
use tessera_renderer::tessera::camera::Camera;
use tessera_renderer::tessera::layer::{ContentKind, LayerDesc, MeshActor, ProjectionMode, SpriteActor};
use tessera_renderer::tessera::sink::{RecordedDraw, RecordingSink, Rgba};

// ============================================================================
// TEST HOST
// ============================================================================

/// Host that keeps one recording per presented frame
#[derive(Default)]
struct CapturingHost {
    frames: Vec<RecordingSink>,
}

impl FrameHost for CapturingHost {
    fn present(&mut self, pass: &dyn DrawPass) -> Result<()> {
        let mut sink = RecordingSink::new();
        pass.draw(&mut sink)?;
        self.frames.push(sink);
        Ok(())
    }
}

/// Unit quad facing +Z, two counter-clockwise triangles
#[rustfmt::skip]
fn quad(path: &str) -> MeshActor {
    let data: [f32; 20] = [
        -1.0, -1.0, 0.0, 0.0, 1.0,
         1.0, -1.0, 0.0, 1.0, 1.0,
         1.0,  1.0, 0.0, 1.0, 0.0,
        -1.0,  1.0, 0.0, 0.0, 0.0,
    ];
    MeshActor::from_interleaved(&data, vec![0, 1, 2, 0, 2, 3], path).unwrap()
}

fn build_scene() -> FrameDriver {
    let camera = Camera::new(Vec3::new(0.0, 2.0, 12.0), Vec3::ZERO).with_fov_degrees(75.0);
    let state = RendererState::new(camera, RendererConfig::default()).unwrap();
    let mut driver = FrameDriver::new(state);

    driver.register_layer(LayerDesc::new("ui", 1000.0, ProjectionMode::Screen, ContentKind::Sprite));
    driver.register_layer(LayerDesc::new("ground", -1.0, ProjectionMode::Perspective, ContentKind::Mesh));
    driver.register_layer(
        LayerDesc::new("mountains", -50.0, ProjectionMode::Orthographic, ContentKind::Sprite)
            .with_parallax_table(vec![0.25]),
    );
    driver.register_layer(LayerDesc::new("foreground_mesh", 500.0, ProjectionMode::Perspective, ContentKind::Mesh));

    let layers = driver.layers_mut();
    layers
        .sprites_mut("ui")
        .unwrap()
        .push(SpriteActor::new(Vec3::new(20.0, 20.0, 0.0), Vec2::new(64.0, 16.0), "ui/health.png"));
    layers.meshes_mut("ground").unwrap().push(quad("tiles/ground.png"));
    layers
        .sprites_mut("mountains")
        .unwrap()
        .push(SpriteActor::new(Vec3::new(0.0, 5.0, -40.0), Vec2::new(512.0, 128.0), "bg/mountains.png"));
    layers.meshes_mut("foreground_mesh").unwrap().push(quad("fx/glass.png"));
    driver
}

// ============================================================================
// FRAME TESTS
// ============================================================================

#[test]
fn test_integration_full_frame() {
    let mut driver = build_scene();
    let mut host = CapturingHost::default();

    driver.tick(&mut host).unwrap();
    assert_eq!(host.frames.len(), 1);
    let frame = &host.frames[0];

    // Mountains first, UI last
    match frame.draws.first() {
        Some(RecordedDraw::Sprite(sprite)) => assert_eq!(sprite.path, "bg/mountains.png"),
        other => panic!("unexpected first draw: {:?}", other),
    }
    match frame.draws.last() {
        Some(RecordedDraw::Sprite(sprite)) => {
            assert_eq!(sprite.path, "ui/health.png");
            assert_eq!(sprite.position, Vec2::new(20.0, 20.0));
        }
        other => panic!("unexpected last draw: {:?}", other),
    }

    // Two quads (ground and foreground), both facing the camera
    assert_eq!(frame.triangles().count(), 4);
    assert_eq!(frame.lines().count(), 12);
    assert!(frame
        .lines()
        .all(|line| line.color == Rgba::new(255, 128, 255, 255) && line.width == 1.0));
    for triangle in frame.triangles() {
        assert_eq!(triangle.color.a, 255);
        assert_eq!(triangle.color.r, triangle.color.g);
    }
}

#[test]
fn test_integration_camera_moves_between_frames() {
    let mut driver = build_scene();
    let mut host = CapturingHost::default();

    driver.tick(&mut host).unwrap();
    driver.camera_mut().set_position(Vec3::new(6.0, 2.0, 12.0));
    driver.tick(&mut host).unwrap();

    let mountain_x = |sink: &RecordingSink| {
        sink.sprites()
            .find(|s| s.path == "bg/mountains.png")
            .map(|s| s.position.x)
            .unwrap()
    };
    assert_ne!(mountain_x(&host.frames[0]), mountain_x(&host.frames[1]));

    // Screen-space sprites do not follow the camera
    let ui = |sink: &RecordingSink| sink.sprites().find(|s| s.path == "ui/health.png").unwrap().position;
    assert_eq!(ui(&host.frames[0]), ui(&host.frames[1]));
}

#[test]
fn test_integration_camera_looking_away_culls_everything() {
    let mut driver = build_scene();
    driver.camera_mut().set_target(Vec3::new(0.0, 2.0, 30.0));

    let mut sink = RecordingSink::new();
    driver.tick(&mut CapturingHost::default()).unwrap();
    let stats = driver.render_designated_layer("ground", &mut sink).unwrap();

    // Every vertex is behind the camera, so the quad is mirrored and
    // its winding flips
    assert_eq!(stats.triangles_drawn, 0);
    assert_eq!(stats.triangles_culled, 2);
}

#[test]
fn test_integration_foreground_pass_is_separate() {
    let mut driver = build_scene();
    driver.tick(&mut CapturingHost::default()).unwrap();

    let mut sink = RecordingSink::new();
    let stats = driver.render_foreground(&mut sink).unwrap();

    assert_eq!(stats.triangles_drawn, 2);
    assert!(sink.triangles().all(|t| t.path == "fx/glass.png"));
    assert_eq!(sink.sprites().count(), 0);
}

#[test]
fn test_integration_wireframe_disabled() {
    let mut driver = build_scene();
    driver.state_mut().set_wireframe(false);

    let mut host = CapturingHost::default();
    driver.tick(&mut host).unwrap();

    assert_eq!(host.frames[0].lines().count(), 0);
    assert_eq!(host.frames[0].triangles().count(), 4);
}

#[test]
fn test_integration_degenerate_camera_skips_frame() {
    let mut driver = build_scene();
    let mut host = CapturingHost::default();

    driver.camera_mut().set_target(Vec3::new(0.0, 50.0, 12.0));
    assert!(matches!(driver.tick(&mut host), Err(Error::DegenerateCamera(_))));
    assert!(host.frames.is_empty());
}
