use glam::{Vec2, Vec3};
use crate::camera::{Camera, FrameView};
use crate::config::DEFAULT_NEAR_EPSILON;
use crate::sink::{RecordingSink, SPRITE_CENTER_ANCHOR};
use super::*;

/// Camera at z=10 looking at the origin: right = +X, up = +Y, forward = -Z
fn front_view(zoom: f32) -> FrameView {
    FrameView::from_camera(&Camera::default().with_zoom(zoom).with_fov_degrees(90.0)).unwrap()
}

fn oblique_view() -> FrameView {
    FrameView::from_camera(
        &Camera::new(Vec3::new(4.0, 3.0, -7.0), Vec3::new(-1.0, 0.5, 2.0)).with_zoom(1.5),
    )
    .unwrap()
}

fn sprite_at(position: Vec3) -> SpriteActor {
    SpriteActor::new(position, Vec2::new(32.0, 16.0), "ship.png")
}

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

// ============================================================================
// Screen mode
// ============================================================================

#[test]
fn test_screen_passthrough() {
    let view = oblique_view();
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);

    let projection = pipeline.project_screen(&sprite_at(Vec3::new(100.0, 50.0, -999.0)));
    assert_eq!(projection.position, Vec2::new(100.0, 50.0));
    assert_eq!(projection.size, Vec2::new(32.0, 16.0));
}

// ============================================================================
// Orthographic mode
// ============================================================================

#[test]
fn test_orthographic_projection() {
    let view = front_view(2.0);
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);

    let projection = pipeline.project_orthographic(&sprite_at(Vec3::new(3.0, 2.0, 0.0)));
    // x is mirrored along right
    assert!(approx(projection.position, Vec2::new(-6.0, 4.0)));
    assert!(approx(projection.size, Vec2::new(64.0, 32.0)));
}

#[test]
fn test_orthographic_is_linear_and_ignores_forward() {
    let view = oblique_view();
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);
    let basis = view.basis;

    let p = Vec3::new(0.5, -2.0, 3.0);
    let delta_plane = basis.right * 2.0 - basis.up * 0.75;
    let base = pipeline.project_orthographic(&sprite_at(p)).position;

    for along_forward in [-5.0, 0.0, 12.0] {
        let moved = p + delta_plane + basis.forward * along_forward;
        let shifted = pipeline.project_orthographic(&sprite_at(moved)).position;
        let expected = Vec2::new(-2.0 * view.zoom, -0.75 * view.zoom);
        assert!(approx(shifted - base, expected), "forward offset {} changed the projection", along_forward);
    }
}

#[test]
fn test_orthographic_scale_is_uniform_with_distance() {
    let view = front_view(3.0);
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);

    let near = pipeline.project_orthographic(&sprite_at(Vec3::new(0.0, 0.0, 9.0)));
    let far = pipeline.project_orthographic(&sprite_at(Vec3::new(0.0, 0.0, -500.0)));
    assert_eq!(near.size, far.size);
}

// ============================================================================
// Perspective mode
// ============================================================================

#[test]
fn test_perspective_forward_axis_maps_to_origin() {
    let view = oblique_view();
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);

    for distance in [0.01, 1.0, 7.5, 250.0] {
        let point = view.eye + view.basis.forward * distance;
        let projection = pipeline.project_perspective(&sprite_at(point)).unwrap();
        assert!(approx(projection.position, Vec2::ZERO), "distance {} -> {:?}", distance, projection.position);
    }
}

#[test]
fn test_perspective_divides_by_depth() {
    // 90 degree FOV: half_fov = 1, so divisor = 1 / depth
    let view = front_view(1.0);
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);

    let projection = pipeline.project_perspective(&sprite_at(Vec3::new(4.0, 2.0, 8.0))).unwrap();
    // depth = 2
    assert!(approx(projection.position, Vec2::new(-2.0, 1.0)));
    assert!(approx(projection.size, Vec2::new(16.0, 8.0)));

    let farther = pipeline.project_perspective(&sprite_at(Vec3::new(4.0, 2.0, 6.0))).unwrap();
    assert!(farther.size.x < projection.size.x);
}

#[test]
fn test_perspective_culls_at_and_behind_camera_plane() {
    let view = front_view(1.0);
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);

    // On the camera plane
    assert!(pipeline.project_perspective(&sprite_at(Vec3::new(1.0, 1.0, 10.0))).is_none());
    // Behind the camera
    assert!(pipeline.project_perspective(&sprite_at(Vec3::new(0.0, 0.0, 15.0))).is_none());
    // Inside the threshold
    let inside = Vec3::new(0.0, 0.0, 10.0 - DEFAULT_NEAR_EPSILON * 0.5);
    assert!(pipeline.project_perspective(&sprite_at(inside)).is_none());
}

#[test]
fn test_project_dispatches_on_mode() {
    let view = front_view(2.0);
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);
    let actor = sprite_at(Vec3::new(1.0, 1.0, 0.0));

    assert_eq!(pipeline.project(&actor, ProjectionMode::Screen), Some(pipeline.project_screen(&actor)));
    assert_eq!(pipeline.project(&actor, ProjectionMode::Orthographic), Some(pipeline.project_orthographic(&actor)));
    assert_eq!(pipeline.project(&actor, ProjectionMode::Perspective), pipeline.project_perspective(&actor));
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn test_draw_layer_emits_center_anchored_defaults() {
    let view = front_view(1.0);
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);
    let actors = vec![sprite_at(Vec3::new(0.0, 0.0, 0.0)), sprite_at(Vec3::new(1.0, 0.0, 0.0))];

    let mut sink = RecordingSink::new();
    let mut stats = DrawStats::default();
    pipeline.draw_layer_orthographic(&actors, &mut sink, &mut stats).unwrap();

    assert_eq!(stats.sprites_drawn, 2);
    let sprites: Vec<_> = sink.sprites().collect();
    assert_eq!(sprites.len(), 2);
    for sprite in &sprites {
        assert_eq!(sprite.anchor, SPRITE_CENTER_ANCHOR);
        assert!(sprite.defaults_only);
        assert_eq!(sprite.path, "ship.png");
    }
    // Sequence order preserved
    assert!(approx(sprites[1].position, Vec2::new(-1.0, 0.0)));
}

#[test]
fn test_draw_layer_perspective_skips_culled_actors() {
    let view = front_view(1.0);
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);
    let actors = vec![
        sprite_at(Vec3::new(0.0, 0.0, 0.0)),
        sprite_at(Vec3::new(0.0, 0.0, 20.0)),
        sprite_at(Vec3::new(0.0, 0.0, 5.0)),
    ];

    let mut sink = RecordingSink::new();
    let mut stats = DrawStats::default();
    pipeline.draw_layer_perspective(&actors, &mut sink, &mut stats).unwrap();

    assert_eq!(stats.sprites_drawn, 2);
    assert_eq!(stats.sprites_culled, 1);
    assert_eq!(sink.draws.len(), 2);
    assert!(sink.sprites().all(|s| s.size.x.is_finite() && s.size.x > 0.0));
}

#[test]
fn test_draw_layer_screen() {
    let view = front_view(1.0);
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);
    let actors = vec![sprite_at(Vec3::new(640.0, 360.0, 0.0))];

    let mut sink = RecordingSink::new();
    let mut stats = DrawStats::default();
    pipeline.draw_layer_screen(&actors, &mut sink, &mut stats).unwrap();

    assert_eq!(sink.sprites().next().unwrap().position, Vec2::new(640.0, 360.0));
}

#[test]
fn test_draw_layer_propagates_sink_error() {
    let view = front_view(1.0);
    let pipeline = SpritePipeline::new(&view, DEFAULT_NEAR_EPSILON);
    let actors = vec![sprite_at(Vec3::ZERO), sprite_at(Vec3::X)];

    let mut sink = RecordingSink::failing_after(1);
    let mut stats = DrawStats::default();
    let result = pipeline.draw_layer_screen(&actors, &mut sink, &mut stats);

    assert!(matches!(result, Err(crate::error::Error::Sink(_))));
    assert_eq!(stats.sprites_drawn, 1);
}
