//! Animation System Tests
//!
//! Tests for:
//! - KeyframeTrack linear/step/cubic interpolation
//! - Interpolatable trait implementations (f32, Vec3, Quat)
//! - AnimationClip duration auto-computation
//! - Binder name resolution
//! - Stateless clip sampling onto a scene
//! - AnimationController states, layers and duration queries

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use glam::{Quat, Vec3};

use vatbake::animation::binding::TargetPath;
use vatbake::animation::clip::{AnimationClip, Track, TrackData, TrackMeta};
use vatbake::animation::controller::{AnimationController, BASE_LAYER};
use vatbake::animation::tracks::{InterpolationMode, KeyframeTrack};
use vatbake::animation::values::Interpolatable;
use vatbake::animation::{Binder, sample_clip};
use vatbake::errors::BakeError;
use vatbake::scene::{Node, Scene};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// KeyframeTrack: Linear Interpolation (f32)
// ============================================================================

#[test]
fn track_linear_f32_midpoint() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![0.0_f32, 10.0],
        InterpolationMode::Linear,
    );

    let val = track.sample(0.5);
    assert!(approx(val, 5.0), "Expected 5.0, got {val}");
}

#[test]
fn track_linear_f32_exact_keyframes() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![0.0_f32, 10.0, 20.0],
        InterpolationMode::Linear,
    );

    assert!(approx(track.sample(0.0), 0.0));
    assert!(approx(track.sample(1.0), 10.0));
    assert!(approx(track.sample(2.0), 20.0));
}

#[test]
fn track_linear_f32_clamp_beyond_range() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![0.0_f32, 10.0],
        InterpolationMode::Linear,
    );

    // Sampling beyond the last keyframe should clamp to last value
    let val = track.sample(5.0);
    assert!(approx(val, 10.0), "Expected 10.0, got {val}");
}

#[test]
fn track_linear_f32_before_first() {
    let track = KeyframeTrack::new(
        vec![1.0, 2.0],
        vec![10.0_f32, 20.0],
        InterpolationMode::Linear,
    );

    // Before first keyframe: should clamp to first value
    let val = track.sample(0.5);
    assert!(approx(val, 10.0), "Expected 10.0, got {val}");
}

// ============================================================================
// KeyframeTrack: Step Interpolation
// ============================================================================

#[test]
fn track_step_holds_value() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![0.0_f32, 100.0, 200.0],
        InterpolationMode::Step,
    );

    assert!(approx(track.sample(0.0), 0.0));
    assert!(approx(track.sample(0.5), 0.0));
    assert!(approx(track.sample(0.99), 0.0));
    assert!(approx(track.sample(1.0), 100.0));
    assert!(approx(track.sample(1.5), 100.0));
    assert!(approx(track.sample(2.0), 200.0));
}

// ============================================================================
// KeyframeTrack: Linear Interpolation (Vec3, Quat)
// ============================================================================

#[test]
fn track_linear_vec3() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0)],
        InterpolationMode::Linear,
    );

    let val = track.sample(0.5);
    assert!(approx(val.x, 5.0));
    assert!(approx(val.y, 10.0));
    assert!(approx(val.z, 15.0));
}

#[test]
fn track_linear_quat_slerp() {
    let q0 = Quat::IDENTITY;
    let q1 = Quat::from_rotation_y(PI);

    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![q0, q1], InterpolationMode::Linear);

    let val = track.sample(0.5);
    let expected = q0.slerp(q1, 0.5);
    let angle = val.angle_between(expected);
    assert!(angle < 0.01, "Quaternion slerp mismatch: angle={angle}");
}

// ============================================================================
// KeyframeTrack: Cubic Spline Interpolation
// ============================================================================

#[test]
fn track_cubic_f32_endpoints() {
    // CubicSpline: values = [in_tangent0, value0, out_tangent0, in_tangent1, value1, out_tangent1]
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![
            0.0_f32, 0.0, 1.0, // frame 0: in_tangent=0, value=0, out_tangent=1
            1.0, 10.0, 0.0, // frame 1: in_tangent=1, value=10, out_tangent=0
        ],
        InterpolationMode::CubicSpline,
    );

    let v0 = track.sample(0.0);
    assert!(approx(v0, 0.0), "got {v0}");
    let v1 = track.sample(1.0);
    assert!(approx(v1, 10.0), "got {v1}");
}

#[test]
fn track_cubic_f32_smooth_midpoint() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![
            0.0_f32, 0.0, 0.0, // frame 0: zero tangents, value=0
            0.0, 10.0, 0.0, // frame 1: zero tangents, value=10
        ],
        InterpolationMode::CubicSpline,
    );

    // With zero tangents, Hermite interpolation midpoint should be ~5.0
    let val = track.sample(0.5);
    assert!((val - 5.0).abs() < 1.0, "Cubic midpoint expected ~5.0, got {val}");
}

// ============================================================================
// Interpolatable Implementations
// ============================================================================

#[test]
fn interpolatable_f32_linear() {
    let result = f32::interpolate_linear(0.0, 10.0, 0.25);
    assert!(approx(result, 2.5));
}

#[test]
fn interpolatable_vec3_linear() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(10.0, 20.0, 30.0);
    let result = Vec3::interpolate_linear(a, b, 0.5);
    assert!(approx(result.x, 5.0));
    assert!(approx(result.y, 10.0));
    assert!(approx(result.z, 15.0));
}

#[test]
fn interpolatable_quat_linear_is_slerp() {
    let a = Quat::IDENTITY;
    let b = Quat::from_rotation_y(FRAC_PI_2);
    let result = Quat::interpolate_linear(a, b, 0.5);

    let expected = a.slerp(b, 0.5);
    let angle = result.angle_between(expected);
    assert!(angle < 1e-4, "Slerp mismatch: angle={angle}");
}

// ============================================================================
// AnimationClip Auto-Duration
// ============================================================================

fn translation_track(node: &str, end_time: f32, end_value: Vec3) -> Track {
    Track {
        meta: TrackMeta {
            node_name: node.to_string(),
            target: TargetPath::Translation,
        },
        data: TrackData::Vector3(KeyframeTrack::new(
            vec![0.0, end_time],
            vec![Vec3::ZERO, end_value],
            InterpolationMode::Linear,
        )),
    }
}

#[test]
fn clip_auto_duration() {
    let clip = AnimationClip::new(
        "test".to_string(),
        vec![
            translation_track("a", 1.5, Vec3::X),
            Track {
                meta: TrackMeta {
                    node_name: "b".to_string(),
                    target: TargetPath::Rotation,
                },
                data: TrackData::Quaternion(KeyframeTrack::new(
                    vec![0.0, 3.0],
                    vec![Quat::IDENTITY, Quat::from_rotation_y(1.0)],
                    InterpolationMode::Linear,
                )),
            },
        ],
    );

    assert!(
        approx(clip.duration, 3.0),
        "Duration should be max of all tracks (3.0), got {}",
        clip.duration
    );
}

#[test]
fn clip_empty_tracks_zero_duration() {
    let clip = AnimationClip::new("empty".to_string(), vec![]);
    assert!(approx(clip.duration, 0.0));
}

// ============================================================================
// Binder + sample_clip
// ============================================================================

fn two_node_scene() -> (Scene, vatbake::scene::NodeHandle, vatbake::scene::NodeHandle) {
    let mut scene = Scene::new();
    let root = scene.add_node(Node::new("root"));
    let bone = scene.add_to_parent(Node::new("bone"), root);
    (scene, root, bone)
}

#[test]
fn binder_resolves_named_node() {
    let (scene, root, bone) = two_node_scene();
    let clip = AnimationClip::new(
        "walk".to_string(),
        vec![translation_track("bone", 1.0, Vec3::X)],
    );

    let bindings = Binder::bind(&scene, root, &clip);
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].node_handle, bone);
    assert_eq!(bindings[0].track_index, 0);
}

#[test]
fn binder_skips_unknown_node() {
    let (scene, root, _) = two_node_scene();
    let clip = AnimationClip::new(
        "walk".to_string(),
        vec![translation_track("no_such_bone", 1.0, Vec3::X)],
    );

    let bindings = Binder::bind(&scene, root, &clip);
    assert!(bindings.is_empty());
}

#[test]
fn binder_skips_track_with_no_keyframes() {
    let (scene, root, bone) = two_node_scene();
    let clip = AnimationClip::new(
        "walk".to_string(),
        vec![
            Track {
                meta: TrackMeta {
                    node_name: "bone".to_string(),
                    target: TargetPath::Translation,
                },
                data: TrackData::Vector3(KeyframeTrack::new(
                    vec![],
                    vec![],
                    InterpolationMode::Linear,
                )),
            },
            translation_track("bone", 1.0, Vec3::X),
        ],
    );

    // Only the keyed track binds; the empty one must never reach sampling.
    let bindings = Binder::bind(&scene, root, &clip);
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].track_index, 1);
    assert_eq!(bindings[0].node_handle, bone);
}

#[test]
fn sample_clip_writes_pose() {
    let (mut scene, root, bone) = two_node_scene();
    let clip = AnimationClip::new(
        "walk".to_string(),
        vec![translation_track("bone", 2.0, Vec3::new(2.0, 0.0, 0.0))],
    );
    let bindings = Binder::bind(&scene, root, &clip);

    sample_clip(&mut scene, &bindings, &clip, 1.0);
    let pos = scene.get_node(bone).unwrap().transform.position;
    assert!(approx(pos.x, 1.0), "Expected x=1.0 at t=1.0, got {}", pos.x);

    // Re-sampling the same time yields the identical pose (stateless)
    sample_clip(&mut scene, &bindings, &clip, 1.0);
    let pos2 = scene.get_node(bone).unwrap().transform.position;
    assert_eq!(pos, pos2);
}

// ============================================================================
// AnimationController
// ============================================================================

fn walk_clip() -> Arc<AnimationClip> {
    Arc::new(AnimationClip::new(
        "walk".to_string(),
        vec![translation_track("bone", 2.0, Vec3::X)],
    ))
}

#[test]
fn controller_duration_requires_active_state() {
    let (scene, root, _) = two_node_scene();
    let mut controller = AnimationController::new(root);
    controller.add_state(BASE_LAYER, "walk", walk_clip()).unwrap();

    // Not queryable until played
    assert!(controller.state_duration(BASE_LAYER).is_none());

    controller.play(&scene, "walk", BASE_LAYER, 0.0).unwrap();
    let duration = controller.state_duration(BASE_LAYER).unwrap();
    assert!(approx(duration, 2.0), "got {duration}");
}

#[test]
fn controller_unknown_state_errors() {
    let (scene, root, _) = two_node_scene();
    let mut controller = AnimationController::new(root);
    controller.add_state(BASE_LAYER, "walk", walk_clip()).unwrap();

    let err = controller.play(&scene, "run", BASE_LAYER, 0.0).unwrap_err();
    assert!(matches!(err, BakeError::UnknownState(name) if name == "run"));
}

#[test]
fn controller_layer_out_of_range() {
    let (_, root, _) = two_node_scene();
    let mut controller = AnimationController::new(root);
    let err = controller.add_state(3, "walk", walk_clip()).unwrap_err();
    assert!(matches!(err, BakeError::LayerOutOfRange(3)));
}

#[test]
fn controller_seek_without_active_state_errors() {
    let (_, root, _) = two_node_scene();
    let mut controller = AnimationController::new(root);
    controller.add_state(BASE_LAYER, "walk", walk_clip()).unwrap();

    // The base layer exists, but nothing has been played on it yet.
    let err = controller.set_normalized_time(BASE_LAYER, 0.5).unwrap_err();
    assert!(matches!(err, BakeError::NoActiveState(0)));

    // A missing layer is still reported as out of range.
    let err = controller.set_normalized_time(3, 0.5).unwrap_err();
    assert!(matches!(err, BakeError::LayerOutOfRange(3)));
}

#[test]
fn controller_forced_update_applies_pose() {
    let (mut scene, root, bone) = two_node_scene();
    let mut controller = AnimationController::new(root);
    controller.add_state(BASE_LAYER, "walk", walk_clip()).unwrap();
    controller.play(&scene, "walk", BASE_LAYER, 0.0).unwrap();

    controller.set_normalized_time(BASE_LAYER, 0.5).unwrap();
    controller.update(&mut scene, 0.0);

    // Clip moves bone to X over 2s; normalized 0.5 -> t=1.0 -> x=0.5
    let pos = scene.get_node(bone).unwrap().transform.position;
    assert!(approx(pos.x, 0.5), "Expected x=0.5, got {}", pos.x);
}

#[test]
fn controller_seek_is_drift_free() {
    let (mut scene, root, bone) = two_node_scene();
    let mut controller = AnimationController::new(root);
    controller.add_state(BASE_LAYER, "walk", walk_clip()).unwrap();
    controller.play(&scene, "walk", BASE_LAYER, 0.0).unwrap();

    // Seek around, then back to the same normalized time: identical pose
    controller.set_normalized_time(BASE_LAYER, 0.25).unwrap();
    controller.update(&mut scene, 0.0);
    let first = scene.get_node(bone).unwrap().transform.position;

    for t in [0.9, 0.1, 1.0, 0.0, 0.25] {
        controller.set_normalized_time(BASE_LAYER, t).unwrap();
        controller.update(&mut scene, 0.0);
    }
    let second = scene.get_node(bone).unwrap().transform.position;
    assert_eq!(first, second);
}
