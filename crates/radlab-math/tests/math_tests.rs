//! Integration tests for radlab-math.

use radlab_math::{Aabb, Vec3};

fn unit_box() -> Aabb {
    Aabb::from_center_size(Vec3::ZERO, Vec3::splat(1.0))
}

// ─── Construction ─────────────────────────────────────────────

#[test]
fn new_orders_corners() {
    let b = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 5.0));
    assert_eq!(b.min, Vec3::new(-1.0, 0.0, 3.0));
    assert_eq!(b.max, Vec3::new(1.0, 2.0, 5.0));
}

#[test]
fn center_and_size() {
    let b = Aabb::from_center_size(Vec3::new(3.2, 0.6, 0.0), Vec3::new(0.6, 0.4, 0.4));
    assert!((b.center() - Vec3::new(3.2, 0.6, 0.0)).length() < 1e-6);
    assert!((b.size() - Vec3::new(0.6, 0.4, 0.4)).length() < 1e-6);
    assert!(!b.is_degenerate());
}

#[test]
fn flat_box_is_degenerate() {
    let b = Aabb::from_center_size(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
    assert!(b.is_degenerate());
}

#[test]
fn with_center_keeps_size() {
    let moved = unit_box().with_center(Vec3::new(5.0, 0.0, 0.0));
    assert!((moved.size() - Vec3::ONE).length() < 1e-6);
    assert!(moved.contains_point(Vec3::new(5.4, 0.0, 0.0)));
}

// ─── Point Queries ────────────────────────────────────────────

#[test]
fn contains_point_is_inclusive() {
    let b = unit_box();
    assert!(b.contains_point(Vec3::ZERO));
    assert!(b.contains_point(Vec3::new(0.5, 0.5, 0.5)));
    assert!(!b.contains_point(Vec3::new(0.51, 0.0, 0.0)));
}

// ─── Segment Queries ──────────────────────────────────────────

#[test]
fn segment_crossing_box() {
    let b = unit_box();
    let hit = b.segment_hit(Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
    assert!((hit.unwrap() - 1.5).abs() < 1e-5);
}

#[test]
fn segment_stopping_short_misses() {
    let b = unit_box();
    assert!(b.segment_hit(Vec3::new(-2.0, 0.0, 0.0), Vec3::new(-0.6, 0.0, 0.0)).is_none());
}

#[test]
fn segment_passing_beside_misses() {
    let b = unit_box();
    assert!(b.segment_hit(Vec3::new(-2.0, 1.0, 0.0), Vec3::new(2.0, 1.0, 0.0)).is_none());
}

#[test]
fn segment_starting_inside_hits_at_zero() {
    let b = unit_box();
    let hit = b.segment_hit(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(hit, Some(0.0));
}

#[test]
fn zero_length_segment_uses_containment() {
    let b = unit_box();
    assert_eq!(b.segment_hit(Vec3::ZERO, Vec3::ZERO), Some(0.0));
    assert!(b.segment_hit(Vec3::splat(2.0), Vec3::splat(2.0)).is_none());
}

// ─── Ray Queries ──────────────────────────────────────────────

#[test]
fn ray_respects_max_distance() {
    let b = unit_box();
    let origin = Vec3::new(-2.0, 0.0, 0.0);
    assert!(b.ray_hit(origin, Vec3::X, 1.0).is_none());
    assert!(b.ray_hit(origin, Vec3::X, 1.6).is_some());
}

#[test]
fn ray_pointing_away_misses() {
    let b = unit_box();
    assert!(b.ray_hit(Vec3::new(-2.0, 0.0, 0.0), -Vec3::X, 10.0).is_none());
}

#[test]
fn aabb_serialization() {
    let b = unit_box();
    let json = serde_json::to_string(&b).unwrap();
    let recovered: Aabb = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, b);
}
