//! Integration tests for radlab-shielding.

use radlab_math::Vec3;
use radlab_shielding::{
    AttenuationModel, DemonstrationAttenuation, DetectorVolume, NullAttenuation, ShieldDatabase,
    ShieldHit, ShieldMaterial, ShieldRegistry,
};
use radlab_types::{ParticleKind, ShieldId, ShieldKind};

fn hit(coefficient: f32, distance: f32) -> ShieldHit {
    ShieldHit {
        shield: ShieldId(0),
        kind: ShieldKind::Aluminum,
        coefficient,
        distance,
    }
}

fn beam_registry() -> (ShieldRegistry, ShieldId, ShieldId) {
    let db = ShieldDatabase::with_defaults();
    let mut registry = ShieldRegistry::new();
    // Placed out of order along the beam on purpose.
    let far = registry.place(db.get("lead").unwrap(), Vec3::new(2.0, 0.0, 0.0));
    let near = registry.place(db.get("paper").unwrap(), Vec3::new(1.0, 0.0, 0.0));
    (registry, near, far)
}

// ─── Database Tests ───────────────────────────────────────────

#[test]
fn default_database_has_three_materials() {
    let db = ShieldDatabase::with_defaults();
    assert_eq!(db.len(), 3);
    assert_eq!(db.names(), vec!["aluminum", "lead", "paper"]);
}

#[test]
fn preset_values() {
    let db = ShieldDatabase::with_defaults();
    let paper = db.get("paper").unwrap();
    assert_eq!(paper.kind, ShieldKind::Paper);
    assert_eq!(paper.attenuation_coefficient, 100.0);
    let lead = db.get("lead").unwrap();
    assert!((lead.size() - Vec3::new(0.6, 1.0, 1.2)).length() < 1e-6);
    assert!(db.get("aluminum").unwrap().is_valid());
}

#[test]
fn unknown_material_is_an_error() {
    let db = ShieldDatabase::with_defaults();
    assert!(db.require("tungsten").is_err());
    assert!(db.get("tungsten").is_none());
}

#[test]
fn register_custom_material() {
    let mut db = ShieldDatabase::empty();
    assert!(db.is_empty());
    db.register(ShieldMaterial {
        name: "concrete".into(),
        kind: ShieldKind::Lead,
        thickness: 1.0,
        height: 1.0,
        depth: 1.0,
        attenuation_coefficient: 2.0,
    });
    assert!(db.require("concrete").is_ok());
}

// ─── Registry Tests ───────────────────────────────────────────

#[test]
fn segment_hits_sorted_by_distance() {
    let (registry, near, far) = beam_registry();
    let hits = registry.intersect_segment(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].shield, near);
    assert_eq!(hits[1].shield, far);
    assert!(hits[0].distance < hits[1].distance);
}

#[test]
fn segment_missing_shields() {
    let (registry, _, _) = beam_registry();
    let hits = registry.intersect_segment(Vec3::new(-1.0, 3.0, 0.0), Vec3::new(5.0, 3.0, 0.0));
    assert!(hits.is_empty());
}

#[test]
fn moving_a_shield_changes_only_position() {
    let (mut registry, near, _) = beam_registry();
    let before = registry.get(near).unwrap().clone();
    registry.move_to(near, Vec3::new(0.0, 0.0, 4.0)).unwrap();
    let after = registry.get(near).unwrap();
    assert!((after.position() - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-6);
    assert!((after.bounds.size() - before.bounds.size()).length() < 1e-6);
    assert_eq!(after.attenuation_coefficient, before.attenuation_coefficient);
}

#[test]
fn unknown_shield_operations_fail() {
    let (mut registry, _, _) = beam_registry();
    assert!(registry.move_to(ShieldId(99), Vec3::ZERO).is_err());
    assert!(registry.remove(ShieldId(99)).is_err());
}

#[test]
fn remove_shield() {
    let (mut registry, near, _) = beam_registry();
    let removed = registry.remove(near).unwrap();
    assert_eq!(removed.kind, ShieldKind::Paper);
    assert_eq!(registry.len(), 1);
}

// ─── Detector Tests ───────────────────────────────────────────

#[test]
fn detector_containment_and_ray() {
    let det = DetectorVolume::from_center_size(Vec3::new(3.2, 0.6, 0.0), Vec3::new(0.6, 0.4, 0.4));
    assert!(det.contains(Vec3::new(3.2, 0.6, 0.0)));
    assert!(!det.contains(Vec3::new(2.0, 0.6, 0.0)));
    assert!(det.ray_hits(Vec3::new(2.0, 0.6, 0.0), Vec3::new(0.3, 0.0, 0.0), 1.5));
    assert!(!det.ray_hits(Vec3::new(1.0, 0.6, 0.0), Vec3::X, 1.5));
}

// ─── Attenuation Tests ────────────────────────────────────────

#[test]
fn gamma_exponential_attenuation() {
    let model = DemonstrationAttenuation::default();
    let remaining = model.remaining_intensity(ParticleKind::Gamma, 8.0, &[hit(0.6, 0.0)]);
    let expected = 8.0 * (-1.0_f32 / 0.6).exp();
    assert!((remaining - expected).abs() < 1e-5);
}

#[test]
fn alpha_linear_attenuation_clamps_at_zero() {
    let model = DemonstrationAttenuation::default();
    let remaining = model.remaining_intensity(ParticleKind::Alpha, 8.0, &[hit(100.0, 0.0)]);
    assert_eq!(remaining, 0.0);
    assert!(model.is_absorbed(ParticleKind::Alpha, remaining));

    let remaining = model.remaining_intensity(ParticleKind::Beta, 8.0, &[hit(6.0, 0.0)]);
    assert!((remaining - 3.2).abs() < 1e-5);
    assert!(!model.is_absorbed(ParticleKind::Beta, remaining));
}

#[test]
fn gamma_expires_below_threshold() {
    let model = DemonstrationAttenuation::default();
    assert!(model.is_absorbed(ParticleKind::Gamma, 0.049));
    assert!(!model.is_absorbed(ParticleKind::Gamma, 0.05));
}

#[test]
fn larger_coefficient_never_increases_charged_particle_intensity() {
    let model = DemonstrationAttenuation::default();
    let coefficients = [0.1_f32, 0.6, 1.0, 2.5, 6.0, 10.0, 100.0];
    for kind in [ParticleKind::Alpha, ParticleKind::Beta] {
        for pair in coefficients.windows(2) {
            let weaker = model.remaining_intensity(kind, 8.0, &[hit(pair[0], 0.0)]);
            let stronger = model.remaining_intensity(kind, 8.0, &[hit(pair[1], 0.0)]);
            assert!(stronger <= weaker, "{kind}: {} vs {}", pair[0], pair[1]);
        }
    }
}

#[test]
fn adding_any_shield_never_increases_intensity() {
    let model = DemonstrationAttenuation::default();
    for &kind in ParticleKind::all() {
        for coefficient in [0.6_f32, 6.0, 100.0] {
            let base = model.remaining_intensity(kind, 8.0, &[hit(6.0, 0.0)]);
            let more = model.remaining_intensity(kind, 8.0, &[hit(6.0, 0.0), hit(coefficient, 1.0)]);
            assert!(more <= base);
        }
    }
}

#[test]
fn attenuation_is_order_independent() {
    let model = DemonstrationAttenuation::default();
    let a = model.remaining_intensity(ParticleKind::Gamma, 8.0, &[hit(0.6, 0.0), hit(6.0, 1.0)]);
    let b = model.remaining_intensity(ParticleKind::Gamma, 8.0, &[hit(6.0, 0.0), hit(0.6, 1.0)]);
    assert!((a - b).abs() < 1e-5);
}

#[test]
fn attenuate_segment_through_registry() {
    let (registry, _, _) = beam_registry();
    let model = DemonstrationAttenuation::default();
    let result = model.attenuate(
        ParticleKind::Alpha,
        8.0,
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        &registry,
    );
    assert_eq!(result.shields_crossed, 2);
    assert_eq!(result.remaining, 0.0);
    assert!(result.absorbed);
}

#[test]
fn null_attenuation_is_transparent() {
    let (registry, _, _) = beam_registry();
    let model = NullAttenuation;
    let result = model.attenuate(ParticleKind::Alpha, 8.0, Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), &registry);
    assert_eq!(result.remaining, 8.0);
    assert!(!result.absorbed);
    assert_eq!(model.name(), "null_attenuation");
}

#[test]
fn attenuation_constants_serialize() {
    let model = DemonstrationAttenuation::default();
    let json = serde_json::to_string(&model).unwrap();
    let recovered: DemonstrationAttenuation = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.linear_scale, 0.8);
}
