//! Lab setup validation.
//!
//! Catches bad setups before a simulation is built from them. Values the
//! UI can change at runtime are clamped instead; see `ConfigPatch`.

use radlab_shielding::ShieldDatabase;
use radlab_types::{RadlabError, RadlabResult};

use crate::contract::LabSetup;

/// Validates a complete lab setup against the shield material database.
///
/// Checks:
/// - Source configuration is finite, with energy > 0 and intensity >= 0
/// - Source axis is non-zero and the detector box is not degenerate
/// - Every shield names a known material
/// - Demonstration constants are positive and the medium ordering holds
/// - Projector timings are positive
pub fn validate_setup(setup: &LabSetup, materials: &ShieldDatabase) -> RadlabResult<()> {
    validate_config(setup)?;

    let axis = setup.source.axis;
    if !axis.is_finite() || axis.length_squared() == 0.0 {
        return Err(RadlabError::InvalidGeometry(
            "Source axis must be a non-zero finite vector".into(),
        ));
    }
    if !setup.source.position.is_finite() {
        return Err(RadlabError::InvalidGeometry("Source position must be finite".into()));
    }

    let size = setup.detector.size;
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(RadlabError::InvalidGeometry(format!(
            "Detector size must be positive on every axis, got {size}"
        )));
    }

    for shield in &setup.shields {
        materials.require(&shield.material)?;
        if !shield.position.is_finite() {
            return Err(RadlabError::InvalidGeometry(format!(
                "Shield '{}' has a non-finite position",
                shield.material
            )));
        }
    }

    validate_transport(setup)?;
    validate_scoring(setup)?;
    validate_projector(setup)?;
    Ok(())
}

fn validate_config(setup: &LabSetup) -> RadlabResult<()> {
    let c = &setup.config;
    if !c.energy.is_finite() || c.energy <= 0.0 {
        return Err(RadlabError::InvalidConfig("Energy must be positive".into()));
    }
    if !c.intensity.is_finite() || c.intensity < 0.0 {
        return Err(RadlabError::InvalidConfig("Intensity must be non-negative".into()));
    }
    if !c.magnetic_field_strength.is_finite() {
        return Err(RadlabError::InvalidConfig("Magnetic field strength must be finite".into()));
    }
    Ok(())
}

fn validate_transport(setup: &LabSetup) -> RadlabResult<()> {
    let t = &setup.transport;
    let positive = [
        ("emission_rate", t.emission_rate),
        ("base_speed", t.base_speed),
        ("aging_per_tick", t.aging_per_tick),
        ("reference_energy", t.reference_energy),
        ("knock_on_life", t.knock_on_life),
    ];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(RadlabError::InvalidConfig(format!(
                "transport.{name} must be positive, got {value}"
            )));
        }
    }
    if !t.medium_decay.is_ordered() {
        return Err(RadlabError::InvalidConfig(
            "Medium decay rates must satisfy water > air > vacuum >= 0".into(),
        ));
    }
    if t.trail_length == 0 {
        return Err(RadlabError::InvalidConfig("Trail length must be >= 1".into()));
    }

    let a = &setup.attenuation;
    if !(a.linear_scale > 0.0 && a.exponential_numerator > 0.0 && a.gamma_expiry_threshold >= 0.0) {
        return Err(RadlabError::InvalidConfig(
            "Attenuation constants must be positive".into(),
        ));
    }
    Ok(())
}

fn validate_scoring(setup: &LabSetup) -> RadlabResult<()> {
    let s = &setup.scoring;
    if !(s.dose_intensity_divisor > 0.0) {
        return Err(RadlabError::InvalidConfig("Dose intensity divisor must be positive".into()));
    }
    if !(s.gamma_probe_length > 0.0) {
        return Err(RadlabError::InvalidConfig("Gamma probe length must be positive".into()));
    }
    let factors = [s.type_factor.alpha, s.type_factor.beta, s.type_factor.gamma];
    if factors.iter().any(|f| !(*f >= 0.0)) {
        return Err(RadlabError::InvalidConfig("Type factors must be non-negative".into()));
    }
    Ok(())
}

fn validate_projector(setup: &LabSetup) -> RadlabResult<()> {
    let p = &setup.projector;
    let durations = [p.alpha.duration, p.beta.duration, p.gamma.duration];
    if durations.iter().any(|d| !(*d > 0.0)) {
        return Err(RadlabError::InvalidConfig("Decay durations must be positive".into()));
    }
    let delays = [
        p.alpha.ionization_delay,
        p.beta.ionization_delay,
        p.gamma.ionization_delay,
    ];
    if delays.iter().any(|d| !(*d >= 0.0)) {
        return Err(RadlabError::InvalidConfig("Ionization delays must be non-negative".into()));
    }
    Ok(())
}
