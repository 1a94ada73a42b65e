use thiserror::Error;

/// Failures surfaced by scene construction and the configuration boundary.
///
/// `InvalidGeometry`, `InvalidParameter`, `UnknownShape` and `InvalidColor` are fatal; they are raised while the
/// scene plan is resolved, before any entity exists. `OutOfRange` is returned to whoever tried to
/// change a live setting and leaves the previous value in place. `EngineUnavailable` never reaches
/// callers of the frame loop: per-tick systems treat it as "skip this body for now".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("invalid geometry: {what} must be finite and > 0 (got {value})")]
    InvalidGeometry { what: &'static str, value: f32 },
    #[error("invalid parameter: {what} = {value}")]
    InvalidParameter { what: &'static str, value: f32 },
    #[error("value {value} outside allowed range [{min}, {max}]")]
    OutOfRange { value: f32, min: f32, max: f32 },
    #[error("unknown shape '{name}' (expected Sphere or Box)")]
    UnknownShape { name: String },
    #[error("unparsable color '{value}'")]
    InvalidColor { value: String },
    #[error("rigid body has not been instantiated by the physics engine yet")]
    EngineUnavailable,
}

impl SceneError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SceneError::OutOfRange { .. } | SceneError::EngineUnavailable)
    }
}

/// Rejects non-finite or non-positive collider dimensions.
pub(crate) fn positive(what: &'static str, value: f32) -> Result<f32, SceneError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SceneError::InvalidGeometry { what, value })
    }
}

/// Rejects non-finite or negative tuning parameters (damping, friction, spread ...).
pub(crate) fn non_negative(what: &'static str, value: f32) -> Result<f32, SceneError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SceneError::InvalidParameter { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_negative_and_nan() {
        assert!(positive("radius", 0.0).is_err());
        assert!(positive("radius", -1.0).is_err());
        assert!(positive("radius", f32::NAN).is_err());
        assert_eq!(positive("radius", 0.5), Ok(0.5));
    }

    #[test]
    fn fatality_split() {
        assert!(SceneError::InvalidGeometry { what: "radius", value: 0.0 }.is_fatal());
        assert!(!SceneError::EngineUnavailable.is_fatal());
        assert!(!SceneError::OutOfRange { value: 6.0, min: 1.0, max: 5.0 }.is_fatal());
    }
}
