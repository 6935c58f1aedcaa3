use crate::SimError;

#[inline]
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::InputKind { name, value })
    }
}

#[inline]
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, SimError> {
    let value = ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::Domain {
            name,
            requirement: "strictly positive",
            value,
        })
    }
}

#[inline]
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, SimError> {
    let value = ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(SimError::Domain {
            name,
            requirement: "non-negative",
            value,
        })
    }
}
