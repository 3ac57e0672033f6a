//! Planar geometry helpers for joint-angle extraction.

const EPS: f32 = 1e-6;

/// Interior angle at vertex `b`, in degrees, between the legs `b -> a` and
/// `b -> c`.
///
/// Returns `None` when either leg has (near-)zero length, in which case no
/// angle is defined and the caller should omit the feature. The cosine is
/// clamped to [-1, 1] before `acos` so floating-point overshoot on collinear
/// points cannot produce NaN. Result is in [0, 180].
pub fn angle_at(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Option<f32> {
    let ba = (a.0 - b.0, a.1 - b.1);
    let bc = (c.0 - b.0, c.1 - b.1);

    let mag_ba = (ba.0 * ba.0 + ba.1 * ba.1).sqrt();
    let mag_bc = (bc.0 * bc.0 + bc.1 * bc.1).sqrt();
    if mag_ba < EPS || mag_bc < EPS {
        return None;
    }

    let cosine = ((ba.0 * bc.0 + ba.1 * bc.1) / (mag_ba * mag_bc)).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}
