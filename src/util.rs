/*
    IEEE-754 helpers shared by the kernels
*/

// Replaces a component by +/-1 if it is infinite and by +/-0 otherwise,
// keeping its sign. Used to "box" an infinite operand before recomputing
// a product or quotient whose naive result was NaN.
#[inline]
pub(crate) fn box_infinite(v: f64) -> f64 {
    if v.is_infinite() {
        1.0_f64.copysign(v)
    } else {
        0.0_f64.copysign(v)
    }
}

// Replaces a NaN component by a zero carrying the same sign bit.
#[inline]
pub(crate) fn nan_to_zero(v: f64) -> f64 {
    if v.is_nan() {
        0.0_f64.copysign(v)
    } else {
        v
    }
}

// Canonical bit pattern of a component: every NaN maps to the same pattern,
// every other value (including signed zeros) keeps its own.
#[inline]
pub(crate) fn canonical_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

// Multiplies a zero by a factor without letting a non-finite factor turn
// the exact zero into NaN: `0 * f` keeps the sign rule, NaN factors give `z`.
#[inline]
pub(crate) fn zero_times(z: f64, f: f64) -> f64 {
    if z == 0.0 && !f.is_finite() {
        if f.is_nan() {
            z
        } else {
            0.0_f64.copysign(z) * f.signum()
        }
    } else {
        z * f
    }
}

// Remaps an angle into `[0, 2pi)`, placing the branch cut on the positive real axis.
#[inline]
pub(crate) fn positive_angle(theta: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    let t = theta % tau;
    let t = if t < 0.0 { t + tau } else { t };
    // `t + tau` can round up to `tau` for tiny negative `t`
    if t >= tau {
        0.0
    } else {
        t
    }
}
