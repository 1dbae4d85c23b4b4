// src/math.rs

//! Mathematical utilities for the OWLQN algorithm.

use ndarray::Array1;

/// Sign of a value with `sign(0) = 0`.
///
/// `f64::signum` maps `0.0` to `1.0`, which would break the orthant
/// projection for zero coordinates.
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Project `v` onto the orthant described by `reference`.
///
/// Every coordinate of `v` whose sign disagrees with the corresponding
/// coordinate of `reference` is set to zero; coordinates where the reference
/// is zero are always zeroed. Used both to clip line-search trial points onto
/// the search orthant and to sanitize a non-descent direction in the driver.
pub fn project(v: &mut Array1<f64>, reference: &Array1<f64>) {
    for (vi, &ri) in v.iter_mut().zip(reference.iter()) {
        if sign(*vi) != sign(ri) {
            *vi = 0.0;
        }
    }
}

/// OWLQN pseudo-gradient of the L1-regularized objective at `x`.
///
/// For nonzero coordinates this is the plain subgradient
/// `grad_i + c·sign(x_i)`. At a zero coordinate it picks the minimum-norm
/// valid subgradient: the penalized gradient is used only when the smooth
/// gradient can overcome the penalty in one direction, otherwise the
/// coordinate is a fixed point and the pseudo-gradient is zero there.
pub fn pseudo_gradient(x: &Array1<f64>, grad: &Array1<f64>, c: f64) -> Array1<f64> {
    Array1::from_shape_fn(x.len(), |i| {
        let xi = x[i];
        let gi = grad[i];
        if xi != 0.0 {
            gi + c * sign(xi)
        } else {
            let gm = gi - c;
            let gp = gi + c;
            if gm > 0.0 {
                gm
            } else if gp < 0.0 {
                gp
            } else {
                0.0
            }
        }
    })
}

/// Euclidean norm of a vector.
pub fn l2_norm(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}
