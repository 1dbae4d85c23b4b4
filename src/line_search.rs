// src/line_search.rs

//! Orthant-constrained backtracking line search.

use crate::math::project;
use crate::objective::{Objective, Regularized};
use ndarray::Array1;

/// Result of an orthant-constrained line search.
pub struct LineSearchResult {
    /// Whether a step satisfying sufficient decrease was found.
    pub success: bool,
    /// Accepted point (the last trial point on failure).
    pub x: Array1<f64>,
    /// Penalized objective value at `x`.
    pub f: f64,
    /// Smooth gradient at `x`.
    pub grad: Array1<f64>,
    /// Number of objective evaluations performed.
    pub evaluations: usize,
}

/// Backtracking search along `dx`, constrained to one orthant.
///
/// The orthant is fixed from the pre-search point: the sign of `x0_i` where
/// nonzero, otherwise the sign `-pg0_i` wants to move in. Each trial point
/// `x0 + t·dx` is projected onto that orthant before evaluation, so zero
/// coordinates can only activate in the direction the pseudo-gradient
/// favours. A step is accepted once the Armijo-style condition
/// `f ≤ f0 + alpha·⟨x - x0, pg0⟩` holds.
///
/// The attempt cap guards against floating-point flatness where the
/// condition can never be met; on exhaustion `success` is `false` and the
/// caller is expected to keep its current point.
#[allow(clippy::too_many_arguments)]
pub fn constrained_line_search<O: Objective + ?Sized>(
    objective: &Regularized<'_, O>,
    x0: &Array1<f64>,
    pg0: &Array1<f64>,
    f0: f64,
    dx: &Array1<f64>,
    alpha: f64,
    beta: f64,
    max_tries: usize,
) -> LineSearchResult {
    let orthant = Array1::from_shape_fn(x0.len(), |i| {
        if x0[i] != 0.0 {
            x0[i]
        } else {
            -pg0[i]
        }
    });

    let mut t = 1.0 / beta;
    let mut x = x0.clone();
    let mut f = f0;
    let mut grad = Array1::zeros(x0.len());

    for tries in 1..=max_tries {
        t *= beta;
        x = x0.clone();
        x.scaled_add(t, dx);
        project(&mut x, &orthant);
        let (f_trial, grad_trial) = objective.evaluate(&x);
        f = f_trial;
        grad = grad_trial;

        let decrease = (&x - x0).dot(pg0);
        if f <= f0 + alpha * decrease {
            return LineSearchResult {
                success: true,
                x,
                f,
                grad,
                evaluations: tries,
            };
        }
    }

    LineSearchResult {
        success: false,
        x,
        f,
        grad,
        evaluations: max_tries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::pseudo_gradient;
    use ndarray::array;

    struct Quadratic {
        target: Array1<f64>,
    }

    impl Objective for Quadratic {
        fn evaluate(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
            let r = x - &self.target;
            (0.5 * r.dot(&r), r)
        }
    }

    #[test]
    fn test_full_step_accepted_on_quadratic() {
        let objective = Quadratic {
            target: array![3.0],
        };
        let wrapped = Regularized::new(&objective, 1.0);

        let x0 = array![0.0];
        let (f0, grad0) = wrapped.evaluate(&x0);
        let pg0 = pseudo_gradient(&x0, &grad0, 1.0);
        let dx = -&pg0;

        let result = constrained_line_search(&wrapped, &x0, &pg0, f0, &dx, 0.1, 0.5, 40);

        assert!(result.success);
        assert_eq!(result.evaluations, 1);
        // Sufficient decrease must hold at the accepted point.
        let decrease = (&result.x - &x0).dot(&pg0);
        assert!(result.f <= f0 + 0.1 * decrease);
        assert!(result.f < f0);
    }

    #[test]
    fn test_trial_points_stay_in_orthant() {
        // Start just inside the positive orthant with a direction that
        // overshoots through zero; the projection must clip the crossing
        // coordinate to zero rather than let it flip sign.
        let objective = Quadratic {
            target: array![-5.0, 2.0],
        };
        let wrapped = Regularized::new(&objective, 0.1);

        let x0 = array![0.5, 1.0];
        let (f0, grad0) = wrapped.evaluate(&x0);
        let pg0 = pseudo_gradient(&x0, &grad0, 0.1);
        let dx = array![-20.0, 0.5];

        let result = constrained_line_search(&wrapped, &x0, &pg0, f0, &dx, 0.1, 0.5, 40);

        assert!(result.x[0] >= 0.0);
    }

    #[test]
    fn test_ascent_direction_exhausts_tries() {
        // Smooth part f(x) = x is strictly increasing, so stepping along a
        // positive direction can never satisfy sufficient decrease.
        let objective = |x: &Array1<f64>| (x[0], array![1.0]);
        let wrapped = Regularized::new(&objective, 0.0);

        let x0 = array![1.0];
        let (f0, grad0) = wrapped.evaluate(&x0);
        let pg0 = grad0.clone();
        let dx = array![1.0];

        let result = constrained_line_search(&wrapped, &x0, &pg0, f0, &dx, 0.1, 0.5, 8);

        assert!(!result.success);
        assert_eq!(result.evaluations, 8);
    }
}
