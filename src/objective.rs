// src/objective.rs

//! The objective-provider seam and the L1-regularized wrapper around it.
//!
//! The optimizer never computes the smooth loss itself; it consumes an
//! [`Objective`] supplied by the surrounding model and augments it with the
//! L1 penalty term.

use ndarray::Array1;

/// Trait for the smooth part of the objective.
///
/// An objective must return the loss value and its gradient at a point. The
/// gradient must have the same length as `x`, and evaluation must be
/// deterministic for a fixed `x`; the backtracking line search relies on
/// re-evaluation at the same point giving the same value.
pub trait Objective {
    /// Evaluate the smooth loss and its gradient at `x`.
    fn evaluate(&self, x: &Array1<f64>) -> (f64, Array1<f64>);
}

impl<F> Objective for F
where
    F: Fn(&Array1<f64>) -> (f64, Array1<f64>),
{
    fn evaluate(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        self(x)
    }
}

/// An [`Objective`] augmented with an L1 penalty `c · Σ|x_i|`.
///
/// Only the *value* is penalized; the returned gradient is the gradient of
/// the smooth part alone. The L1 subgradient is handled separately by the
/// pseudo-gradient construction.
pub struct Regularized<'a, O: ?Sized> {
    objective: &'a O,
    c: f64,
}

impl<'a, O: Objective + ?Sized> Regularized<'a, O> {
    /// Wrap an objective with L1 weight `c`.
    pub fn new(objective: &'a O, c: f64) -> Self {
        Self { objective, c }
    }

    /// Evaluate the penalized value and the smooth gradient at `x`.
    pub fn evaluate(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let (f, grad) = self.objective.evaluate(x);
        let penalty: f64 = x.iter().map(|v| v.abs()).sum();
        (f + self.c * penalty, grad)
    }
}
