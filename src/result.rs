// src/result.rs

//! Result and reporting types for the OWLQN optimizer.

use ndarray::Array1;

/// How an optimization run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Pseudo-gradient norm dropped below the tolerance.
    Converged,
    /// Iteration cap reached without convergence. Not an error; the best
    /// point found is returned.
    MaxIterations,
    /// The backtracking line search exhausted its attempts. The point from
    /// before the failed search is returned.
    LineSearchFailed,
}

/// Result of running the OWLQN optimizer.
#[derive(Debug, Clone)]
pub struct OwlqnResult {
    /// Final parameter vector.
    pub x: Array1<f64>,

    /// Penalized objective value at `x`.
    pub objective: f64,

    /// Pseudo-gradient L2 norm at `x`.
    pub gradient_norm: f64,

    /// Number of outer iterations (accepted line-search steps) performed.
    pub n_iterations: usize,

    /// Total objective evaluations, including the initial one.
    pub n_evaluations: usize,

    /// Whether the run converged.
    pub converged: bool,

    /// Terminal state of the run.
    pub termination: Termination,
}

impl OwlqnResult {
    /// Number of nonzero coordinates in the final vector.
    ///
    /// Sparsity is the point of the L1 penalty; the orthant constraint
    /// guarantees coordinates driven to zero stay exactly zero rather than
    /// merely small.
    pub fn nonzero_count(&self) -> usize {
        self.x.iter().filter(|&&v| v != 0.0).count()
    }
}

/// Per-iteration report passed to an observer callback.
///
/// A side channel for progress reporting and caller-tracked metrics; not
/// part of the optimization contract.
#[derive(Debug, Clone)]
pub struct IterationRecord {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Penalized objective value at the start of the iteration.
    pub objective: f64,
    /// Pseudo-gradient L2 norm at the start of the iteration.
    pub gradient_norm: f64,
    /// Nonzero coordinates in the current vector.
    pub nonzero_count: usize,
}
