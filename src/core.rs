// src/core.rs

//! The outer OWLQN driver loop.

use crate::config::OwlqnConfig;
use crate::error::{OwlqnError, Result};
use crate::lbfgs::{compute_direction, LbfgsHistory};
use crate::line_search::constrained_line_search;
use crate::math::{l2_norm, project, pseudo_gradient};
use crate::objective::{Objective, Regularized};
use crate::result::{IterationRecord, Termination};
use ndarray::Array1;

/// Information returned from the core OWLQN iteration.
#[derive(Debug)]
pub struct CoreInfo {
    /// Penalized objective value at the final point.
    pub objective: f64,
    /// Pseudo-gradient L2 norm at the final point.
    pub gradient_norm: f64,
    /// Number of accepted line-search steps.
    pub n_iterations: usize,
    /// Total objective evaluations.
    pub n_evaluations: usize,
    /// How the run ended.
    pub termination: Termination,
}

fn nonzero_count(x: &Array1<f64>) -> usize {
    x.iter().filter(|&&v| v != 0.0).count()
}

/// Run the OWLQN loop from `x0` with L1 weight `c`.
///
/// Each iteration derives the pseudo-gradient, builds a quasi-Newton
/// direction from the ring-buffer history, takes an orthant-constrained
/// backtracking step and records the `(s, y)` pair. The loop stops when the
/// pseudo-gradient norm drops below the tolerance, the iteration cap is hit,
/// or a line search fails; the last two return the best point found rather
/// than erroring.
pub fn run<O: Objective + ?Sized>(
    objective: &O,
    x0: &Array1<f64>,
    c: f64,
    config: &OwlqnConfig,
    mut observer: Option<&mut dyn FnMut(&IterationRecord)>,
) -> Result<(Array1<f64>, CoreInfo)> {
    let wrapped = Regularized::new(objective, c);

    let mut x = x0.clone();
    let (mut f, mut grad) = wrapped.evaluate(&x);
    let mut n_evaluations = 1;

    if grad.len() != x.len() {
        return Err(OwlqnError::InvalidDimensions {
            message: format!(
                "objective returned a gradient of length {} for a point of length {}",
                grad.len(),
                x.len()
            ),
        });
    }

    let mut history = LbfgsHistory::new(config.m);
    let mut n_iterations = 0;
    let mut termination = Termination::MaxIterations;

    for iter in 0..config.max_iter {
        let pg = pseudo_gradient(&x, &grad, c);
        let pg_norm = l2_norm(&pg);

        if config.verbose {
            println!(
                "iteration {}, objective = {:.6e}, pseudo-gradient norm = {:.4e}, nonzeros = {}",
                iter + 1,
                f,
                pg_norm,
                nonzero_count(&x)
            );
        }
        if let Some(ref mut obs) = observer {
            obs(&IterationRecord {
                iteration: iter + 1,
                objective: f,
                gradient_norm: pg_norm,
                nonzero_count: nonzero_count(&x),
            });
        }

        if pg_norm < config.tol {
            termination = Termination::Converged;
            break;
        }

        let mut dx = compute_direction(&pg, &history);

        // The history approximation knows nothing about the orthant
        // constraint, so the direction it yields can point uphill. Keep only
        // the components aligned with steepest pseudo-descent; if none
        // survive, take the steepest direction itself.
        if dx.dot(&pg) >= 0.0 {
            let steepest = -&pg;
            project(&mut dx, &steepest);
            if dx.iter().all(|&v| v == 0.0) {
                dx = steepest;
            }
        }

        let ls = constrained_line_search(
            &wrapped,
            &x,
            &pg,
            f,
            &dx,
            config.ls_alpha,
            config.ls_beta,
            config.ls_tries,
        );
        n_evaluations += ls.evaluations;

        if !ls.success {
            termination = Termination::LineSearchFailed;
            break;
        }

        // Degenerate curvature pairs are silently skipped by the history.
        history.push(&ls.x - &x, &ls.grad - &grad);

        x = ls.x;
        grad = ls.grad;
        f = ls.f;
        n_iterations += 1;
    }

    let gradient_norm = l2_norm(&pseudo_gradient(&x, &grad, c));

    let info = CoreInfo {
        objective: f,
        gradient_norm,
        n_iterations,
        n_evaluations,
        termination,
    };

    Ok((x, info))
}
