// src/solver.rs

//! Main OWLQN solver interface.

use crate::config::OwlqnConfig;
use crate::core;
use crate::error::{OwlqnError, Result};
use crate::objective::Objective;
use crate::result::{IterationRecord, OwlqnResult, Termination};
use ndarray::Array1;

/// The OWLQN optimizer.
///
/// This struct provides static methods for minimizing L1-regularized smooth
/// objectives.
pub struct Owlqn;

impl Owlqn {
    /// Minimize `objective(x) + c·Σ|x_i|` starting from `x0`, with default
    /// configuration.
    ///
    /// # Arguments
    /// * `objective` - Smooth loss and gradient provider
    /// * `x0` - Initial parameter vector (non-empty)
    /// * `c` - L1 regularization weight (finite, `>= 0`)
    pub fn minimize<O: Objective + ?Sized>(
        objective: &O,
        x0: &Array1<f64>,
        c: f64,
    ) -> Result<OwlqnResult> {
        Self::minimize_with_config(objective, x0, c, &OwlqnConfig::default())
    }

    /// Minimize with a custom configuration.
    pub fn minimize_with_config<O: Objective + ?Sized>(
        objective: &O,
        x0: &Array1<f64>,
        c: f64,
        config: &OwlqnConfig,
    ) -> Result<OwlqnResult> {
        validate(x0, c, config)?;
        let (x, info) = core::run(objective, x0, c, config, None)?;
        Ok(assemble(x, info))
    }

    /// Minimize with a per-iteration observer callback.
    ///
    /// The observer is invoked once at the start of every outer iteration
    /// with the current objective value, pseudo-gradient norm and nonzero
    /// count. It is a reporting side channel; it cannot influence the run.
    pub fn minimize_with_observer<O: Objective + ?Sized>(
        objective: &O,
        x0: &Array1<f64>,
        c: f64,
        config: &OwlqnConfig,
        observer: &mut dyn FnMut(&IterationRecord),
    ) -> Result<OwlqnResult> {
        validate(x0, c, config)?;
        let (x, info) = core::run(objective, x0, c, config, Some(observer))?;
        Ok(assemble(x, info))
    }
}

fn validate(x0: &Array1<f64>, c: f64, config: &OwlqnConfig) -> Result<()> {
    config.validate()?;

    if x0.is_empty() {
        return Err(OwlqnError::InvalidDimensions {
            message: "initial vector cannot be empty".into(),
        });
    }

    if !c.is_finite() || c < 0.0 {
        return Err(OwlqnError::InvalidConfig {
            parameter: "c".into(),
            message: "regularization weight must be finite and non-negative".into(),
        });
    }

    Ok(())
}

fn assemble(x: Array1<f64>, info: core::CoreInfo) -> OwlqnResult {
    OwlqnResult {
        x,
        objective: info.objective,
        gradient_norm: info.gradient_norm,
        n_iterations: info.n_iterations,
        n_evaluations: info.n_evaluations,
        converged: info.termination == Termination::Converged,
        termination: info.termination,
    }
}
