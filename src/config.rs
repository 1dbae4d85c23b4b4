// src/config.rs

//! Configuration for the OWLQN optimizer.

use crate::error::{OwlqnError, Result};

/// Configuration parameters for the OWLQN optimizer.
#[derive(Clone, Debug)]
pub struct OwlqnConfig {
    /// Size of the quasi-Newton history (number of `(s, y)` pairs kept).
    pub m: usize,

    /// Maximum number of outer iterations.
    pub max_iter: usize,

    /// Convergence tolerance on the pseudo-gradient L2 norm.
    pub tol: f64,

    /// Sufficient-decrease constant for the Armijo condition.
    pub ls_alpha: f64,

    /// Backtracking contraction factor for the step length.
    pub ls_beta: f64,

    /// Maximum backtracking attempts per line search.
    pub ls_tries: usize,

    /// If true, print progress information each iteration.
    pub verbose: bool,
}

impl Default for OwlqnConfig {
    fn default() -> Self {
        Self {
            m: 10,
            max_iter: 300,
            tol: 1e-4,
            ls_alpha: 0.1,
            ls_beta: 0.5,
            ls_tries: 40,
            verbose: false,
        }
    }
}

impl OwlqnConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing a configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.m == 0 {
            return Err(OwlqnError::InvalidConfig {
                parameter: "m".into(),
                message: "history size must be at least 1".into(),
            });
        }

        if self.max_iter == 0 {
            return Err(OwlqnError::InvalidConfig {
                parameter: "max_iter".into(),
                message: "must be greater than 0".into(),
            });
        }

        if !(self.tol > 0.0) {
            return Err(OwlqnError::InvalidConfig {
                parameter: "tol".into(),
                message: "must be positive".into(),
            });
        }

        if !(self.ls_alpha > 0.0 && self.ls_alpha < 1.0) {
            return Err(OwlqnError::InvalidConfig {
                parameter: "ls_alpha".into(),
                message: "must be in (0, 1)".into(),
            });
        }

        if !(self.ls_beta > 0.0 && self.ls_beta < 1.0) {
            return Err(OwlqnError::InvalidConfig {
                parameter: "ls_beta".into(),
                message: "must be in (0, 1)".into(),
            });
        }

        if self.ls_tries == 0 {
            return Err(OwlqnError::InvalidConfig {
                parameter: "ls_tries".into(),
                message: "must be greater than 0".into(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing `OwlqnConfig` with a fluent API.
#[derive(Default)]
pub struct ConfigBuilder {
    config: OwlqnConfig,
}

impl ConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: OwlqnConfig::default(),
        }
    }

    /// Set the quasi-Newton history size.
    pub fn m(mut self, m: usize) -> Self {
        self.config.m = m;
        self
    }

    /// Set the maximum number of outer iterations.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.config.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance.
    pub fn tol(mut self, tol: f64) -> Self {
        self.config.tol = tol;
        self
    }

    /// Set the Armijo sufficient-decrease constant.
    pub fn ls_alpha(mut self, ls_alpha: f64) -> Self {
        self.config.ls_alpha = ls_alpha;
        self
    }

    /// Set the backtracking contraction factor.
    pub fn ls_beta(mut self, ls_beta: f64) -> Self {
        self.config.ls_beta = ls_beta;
        self
    }

    /// Set the maximum line search attempts.
    pub fn ls_tries(mut self, ls_tries: usize) -> Self {
        self.config.ls_tries = ls_tries;
        self
    }

    /// Enable or disable verbose output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OwlqnConfig {
        self.config
    }

    /// Build and validate the configuration.
    pub fn build_validated(self) -> Result<OwlqnConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
