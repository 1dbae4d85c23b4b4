// src/lib.rs

//! # owlqn
//!
//! Orthant-Wise Limited-memory Quasi-Newton optimization for L1-regularized
//! smooth objectives.
//!
//! This crate implements the OWLQN algorithm from:
//!
//! > Galen Andrew and Jianfeng Gao.
//! > "Scalable training of L1-regularized log-linear models"
//! > ICML 2007
//!
//! Plain quasi-Newton methods break on L1 penalties because the objective is
//! non-differentiable at zero. OWLQN substitutes a minimum-norm-subgradient
//! "pseudo-gradient" and restricts each line-search step to a single orthant
//! of parameter space, which keeps coordinates driven to zero exactly zero.
//!
//! ## Example
//!
//! ```rust
//! use ndarray::{array, Array1};
//! use owlqn::{Objective, Owlqn};
//!
//! /// Least squares toward a fixed target.
//! struct Quadratic {
//!     target: Array1<f64>,
//! }
//!
//! impl Objective for Quadratic {
//!     fn evaluate(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
//!         let r = x - &self.target;
//!         (0.5 * r.dot(&r), r)
//!     }
//! }
//!
//! # fn main() -> Result<(), owlqn::OwlqnError> {
//! let objective = Quadratic {
//!     target: array![3.0, 0.4],
//! };
//!
//! let result = Owlqn::minimize(&objective, &array![0.0, 0.0], 1.0)?;
//!
//! // Soft-thresholding: 3.0 shrinks to 2.0, 0.4 is pinned at exactly zero.
//! assert!((result.x[0] - 2.0).abs() < 1e-3);
//! assert_eq!(result.x[1], 0.0);
//! assert_eq!(result.nonzero_count(), 1);
//! # Ok(())
//! # }
//! ```

mod config;
mod core;
mod error;
mod lbfgs;
mod line_search;
mod math;
mod objective;
mod result;
mod solver;

pub use config::{ConfigBuilder, OwlqnConfig};
pub use error::{OwlqnError, Result};
pub use objective::{Objective, Regularized};
pub use result::{IterationRecord, OwlqnResult, Termination};
pub use solver::Owlqn;
