// src/lbfgs.rs

//! Limited-memory quasi-Newton history and two-loop recursion.

use ndarray::Array1;

/// Curvature threshold below which a history pair is rejected.
///
/// `⟨s, y⟩` near zero makes `rho` blow up and corrupts every later direction
/// approximation, so degenerate pairs are skipped instead of stored.
const CURVATURE_MIN: f64 = 1e-10;

/// Fixed-capacity ring buffer of quasi-Newton history triples.
///
/// Stores the most recent `(s_k, y_k, rho_k)` triples, where
/// `s_k = x_{k+1} - x_k`, `y_k = g_{k+1} - g_k` and `rho_k = 1 / ⟨s_k, y_k⟩`.
/// Once full, a push overwrites the oldest entry. Slots that have never been
/// written are never exposed.
pub struct LbfgsHistory {
    s: Vec<Array1<f64>>,
    y: Vec<Array1<f64>>,
    rho: Vec<f64>,
    capacity: usize,
    /// Slot the next push writes to.
    next: usize,
}

impl LbfgsHistory {
    /// Create an empty history with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            s: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            rho: Vec::with_capacity(capacity),
            capacity,
            next: 0,
        }
    }

    /// Number of valid entries.
    pub fn len(&self) -> usize {
        self.s.len()
    }

    /// Check if no entries have been stored yet.
    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// Store a new `(s, y)` pair, overwriting the oldest entry when full.
    ///
    /// Returns `false` without storing if the curvature `⟨s, y⟩` is
    /// non-finite or too small to invert safely.
    pub fn push(&mut self, s: Array1<f64>, y: Array1<f64>) -> bool {
        let sy = s.dot(&y);
        if !sy.is_finite() || sy <= CURVATURE_MIN {
            return false;
        }
        let rho = 1.0 / sy;

        if self.s.len() < self.capacity {
            self.s.push(s);
            self.y.push(y);
            self.rho.push(rho);
        } else {
            self.s[self.next] = s;
            self.y[self.next] = y;
            self.rho[self.next] = rho;
        }
        self.next = (self.next + 1) % self.capacity;
        true
    }

    /// The `k`-th most recent triple (`k = 0` is the newest).
    ///
    /// Panics if `k >= len()`.
    fn nth_recent(&self, k: usize) -> (&Array1<f64>, &Array1<f64>, f64) {
        assert!(k < self.len(), "history slot {} has not been written", k);
        let idx = (self.next + self.capacity - 1 - k) % self.capacity;
        (&self.s[idx], &self.y[idx], self.rho[idx])
    }
}

/// Approximate the descent direction `-H⁻¹·pg` via the two-loop recursion.
///
/// The backward pass walks the history most-recent-first, the running vector
/// is then scaled by `⟨s, y⟩ / ⟨y, y⟩` of the newest pair, and the forward
/// pass walks oldest-first. With an empty history this degenerates to
/// steepest descent on the pseudo-gradient.
pub fn compute_direction(pg: &Array1<f64>, history: &LbfgsHistory) -> Array1<f64> {
    let mut q = pg.clone();
    let n = history.len();
    if n == 0 {
        return -q;
    }

    // Backward pass: newest pair first.
    let mut alpha = vec![0.0; n];
    for k in 0..n {
        let (s, y, rho) = history.nth_recent(k);
        let a = rho * s.dot(&q);
        alpha[k] = a;
        q.scaled_add(-a, y);
    }

    // Initial Hessian scaling from the newest pair.
    let (s0, y0, _) = history.nth_recent(0);
    let gamma = s0.dot(y0) / y0.dot(y0);
    let mut z = q * gamma;

    // Forward pass: oldest pair first.
    for k in (0..n).rev() {
        let (s, y, rho) = history.nth_recent(k);
        let beta = rho * y.dot(&z);
        z.scaled_add(alpha[k] - beta, s);
    }

    -z
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_history_push() {
        let mut history = LbfgsHistory::new(3);
        assert!(history.is_empty());

        assert!(history.push(array![1.0, 0.0], array![0.5, 0.0]));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_history_overflow_keeps_newest() {
        let mut history = LbfgsHistory::new(3);

        for i in 0..5 {
            let v = i as f64 + 1.0;
            assert!(history.push(array![v], array![v]));
        }

        assert_eq!(history.len(), 3);
        // After wrapping, only the last three pushes remain, newest first.
        let (s, _, _) = history.nth_recent(0);
        assert_eq!(s, &array![5.0]);
        let (s, _, _) = history.nth_recent(1);
        assert_eq!(s, &array![4.0]);
        let (s, _, _) = history.nth_recent(2);
        assert_eq!(s, &array![3.0]);
    }

    #[test]
    fn test_curvature_rejection() {
        let mut history = LbfgsHistory::new(3);

        // Positive curvature - accepted.
        assert!(history.push(array![1.0, 0.0], array![1.0, 0.0]));
        assert_eq!(history.len(), 1);

        // Negative curvature - rejected.
        assert!(!history.push(array![1.0, 0.0], array![-1.0, 0.0]));
        assert_eq!(history.len(), 1);

        // Orthogonal pair (zero curvature) - rejected.
        assert!(!history.push(array![1.0, 0.0], array![0.0, 1.0]));
        assert_eq!(history.len(), 1);

        // Non-finite curvature - rejected.
        assert!(!history.push(array![f64::NAN], array![1.0]));
    }

    #[test]
    fn test_empty_history_gives_steepest_descent() {
        let history = LbfgsHistory::new(10);
        let pg = array![1.0, -2.0, 0.5];
        let dx = compute_direction(&pg, &history);
        assert_eq!(dx, array![-1.0, 2.0, -0.5]);
    }

    #[test]
    fn test_identity_curvature_recovers_gradient_step() {
        // With s = y the implied Hessian is the identity, so the two-loop
        // recursion must reproduce plain steepest descent exactly.
        let mut history = LbfgsHistory::new(10);
        history.push(array![1.0, 2.0, -1.0], array![1.0, 2.0, -1.0]);

        let pg = array![0.3, -0.4, 0.9];
        let dx = compute_direction(&pg, &history);
        for (d, g) in dx.iter().zip(pg.iter()) {
            assert!((d + g).abs() < 1e-12);
        }
    }

    #[test]
    fn test_direction_uses_only_recent_window() {
        // Fill a capacity-2 history, then overwrite with identity-curvature
        // pairs. If a stale pre-wrap entry leaked into the recursion the
        // result would differ from steepest descent.
        let mut history = LbfgsHistory::new(2);
        history.push(array![10.0, 0.0], array![5.0, 0.0]);
        history.push(array![0.0, 10.0], array![0.0, 2.0]);
        history.push(array![1.0, 0.0], array![1.0, 0.0]);
        history.push(array![0.0, 1.0], array![0.0, 1.0]);

        let pg = array![0.7, -0.2];
        let dx = compute_direction(&pg, &history);
        for (d, g) in dx.iter().zip(pg.iter()) {
            assert!((d + g).abs() < 1e-12);
        }
    }
}
