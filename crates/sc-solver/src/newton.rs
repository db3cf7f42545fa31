//! Damped Newton solver with box bounds.

use crate::error::{SolverError, SolverResult};
use nalgebra::DVector;
use tracing::{debug, trace};

/// Newton solver configuration.
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance for residual norm
    pub abs_tol: f64,
    /// Relative tolerance for residual norm
    pub rel_tol: f64,
    /// Per-variable lower bounds the iterate must stay above
    pub lower_bounds: Option<DVector<f64>>,
    /// Per-variable upper bounds the iterate must stay below
    pub upper_bounds: Option<DVector<f64>>,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Maximum line search iterations
    pub max_line_search_iters: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 60,
            abs_tol: 1e-8,
            rel_tol: 1e-12,
            lower_bounds: None,
            upper_bounds: None,
            line_search_beta: 0.5,
            max_line_search_iters: 25,
        }
    }
}

/// Newton iteration result.
pub struct NewtonResult {
    /// Solution vector
    pub x: DVector<f64>,
    /// Final residual norm
    pub residual_norm: f64,
    /// Number of iterations
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

fn within_bounds(x: &DVector<f64>, config: &NewtonConfig) -> bool {
    if let Some(lo) = &config.lower_bounds
        && x.iter().zip(lo.iter()).any(|(xi, li)| xi < li)
    {
        return false;
    }
    if let Some(hi) = &config.upper_bounds
        && x.iter().zip(hi.iter()).any(|(xi, ui)| xi > ui)
    {
        return false;
    }
    true
}

/// Newton solver with backtracking line search and box bounds.
///
/// Candidates that leave the bounds, or for which the residual cannot be
/// evaluated (e.g. a table domain error mid-search), shrink the step like an
/// insufficient-descent candidate would. The residual must be evaluable at
/// the initial guess.
pub fn newton_solve<F, J>(
    x0: DVector<f64>,
    residual_fn: F,
    jacobian_fn: J,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    F: Fn(&DVector<f64>) -> SolverResult<DVector<f64>>,
    J: Fn(&DVector<f64>) -> SolverResult<nalgebra::DMatrix<f64>>,
{
    let mut x = x0.clone();
    let mut r = residual_fn(&x)?;
    let mut r_norm = r.norm();
    let r0_norm = r_norm;

    for iter in 0..config.max_iterations {
        // Check convergence
        if r_norm < config.abs_tol || r_norm < config.rel_tol * r0_norm {
            debug!(iterations = iter, residual = r_norm, "newton converged");
            return Ok(NewtonResult {
                x,
                residual_norm: r_norm,
                iterations: iter,
                converged: true,
            });
        }

        // Solve J * dx = -r
        let jac = jacobian_fn(&x)?;
        let dx = jac
            .lu()
            .solve(&(-r.clone()))
            .ok_or_else(|| SolverError::Numeric {
                what: "Jacobian solve failed".to_string(),
            })?;

        // Backtracking line search
        let mut alpha = 1.0;
        let mut accepted: Option<(DVector<f64>, DVector<f64>, f64)> = None;
        for _ in 0..config.max_line_search_iters {
            let x_try = &x + alpha * &dx;
            if within_bounds(&x_try, config)
                && let Ok(r_try) = residual_fn(&x_try)
            {
                let r_try_norm = r_try.norm();
                let decreased = r_try_norm < r_norm;
                accepted = Some((x_try, r_try, r_try_norm));
                if decreased {
                    break;
                }
            }
            alpha *= config.line_search_beta;
        }

        let Some((x_new, r_new, r_new_norm)) = accepted else {
            return Err(SolverError::ConvergenceFailed {
                what: format!("line search found no admissible step at iteration {iter}"),
            });
        };

        trace!(iteration = iter, alpha, residual = r_new_norm, "newton step");
        x = x_new;
        r = r_new;
        r_norm = r_new_norm;

        // Check for stagnation
        if alpha < 1e-10 {
            return Err(SolverError::ConvergenceFailed {
                what: format!("line search stagnated at iteration {iter}"),
            });
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "maximum iterations {} reached, residual = {}",
            config.max_iterations, r_norm
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jacobian::finite_difference_jacobian;

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0, seeded on the positive branch
        let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_element(1, x[0] * x[0] - 4.0))
        };

        let x0 = DVector::from_element(1, 3.0);
        let config = NewtonConfig::default();
        let result = newton_solve(
            x0,
            residual,
            |x| finite_difference_jacobian(x, residual, 1e-7),
            &config,
        )
        .unwrap();

        assert!(result.converged);
        assert!((result.x[0] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn coupled_two_by_two() {
        // x^2 + y^2 = 25, x - y = 1 -> (4, 3)
        let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_vec(vec![
                x[0] * x[0] + x[1] * x[1] - 25.0,
                x[0] - x[1] - 1.0,
            ]))
        };

        let x0 = DVector::from_vec(vec![5.0, 1.0]);
        let config = NewtonConfig::default();
        let result = newton_solve(
            x0,
            residual,
            |x| finite_difference_jacobian(x, residual, 1e-7),
            &config,
        )
        .unwrap();

        assert!(result.converged);
        assert!((result.x[0] - 4.0).abs() < 1e-6);
        assert!((result.x[1] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn bounds_keep_iterates_admissible() {
        // Residual is undefined below x = 1; the bound keeps the search away.
        let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            if x[0] < 1.0 {
                return Err(SolverError::Numeric {
                    what: "residual undefined".to_string(),
                });
            }
            Ok(DVector::from_element(1, (x[0] - 2.0) * (x[0] + 10.0)))
        };

        let config = NewtonConfig {
            lower_bounds: Some(DVector::from_element(1, 1.0)),
            ..Default::default()
        };
        let result = newton_solve(
            DVector::from_element(1, 6.0),
            residual,
            |x| finite_difference_jacobian(x, residual, 1e-7),
            &config,
        )
        .unwrap();

        assert!(result.converged);
        assert!((result.x[0] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn rootless_residual_fails() {
        // x^2 + 1 has no real root
        let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_element(1, x[0] * x[0] + 1.0))
        };

        let config = NewtonConfig {
            max_iterations: 30,
            ..Default::default()
        };
        let result = newton_solve(
            DVector::from_element(1, 3.0),
            residual,
            |x| finite_difference_jacobian(x, residual, 1e-7),
            &config,
        );

        assert!(result.is_err());
    }
}
