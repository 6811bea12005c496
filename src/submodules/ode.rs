//! Thin wrappers over the `ode_solvers` Dormand-Prince stepper that return
//! solution columns on a fixed output grid, the shape the scripts plot from.

use log::debug;
use ndarray::Array1;
use ode_solvers::dopri5::Dopri5;
use ode_solvers::{System, Vector1, Vector4};
use thiserror::Error;

use crate::submodules::type_lib::NumericData;

#[derive(Debug, Error)]
pub enum OdeError {
    #[error("ODE integration failed: {0}")]
    Integration(String),
}

const RTOL: NumericData = 1.0e-8;
const ATOL: NumericData = 1.0e-10;

/// Integrates a scalar ODE from `x0` to `x_end`, reporting the solution at
/// `n_points` equally spaced abscissae.
pub fn solve_fixed1<S>(
    system: S,
    x0: NumericData,
    x_end: NumericData,
    n_points: usize,
    y0: NumericData,
) -> Result<(Array1<NumericData>, Array1<NumericData>), OdeError>
where
    S: System<NumericData, Vector1<NumericData>>,
{
    let dx = (x_end - x0) / (n_points - 1) as NumericData;
    let mut stepper = Dopri5::new(system, x0, x_end, dx, Vector1::new(y0), RTOL, ATOL);
    let stats = stepper.integrate().map_err(|e| OdeError::Integration(e.to_string()))?;
    debug!("{}", stats);
    let x = Array1::from_vec(stepper.x_out().clone());
    let y = stepper.y_out().iter().map(|state| state[0]).collect();
    Ok((x, y))
}

/// Same as [`solve_fixed1`] for a 4-equation system; returns one column per
/// state variable.
pub fn solve_fixed4<S>(
    system: S,
    x0: NumericData,
    x_end: NumericData,
    n_points: usize,
    y0: [NumericData; 4],
) -> Result<(Array1<NumericData>, [Array1<NumericData>; 4]), OdeError>
where
    S: System<NumericData, Vector4<NumericData>>,
{
    let dx = (x_end - x0) / (n_points - 1) as NumericData;
    let y0 = Vector4::new(y0[0], y0[1], y0[2], y0[3]);
    let mut stepper = Dopri5::new(system, x0, x_end, dx, y0, RTOL, ATOL);
    let stats = stepper.integrate().map_err(|e| OdeError::Integration(e.to_string()))?;
    debug!("{}", stats);
    let x = Array1::from_vec(stepper.x_out().clone());
    let columns =
        std::array::from_fn(|i| stepper.y_out().iter().map(|state| state[i]).collect());
    Ok((x, columns))
}
