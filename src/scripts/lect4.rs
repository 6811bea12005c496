//! Lecture 4: reversible reaction 2A <-> B in a constant-volume batch reactor.

use log::info;
use ndarray::{array, Array1};
use plotters::prelude::RED;

use super::{LectureScript, ScriptError};
use crate::submodules::func_lib::bisect;
use crate::submodules::ode::solve_fixed1;
use crate::submodules::plotting::{make_fig, Curve, FigSpec};
use crate::submodules::type_lib::NumericData;
use ode_solvers::{System, Vector1};

const K: NumericData = 0.2; // L / mol-s
const K_C: NumericData = 20.0; // L / mol
const CAO: NumericData = 0.2; // mol / L

/// dX/dt for 2A <-> B at constant volume, in conversion of A.
fn rate(x: NumericData) -> NumericData {
    2.0 * K * (CAO * (1.0 - x).powi(2) - x * 0.5 / K_C)
}

struct BatchConversion;

impl System<NumericData, Vector1<NumericData>> for BatchConversion {
    fn system(&self, _t: NumericData, y: &Vector1<NumericData>, dy: &mut Vector1<NumericData>) {
        dy[0] = rate(y[0]);
    }
}

pub struct Lect4;

impl LectureScript for Lect4 {
    fn name(&self) -> &'static str {
        "lect4"
    }

    fn run(&self) -> Result<(), ScriptError> {
        let t_end = 60.0;
        let (time, conversion) = solve_fixed1(BatchConversion, 0.0, t_end, 1001, 0.0)?;

        let x_eq = bisect(rate, 0.0, 0.9999, 1.0e-10, 200).ok_or(ScriptError::NoRoot)?;
        info!("equilibrium conversion X_eq = {x_eq:.6}");

        let mut fig = FigSpec::new("lect4_conversion", time.clone(), conversion.clone());
        fig.y1_label = "X(t)".to_string();
        let mut eq_line = Curve::second(array![x_eq, x_eq]);
        eq_line.x = Some(array![0.0, t_end]);
        eq_line.label = "X_eq".to_string();
        fig.curve2 = Some(eq_line);
        fig.x_label = "time (s)".to_string();
        fig.y_label = "conversion of A (unitless)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(t_end);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(1.0);
        fig.fig_width = 800;
        fig.fig_height = 400;
        make_fig(&fig)?;

        let c_a: Array1<NumericData> = conversion.mapv(|x| CAO * (1.0 - x));
        let c_b: Array1<NumericData> = conversion.mapv(|x| CAO * x * 0.5);
        let mut fig = FigSpec::new("lect4_concentration", time, c_a);
        fig.y1_label = "A".to_string();
        let mut curve2 = Curve::second(c_b);
        curve2.label = "B".to_string();
        curve2.color = RED;
        fig.curve2 = Some(curve2);
        fig.x_label = "time (s)".to_string();
        fig.y_label = "concentration (mol/L)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(t_end);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(CAO);
        fig.fig_width = 800;
        fig.fig_height = 400;
        make_fig(&fig)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn equilibrium_conversion_zeroes_the_rate() {
        let x_eq = bisect(rate, 0.0, 0.9999, 1.0e-12, 200).unwrap();
        assert_relative_eq!(rate(x_eq), 0.0, epsilon = 1.0e-10);
        // K_C * CAO = 4, so equilibrium sits well above half conversion
        assert!(x_eq > 0.5 && x_eq < 1.0);
    }
}
