//! Lecture 5: the same reversible gas reaction run in a PFR, with volume
//! change from the mole contraction.

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
const NU_0: NumericData = 1.0; // L / s

/// dX/dV for 2A <-> B in the gas phase; epsilon = -1/2 shrinks the volumetric
/// flow as conversion climbs.
fn design_eq(x: NumericData, nu_0: NumericData) -> NumericData {
    let vol_change = 1.0 - 0.5 * x;
    2.0 * K / nu_0 * (CAO * ((1.0 - x) / vol_change).powi(2) - x * 0.5 / K_C / vol_change)
}

struct PfrConversion {
    nu_0: NumericData,
}

impl System<NumericData, Vector1<NumericData>> for PfrConversion {
    fn system(&self, _v: NumericData, y: &Vector1<NumericData>, dy: &mut Vector1<NumericData>) {
        dy[0] = design_eq(y[0], self.nu_0);
    }
}

pub struct Lect5;

impl LectureScript for Lect5 {
    fn name(&self) -> &'static str {
        "lect5"
    }

    fn run(&self) -> Result<(), ScriptError> {
        let v_end = 60.0;
        let (volume, conv) = solve_fixed1(PfrConversion { nu_0: NU_0 }, 0.0, v_end, 1001, 0.0)?;

        let x_eq =
            bisect(|x| design_eq(x, NU_0), 0.0, 0.9999, 1.0e-10, 200).ok_or(ScriptError::NoRoot)?;
        info!("equilibrium conversion X_eq = {x_eq:.6}");

        let mut fig = FigSpec::new("lect5_conversion", volume.clone(), conv.clone());
        fig.y1_label = "X(V)".to_string();
        let mut eq_line = Curve::second(array![x_eq, x_eq]);
        eq_line.x = Some(array![0.0, v_end]);
        eq_line.label = "X_eq".to_string();
        fig.curve2 = Some(eq_line);
        fig.x_label = "volume (L)".to_string();
        fig.y_label = "conversion (unitless)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(v_end);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(1.0);
        fig.fig_width = 800;
        fig.fig_height = 400;
        make_fig(&fig)?;

        let c_a: Array1<NumericData> = conv.mapv(|x| CAO * (1.0 - x) / (1.0 - 0.5 * x));
        let c_b: Array1<NumericData> = conv.mapv(|x| CAO * x * 0.5 / (1.0 - 0.5 * x));
        let mut fig = FigSpec::new("lect5_concentration", volume.clone(), c_a);
        fig.y1_label = "A".to_string();
        let mut curve2 = Curve::second(c_b);
        curve2.label = "B".to_string();
        curve2.color = RED;
        fig.curve2 = Some(curve2);
        fig.x_label = "volume (L)".to_string();
        fig.y_label = "concentration (mol/L)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(v_end);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(CAO);
        fig.fig_width = 800;
        fig.fig_height = 400;
        make_fig(&fig)?;

        // clicker question: which curve is halved inlet flow?
        let (_, conv_2) = solve_fixed1(PfrConversion { nu_0: NU_0 * 0.5 }, 0.0, v_end, 1001, 0.0)?;
        let (_, conv_3) = solve_fixed1(PfrConversion { nu_0: NU_0 * 2.0 }, 0.0, v_end, 1001, 0.0)?;
        let mut fig = FigSpec::new("lect5_clicker", volume, conv.clone());
        fig.y1_label = "A) No change".to_string();
        let mut curve2 = Curve::second(&conv * 2.0);
        curve2.label = "B) ".to_string();
        fig.curve2 = Some(curve2);
        let mut curve3 = Curve::third(&conv * 0.5);
        curve3.label = "C) ".to_string();
        fig.curve3 = Some(curve3);
        let mut curve4 = Curve::fourth(conv_2);
        curve4.label = "D) ".to_string();
        fig.curve4 = Some(curve4);
        let mut curve5 = Curve::fifth(conv_3);
        curve5.label = "E) ".to_string();
        fig.curve5 = Some(curve5);
        fig.x_label = "volume (L)".to_string();
        fig.y_label = "conversion (unitless)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(v_end);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(1.0);
        fig.fig_width = 800;
        fig.fig_height = 400;
        make_fig(&fig)?;

        let x_leven = Array1::linspace(0.0, 0.7, 1001);
        let y_leven = x_leven.mapv(|x| 1.0 / design_eq(x, NU_0));
        let mut fig = FigSpec::new("lect5_levenspiel", x_leven, y_leven);
        fig.x_label = "conversion (unitless)".to_string();
        fig.y_label = "-F_A0 / r_A (L)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(0.8);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(150.0);
        fig.fig_width = 800;
        fig.fig_height = 400;
        make_fig(&fig)?;
        Ok(())
    }
}
