//! Lecture 6: Levenspiel plots for reactor sizing plus in-class Arrhenius
//! calculations.

use log::info;
use ndarray::Array1;
use plotters::prelude::RED;

use super::{LectureScript, ScriptError};
use crate::submodules::kinetics::{
    cal_to_j, k_from_a_ea, temp_c_to_k, temp_k_to_c, AVO, R_KCAL, R_KJ,
};
use crate::submodules::plotting::{make_fig, Curve, FigSpec};
use crate::submodules::type_lib::NumericData;

const K: NumericData = 0.2; // L / mol-s
const K_C: NumericData = 20.0; // L / mol
const CAO: NumericData = 0.2; // mol / L
const NU_0: NumericData = 1.0; // L / s

/// dX/dV for 2A <-> B; `gas` toggles the epsilon = -1/2 volume change.
fn design_eq(x: NumericData, nu_0: NumericData, gas: bool) -> NumericData {
    let vol_change = if gas { 1.0 - 0.5 * x } else { 1.0 };
    2.0 * K / nu_0 * (CAO * ((1.0 - x) / vol_change).powi(2) - x * 0.5 / K_C / vol_change)
}

pub struct Lect6;

impl Lect6 {
    fn levenspiel_figs(&self) -> Result<(), ScriptError> {
        let x_leven = Array1::linspace(0.0, 0.7, 1001);
        let y_constant_density = x_leven.mapv(|x| 1.0 / design_eq(x, NU_0, false));

        let mut fig = FigSpec::new("lect06_levenspiel", x_leven.clone(), y_constant_density.clone());
        fig.x_label = "conversion (unitless)".to_string();
        fig.y_label = "-F_A0 / r_A (L)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(0.7);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(150.0);
        fig.fig_width = 600;
        fig.fig_height = 400;
        make_fig(&fig)?;

        let mut fig = FigSpec::new("lect06_levenspiel_mult", x_leven, y_constant_density.clone());
        let mut curve2 = Curve::second(&y_constant_density * 2.0);
        curve2.color = RED;
        fig.curve2 = Some(curve2);
        fig.curve3 = Some(Curve::third(&y_constant_density * 0.5));
        fig.x_label = "conversion (unitless)".to_string();
        fig.y_label = "-F_A0 / r_A (L)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(0.7);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(150.0);
        fig.fig_width = 800;
        fig.fig_height = 400;
        make_fig(&fig)?;
        Ok(())
    }

    /// Rate coefficients at two temperatures from a molecular prefactor.
    fn demo_arrhenius(&self) {
        let t1_c = 625.0;
        let t2_c = 725.0;
        let e_a = 29.25; // kJ/mol
        let a = 7.27e-11; // cm^3 / molecules-s
        let a_moles = a * AVO * 0.001 * 60.0; // L / mol-min
        let temp1 = temp_c_to_k(t1_c);
        let temp2 = temp_c_to_k(t2_c);
        let k1 = k_from_a_ea(a_moles, e_a, temp1, R_KJ);
        let k2 = k_from_a_ea(a_moles, e_a, temp2, R_KJ);
        info!("Given A = {a} cm^3/molecules-s, E_A = {e_a} kJ/mol:");
        info!("              at {t1_c} C ({temp1} K), k = {k1:.2e} L/mol-min");
        info!("              at {t2_c} C ({temp2} K), k = {k2:.2e} L/mol-min");
    }

    /// Extrapolating a measured rate 100 K up the Arrhenius line.
    fn demo_extrapolation(&self) {
        let e_a_cal = 13.0; // kcal/mol
        let e_a = cal_to_j(e_a_cal); // kJ/mol
        let temp3 = 333.0;
        let temp4 = temp3 + 100.0;
        let t3_c = temp_k_to_c(temp3);
        let t4_c = temp_k_to_c(temp4);
        let r = 1.69 * 1.0e-6 / 1000.0 * 60.0;

        let a = r / k_from_a_ea(1.0, e_a, temp3, R_KCAL);
        let k3 = k_from_a_ea(a, e_a, temp3, R_KCAL);
        let k4 = k_from_a_ea(a, e_a, temp4, R_KCAL);

        info!("Given E_A = {e_a_cal:.1} kcal/mol ({e_a:.1} kJ/mol):");
        info!("       Given: at  {t3_c:.0} C ({temp3} K), k = {k3:.2e} L/mol-min");
        info!("  Calculated: at {t4_c:.0} C ({temp4} K), k = {k4:.2e} L/mol-min");
    }

    fn demo_cstr_and_exam(&self) {
        let k = 1.95e-4; // L/mol-s
        let tau = 1.0 / 3.0e-3; // s
        info!("tau: {tau:.2}");
        let cao = 1.0; // mol/L
        info!("term: {:.2}", 1.0 / (k * tau * cao) + 56.0);

        // two equal CSTRs in series, PE exam problem
        let x1 = 0.55;
        let kc: f64 = 5.8;
        let x2 = (1.0 - (1.0 - (1.0 + 1.0 / kc) * x1).powi(2)) / (1.0 + 1.0 / kc);
        info!("P5-17: X2 = {x2:.3}");
    }
}

impl LectureScript for Lect6 {
    fn name(&self) -> &'static str {
        "lect6"
    }

    fn run(&self) -> Result<(), ScriptError> {
        self.levenspiel_figs()?;
        self.demo_arrhenius();
        self.demo_extrapolation();
        self.demo_cstr_and_exam();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn liquid_rate_drops_volume_correction() {
        // at X = 0 both phases see the inlet concentration
        assert_relative_eq!(design_eq(0.0, NU_0, true), design_eq(0.0, NU_0, false));
        // contraction concentrates the reactant, so the gas rate is faster
        assert!(design_eq(0.4, NU_0, true) > design_eq(0.4, NU_0, false));
    }
}
