//! Lecture 3: Maxwell-Boltzmann energy distributions.

use ndarray::Array1;
use plotters::prelude::{GREEN, RED};
use plotters::style::full_palette::PURPLE;

use super::{LectureScript, ScriptError};
use crate::submodules::kinetics::{eq_3_20, eq_3_20_integrated, eq_3_23};
use crate::submodules::plotting::{make_fig, Curve, FigSpec, FillRegion};
use crate::submodules::type_lib::NumericData;

pub struct Lect3;

impl Lect3 {
    /// Fraction-of-molecules-at-energy curves for a family of temperatures.
    fn graph_alg_eq(&self) -> Result<(), ScriptError> {
        let e_end = 10.0;
        let energy_range = Array1::linspace(0.0, e_end, 2001);
        let temps = [300.0, 450.0, 600.0, 750.0, 1000.0];
        let frac_e: Vec<Array1<NumericData>> =
            temps.iter().map(|&temp| energy_range.mapv(|e| eq_3_20(e, temp))).collect();

        let mut fig = FigSpec::new("lect3_frac_energy", energy_range.clone(), frac_e[0].clone());
        fig.y1_label = temps[0].to_string();
        let mut curve2 = Curve::second(frac_e[1].clone());
        curve2.label = temps[1].to_string();
        fig.curve2 = Some(curve2);
        let mut curve3 = Curve::third(frac_e[2].clone());
        curve3.label = temps[2].to_string();
        fig.curve3 = Some(curve3);
        let mut curve4 = Curve::fourth(frac_e[3].clone());
        curve4.label = temps[3].to_string();
        fig.curve4 = Some(curve4);
        let mut curve5 = Curve::fifth(frac_e[4].clone());
        curve5.label = temps[4].to_string();
        fig.curve5 = Some(curve5);
        fig.x_label = "energy (kcal/mol)".to_string();
        fig.y_label = "fraction with E at temp in K".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(e_end);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(1.0);
        fig.fig_width = 800;
        fig.fig_height = 400;
        make_fig(&fig)?;

        // shade the high-energy tails of the 600 K and 1000 K curves
        let x_fill = Array1::linspace(4.0, 60.0, 50);
        let y_fill = x_fill.mapv(|e| eq_3_20(e, 600.0));
        let y2_fill = x_fill.mapv(|e| eq_3_20(e, 1000.0));
        let mut fig = FigSpec::new("lect3_frac_energyfill", energy_range, frac_e[2].clone());
        fig.y1_label = temps[2].to_string();
        fig.color1 = GREEN;
        let mut curve2 = Curve::second(frac_e[4].clone());
        curve2.label = temps[4].to_string();
        curve2.color = PURPLE;
        fig.curve2 = Some(curve2);
        fig.x_label = "energy (kcal/mol)".to_string();
        fig.y_label = "fraction with E at temp in K".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(e_end);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(0.5);
        fig.fig_width = 800;
        fig.fig_height = 400;
        fig.fill1 = Some(FillRegion::first(x_fill.clone(), y_fill));
        fig.fill2 = Some(FillRegion::second(x_fill, y2_fill));
        make_fig(&fig)?;
        Ok(())
    }

    /// Analytic vs. approximate fraction of molecules with E above a barrier.
    fn graph_int(&self) -> Result<(), ScriptError> {
        let temp_end = 1200.0;
        let temp_range = Array1::linspace(0.001, temp_end, 2001);

        let ea = 4.0;
        let frac_e_anal = temp_range.mapv(|t| eq_3_20_integrated(t, ea));
        let frac_e_approx = temp_range.mapv(|t| eq_3_23(t, ea));

        let mut fig = FigSpec::new("lect3_frac_energy_at_least", temp_range, frac_e_anal);
        fig.y1_label = "analytical".to_string();
        let mut curve2 = Curve::second(frac_e_approx);
        curve2.label = "approximate".to_string();
        curve2.color = RED;
        fig.curve2 = Some(curve2);
        fig.x_label = "temperature (K)".to_string();
        fig.y_label = "fraction with E > E_A = 4.0".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(temp_end);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(1.0);
        fig.fig_width = 800;
        fig.fig_height = 400;
        make_fig(&fig)?;
        Ok(())
    }
}

impl LectureScript for Lect3 {
    fn name(&self) -> &'static str {
        "lect3"
    }

    fn run(&self) -> Result<(), ScriptError> {
        self.graph_alg_eq()?;
        self.graph_int()
    }
}
