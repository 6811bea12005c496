//! Lecture 8: sizing CSTRs in series on a Levenspiel plot.

use log::info;
use ndarray::{array, Array1};

use super::{LectureScript, ScriptError};
use crate::submodules::plotting::{make_fig, FigSpec, FillRegion};
use crate::submodules::type_lib::NumericData;

fn neg_ra(k: NumericData, cao: NumericData, x: NumericData) -> NumericData {
    k * cao * (1.0 - x)
}

/// Levenspiel ordinate F_A0 / -r_A for a first-order reaction.
fn get_volume(cao: NumericData, nu: NumericData, k: NumericData, x: NumericData) -> NumericData {
    (cao * nu) / neg_ra(k, cao, x)
}

pub struct Lect8;

impl LectureScript for Lect8 {
    fn name(&self) -> &'static str {
        "lect8"
    }

    fn run(&self) -> Result<(), ScriptError> {
        let x_range = Array1::linspace(0.0, 0.8, 2001);
        let vol = 50.0; // L
        let nu = 4.0; // L/s
        let tau = vol / nu; // s
        let k = 0.0281; // 1/min
        let cao = 1.0; // mol/L

        let volume = x_range.mapv(|x| get_volume(cao, nu, k, x));

        // conversion after each of four identical CSTRs in series
        let mut x = [0.0; 5];
        for (reactor, conv) in x.iter_mut().enumerate() {
            *conv = 1.0 - 1.0 / (1.0 + tau * k).powi(reactor as i32);
            info!("After reactor {reactor}, the conversion is {conv:.2}");
        }

        let level1 = get_volume(cao, nu, k, x[1]);
        let level2 = get_volume(cao, nu, k, x[2]);
        let fill1 = FillRegion::first(array![x[0], x[1]], array![level1, level1]);
        let fill2 = FillRegion::second(array![x[1], x[2]], array![level2, level2]);

        let mut fig = FigSpec::new("lect8_cstrs_series", x_range.clone(), volume.clone());
        fig.x_label = "conversion (X, unitless)".to_string();
        fig.y_label = "F_A0 / -r_A (L)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(0.5);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(600.0);
        fig.fig_width = 600;
        fig.fig_height = 400;
        fig.fill1 = Some(fill1.clone());
        fig.fill2 = Some(fill2.clone());
        make_fig(&fig)?;

        let fao = cao * nu;
        let fa1 = cao * (1.0 - x[1]) * nu;
        info!("F_A0 = {fao}, F_A1 = {fa1:.4}, fractional drop = {:.4}", (fao - fa1) / fao);

        // first reactor alone
        let mut fig = FigSpec::new("lect8_cstrs_series1", x_range.clone(), volume);
        fig.x_label = "conversion (X, unitless)".to_string();
        fig.y_label = "F_A0 / -r_A (L)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(0.5);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(600.0);
        fig.fig_width = 600;
        fig.fig_height = 400;
        fig.fill1 = Some(fill1);
        make_fig(&fig)?;

        // re-drawn with the second reactor's feed as the basis
        let ca1 = cao * (1.0 - x[1]);
        let volume = x_range.mapv(|x_i| get_volume(ca1, nu, k, x_i));
        let level = get_volume(ca1, nu, k, x[1]);
        let fill2 = FillRegion::second(array![x[0], x[1]], array![level, level]);

        let mut fig = FigSpec::new("lect8_cstrs_series2", x_range, volume);
        fig.x_label = "conversion (X, unitless)".to_string();
        fig.y_label = "F_A1 / -r_A (L)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(0.5);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(600.0);
        fig.fig_width = 600;
        fig.fig_height = 400;
        fig.fill2 = Some(fill2);
        make_fig(&fig)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn each_staircase_rectangle_has_the_tank_volume_as_its_area() {
        let vol = 50.0;
        let nu = 4.0;
        let tau = vol / nu;
        let k = 0.0281;
        let cao = 1.0;
        let mut prev = 0.0;
        for reactor in 1..5 {
            let conv = 1.0 - 1.0 / (1.0_f64 + tau * k).powi(reactor);
            assert!(conv > prev && conv < 1.0);
            let area = (conv - prev) * get_volume(cao, nu, k, conv);
            assert_relative_eq!(area, vol, epsilon = 1.0e-9);
            prev = conv;
        }
    }
}
