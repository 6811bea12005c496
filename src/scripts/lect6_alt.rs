//! Homework 3 problem 1: shaded CSTR vs. PFR areas under a Levenspiel curve.

use ndarray::{array, Array1};
use plotters::prelude::BLACK;

use super::{LectureScript, ScriptError};
use crate::submodules::plotting::{make_fig, FigSpec, FillRegion};
use crate::submodules::type_lib::NumericData;

const CAO: NumericData = 0.2; // mol / L
const NUO: NumericData = 10.0; // L / s
const K_EQUIL: NumericData = 20.0; // L / mol
const K: NumericData = 0.2; // L / mol-s

/// Rate of disappearance of A for 2A <-> B, mol/L-s.
fn r_dis_a(x: NumericData) -> NumericData {
    2.0 * K * CAO * (CAO * (1.0 - x).powi(2) - x / (2.0 * K_EQUIL))
}

pub struct Lect6Alt;

impl LectureScript for Lect6Alt {
    fn name(&self) -> &'static str {
        "lect6_alt"
    }

    fn run(&self) -> Result<(), ScriptError> {
        let fao = CAO * NUO;
        let x_end = 0.65;

        let x_pfr = Array1::linspace(0.0, x_end, 10001);
        let leven_pfr = x_pfr.mapv(|x| fao / r_dis_a(x));
        // CSTR sized at the outlet rate: a flat line at the curve's endpoint
        let leven_cstr = array![leven_pfr[leven_pfr.len() - 1], leven_pfr[leven_pfr.len() - 1]];
        let x_cstr = array![0.0, x_end];

        let mut fig = FigSpec::new("lect06_alt", x_pfr.clone(), leven_pfr.clone());
        fig.color1 = BLACK;
        fig.x_label = "conversion (X, unitless)".to_string();
        fig.y_label = "F_A0 / -r_A (L)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(x_end);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(2000.0);
        fig.fill1 = Some(FillRegion::first(x_cstr, leven_cstr));
        fig.fill2 = Some(FillRegion::second(x_pfr, leven_pfr));
        make_fig(&fig)?;
        Ok(())
    }
}
