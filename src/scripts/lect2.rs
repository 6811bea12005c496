//! Lecture 2: hippo digestion design equation.

use ndarray::Array1;

use super::{LectureScript, ScriptError};
use crate::submodules::plotting::{make_fig, FigSpec};

pub struct Lect2;

impl LectureScript for Lect2 {
    fn name(&self) -> &'static str {
        "lect2"
    }

    fn run(&self) -> Result<(), ScriptError> {
        // stop short of full conversion to avoid dividing by zero
        let conversion = Array1::linspace(0.0, 0.999, 2001);
        let design_eq = conversion.mapv(|x| (1.00 + 16.5 * (1.00 - x)) / (1.75 * (1.0 - x)));

        let mut fig = FigSpec::new("lect2_hippo", conversion, design_eq);
        fig.x_label = "conversion (X, unitless)".to_string();
        fig.y_label = "C_F0 / -r_F (hr)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(1.0);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(24.0);
        make_fig(&fig)?;
        Ok(())
    }
}
