//! Lecture 9: membrane reactor with pressure drop, A <-> 3B + C with B
//! diffusing out through the membrane.

use std::collections::BTreeMap;
use std::path::Path;

use log::info;
use ode_solvers::{System, Vector4};

use super::{LectureScript, ScriptError};
use crate::submodules::csv_io::{silent_remove, write_csv, CsvValue, Row, WriteOpts};
use crate::submodules::ode::solve_fixed4;
use crate::submodules::plotting::{make_fig, Curve, FigSpec, LegendLoc, DEF_FIG_DIR};
use crate::submodules::type_lib::NumericData;

struct MembraneReactor {
    ka: NumericData,
    keq: NumericData,
    kc: NumericData,
    alpha: NumericData,
    cto: NumericData,
    fto: NumericData,
}

impl System<NumericData, Vector4<NumericData>> for MembraneReactor {
    /// State vector: [F_A, F_B, F_C, p] as functions of catalyst mass.
    fn system(&self, _w: NumericData, y: &Vector4<NumericData>, dy: &mut Vector4<NumericData>) {
        let (fa, fb, fc, p) = (y[0], y[1], y[2], y[3]);
        let ft = fa + fb + fc;
        let ca = self.cto * fa / ft;
        let cb = self.cto * fb / ft;
        let cc = self.cto * fc / ft;
        let r1 = self.ka * (ca - cb.powi(3) * cc / self.keq);
        let rb = self.kc * cb;
        dy[0] = -r1;
        dy[1] = 3.0 * r1 - rb;
        dy[2] = r1;
        dy[3] = -self.alpha * ft / (2.0 * self.fto * p);
    }
}

pub struct Lect9;

impl LectureScript for Lect9 {
    fn name(&self) -> &'static str {
        "lect9"
    }

    fn run(&self) -> Result<(), ScriptError> {
        let fa0 = 5.0;
        let w_max = 30.0;
        let reactor = MembraneReactor {
            ka: 2.0,
            keq: 0.004,
            kc: 8.0,
            alpha: 0.015,
            cto: 0.2,
            fto: 5.0,
        };
        let (w_cat, [fa, fb, fc, p]) =
            solve_fixed4(reactor, 0.0, w_max, 1001, [fa0, 0.0, 0.0, 1.0])?;

        let mut fig = FigSpec::new("lecture_9flows", w_cat.clone(), fa.clone());
        fig.y1_label = "F_A(W)".to_string();
        let mut curve2 = Curve::second(fb.clone());
        curve2.label = "F_B(W)".to_string();
        fig.curve2 = Some(curve2);
        let mut curve3 = Curve::third(fc.clone());
        curve3.label = "F_C(W)".to_string();
        fig.curve3 = Some(curve3);
        fig.x_label = "catalyst mass (kg)".to_string();
        fig.y_label = "molar flow rates (mol/s)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(w_max);
        fig.legend_loc = LegendLoc::MiddleRight;
        make_fig(&fig)?;

        let mut fig = FigSpec::new("lecture_9p", w_cat.clone(), p.clone());
        fig.x_label = "catalyst mass (kg)".to_string();
        fig.y_label = "pressure ratio, p (unitless)".to_string();
        fig.x_lim_lo = Some(0.0);
        fig.x_lim_hi = Some(w_max);
        fig.y_lim_lo = Some(0.0);
        fig.y_lim_hi = Some(1.0);
        fig.legend_loc = LegendLoc::MiddleRight;
        make_fig(&fig)?;

        // also dump the profile as a table for the homework write-up
        let fieldnames = ["w", "fa", "fb", "fc", "p"];
        let rows: Vec<Row> = (0..w_cat.len())
            .map(|i| {
                let mut row = BTreeMap::new();
                row.insert("w".to_string(), CsvValue::Number(w_cat[i]));
                row.insert("fa".to_string(), CsvValue::Number(fa[i]));
                row.insert("fb".to_string(), CsvValue::Number(fb[i]));
                row.insert("fc".to_string(), CsvValue::Number(fc[i]));
                row.insert("p".to_string(), CsvValue::Number(p[i]));
                row
            })
            .collect();
        let csv_path = Path::new(DEF_FIG_DIR).join("lecture_9_profile.csv");
        silent_remove(&csv_path)?;
        let opts = WriteOpts { round_digits: Some(6), ..WriteOpts::default() };
        write_csv(&rows, &csv_path, &fieldnames, &opts)?;
        info!("wrote profile table {}", csv_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn flows_respect_stoichiometry_until_b_escapes() {
        let reactor = MembraneReactor {
            ka: 2.0,
            keq: 0.004,
            kc: 0.0, // membrane closed
            alpha: 0.0,
            cto: 0.2,
            fto: 5.0,
        };
        let (_, [fa, fb, fc, p]) = solve_fixed4(reactor, 0.0, 5.0, 51, [5.0, 0.0, 0.0, 1.0]).unwrap();
        for i in 0..fa.len() {
            // A consumed equals C formed, and B is three times C
            assert_relative_eq!(5.0 - fa[i], fc[i], epsilon = 1.0e-6);
            assert_relative_eq!(fb[i], 3.0 * fc[i], epsilon = 1.0e-6);
            assert_relative_eq!(p[i], 1.0, epsilon = 1.0e-9);
        }
    }
}
