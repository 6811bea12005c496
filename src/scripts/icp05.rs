//! In-class problem 5: maximum feed rate of a second-order CSTR at several
//! temperature and volume options.

use log::info;

use super::{LectureScript, ScriptError};
use crate::submodules::kinetics::{k_at_new_temp, temp_c_to_k, R_KCAL};

pub struct Icp05;

impl LectureScript for Icp05 {
    fn name(&self) -> &'static str {
        "icp05"
    }

    fn run(&self) -> Result<(), ScriptError> {
        let k_ref = 0.07; // L/mol-min
        let t_ref = temp_c_to_k(300.0);
        let e_a = 20.0; // kcal/mol
        let c_initial = 1.0; // mol/L
        let x = 0.9; // required conversion
        let common_constant = c_initial * c_initial * (1.0 - x); // mol^2/L^2

        // candidate reactors: temp in C, volume in L
        let options = [(500.0, 100.0), (200.0, 250.0), (350.0, 500.0), (200.0, 5000.0), (100.0, 10000.0)];
        for (temp, vol) in options {
            let temp_k = temp_c_to_k(temp);
            let k = k_at_new_temp(k_ref, e_a, R_KCAL, t_ref, temp_k);
            info!("At {temp}C ({temp_k}K), k = {k:.2e}");
            let intermed = k * vol;
            info!("  kV = {k:.2e} L/mol/min * {vol:.0} L = {intermed:.3} L^2/mol/min");
            info!(
                "  max F_A0 = {intermed:.1} L^2/mol/min * {common_constant:.2} mol^2/L^2 = {:.2} mol/min",
                intermed * common_constant
            );
        }
        Ok(())
    }
}
