//! Lecture 11: semibatch reactor A + B -> C + D, solved twice, once in
//! concentrations and once in moles, to show the balances agree.

use ndarray::Array1;
use ode_solvers::{System, Vector4};

use super::{LectureScript, ScriptError};
use crate::submodules::ode::solve_fixed4;
use crate::submodules::plotting::{make_fig, Curve, FigSpec};
use crate::submodules::type_lib::NumericData;

const VOL_0: NumericData = 5.0; // L
const CB_0: NumericData = 0.05; // mol/L
const CA_IN: NumericData = 0.025; // mol/L
const NU_IN: NumericData = 0.05; // L/s
const RATE_COEFF: NumericData = 2.2; // L/mol-s

/// Mole balances written directly in concentrations; the dilution terms come
/// from the growing liquid volume.
struct SemibatchConcentrations;

impl System<NumericData, Vector4<NumericData>> for SemibatchConcentrations {
    fn system(&self, t: NumericData, y: &Vector4<NumericData>, dy: &mut Vector4<NumericData>) {
        let (ca, cb, cc, cd) = (y[0], y[1], y[2], y[3]);
        let vol = VOL_0 + NU_IN * t;
        let r = RATE_COEFF * ca * cb;
        dy[0] = NU_IN * (CA_IN - ca) / vol - r;
        dy[1] = -NU_IN * cb / vol - r;
        dy[2] = -NU_IN * cc / vol + r;
        dy[3] = -NU_IN * cd / vol + r;
    }
}

/// The same reactor in moles; concentrations are recovered afterward.
struct SemibatchMoles;

impl System<NumericData, Vector4<NumericData>> for SemibatchMoles {
    fn system(&self, t: NumericData, y: &Vector4<NumericData>, dy: &mut Vector4<NumericData>) {
        let (na, nb, _nc, _nd) = (y[0], y[1], y[2], y[3]);
        let vol = VOL_0 + NU_IN * t;
        let ca = na / vol;
        let cb = nb / vol;
        let r = RATE_COEFF * ca * cb;
        let fa_in = CA_IN * NU_IN; // mol/s
        dy[0] = fa_in - r * vol;
        dy[1] = -r * vol;
        dy[2] = r * vol;
        dy[3] = r * vol;
    }
}

fn concentration_fig(
    name: &str,
    time: Array1<NumericData>,
    [ca, cb, cc, cd]: [Array1<NumericData>; 4],
    t_max: NumericData,
) -> Result<(), ScriptError> {
    let mut fig = FigSpec::new(name, time, ca);
    fig.y1_label = "C_A".to_string();
    let mut curve2 = Curve::second(cb);
    curve2.label = "C_B".to_string();
    fig.curve2 = Some(curve2);
    let mut curve3 = Curve::third(cc);
    curve3.label = "C_C".to_string();
    fig.curve3 = Some(curve3);
    let mut curve4 = Curve::fourth(cd);
    curve4.label = "C_D".to_string();
    fig.curve4 = Some(curve4);
    fig.x_label = "time (s)".to_string();
    fig.y_label = "concentration (mol/L)".to_string();
    fig.x_lim_lo = Some(0.0);
    fig.x_lim_hi = Some(t_max);
    fig.y_lim_lo = Some(-0.01);
    fig.y_lim_hi = Some(0.05);
    make_fig(&fig)?;
    Ok(())
}

pub struct Lect11Semibatch;

impl LectureScript for Lect11Semibatch {
    fn name(&self) -> &'static str {
        "lect11_semibatch"
    }

    fn run(&self) -> Result<(), ScriptError> {
        let t_max = 400.0;
        let (time, concs) =
            solve_fixed4(SemibatchConcentrations, 0.0, t_max, 1001, [0.0, CB_0, 0.0, 0.0])?;
        concentration_fig("lect_11_semibatch_ca", time, concs, t_max)?;

        let (time, [na, nb, nc, nd]) =
            solve_fixed4(SemibatchMoles, 0.0, t_max, 1001, [0.0, CB_0 * VOL_0, 0.0, 0.0])?;
        let vol = time.mapv(|t| VOL_0 + NU_IN * t);
        let concs = [&na / &vol, &nb / &vol, &nc / &vol, &nd / &vol];
        concentration_fig("lect_11_semibatch_na", time, concs, t_max)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn both_formulations_give_the_same_concentrations() {
        let t_max = 400.0;
        let (time, [ca_c, cb_c, cc_c, cd_c]) =
            solve_fixed4(SemibatchConcentrations, 0.0, t_max, 101, [0.0, CB_0, 0.0, 0.0]).unwrap();
        let (_, [na, nb, nc, nd]) =
            solve_fixed4(SemibatchMoles, 0.0, t_max, 101, [0.0, CB_0 * VOL_0, 0.0, 0.0]).unwrap();
        for i in 0..time.len() {
            let vol = VOL_0 + NU_IN * time[i];
            assert_relative_eq!(ca_c[i], na[i] / vol, epsilon = 1.0e-6);
            assert_relative_eq!(cb_c[i], nb[i] / vol, epsilon = 1.0e-6);
            assert_relative_eq!(cc_c[i], nc[i] / vol, epsilon = 1.0e-6);
            assert_relative_eq!(cd_c[i], nd[i] / vol, epsilon = 1.0e-6);
        }
    }

    #[test]
    fn products_form_in_equal_amounts() {
        let (_, [_, _, nc, nd]) =
            solve_fixed4(SemibatchMoles, 0.0, 400.0, 101, [0.0, CB_0 * VOL_0, 0.0, 0.0]).unwrap();
        for i in 0..nc.len() {
            assert_relative_eq!(nc[i], nd[i], epsilon = 1.0e-9);
        }
        assert!(*nc.last().unwrap() > 0.0);
    }
}
