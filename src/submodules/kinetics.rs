//! Unit conversions, gas constants, and closed-form kinetics equations shared
//! by the lecture scripts. All functions are pure; arrays are handled by
//! mapping these over `Array1` values.

use std::f64::consts::PI;

use crate::submodules::type_lib::NumericData;

pub const R_J: NumericData = 8.314; // J / mol-K
pub const R_KJ: NumericData = 8.314e-3; // kJ / mol-K
pub const R_KCAL: NumericData = 1.987e-3; // kcal / mol-K
pub const R_ATM: NumericData = 0.08206; // L-atm / mol-K
pub const AVO: NumericData = 6.022e23; // molecules / mol

const J_PER_CAL: NumericData = 4.184;

pub fn temp_c_to_k(temp_c: NumericData) -> NumericData {
    temp_c + 273.15
}

pub fn temp_k_to_c(temp_k: NumericData) -> NumericData {
    temp_k - 273.15
}

pub fn cal_to_j(energy_cal: NumericData) -> NumericData {
    energy_cal * J_PER_CAL
}

pub fn j_to_cal(energy_j: NumericData) -> NumericData {
    energy_j / J_PER_CAL
}

/// Arrhenius equation: k = A exp(-Ea / RT). `r_gas` must carry the same energy
/// units as `ea`.
pub fn k_from_a_ea(a: NumericData, ea: NumericData, temp: NumericData, r_gas: NumericData) -> NumericData {
    a * (-ea / (r_gas * temp)).exp()
}

/// Rescales a rate coefficient known at `t_ref` to `t_new`.
pub fn k_at_new_temp(
    k_ref: NumericData,
    ea: NumericData,
    r_gas: NumericData,
    t_ref: NumericData,
    t_new: NumericData,
) -> NumericData {
    k_ref * (-ea / r_gas * (1.0 / t_new - 1.0 / t_ref)).exp()
}

/// Maxwell-Boltzmann energy distribution (Fogler eq. 3-20): the fraction of
/// molecules per kcal/mol carrying energy `energy` at `temp` K.
pub fn eq_3_20(energy: NumericData, temp: NumericData) -> NumericData {
    let kt = R_KCAL * temp;
    2.0 * (energy / PI).sqrt() * kt.powf(-1.5) * (-energy / kt).exp()
}

/// High-activation-energy approximation (Fogler eq. 3-23) of the fraction of
/// molecules with energy above `ea` kcal/mol.
pub fn eq_3_23(temp: NumericData, ea: NumericData) -> NumericData {
    let xa = ea / (R_KCAL * temp);
    2.0 * (xa / PI).sqrt() * (-xa).exp()
}

/// Analytic integral of eq. 3-20 from `ea` to infinity.
pub fn eq_3_20_integrated(temp: NumericData, ea: NumericData) -> NumericData {
    let xa = ea / (R_KCAL * temp);
    2.0 * (xa / PI).sqrt() * (-xa).exp() + libm::erfc(xa.sqrt())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::Array1;

    use super::*;

    #[test]
    fn temp_conversions_are_mutual_inverses() {
        for t in [-40.0, 0.0, 25.0, 300.0, 1000.0] {
            assert_relative_eq!(temp_k_to_c(temp_c_to_k(t)), t, epsilon = 1.0e-10);
            assert_relative_eq!(temp_c_to_k(temp_k_to_c(t)), t, epsilon = 1.0e-10);
        }
    }

    #[test]
    fn energy_conversions_are_mutual_inverses() {
        for e in [0.0, 1.0, 13.0, 4184.0] {
            assert_relative_eq!(cal_to_j(j_to_cal(e)), e, epsilon = 1.0e-10);
            assert_relative_eq!(j_to_cal(cal_to_j(e)), e, epsilon = 1.0e-10);
        }
    }

    #[test]
    fn arrhenius_with_zero_ea_returns_prefactor() {
        assert_relative_eq!(k_from_a_ea(3.5, 0.0, 450.0, R_KJ), 3.5);
    }

    #[test]
    fn rescaled_k_at_reference_temp_is_unchanged() {
        assert_relative_eq!(k_at_new_temp(0.07, 20.0, R_KCAL, 573.15, 573.15), 0.07);
    }

    #[test]
    fn rescaled_k_matches_arrhenius_ratio() {
        let (a, ea, t1, t2) = (1.0e10, 24.0, 500.0, 650.0);
        let k1 = k_from_a_ea(a, ea, t1, R_KCAL);
        let k2 = k_from_a_ea(a, ea, t2, R_KCAL);
        assert_relative_eq!(k_at_new_temp(k1, ea, R_KCAL, t1, t2), k2, max_relative = 1.0e-10);
    }

    #[test]
    fn energy_distribution_normalizes_to_one() {
        // trapezoid rule over a range wide enough to capture the full tail
        let temp = 600.0;
        let e = Array1::linspace(0.0, 50.0, 200_001);
        let f = e.mapv(|e| eq_3_20(e, temp));
        let de = e[1] - e[0];
        let integral: NumericData =
            f.iter().zip(f.iter().skip(1)).map(|(a, b)| 0.5 * (a + b) * de).sum();
        assert_relative_eq!(integral, 1.0, epsilon = 1.0e-4);
    }

    #[test]
    fn approximate_fraction_tracks_analytic_at_high_ea() {
        // eq 3-23 is the large Ea/RT limit of the integrated form
        let (temp, ea) = (300.0, 12.0);
        let anal = eq_3_20_integrated(temp, ea);
        let approx = eq_3_23(temp, ea);
        assert_relative_eq!(approx, anal, max_relative = 0.15);
        // and both are small fractions at this barrier height
        assert!(anal < 1.0e-6);
    }
}
