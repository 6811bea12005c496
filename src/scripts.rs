use enum_dispatch::enum_dispatch;
use thiserror::Error;

use crate::submodules::csv_io::CsvError;
use crate::submodules::ode::OdeError;
use crate::submodules::plotting::PlotError;

pub mod icp05;
pub mod lect11_semibatch;
pub mod lect2;
pub mod lect3;
pub mod lect4;
pub mod lect5;
pub mod lect6;
pub mod lect6_alt;
pub mod lect8;
pub mod lect9;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Plot(#[from] PlotError),
    #[error(transparent)]
    Csv(#[from] CsvError),
    #[error(transparent)]
    Ode(#[from] OdeError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no sign change while bracketing a root")]
    NoRoot,
}

#[enum_dispatch]
pub trait LectureScript {
    fn name(&self) -> &'static str;
    fn run(&self) -> Result<(), ScriptError>;
}

#[enum_dispatch(LectureScript)]
pub enum ScriptKinds {
    Lect2(lect2::Lect2),
    Lect3(lect3::Lect3),
    Lect4(lect4::Lect4),
    Lect5(lect5::Lect5),
    Lect6(lect6::Lect6),
    Lect6Alt(lect6_alt::Lect6Alt),
    Lect8(lect8::Lect8),
    Lect9(lect9::Lect9),
    Lect11Semibatch(lect11_semibatch::Lect11Semibatch),
    Icp05(icp05::Icp05),
}

pub fn all_scripts() -> Vec<ScriptKinds> {
    vec![
        ScriptKinds::Lect2(lect2::Lect2),
        ScriptKinds::Lect3(lect3::Lect3),
        ScriptKinds::Lect4(lect4::Lect4),
        ScriptKinds::Lect5(lect5::Lect5),
        ScriptKinds::Lect6(lect6::Lect6),
        ScriptKinds::Lect6Alt(lect6_alt::Lect6Alt),
        ScriptKinds::Lect8(lect8::Lect8),
        ScriptKinds::Lect9(lect9::Lect9),
        ScriptKinds::Lect11Semibatch(lect11_semibatch::Lect11Semibatch),
        ScriptKinds::Icp05(icp05::Icp05),
    ]
}
