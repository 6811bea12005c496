pub mod csv_io;
pub mod func_lib;
pub mod kinetics;
pub mod ode;
pub mod plotting;
pub mod type_lib;
