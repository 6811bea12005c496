pub type NumericData = f64;

// process exit codes
pub const GOOD_RET: i32 = 0;
pub const INPUT_ERROR: i32 = 1;
