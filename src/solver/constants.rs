// Search constants
pub const TARGET: f64 = 24.0;
pub const EPSILON: f64 = 1e-9;
pub const OPERAND_COUNT: usize = 4;
pub const MIN_OPERAND: f64 = 1.0;
pub const MAX_OPERAND: f64 = 9.0;
