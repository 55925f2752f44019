//! Name mangling. Every name in the generated unit comes from this module so that user
//! names, function names and the names the translator invents can never collide.
//!
//! A mangled user name always starts with an underscore, either `_jagle_` or `_func_jagle_`.
//! Synthetic names start with a letter and are therefore out of reach of any source program.
//! They also avoid the double underscore and underscore capital forms C++ reserves.

/// Prefix of every source variable and parameter.
pub const VARIABLE_PREFIX: &str = "_jagle_";

/// Prefix of every source function, disjoint from VARIABLE_PREFIX.
pub const FUNCTION_PREFIX: &str = "_func_jagle_";

/// Prefix of the per loop step holders, suffixed by the loop number.
pub const STEP_PREFIX: &str = "jagle_step_";

/// Global constant data pool declared by the generated unit.
pub const DATA_POOL: &str = "jagle_data";

/// Read cursor of the data pool, shared by every read and restore.
pub const DATA_CURSOR: &str = "jagle_data_idx";

pub fn mangle_variable(name: &str) -> String {
    format!("{}{}", VARIABLE_PREFIX, name)
}

pub fn mangle_function(name: &str) -> String {
    format!("{}{}", FUNCTION_PREFIX, name)
}

pub fn step_identifier(index: u64) -> String {
    format!("{}{}", STEP_PREFIX, index)
}
