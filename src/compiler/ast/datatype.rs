use enum_assoc::Assoc;
use strum_macros::{Display, EnumString};

/// Variable types supported by the source language. Each maps onto exactly one
/// C++ type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, Assoc)]
#[strum(ascii_case_insensitive)]
#[func(pub const fn target_name(&self) -> &'static str)]
pub enum VariableType {
    #[strum(serialize = "int")]
    #[assoc(target_name = "int")]
    INT,

    #[strum(serialize = "float")]
    #[assoc(target_name = "float")]
    FLOAT,

    #[strum(serialize = "str")]
    #[assoc(target_name = "std::string")]
    STR,
}

/// Return type of a function, functions without a declared type return nothing.
pub fn return_type_name(datatype: Option<VariableType>) -> &'static str {
    match datatype {
        Some(datatype) => datatype.target_name(),
        None => "void",
    }
}
