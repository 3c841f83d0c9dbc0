/// Single-path read command.
pub mod get;
/// Path expression inspection command.
pub mod parse;
/// Template population command.
pub mod populate;
/// Response validation command.
pub mod validate;

mod util;
