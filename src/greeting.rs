//! The greeting operation exposed by this module.

use crate::error::ModuleError;
use crate::registry::ArgValue;
use std::io::Write;

/// Write `Hello <name>!` for the single text argument in `args`.
///
/// Arguments are validated before anything is written: a call that fails
/// produces no output at all.
pub fn say_hello(out: &mut dyn Write, args: &[ArgValue]) -> Result<(), ModuleError> {
    let name = expect_one_text(args)?;
    writeln!(out, "Hello {}!", name)?;
    Ok(())
}

/// Exactly one argument, and it must be text. Empty text is fine.
fn expect_one_text(args: &[ArgValue]) -> Result<&str, ModuleError> {
    match args {
        [ArgValue::Text(name)] => Ok(name),
        [other] => Err(ModuleError::NotText { got: other.kind() }),
        _ => Err(ModuleError::WrongArity { got: args.len() }),
    }
}
