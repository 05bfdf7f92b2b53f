//! Minimal native Node.js module exposing a single greeting command.
//!
//! The module registers one callable, `say_hello`, with the host loader at
//! load time. Command implementations live in the plain-Rust modules; this
//! file is the N-API boundary.

use napi::{CallContext, Env, JsObject, JsUndefined, JsUnknown, ValueType};
use napi_derive::module_exports;
use std::io;

pub mod error;
pub mod greeting;
pub mod registry;

// Link-time stubs for host-provided N-API symbols, compiled only for the test
// harness so the unit tests can link and run without a Node.js host. Absent
// from the shipped cdylib.
#[cfg(test)]
mod test_napi_stubs;

pub use error::ModuleError;
pub use registry::{registry, ArgValue, CommandRegistry, CommandSpec};

/// Register every command in the registry with the host loader.
///
/// Runs exactly once, when the host loads the compiled module.
#[module_exports]
fn init(mut exports: JsObject, env: Env) -> napi::Result<()> {
    let commands = registry();
    for spec in commands.iter() {
        let function = env
            .create_function_from_closure(spec.name, move |ctx| run_command(spec.name, &ctx))?;
        exports.set_named_property(spec.name, function)?;
    }
    tracing::debug!(commands = commands.len(), "module registered");
    Ok(())
}

/// Convert host arguments, dispatch through the registry, surface errors.
fn run_command(name: &'static str, ctx: &CallContext) -> napi::Result<JsUndefined> {
    let args = collect_args(ctx)?;
    let mut out = io::stdout().lock();
    registry()
        .dispatch(name, &mut out, &args)
        .map_err(napi::Error::from)?;
    ctx.env.get_undefined()
}

/// Snapshot the host call arguments into the registry's argument model.
fn collect_args(ctx: &CallContext) -> napi::Result<Vec<ArgValue>> {
    (0..ctx.length)
        .map(|i| js_to_arg(ctx.get::<JsUnknown>(i)?))
        .collect()
}

fn js_to_arg(value: JsUnknown) -> napi::Result<ArgValue> {
    let arg = match value.get_type()? {
        ValueType::String => ArgValue::Text(value.coerce_to_string()?.into_utf8()?.into_owned()?),
        ValueType::Number => ArgValue::Number(value.coerce_to_number()?.get_double()?),
        ValueType::Boolean => ArgValue::Bool(value.coerce_to_bool()?.get_value()?),
        ValueType::Null | ValueType::Undefined => ArgValue::Null,
        ValueType::Object => ArgValue::Other("object"),
        ValueType::Function => ArgValue::Other("function"),
        ValueType::Symbol => ArgValue::Other("symbol"),
        ValueType::External => ArgValue::Other("external"),
        _ => ArgValue::Other("unknown"),
    };
    Ok(arg)
}
