//! Command registry for the hello module.
//!
//! Native modules advertise their operations to the host loader through a
//! table of name/function pairs. Here that table is an explicit registry,
//! built exactly once at startup and queried by command name; `lib.rs`
//! walks it at load time to attach each entry to the host's export object.

use crate::error::ModuleError;
use crate::greeting;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::io::Write;

/// A call argument as received from the embedding host.
///
/// Commands validate against this host-neutral snapshot, so argument
/// parsing stays testable without a live host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
    /// A host value with no useful Rust projection (object, function, ...).
    Other(&'static str),
}

impl ArgValue {
    /// Kind label used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ArgValue::Text(_) => "text",
            ArgValue::Number(_) => "number",
            ArgValue::Bool(_) => "boolean",
            ArgValue::Null => "null",
            ArgValue::Other(kind) => kind,
        }
    }
}

/// Signature shared by every registered command.
pub type CommandFn = fn(&mut dyn Write, &[ArgValue]) -> Result<(), ModuleError>;

/// One registration-table row: a command name, its documentation string,
/// and the function that implements it.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub doc: &'static str,
    pub run: CommandFn,
}

/// Everything this module exports to the host.
const COMMANDS: &[CommandSpec] = &[CommandSpec {
    name: "say_hello",
    doc: "Greet somebody.",
    run: greeting::say_hello,
}];

/// Lookup table from command name to its spec.
pub struct CommandRegistry {
    table: &'static [CommandSpec],
    by_name: HashMap<&'static str, &'static CommandSpec>,
}

impl CommandRegistry {
    fn from_table(table: &'static [CommandSpec]) -> Self {
        let by_name = table.iter().map(|spec| (spec.name, spec)).collect();
        Self { table, by_name }
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Result<&'static CommandSpec, ModuleError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ModuleError::UnknownCommand(name.to_string()))
    }

    /// Run the named command, writing any output to `out`.
    pub fn dispatch(
        &self,
        name: &str,
        out: &mut dyn Write,
        args: &[ArgValue],
    ) -> Result<(), ModuleError> {
        let spec = self.get(name)?;
        tracing::trace!(command = spec.name, args = args.len(), "dispatching command");
        (spec.run)(out, args)
    }

    /// All registered commands, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static CommandSpec> {
        self.table.iter()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// The module's registry. Built on first access, immutable afterwards.
pub fn registry() -> &'static CommandRegistry {
    static REGISTRY: Lazy<CommandRegistry> = Lazy::new(|| CommandRegistry::from_table(COMMANDS));
    &REGISTRY
}
