//! Link-time stubs for the Node.js N-API symbols, compiled **only** under
//! `#[cfg(test)]`.
//!
//! The `napi_*` FFI functions are supplied by the Node.js host at module load
//! time, so they are intentionally left undefined in the shipped `cdylib`. The
//! unit tests in this crate exercise only plain-Rust logic and never call into
//! the host FFI, but the test-harness binary still links the N-API boundary
//! code in `lib.rs`, which references those symbols through eagerly-resolved
//! relocations. Without a running Node host to satisfy them, the test binary
//! fails to load with a symbol-lookup error.
//!
//! Providing these definitions lets the test binary link and load on its own.
//! They are never reachable from the tests (each aborts if called) and, because
//! this module is gated behind `#[cfg(test)]`, they are absent from the real
//! `cdylib` build — the shipped module still imports the genuine symbols from
//! the host. This is pure test-harness plumbing and changes no runtime
//! behavior of the module.

macro_rules! napi_stub {
    ($($name:ident),* $(,)?) => {
        $(
            #[no_mangle]
            extern "C" fn $name() -> usize {
                unreachable!(concat!(
                    stringify!($name),
                    " is a Node.js host symbol and must not be called from a unit test"
                ))
            }
        )*
    };
}

napi_stub!(
    napi_add_finalizer,
    napi_coerce_to_bool,
    napi_coerce_to_number,
    napi_coerce_to_string,
    napi_create_error,
    napi_create_function,
    napi_create_string_utf8,
    napi_delete_reference,
    napi_get_and_clear_last_exception,
    napi_get_cb_info,
    napi_get_reference_value,
    napi_get_undefined,
    napi_get_value_bool,
    napi_get_value_double,
    napi_get_value_string_utf8,
    napi_is_error,
    napi_is_exception_pending,
    napi_set_named_property,
    napi_throw,
    napi_typeof,
);
