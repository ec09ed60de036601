use crate::decor::{decorated, OriginalPrintf};
use crate::ffi::*;
use crate::policy;
use crate::registry;

#[no_mangle]
/// Rust half of the interposed `printf`, called by the C capture routine
/// with the caller's variadic arguments already packed into `args`.
///
/// The arguments are handed to the original `vprintf` exactly once and
/// never inspected here, and its return value (characters written, or a
/// negative error) is returned as is.
pub unsafe extern "C"
fn rouge_vprintf(format: *const char, args: VaList<'_>) -> int {
    let vprintf = registry::vprintf();
    decorated(&OriginalPrintf, policy::active(), move || vprintf(format, args))
}

#[no_mangle]
/// Compilers turn `printf("text\n")` into `puts("text")` when the format
/// has no conversions, so decorating only `printf` would miss those.
pub unsafe extern "C"
fn puts(s: *const char) -> int {
    let puts = registry::puts();
    decorated(&OriginalPrintf, policy::active(), || puts(s))
}
