//! Variadic forwarding.
//!
//! A `printf` caller hands over an unknown number of arguments of unknown
//! types. We never look at them: the exported entry point below jumps into a
//! C capture routine (`src/c/capture.c`) which packs them into a `va_list`
//! and passes that, as one opaque [`VaList`], to [`crate::hooks::rouge_vprintf`].
//! From there the token goes to the original `vprintf`, which does all of
//! the format-string interpretation.

use crate::ffi::*;
use std::ffi::c_void;
use std::marker::PhantomData;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!("rouge only knows how `va_list` is passed on x86_64 and aarch64");

/// A captured `va_list`, as it crosses a function call boundary.
///
/// On x86_64 the C type is an array that decays to a pointer when passed; on
/// aarch64 Linux it is a 32-byte struct that the ABI passes by reference; on
/// Apple targets it is a plain pointer. In every case the callee receives one
/// pointer-sized argument, which is all this type is.
///
/// The token is valid only for the duration of the call that captured it, and
/// forwarding consumes it: `vprintf` advances the underlying cursor, so it
/// is neither `Copy` nor `Clone`.
#[repr(transparent)]
pub struct VaList<'call> {
    #[allow(dead_code)] // read on the C side
    raw:        *mut c_void,
    _capture:   PhantomData<&'call mut c_void>,
}

extern "C" {
    /// Hidden C routine: `va_start`, [`crate::hooks::rouge_vprintf`], `va_end`.
    fn rouge_printf_capture(format: *const char, ...) -> int;
}

/// Exported `printf`.
///
/// The real signature is `int printf(const char *format, ...)`. This entry
/// does nothing but tail-jump to the C capture routine, leaving argument
/// registers, the vector-register count in `al` (x86_64) and the stack
/// untouched, so the variadic tail reaches `va_start` exactly as the
/// caller laid it out.
#[cfg(target_arch = "x86_64")]
#[unsafe(naked)]
#[no_mangle]
pub unsafe extern "C" fn printf(_format: *const char) -> int {
    core::arch::naked_asm!(
        "jmp {capture}",
        capture = sym rouge_printf_capture,
    )
}

#[cfg(target_arch = "aarch64")]
#[unsafe(naked)]
#[no_mangle]
pub unsafe extern "C" fn printf(_format: *const char) -> int {
    core::arch::naked_asm!(
        "b {capture}",
        capture = sym rouge_printf_capture,
    )
}
