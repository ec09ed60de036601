// C-reminiscent types.
pub type int        = libc::c_int;
pub type char       = libc::c_char;
pub type void       = libc::c_void;

pub use crate::variadic::VaList;
use std::ffi::CStr;

// Linux utils.
pub use libc::{
    RTLD_NEXT,
    abort,
    dlerror,
    dlsym,
    fputs,
};

// Signatures of the functions whose originals we call. They must match
// libc to the letter: a mismatch misreads registers and stack.
pub type CPrintf    = unsafe extern "C" fn(format: *const char, ...)           -> int;
pub type CVprintf   = unsafe extern "C" fn(format: *const char, args: VaList)  -> int;
pub type CPuts      = unsafe extern "C" fn(s: *const char)                      -> int;

pub unsafe fn last_dlerror() -> Option<String> {
    //! Fetches and clears the thread's pending `dl*` error.
    //! `dlerror` is thread-safe!
    //! [source: https://man7.org/linux/man-pages/man3/dlerror.3.html#ATTRIBUTES]

    let eptr: *mut char = dlerror();
    if eptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(eptr).to_string_lossy().into_owned())
    }
}

pub unsafe fn fatal(err: &dyn std::fmt::Display) -> ! {
    //! Prints the error on stderr, then aborts.
    //!
    //! Output from an interposer that lost its target is worse
    //! than no output, so there is no fallback path.
    use libc_stdhandle::stderr;

    match std::ffi::CString::new(format!("rouge: {}\n", err)) {
        Ok(msg) => { fputs(msg.as_ptr(), stderr()); },
        Err(_)  => { fputs(c"rouge: fatal error\n".as_ptr(), stderr()); },
    }
    abort();
}
