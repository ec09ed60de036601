use crate::registry;
use std::ffi::{CStr, CString};

/// Where decoration sequences are written.
pub trait Sink {
    unsafe fn emit(&self, seq: &CStr);
}

/// Writes through the original `printf`, so sequences land in the same
/// `stdout` buffer as the output they frame and never re-enter a wrapper.
pub struct OriginalPrintf;

impl Sink for OriginalPrintf {
    #[inline]
    unsafe fn emit(&self, seq: &CStr) {
        // Sequences are data, not formats.
        registry::printf()(c"%s".as_ptr(), seq.as_ptr());
    }
}

/// Begin/end sequences, ready to hand to C.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub begin:  CString,
    pub end:    CString,
}

impl Decoration {
    pub fn new(begin: &str, end: &str) -> Option<Decoration> {
        Some(Decoration {
            begin:  CString::new(begin).ok()?,
            end:    CString::new(end).ok()?,
        })
    }
}

#[inline]
pub unsafe fn decorated<S, R, F>(sink: &S, decoration: Option<&Decoration>, call: F) -> R
where
    S: Sink,
    F: FnOnce() -> R,
{
    //! Runs `call` between the begin and end sequences and returns
    //! exactly what it returned. No decoration means a bare `call()`.

    match decoration {
        Some(d) => {
            sink.emit(&d.begin);
            let ret = call();
            sink.emit(&d.end);
            ret
        },
        None    => call(),
    }
}
