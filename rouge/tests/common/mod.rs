//! Shared by the output tests: each test file is its own process,
//! so each gets its own first-use policy.

use std::ffi::CStr;
use std::io::{Read, Seek, SeekFrom};
use std::os::fd::AsRawFd;

use libc_stdhandle::stdout;

/// Runs `f` with fd 1 pointed at a temporary file and returns
/// everything written to it, flushed, along with `f`'s result.
pub fn capture<R>(f: impl FnOnce() -> R) -> (Vec<u8>, R) {
    let mut file = tempfile::tempfile().unwrap();
    let ret = unsafe {
        libc::fflush(stdout());
        let saved = libc::dup(1);
        assert!(saved >= 0);
        assert!(libc::dup2(file.as_raw_fd(), 1) >= 0);

        let ret = f();

        libc::fflush(stdout());
        libc::dup2(saved, 1);
        libc::close(saved);
        ret
    };

    let mut bytes = vec![];
    file.seek(SeekFrom::Start(0)).unwrap();
    file.read_to_end(&mut bytes).unwrap();

    (bytes, ret)
}

pub fn printf_int(format: &CStr, value: libc::c_int) -> libc::c_int {
    unsafe { libc::printf(format.as_ptr(), value) }
}

pub fn puts(s: &CStr) -> libc::c_int {
    unsafe { libc::puts(s.as_ptr()) }
}
