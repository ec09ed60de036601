// Runs a host under the real, built librouge through the loader's
// pre-load path. The host is this test executable, re-run with a filter
// that selects `host_prints_through_libc`, whose libc calls are dynamic
// and so land in the pre-loaded library.

use rouge_run::*;
use rouge_style::{Config, Mode};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Output;

/// Set only in the re-run host.
const HOST_VAR: &str = "ROUGE_TEST_HOST";

const BEGIN: &[u8] = b"\x1b[1m\x1b[95m";
const END: &[u8] = b"\x1b[0m";

fn built_library() -> PathBuf {
    let lib = PathBuf::from(env!("CARGO_BIN_EXE_rouge-run")).with_file_name(LIBRARY_FILE);
    assert!(lib.is_file(), "{} is missing; build the workspace first", lib.display());
    lib
}

fn run_host(mode: Mode) -> Output {
    let host: Vec<OsString> = vec![
        std::env::current_exe().unwrap().into(),
        "--exact".into(),
        "host_prints_through_libc".into(),
        "--test-threads=1".into(),
        "--nocapture".into(),
    ];
    let launch = Launch::new(&built_library(), Config::new(mode), &host).unwrap();
    launch.command().env(HOST_VAR, "1").output().unwrap()
}

/// Host side. Exits straight after its own output, so the harness
/// has nothing more to print, and reports `printf`'s return value
/// through the exit status.
#[test]
fn host_prints_through_libc() {
    if std::env::var_os(HOST_VAR).is_none() {
        return;
    }
    unsafe {
        let ret = libc::printf(c"Value: %d\n".as_ptr(), 42 as libc::c_int);
        libc::puts(c"hello".as_ptr());
        libc::fflush(std::ptr::null_mut());
        libc::_exit(if ret == 10 { 0 } else { 1 });
    }
}

/// Splits off the harness banner printed before the host's output.
fn host_output<'a>(out: &'a Output, expected: &[u8]) -> &'a [u8] {
    let stdout = &out.stdout;
    assert!(stdout.len() >= expected.len(), "stdout: {:?}", String::from_utf8_lossy(stdout));
    let (banner, tail) = stdout.split_at(stdout.len() - expected.len());
    assert!(!banner.contains(&0x1b), "banner: {:?}", String::from_utf8_lossy(banner));
    tail
}

#[test]
fn preloaded_library_decorates_host_output() {
    let out = run_host(Mode::Decorate);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let expected = [BEGIN, b"Value: 42\n", END, BEGIN, b"hello\n", END].concat();
    assert_eq!(host_output(&out, &expected), expected.as_slice());
}

#[test]
fn preloaded_library_can_pass_through() {
    let out = run_host(Mode::PassThrough);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let expected = b"Value: 42\nhello\n";
    assert_eq!(host_output(&out, expected), expected);
}
