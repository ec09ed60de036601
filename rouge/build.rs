//! Compiles the C half of the variadic forwarding adapter.
//!
//! Stable Rust can call C-variadic functions but cannot define one,
//! so `va_start`/`va_end` live in a few lines of C.

fn main() {
    println!("cargo:rerun-if-changed=src/c/capture.c");

    cc::Build::new()
        .file("src/c/capture.c")
        .opt_level(2)
        .warnings(true)
        .compile("rouge_capture");
}
