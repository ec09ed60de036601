use anyhow::{bail, Context, Result};
use rouge_style::Config;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

#[cfg(target_os = "macos")]
pub const PRELOAD_VAR: &str = "DYLD_INSERT_LIBRARIES";
#[cfg(not(target_os = "macos"))]
pub const PRELOAD_VAR: &str = "LD_PRELOAD";

#[cfg(target_os = "macos")]
pub const LIBRARY_FILE: &str = "librouge.dylib";
#[cfg(not(target_os = "macos"))]
pub const LIBRARY_FILE: &str = "librouge.so";

/// Cargo puts `librouge` and `rouge-run` in the same target directory.
pub fn default_library() -> Result<PathBuf> {
    let exe = env::current_exe().context("cannot locate the rouge-run executable")?;
    let dir = exe.parent().context("rouge-run executable has no parent directory")?;

    Ok(dir.join(LIBRARY_FILE))
}

#[derive(Debug, Clone)]
pub struct Launch {
    library:    PathBuf,
    config:     Config,
    program:    OsString,
    args:       Vec<OsString>,
}

impl Launch {
    pub fn new(library: &Path, config: Config, command: &[OsString]) -> Result<Launch> {
        let (program, args) = match command.split_first() {
            Some((p, a)) if !p.is_empty() => (p.clone(), a.to_vec()),
            _ => bail!("no command given"),
        };
        if !library.is_file() {
            bail!(
                "preload library not found at {} (build the `rouge` crate, or pass --library)",
                library.display()
            );
        }
        // The loader resolves pre-load entries against the child's working
        // directory, not ours.
        let library = library
            .canonicalize()
            .with_context(|| format!("cannot resolve {}", library.display()))?;

        Ok(Launch { library, config, program, args })
    }

    pub fn library(&self) -> &Path {
        &self.library
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Pre-load list with our library first, so its symbols win.
    /// Entries already present are kept, minus duplicates of ours.
    pub fn preload_value(&self, existing: Option<&OsStr>) -> OsString {
        let mut value = self.library.as_os_str().to_os_string();
        let ours = self.library.as_os_str().as_encoded_bytes();
        if let Some(existing) = existing {
            // Both separators are accepted by glibc's loader.
            for entry in existing
                .as_encoded_bytes()
                .split(|b| *b == b':' || *b == b' ')
                .filter(|e| !e.is_empty() && *e != ours)
            {
                value.push(":");
                // SAFETY: split on ASCII separators from a valid encoding.
                value.push(unsafe { OsStr::from_encoded_bytes_unchecked(entry) });
            }
        }

        value
    }

    pub fn command(&self) -> Command {
        let preload = self.preload_value(env::var_os(PRELOAD_VAR).as_deref());
        debug!(var = PRELOAD_VAR, value = ?preload, "pre-load list");

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).env(PRELOAD_VAR, preload);
        // Two-level namespaces bind symbols per library; ours would be skipped.
        #[cfg(target_os = "macos")]
        cmd.env("DYLD_FORCE_FLAT_NAMESPACE", "1");
        for (var, value) in self.config.env_pairs() {
            debug!(var, %value, "policy");
            cmd.env(var, value);
        }

        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rouge_style::Mode;

    fn fake_library() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join(LIBRARY_FILE);
        std::fs::write(&lib, b"").unwrap();
        let lib = lib.canonicalize().unwrap();
        (dir, lib)
    }

    fn launch(lib: &Path) -> Launch {
        Launch::new(lib, Config::new(Mode::Decorate), &["true".into()]).unwrap()
    }

    #[test]
    fn library_goes_first() {
        let (_dir, lib) = fake_library();
        let l = launch(&lib);
        let ours = lib.to_str().unwrap();

        assert_eq!(l.preload_value(None), OsString::from(ours));
        assert_eq!(
            l.preload_value(Some(OsStr::new("/opt/a.so:/opt/b.so"))),
            OsString::from(format!("{}:/opt/a.so:/opt/b.so", ours))
        );
        assert_eq!(
            l.preload_value(Some(OsStr::new(&format!("/opt/a.so {}", ours)))),
            OsString::from(format!("{}:/opt/a.so", ours))
        );
        assert_eq!(l.preload_value(Some(OsStr::new(""))), OsString::from(ours));
    }

    #[test]
    fn missing_pieces_are_errors() {
        let (dir, lib) = fake_library();
        let cfg = Config::new(Mode::Decorate);

        let err = Launch::new(&dir.path().join("nope.so"), cfg, &["true".into()]).unwrap_err();
        assert!(err.to_string().contains("nope.so"));

        assert!(Launch::new(&lib, cfg, &[]).is_err());
        assert!(Launch::new(&lib, cfg, &["".into()]).is_err());
    }

    #[test]
    fn library_path_is_absolute() {
        let (_dir, lib) = fake_library();
        let l = launch(&lib);
        assert!(l.library().is_absolute());
        assert_eq!(l.config(), &Config::new(Mode::Decorate));
    }
}
