use clap::Parser;
use rouge_style::{Color, Config, Mode, Style};
use std::ffi::OsString;
use std::path::PathBuf;

/// Runs a command with its printf/puts output in bold color.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to librouge (defaults to the one next to this executable)
    #[arg(short, long, env = "ROUGE_LIBRARY", value_parser = clap::value_parser!(PathBuf))]
    pub library:        Option<PathBuf>,

    /// Pre-load the library but leave output untouched
    #[arg(long)]
    pub passthrough:    bool,

    /// Foreground color: a name such as `cyan` or `bright-red`, an SGR code, or `none`
    #[arg(short, long, value_parser = parse_color)]
    pub color:          Option<ColorChoice>,

    /// Do not make output bold
    #[arg(long)]
    pub no_bold:        bool,

    /// More diagnostics on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose:        u8,

    /// Command to run, followed by its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command:        Vec<OsString>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChoice {
    Set(Color),
    Off,
}

fn parse_color(s: &str) -> Result<ColorChoice, String> {
    if s.trim().eq_ignore_ascii_case("none") {
        return Ok(ColorChoice::Off);
    }
    s.parse::<Color>()
        .map(ColorChoice::Set)
        .map_err(|e| e.to_string())
}

impl Args {
    pub fn config(&self) -> Config {
        let mode = if self.passthrough { Mode::PassThrough } else { Mode::Decorate };
        let mut style = Style::default();
        style.bold = !self.no_bold;
        match self.color {
            Some(ColorChoice::Set(c))   => { style.color = Some(c); },
            Some(ColorChoice::Off)      => { style.color = None; },
            None                        => {},
        }

        Config { mode, style }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_decorate_bold_pink() {
        let args = parse(&["rouge-run", "ls", "-l"]);
        assert_eq!(args.config(), Config::new(Mode::Decorate));
        assert_eq!(args.command, vec![OsString::from("ls"), OsString::from("-l")]);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn flags_shape_the_config() {
        let args = parse(&["rouge-run", "--passthrough", "--no-bold", "-c", "cyan", "-vv", "--", "echo", "hi"]);
        let cfg = args.config();
        assert_eq!(cfg.mode, Mode::PassThrough);
        assert_eq!(cfg.style, Style { bold: false, color: Some(Color::Cyan) });
        assert_eq!(args.log_level(), "debug");
        assert_eq!(args.command.len(), 2);

        let args = parse(&["rouge-run", "--color", "none", "true"]);
        assert_eq!(args.config().style.color, None);
    }

    #[test]
    fn command_flags_belong_to_the_command() {
        let args = parse(&["rouge-run", "grep", "--color", "x"]);
        assert_eq!(args.color, None);
        assert_eq!(args.command.len(), 3);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Args::try_parse_from(["rouge-run"]).is_err());
        assert!(Args::try_parse_from(["rouge-run", "--color", "mauve", "ls"]).is_err());
    }
}
