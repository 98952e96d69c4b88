//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

use crate::dir::SidoraDirectory;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(SidoraDirectory),
}

/// Parse command-line arguments.
///
/// `args` includes the program name at `args[0]`. `--version` and `--help`
/// print and exit the process.
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("sidora");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of sidora datadir
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--datadir" {
            if let Some(a) = iter.next() {
                res.push(Arg::DatadirPath(SidoraDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else {
            return Err(format!("unknown argument {}", arg).into());
        }
    }

    Ok(res)
}

/// Resolve the data directory from parsed arguments, falling back to the
/// platform default.
pub fn datadir(args: &[Arg]) -> Result<SidoraDirectory, Box<dyn Error>> {
    match args {
        [] => SidoraDirectory::new_default(),
        [Arg::DatadirPath(datadir)] => Ok(datadir.clone()),
        _ => Err("Unknown args combination".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "0.1.0";

    fn args(line: &str) -> Vec<String> {
        line.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(parse_args(args("sidora --meth"), VERSION).is_err());
        assert!(parse_args(args("sidora --datadir"), VERSION).is_err());
        assert_eq!(
            Some(vec![]),
            parse_args(args("sidora"), VERSION).ok()
        );
        assert_eq!(
            Some(vec![Arg::DatadirPath(SidoraDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(args("sidora --datadir hello"), VERSION).ok()
        );
    }

    #[test]
    fn test_datadir() {
        let dir = SidoraDirectory::new(PathBuf::from("hello"));
        assert_eq!(datadir(&[Arg::DatadirPath(dir.clone())]).unwrap(), dir);
        assert!(datadir(&[Arg::DatadirPath(dir.clone()), Arg::DatadirPath(dir)]).is_err());
    }
}
