// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad CLI entrypoint.
//!
//! Loads a catalog (or the built-in demo) and runs the dropdown TUI. Logs go to `--log-file`
//! only, since the terminal belongs to the UI.

use std::error::Error;
use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_CATALOG_PATH: &str = "catalog.json";
const LOG_FILTER_ENV: &str = "NAIAD_LOG";
const DEFAULT_LOG_FILTER: &str = "naiad=info";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<catalog.json>] [--log-file <path>]\n  {program} [--catalog <file>] [--log-file <path>]\n  {program} --demo [--log-file <path>]\n\nIf catalog.json/--catalog is omitted, ./{DEFAULT_CATALOG_PATH} is used.\n--demo uses the built-in demo catalog and cannot be combined with a catalog path.\n\n--log-file appends tracing output to <path>; the filter is read from {LOG_FILTER_ENV} (default {DEFAULT_LOG_FILTER}).\nURLs are opened with $NAIAD_OPENER, or the platform default opener."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    catalog_path: Option<String>,
    log_file: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--catalog" => {
                if options.catalog_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.catalog_path = Some(path);
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.log_file = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.catalog_path.is_some() {
                    return Err(());
                }
                options.catalog_path = Some(arg);
            }
        }
    }

    if options.demo && options.catalog_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| err as Box<dyn Error>)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "naiad".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if let Some(path) = options.log_file.as_deref() {
            init_logging(path)?;
        }

        let catalog = if options.demo {
            Ok(naiad::tui::demo_catalog())
        } else {
            let path = options.catalog_path.as_deref().unwrap_or(DEFAULT_CATALOG_PATH);
            naiad::store::CatalogFile::new(path).load()
        };

        naiad::tui::run(catalog)
    })();

    if let Err(err) = result {
        eprintln!("naiad: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|value| (*value).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(args(&["--demo"])).expect("parse options");
        assert!(options.demo);
        assert!(options.catalog_path.is_none());
        assert!(options.log_file.is_none());
    }

    #[test]
    fn parses_catalog_flag_and_positional_path() {
        let options = parse_options(args(&["--catalog", "menu.json"])).expect("parse options");
        assert_eq!(options.catalog_path.as_deref(), Some("menu.json"));

        let options = parse_options(args(&["menu.json"])).expect("parse options");
        assert_eq!(options.catalog_path.as_deref(), Some("menu.json"));
        assert!(!options.demo);
    }

    #[test]
    fn parses_log_file_with_demo_in_any_order() {
        let options =
            parse_options(args(&["--log-file", "naiad.log", "--demo"])).expect("parse options");
        assert!(options.demo);
        assert_eq!(options.log_file.as_deref(), Some("naiad.log"));

        let options =
            parse_options(args(&["--demo", "--log-file", "naiad.log"])).expect("parse options");
        assert!(options.demo);
        assert_eq!(options.log_file.as_deref(), Some("naiad.log"));
    }

    #[test]
    fn rejects_demo_with_catalog_path() {
        parse_options(args(&["--demo", "menu.json"])).unwrap_err();
        parse_options(args(&["--catalog", "menu.json", "--demo"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(args(&["--nope"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(args(&["--demo", "--demo"])).unwrap_err();
        parse_options(args(&["--log-file", "a", "--log-file", "b"])).unwrap_err();
        parse_options(args(&["--catalog", "a", "--catalog", "b"])).unwrap_err();
    }

    #[test]
    fn rejects_multiple_catalog_paths() {
        parse_options(args(&["one.json", "two.json"])).unwrap_err();
        parse_options(args(&["--catalog", "one.json", "two.json"])).unwrap_err();
    }

    #[test]
    fn rejects_missing_flag_values() {
        parse_options(args(&["--catalog"])).unwrap_err();
        parse_options(args(&["--log-file"])).unwrap_err();
    }
}
