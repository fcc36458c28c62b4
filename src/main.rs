// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use std::str::FromStr;

use niva_l10n::registry::LocaleRegistry;
use niva_l10n::{assets, config, validate, LocaleKey};

const USAGE: &str = "\
usage: niva_l10n [--lang TAG] [--check] [KEY...]

  --lang TAG   look up keys in locale TAG instead of the resolved one
  --check      validate every embedded locale against the key set
  KEY          canonical key names, e.g. CANCEL PROJECT_PATH";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains("--help") {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let check = args.contains("--check");
    let lang: Option<String> = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let keys: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();

    if check {
        return run_check();
    }
    run_lookup(lang, &keys)
}

fn run_check() -> ExitCode {
    let tables = match assets::load_embedded() {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = validate::coverage_report(&tables);
    println!("{} keys, {} locales", report.total_keys, report.locales.len());
    for lc in &report.locales {
        println!(
            "  {:<8} {:>3}/{} ({:.1}%)",
            lc.locale, lc.present, report.total_keys, lc.coverage_percent
        );
        for key in &lc.missing {
            println!("    missing {}", key);
        }
    }

    if report.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_lookup(lang: Option<String>, keys: &[String]) -> ExitCode {
    let config = config::load().unwrap_or_default();
    let registry = match LocaleRegistry::new(lang, &config) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if keys.is_empty() {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let mut status = ExitCode::SUCCESS;
    for name in keys {
        match LocaleKey::from_str(name) {
            Ok(key) => println!("{} = {}", key, registry.tr(key)),
            Err(_) => {
                eprintln!("error: unknown key '{}'", name);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
