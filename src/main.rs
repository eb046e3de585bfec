use std::env;
use std::path::{Path, PathBuf};
use std::process;

use stardict_av::stardict::discover;
use stardict_av::{ImportOptions, StarDict};

const DEFAULT_DB_PATH: &str = "data/stardict/stardict_av.db";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        print_usage(args.first().map(String::as_str).unwrap_or("stardict-av"));
        process::exit(1);
    }

    match args[1].as_str() {
        "import" => cmd_import(&args[2..]),
        "scan" => cmd_scan(&args[2..]),
        "lookup" => cmd_lookup(&args[2..]),
        other => {
            eprintln!("ERROR: Unknown command: {}", other);
            print_usage(&args[0]);
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("Usage:");
    eprintln!(
        "  {} import <dict-file> [--ifo <file>] [--source <name>] [--db <path>] [--keep-samples]",
        prog
    );
    eprintln!("  {} scan <directory> [--db <path>] [--keep-samples]", prog);
    eprintln!("  {} lookup <word> [--db <path>]", prog);
}

/// Parsed command arguments: one positional value followed by `--flag value`
/// pairs (plus the valueless `--keep-samples`).
struct Flags {
    positional: String,
    ifo: Option<String>,
    source: Option<String>,
    db: String,
    keep_samples: bool,
}

fn parse_flags(args: &[String]) -> Flags {
    let mut flags = Flags {
        positional: args[0].clone(),
        ifo: None,
        source: None,
        db: DEFAULT_DB_PATH.to_string(),
        keep_samples: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--ifo" => {
                flags.ifo = Some(expect_value(args, i, "--ifo"));
                i += 2;
            }
            "--source" => {
                flags.source = Some(expect_value(args, i, "--source"));
                i += 2;
            }
            "--db" => {
                flags.db = expect_value(args, i, "--db");
                i += 2;
            }
            "--keep-samples" => {
                flags.keep_samples = true;
                i += 1;
            }
            other => {
                eprintln!("ERROR: Unknown flag: {}", other);
                process::exit(1);
            }
        }
    }
    flags
}

fn expect_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i + 1) {
        Some(v) => v.clone(),
        None => {
            eprintln!("ERROR: {} flag requires an argument.", flag);
            process::exit(1);
        }
    }
}

fn open_dict(db: &str, keep_samples: bool) -> StarDict {
    let options = ImportOptions {
        skip_sample: !keep_samples,
    };
    match StarDict::open_with_options(db, options) {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("ERROR: Failed to open database {}: {}", db, e);
            process::exit(1);
        }
    }
}

fn cmd_import(args: &[String]) {
    let flags = parse_flags(args);
    let dict_path = PathBuf::from(&flags.positional);

    // Source name defaults to the file name up to its first dot.
    let source = flags.source.unwrap_or_else(|| {
        dict_path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.split('.').next())
            .unwrap_or("Anh-Viet")
            .to_string()
    });

    let mut dict = open_dict(&flags.db, flags.keep_samples);
    let ifo = flags.ifo.as_ref().map(Path::new);

    println!("Importing {} as source {}", dict_path.display(), source);
    if dict.import_dict_file(&dict_path, ifo, &source) {
        let count = dict.source_word_count(&source).unwrap_or(0);
        println!("OK: {} words stored for source {}", count, source);
    } else {
        eprintln!("Import skipped or failed for source {}", source);
        process::exit(1);
    }
}

fn cmd_scan(args: &[String]) {
    let flags = parse_flags(args);
    let dir = PathBuf::from(&flags.positional);

    let discovered = match discover::scan_dir(&dir) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("ERROR: Failed to scan {}: {}", dir.display(), e);
            process::exit(1);
        }
    };

    if discovered.is_empty() {
        println!("No dictionary payloads found in {}", dir.display());
        return;
    }

    let mut dict = open_dict(&flags.db, flags.keep_samples);
    let mut imported = 0usize;
    for found in &discovered {
        println!("Importing {} ({})", found.name, found.dict_path.display());
        if dict.import_dict_file(&found.dict_path, found.ifo_path.as_deref(), &found.name) {
            imported += 1;
        }
    }
    println!(
        "Imported {}/{} dictionaries into {}",
        imported,
        discovered.len(),
        flags.db
    );
}

fn cmd_lookup(args: &[String]) {
    let flags = parse_flags(args);
    let word = &flags.positional;

    let dict = open_dict(&flags.db, true);
    match dict.get_word_data(word) {
        Ok(Some(data)) => match serde_json::to_string_pretty(&data) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("ERROR: Failed to render result: {}", e);
                process::exit(1);
            }
        },
        Ok(None) => println!("No entry found for \"{}\"", word),
        Err(e) => {
            eprintln!("ERROR: Lookup failed: {}", e);
            process::exit(1);
        }
    }
}
