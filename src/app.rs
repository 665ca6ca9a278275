//! Application orchestrator.
//! Loads/merges config, initializes logging, builds the substitution map,
//! and invokes the copy operation, mapping its outcome to an exit code.

use tracing::{debug, error, info};

use crr::config::{config_path, load_config_from_xml, Config};
use crr::output as out;
use crr::{copy_rename_replace, names, SubstMap};

use crate::cli::Args;
use crate::logging::init_tracing;

/// Exit code for command-line usage errors (clap's convention; distinct from
/// the operation outcome codes, which only apply once a run starts).
const USAGE: u8 = 2;

/// Run the CLI application and return the process exit code.
pub fn run(args: Args) -> u8 {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var("CRR_CONFIG") {
            out::print_info(&format!("Using CRR_CONFIG (explicit):\n  {cfg_env}\n"));
            out::print_info("To override, unset CRR_CONFIG or set it to another file.");
            return 0;
        }
        match config_path() {
            Some(p) => {
                out::print_info(&format!("Default crr config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info("No config file exists there yet. Run crr once to create a template.");
                }
            }
            None => out::print_error("Could not determine a default config path."),
        }
        return 0;
    }

    // Build config (may read XML). CLI flags override config values.
    let mut cfg = load_config_from_xml().unwrap_or_else(Config::default);
    args.apply_overrides(&mut cfg);

    let _guard = match init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json) {
        Ok(g) => g,
        Err(e) => {
            out::print_error(&format!("Failed to initialize logging: {e}"));
            return USAGE;
        }
    };

    debug!("Starting crr: {:?}", args);

    let pairs = match args.rule_pairs() {
        Ok(p) => p,
        Err(e) => {
            out::print_error(&e.to_string());
            return USAGE;
        }
    };

    // Replacement strings are char-checked before registration so a rule can
    // never inject an illegal character into a derived name.
    let mut map = SubstMap::new();
    for (k, (find, replace)) in pairs.iter().enumerate() {
        if let Err(err) = names::check_chars(replace) {
            out::print_error(&err.to_string());
            return err.exit_code();
        }
        if let Err(err) = map.set(*find, *replace) {
            out::print_error("substitution FIND text must not be empty.");
            return err.exit_code();
        }
        out::print_rule(k, find, replace);
    }

    let (Some(source), Some(dest)) = (args.resolved_source(), args.resolved_dest()) else {
        // Unreachable with clap's required_unless_present, kept as a guard.
        out::print_error("SOURCE and DEST are required.");
        return USAGE;
    };

    match copy_rename_replace(&source, &dest, &map) {
        Ok(()) => {
            info!(source = %source.display(), dest = %dest.display(), rules = map.len(), "copy completed");
            0
        }
        Err(err) => {
            error!(
                code = err.exit_code(),
                kind = err.kind(),
                source = %source.display(),
                dest = %dest.display(),
                "copy failed: {err}"
            );
            err.exit_code()
        }
    }
}
