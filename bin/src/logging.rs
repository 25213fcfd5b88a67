//! Log setup. Everything goes to stderr; stdout carries the CSV.

use tracing_subscriber::EnvFilter;

const CRATES: [&str; 5] = [
    "carpark",
    "carpark_fetch",
    "carpark_aggregate",
    "carpark_format",
    "carpark_types",
];

/// Installs the global subscriber. `RUST_LOG` overrides the verbosity flags.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn default_directives(verbose: u8, quiet: bool) -> String {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let mut directives = String::from(if quiet { "error" } else { "warn" });
    for krate in CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}
