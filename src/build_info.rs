//! Startup banner
//!
//! Identifies the tool and the build it came from, on stderr so stdout stays
//! the operator summary.

/// Compile time set by `build.rs`, "unknown" when built without it
pub const COMPILED_AT: &str = match option_env!("SPARKY_IMPORT_COMPILED_AT") {
    Some(s) => s,
    None => "unknown",
};

/// Banner lines for `tool`
pub fn banner(tool: &str) -> Vec<String> {
    let rule = "=".repeat(47);
    vec![
        rule.clone(),
        format!("  {}", tool),
        format!(
            "  {} v{} | compiled {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            COMPILED_AT
        ),
        rule,
    ]
}

/// Print the startup banner for `tool` to stderr
pub fn print_startup_banner(tool: &str) {
    for line in banner(tool) {
        eprintln!("{}", line);
    }
}
