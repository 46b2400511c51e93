//! Shell completion generation for vsentinel

use clap::Command;
use clap_complete::{Generator, generate};
use std::io::Write;

/// Generate shell completions for the given shell on stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}

/// Generate shell completions into any writer
pub fn write_completions<G: Generator, W: Write>(generator: G, app: &mut Command, out: &mut W) {
    let name = app.get_name().to_string();
    generate(generator, app, name, out);
}
