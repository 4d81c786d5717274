#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]

//! litscan -- Quoted string literal scanner for source-like text.

mod input;
mod report;
mod scanner;

use log::info;
use std::env;
use std::io::{self, IsTerminal};
use termcolor::{ColorChoice, StandardStream};

/// Built-in sample scanned when no argument is given.
const SAMPLE_INPUT: &str = r#"
'recurring.basicInformation'.tr()
some_code
"example string"
'validation.tooShort'.tr(args: ['2'])
"#;

#[cfg(not(tarpaulin_include))]
fn main() -> io::Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );
    let args: Vec<String> = env::args().collect();
    let input = args.get(1).map(String::as_str).unwrap_or(SAMPLE_INPUT);
    info!("Scanning {} bytes of input", input.len());
    info!(
        "Inputs ending in {} are treated as file paths",
        input::known_extensions().join(", ")
    );
    let records = scanner::scan(input);
    let choice = if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    report::report(&mut stdout, &records)
}
