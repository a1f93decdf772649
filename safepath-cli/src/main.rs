//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "fatal errors are reported on stderr")]
fn main() {
    pretty_env_logger::init();
    if let Err(err) = safepath_cli::run() {
        eprintln!("safepath: {err}");
        std::process::exit(1);
    }
}
