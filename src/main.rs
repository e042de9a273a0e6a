//! minus CLI entry point

fn main() {
    minus::cli::run();
}
