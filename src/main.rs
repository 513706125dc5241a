//! timeclock main entrypoint.

use timeclock::run;

fn main() {
    // RUST_LOG controls sync/server tracing; silent by default
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        timeclock::ui::messages::error(e.to_string());
        std::process::exit(1);
    }
}
