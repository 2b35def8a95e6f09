use taskberry::commands::Cli;
use taskberry::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env before the debug flag is read and cached
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        init_tracing();
    }

    Cli::menu()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskberry=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
