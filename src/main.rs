//! Headless piece driver (default binary).
//!
//! Plays an action script against randomly spawned pieces and prints one JSON
//! snapshot per step on stdout. Logs go to stderr; set `RUST_LOG=debug` to see
//! every action, `RUST_LOG=trace` to see rejections inside the core.
//!
//! ```text
//! touch-tetris --width 10 --height 20 --seed 7 --pieces 3 --actions moveLeft,tap:6,drag:0,softDrop
//! ```

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use touch_tetris::sim::{parse_sim_args, run_sim};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_sim_args(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_sim(&config, &mut out)?;
    Ok(())
}
