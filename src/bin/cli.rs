use std::path::PathBuf;

use clap::Parser;
use mpeg_audio_inspector::inspector::{Options, run};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Walk the frames of an MPEG audio elementary stream")]
struct Opt {
    /// MPEG audio file (.mp1/.mp2/.mp3)
    #[clap(long)]
    input: PathBuf,

    /// List every frame in the JSON report
    #[clap(long, default_value_t = false)]
    frames: bool,

    /// Check CRC-16 on protected Layer I/III frames
    #[clap(long, default_value_t = false)]
    verify_crc: bool,

    /// Log level when RUST_LOG is not set
    #[clap(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::builder().from_env_lossy()
    } else {
        EnvFilter::builder().parse_lossy(format!("mpeg_audio_inspector={}", opt.log_level))
    };
    let _ = tracing_subscriber::fmt::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .try_init();

    run(Options {
        input: opt.input,
        list_frames: opt.frames,
        verify_crc: opt.verify_crc,
    })
}
