use anyhow::Context;
use tracing::info;

use crate::processor::FrameProcessor;
use crate::report::Reporter;
use crate::types::{InspectorReport, Options};

/// Inspect an in-memory elementary stream
pub fn inspect(data: &[u8], opts: &Options, source: Option<String>) -> InspectorReport {
    let mut processor = FrameProcessor::new(opts);
    processor.process(data);
    Reporter::create_report(&processor.stats, source)
}

pub fn run(opts: Options) -> anyhow::Result<()> {
    let data = std::fs::read(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    info!(path = %opts.input.display(), bytes = data.len(), "inspecting");

    let report = inspect(&data, &opts, Some(opts.input.display().to_string()));
    if report.frames == 0 {
        anyhow::bail!("no MPEG audio frames found in {}", opts.input.display());
    }
    info!(frames = report.frames, duration_secs = report.duration_secs, "done");

    println!("{}", Reporter::to_json(&report)?);
    Ok(())
}
