//! Report generation for elementary stream inspection results

use crate::stats::StreamStats;
use crate::types::InspectorReport;

/// Report generator for inspection results
pub struct Reporter;

impl Reporter {
    /// Generate a structured InspectorReport for API consumers
    pub fn create_report(stats: &StreamStats, source: Option<String>) -> InspectorReport {
        InspectorReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source,
            audio: stats.audio.clone(),
            frames: stats.frames,
            samples: stats.samples,
            duration_secs: stats.duration_secs,
            average_bitrate_kbps: (stats.average_bitrate_kbps() * 10.0).round() / 10.0,
            variable_bitrate: stats.is_variable_bitrate(),
            audio_bytes: stats.audio_bytes,
            skipped_bytes: stats.skipped_bytes,
            resyncs: stats.resyncs,
            truncated_tail_bytes: stats.truncated_tail_bytes,
            crc_errors: stats.crc_errors,
            frame_list: stats.frame_list.clone(),
        }
    }

    pub fn to_json(report: &InspectorReport) -> serde_json::Result<String> {
        serde_json::to_string_pretty(report)
    }
}
