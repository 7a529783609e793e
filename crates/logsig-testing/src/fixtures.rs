//! Sample syslog content.
//!
//! Each constant matches exactly one built-in check.

use anyhow::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const PORT_IN_USE: &str = "Port already in use.";
pub const PERSPECTIVE_CONFIG: &str = "Perspective transform config error.";
pub const NEAR_MISS: &str = "Near miss calculator error.";
pub const GPS_TEMPLATE: &str = "GPS template execution failed.";
pub const BROKER_TIMEOUT: &str =
    "Kafka error - try restarting the VP. if the issue persists, raise with tech";

pub const PORT_IN_USE_LINE: &str =
    "Jan 01 00:00:01 hardware-1 docker-compose[1] vision_pipeline address already in use";
pub const PERSPECTIVE_CONFIG_LINE: &str = "Feb 12 08:15:42 hardware-3 docker-compose[812]: vision_pipeline_1 | perspective_transform config error. TransformationType needs to be DISTORTED OR UNDISTORTED";
pub const NEAR_MISS_LINE: &str = "Feb 12 08:15:43 hardware-3 docker-compose[812]: vision_pipeline_1 | near miss calculator requires perspective transform's output";
pub const GPS_TEMPLATE_LINE: &str = r#"Mar 14 09:26:53 hardware-12 docker-compose[88]: vision_pipeline_1 | error when excuting the template with pipelineValues: template: gstreamer_inference_sub_pipeline:26:52: executing "gstreamer_inference_sub_pipeline" at <.Sub.latitude>: nil pointer"#;
pub const BROKER_TIMEOUT_LINE: &str = "Apr 02 11:00:00 hardware-7 kafka-bridge[44]: %4|1712055600.123|REQTMOUT|rdkafka#producer-1| [thrd:ssl://broker:9093/1]: Timed out 3 in-flight, 0 retry-queued, 1 out-queue, 0 partially-sent requests";

/// Lines that match no built-in check.
pub const NOISE: &[&str] = &[
    "Jan 01 00:00:00 hardware-1 systemd[1]: Started Daily apt download activities.",
    "Jan 01 00:00:02 hardware-1 kernel: [   12.345678] usb 1-1: new high-speed USB device",
    "Jan 01 00:00:03 hardware-1 CRON[991]: (root) CMD (command -v debian-sa1 > /dev/null)",
];

/// A port-in-use line with a distinct timestamp second.
pub fn port_in_use_line(second: u32) -> String {
    format!(
        "Jan 01 00:00:{:02} hardware-1 docker-compose[1] vision_pipeline address already in use",
        second % 60
    )
}

/// Write `lines` as a gzip-compressed file, one line per row.
pub fn write_gzip(path: &Path, lines: &[&str]) -> Result<()> {
    let mut encoder = GzEncoder::new(File::create(path)?, Compression::default());
    for line in lines {
        writeln!(encoder, "{}", line)?;
    }
    encoder.finish()?;
    Ok(())
}
