use crate::{Error, Result};
use logsig_core::CheckSpec;
use regex::Regex;

// Known failure signatures. Each vision pipeline pattern is anchored on the
// syslog timestamp and `hardware-N` hostname written by docker-compose.
// Digit and word classes are ASCII-only.
const PORT_IN_USE: &str = r"^(?-u:\w){3} (?-u:\d){2} (?-u:\d){2}:(?-u:\d){2}:(?-u:\d){2} hardware-(?-u:\d)+ docker-compose.*vision_pipeline.*address already in use";
const UNDISTORT_CONFIG: &str = r"^(?-u:\w){3} (?-u:\d){2} (?-u:\d){2}:(?-u:\d){2}:(?-u:\d){2} hardware-(?-u:\d)+ docker-compose.*vision_pipeline.*perspective_transform config error. TransformationType needs to be DISTORTED OR UNDISTORTED";
const NEAR_MISS_CALCULATOR: &str = r"^(?-u:\w){3} (?-u:\d){2} (?-u:\d){2}:(?-u:\d){2}:(?-u:\d){2} hardware-(?-u:\d)+ docker-compose.*vision_pipeline.*near miss calculator requires perspective transform's";
const GPS_TEMPLATE: &str = r#"^(?-u:\w){3} (?-u:\d){2} (?-u:\d){2}:(?-u:\d){2}:(?-u:\d){2} hardware-(?-u:\d)+ docker-compose.*vision_pipeline.*error when excuting the template with pipelineValues: template: gstreamer_inference_sub_pipeline:26:52: executing "gstreamer_inference_sub_pipeline" at <.Sub.latitude>"#;
// Matches any log source, only the broker timeout shape matters.
const BROKER_TIMEOUT: &str =
    r"^.*Timed out (?-u:\d)+ in-flight, (?-u:\d)+ retry-queued, (?-u:\d)+ out-queue, (?-u:\d)+ partially-sent requests$";

/// The built-in check table, in reporting order.
pub fn builtin_checks() -> Vec<CheckSpec> {
    vec![
        CheckSpec::new(PORT_IN_USE, "Port already in use."),
        CheckSpec::new(UNDISTORT_CONFIG, "Perspective transform config error."),
        CheckSpec::new(NEAR_MISS_CALCULATOR, "Near miss calculator error."),
        CheckSpec::new(GPS_TEMPLATE, "GPS template execution failed."),
        CheckSpec::new(
            BROKER_TIMEOUT,
            "Kafka error - try restarting the VP. if the issue persists, raise with tech",
        ),
    ]
}

/// A compiled check with its running match state.
///
/// Counts accumulate across every file scanned with the same check list;
/// the example is the first matching line ever seen and is never replaced.
#[derive(Debug, Clone)]
pub struct PatternCheck {
    pattern: Regex,
    description: String,
    count: usize,
    example: Option<String>,
}

impl PatternCheck {
    pub fn new(pattern: &str, description: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: regex,
            description: description.into(),
            count: 0,
            example: None,
        })
    }

    pub fn from_spec(spec: &CheckSpec) -> Result<Self> {
        Self::new(&spec.pattern, spec.description.clone())
    }

    /// Test a line and record it on match. Returns whether the line matched.
    pub fn observe(&mut self, line: &str) -> bool {
        if !self.pattern.is_match(line) {
            return false;
        }

        self.count += 1;
        if self.example.is_none() {
            self.example = Some(line.to_string());
        }
        true
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// First matching line, as decoded by the reader: invalid UTF-8 bytes
    /// appear as U+FFFD and the line terminator is stripped.
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }
}

/// Compile specs into checks, preserving order.
pub fn compile_checks(specs: &[CheckSpec]) -> Result<Vec<PatternCheck>> {
    specs.iter().map(PatternCheck::from_spec).collect()
}
