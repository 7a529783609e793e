//! Assertions over the JSON scan report (`logsig scan --format json`).

use anyhow::{Context, Result};
use serde_json::Value;

fn find_check<'a>(json: &'a Value, description: &str) -> Result<&'a Value> {
    let checks = json["content"]["checks"]
        .as_array()
        .context("Expected 'content.checks' array in JSON")?;

    checks
        .iter()
        .find(|c| c["description"].as_str() == Some(description))
        .with_context(|| format!("No check described as {:?}", description))
}

/// Assert the match count of the check with the given description.
pub fn assert_check_count(json: &Value, description: &str, expected: u64) -> Result<()> {
    let check = find_check(json, description)?;
    let count = check["count"]
        .as_u64()
        .with_context(|| format!("Check {:?} missing count", description))?;

    if count != expected {
        anyhow::bail!(
            "Expected {} matches for {:?}, got {}",
            expected,
            description,
            count
        );
    }
    Ok(())
}

/// Assert the first example line of a check (`None` for no example).
pub fn assert_check_example(json: &Value, description: &str, expected: Option<&str>) -> Result<()> {
    let check = find_check(json, description)?;
    let example = check["example"].as_str();

    if example != expected {
        anyhow::bail!(
            "Expected example {:?} for {:?}, got {:?}",
            expected,
            description,
            example
        );
    }
    Ok(())
}

/// Assert the grand total across all checks.
pub fn assert_total_matches(json: &Value, expected: u64) -> Result<()> {
    let total = json["content"]["total_matches"]
        .as_u64()
        .context("Expected 'content.total_matches' in JSON")?;

    if total != expected {
        anyhow::bail!("Expected {} total matches, got {}", expected, total);
    }
    Ok(())
}

/// Assert the escalated descriptions, in report order.
pub fn assert_escalated(json: &Value, expected: &[&str]) -> Result<()> {
    let escalated: Vec<&str> = json["content"]["escalated"]
        .as_array()
        .context("Expected 'content.escalated' array in JSON")?
        .iter()
        .filter_map(|v| v.as_str())
        .collect();

    if escalated != expected {
        anyhow::bail!("Expected escalated {:?}, got {:?}", expected, escalated);
    }
    Ok(())
}

/// Assert the processing order by file name, and each file's status.
pub fn assert_files(json: &Value, expected: &[(&str, &str)]) -> Result<()> {
    let files = json["content"]["files"]
        .as_array()
        .context("Expected 'content.files' array in JSON")?;

    let actual: Vec<(String, String)> = files
        .iter()
        .map(|f| {
            let path = f["path"].as_str().unwrap_or_default();
            let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
            (
                name.to_string(),
                f["status"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(name, status)| (name.to_string(), status.to_string()))
        .collect();

    if actual != expected {
        anyhow::bail!("Expected files {:?}, got {:?}", expected, actual);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report() -> Value {
        json!({
            "content": {
                "files": [
                    {"path": "/logs/syslog.1.gz", "status": "skipped"},
                    {"path": "/logs/syslog", "status": "scanned"}
                ],
                "checks": [
                    {"description": "Exploded.", "count": 2, "example": "boom 1"},
                    {"description": "Melted.", "count": 0, "example": null}
                ],
                "total_matches": 2,
                "escalated": ["Exploded."]
            }
        })
    }

    #[test]
    fn test_assert_check_count() {
        let json = report();
        assert!(assert_check_count(&json, "Exploded.", 2).is_ok());
        assert!(assert_check_count(&json, "Exploded.", 1).is_err());
        assert!(assert_check_count(&json, "Missing.", 0).is_err());
    }

    #[test]
    fn test_assert_check_example() {
        let json = report();
        assert!(assert_check_example(&json, "Exploded.", Some("boom 1")).is_ok());
        assert!(assert_check_example(&json, "Melted.", None).is_ok());
    }

    #[test]
    fn test_assert_totals_and_files() {
        let json = report();
        assert!(assert_total_matches(&json, 2).is_ok());
        assert!(assert_escalated(&json, &["Exploded."]).is_ok());
        assert!(assert_escalated(&json, &[]).is_err());
        assert!(
            assert_files(&json, &[("syslog.1.gz", "skipped"), ("syslog", "scanned")]).is_ok()
        );
    }
}
