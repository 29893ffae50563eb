//! File-level simplification: read a log, extract, write `<log>_simplified`

use std::path::{Path, PathBuf};
use sha2::{Digest, Sha256};
use crate::core::extractor::extract_text;
use crate::core::render::render_summary;
use crate::types::{SimplifiedReport, SimplifyError, SimulationSummary};
use crate::SIMPLIFIED_SUFFIX;

/// Result of simplifying one log file
#[derive(Debug, Clone)]
pub struct SimplifyOutcome {
    /// Where the simplified view was written
    pub output_path: PathBuf,
    /// Rendered text that was written
    pub rendered: String,
    /// Structured report for JSON output
    pub report: SimplifiedReport,
}

/// `<input>_simplified`, next to the input
pub fn simplified_path(input: impl AsRef<Path>) -> PathBuf {
    let mut name = input.as_ref().as_os_str().to_os_string();
    name.push(SIMPLIFIED_SUFFIX);
    PathBuf::from(name)
}

/// Read the whole log into memory
pub fn read_log(input: impl AsRef<Path>) -> Result<String, SimplifyError> {
    let input = input.as_ref();
    std::fs::read_to_string(input).map_err(|e| SimplifyError::io(input, e))
}

/// Extract and render a log already in memory
pub fn simplify_text(source: &str, text: &str) -> Result<(SimplifiedReport, String), SimplifyError> {
    let summary = extract_text(text)?;
    let rendered = render_summary(source, &summary);
    Ok((build_report(source, text, summary), rendered))
}

/// Simplify a log file and write the result alongside it
pub fn simplify_file(input: impl AsRef<Path>) -> Result<SimplifyOutcome, SimplifyError> {
    let input = input.as_ref();
    let text = read_log(input)?;
    let source = input.display().to_string();
    let (report, rendered) = simplify_text(&source, &text)?;

    let output_path = simplified_path(input);
    std::fs::write(&output_path, &rendered)
        .map_err(|e| SimplifyError::io(&output_path, e))?;

    Ok(SimplifyOutcome {
        output_path,
        rendered,
        report,
    })
}

/// Wrap a summary with its source label and content fingerprint
pub fn build_report(source: &str, raw_text: &str, summary: SimulationSummary) -> SimplifiedReport {
    SimplifiedReport::new(source, sha256_hex(raw_text.as_bytes()), summary)
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplified_path_appends_suffix() {
        assert_eq!(
            simplified_path("ncsmc_output/ncsm_rgm_Am2_1_1.out"),
            PathBuf::from("ncsmc_output/ncsm_rgm_Am2_1_1.out_simplified")
        );
    }

    #[test]
    fn test_sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_report_counts_states() {
        let text = "Bound state found at E_b=-1.0\ni_p,p_chan,p_st 1\n\n";
        let (report, rendered) = simplify_text("mem", text).unwrap();
        assert_eq!(report.bound_state_count, 1);
        assert_eq!(report.source, "mem");
        assert_eq!(report.source_sha256.len(), 64);
        assert!(rendered.contains("State Energy = -1.0 MeV"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = simplify_file("does/not/exist.out").unwrap_err();
        assert_eq!(err.code(), "E003_IO");
    }
}
