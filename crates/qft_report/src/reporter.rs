//! Result reporting
//!
//! Presentation collaborators for sampling results: a sorted text
//! table, an ASCII histogram, JSON, and CSV. Outcomes are always
//! sorted lexicographically by bitstring so output is deterministic
//! regardless of hash-map iteration order.

use qft_backend::ExecutionResult;
use std::fmt::Write;

/// Maximum bar width of the ASCII histogram, in characters
const HISTOGRAM_WIDTH: usize = 40;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text table
    Text,
    /// ASCII histogram
    Histogram,
    /// JSON
    Json,
    /// CSV
    Csv,
}

/// Sampling result reporter
pub struct Reporter;

impl Reporter {
    // ========================================================================
    // Format Converters
    // ========================================================================

    /// Generate report in specified format
    pub fn report(result: &ExecutionResult, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => Self::to_text(result),
            ReportFormat::Histogram => Self::to_histogram(result),
            ReportFormat::Json => Self::to_json(result),
            ReportFormat::Csv => Self::to_csv(result),
        }
    }

    fn sorted_entries(result: &ExecutionResult) -> Vec<(&String, u64)> {
        let mut entries: Vec<_> = result.counts.iter().map(|(k, &v)| (k, v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Convert result to a plain text table
    pub fn to_text(result: &ExecutionResult) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "Sampling result: {} shots on {}",
            result.shots, result.metadata.engine
        )
        .unwrap();
        writeln!(output, "{:>width$}  {:>8}  {:>10}", "outcome", "count", "prob", width = 8)
            .unwrap();

        for (bitstring, count) in Self::sorted_entries(result) {
            writeln!(
                output,
                "{:>8}  {:>8}  {:>10.6}",
                bitstring,
                count,
                result.probability(bitstring)
            )
            .unwrap();
        }

        output
    }

    /// Convert result to an ASCII histogram
    pub fn to_histogram(result: &ExecutionResult) -> String {
        let mut output = String::new();
        let max_count = result.counts.values().copied().max().unwrap_or(0);

        for (bitstring, count) in Self::sorted_entries(result) {
            let bar_len = if max_count == 0 {
                0
            } else {
                (count as usize * HISTOGRAM_WIDTH) / max_count as usize
            };
            writeln!(
                output,
                "{} |{:<width$}| {}",
                bitstring,
                "#".repeat(bar_len),
                count,
                width = HISTOGRAM_WIDTH
            )
            .unwrap();
        }

        output
    }

    /// Convert result to pretty JSON
    pub fn to_json(result: &ExecutionResult) -> String {
        let report = serde_json::json!({
            "engine": result.metadata.engine,
            "shots": result.shots,
            "seed": result.metadata.seed,
            "counts": result.counts,
        });

        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Convert result to CSV
    pub fn to_csv(result: &ExecutionResult) -> String {
        let mut output = String::new();

        writeln!(output, "outcome,count,probability").unwrap();
        for (bitstring, count) in Self::sorted_entries(result) {
            writeln!(
                output,
                "{},{},{:.6}",
                bitstring,
                count,
                result.probability(bitstring)
            )
            .unwrap();
        }

        output
    }
}

// ============================================================================
// Tests
// ============================================================================
