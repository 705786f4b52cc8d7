//! Document records and the context formatter.
//!
//! A `DocumentRecord` is one candidate result from the external hybrid
//! search service. The formatter turns a ranked list of records into a
//! single delimited text block for grounded answer generation. It never
//! reorders: the search service's fused ranking is authoritative.

use serde::Deserialize;

/// Placeholder rendered for optional fields the search service omitted.
///
/// Absent fields must never render as a blank string, so the model cannot
/// mistake missing data for empty data.
pub const FIELD_NOT_AVAILABLE: &str = "Not available";

/// One candidate loan product returned by the hybrid search service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentRecord {
    /// Product display name.
    pub product_name: String,
    /// Internal product code.
    pub product_code: String,
    /// Short product summary.
    pub product_summary: String,
    /// Who the product targets, when the source document states it.
    #[serde(default)]
    pub target_description: Option<String>,
    /// Loan limit terms, when the source document states them.
    #[serde(default)]
    pub loan_limit_description: Option<String>,
    /// Fused rank score from the search service. Diagnostic display only;
    /// ranking is fixed by the service's own order and never recomputed here.
    #[serde(default)]
    pub relevance_score: f64,
}

/// Formats retrieved records into one numbered context block per record.
///
/// Blocks are numbered `[1]..[N]` in input order and joined with a blank
/// line. Pure and deterministic: identical input yields byte-identical
/// output.
pub fn format_context(documents: &[DocumentRecord]) -> String {
    documents
        .iter()
        .enumerate()
        .map(|(i, doc)| format_record(i + 1, doc))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_record(number: usize, doc: &DocumentRecord) -> String {
    let target = doc
        .target_description
        .as_deref()
        .unwrap_or(FIELD_NOT_AVAILABLE);
    let limit = doc
        .loan_limit_description
        .as_deref()
        .unwrap_or(FIELD_NOT_AVAILABLE);

    format!(
        "[{number}] {name}\n- Code: {code}\n- Summary: {summary}\n- Target: {target}\n- Limit: {limit}",
        name = doc.product_name,
        code = doc.product_code,
        summary = doc.product_summary,
    )
}
