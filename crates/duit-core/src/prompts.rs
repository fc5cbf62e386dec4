//! Embedded prompt texts
//!
//! The extraction instruction block is the schema contract the rest of the
//! pipeline depends on; it is constant across calls. Prompt sources live in
//! `prompts/` at the repository root and are compiled into the binary.

/// Instruction block for structured transaction extraction
pub const EXTRACT_TRANSACTION: &str = include_str!("../../../prompts/extract_transaction.md");

/// Template for the bounded-context insights request
const FINANCIAL_INSIGHTS: &str = include_str!("../../../prompts/financial_insights.md");

/// Render the insights prompt with the serialized transaction slice
pub fn render_insights(transactions_json: &str) -> String {
    FINANCIAL_INSIGHTS.replace("{transactions}", transactions_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_instruction_fixes_schema() {
        for key in ["merchant", "amount", "date", "category", "type", "summary"] {
            assert!(
                EXTRACT_TRANSACTION.contains(key),
                "instruction missing schema key {}",
                key
            );
        }
        assert!(EXTRACT_TRANSACTION.contains("ONLY a valid JSON object"));
        assert!(EXTRACT_TRANSACTION.contains("no code fencing"));
    }

    #[test]
    fn test_render_insights_substitutes_transactions() {
        let rendered = render_insights(r#"[{"merchant":"McD"}]"#);
        assert!(rendered.contains(r#"[{"merchant":"McD"}]"#));
        assert!(!rendered.contains("{transactions}"));
    }
}
