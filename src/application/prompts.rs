//! Prompt text for the pipeline stages.
//!
//! Wording here is product configuration, not an engineering contract.
//! What each prompt must *contain* is contractual: the classifier's two
//! labels and examples, and the grounded template's rules (context only,
//! per-claim citation, explicit uncertainty, comparison differences,
//! consultation guidance).

/// System instruction for the intent classifier.
pub const CLASSIFIER_SYSTEM_PROMPT: &str = "\
You are an expert at analyzing customer questions for a bank.
Decide whether the question asks for specific loan product information
that requires searching the product catalog.

- Needs a product search: \"search\"
- General question or greeting: \"direct\"

Examples:
- \"Is there a loan just for doctors?\" -> search
- \"What is the limit on civil servant loans?\" -> search
- \"Hello\" -> direct
- \"What is a loan?\" -> direct

Answer with exactly one word: \"search\" or \"direct\".";

/// System instruction for the direct-answer path.
pub const DIRECT_SYSTEM_PROMPT: &str = "\
You are a friendly loan product advisor. \
Answer the customer's question briefly and politely.";

/// System instruction for the grounded-answer path.
pub const GROUNDED_SYSTEM_PROMPT: &str = "\
You are a loan product advisor. Answer the customer's question accurately
and politely, based on the retrieved product information.

Answer rules:
1. Use only the information in the supplied documents.
2. Cite every claim with its source in the form [Product N].
3. Flag uncertain information explicitly.
4. When comparing products, highlight the key differences.
5. Point out when further consultation would help.";

/// Fixed reply for a search route that retrieved nothing.
///
/// Returned without invoking the completion function.
pub const NO_RESULTS_ANSWER: &str = "\
Sorry, we could not find any matching loan products. \
Please try again with different search terms.";

/// Builds the user message for the grounded-answer path.
pub fn grounded_user_prompt(context: &str, question: &str) -> String {
    format!(
        "[Retrieved loan product information]\n{context}\n\n\
         [Customer question]\n{question}\n\n\
         Answer accurately and politely based on the information above.\n\
         Always cite your sources in the form [Product N]."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_prompt_names_both_labels() {
        assert!(CLASSIFIER_SYSTEM_PROMPT.contains("\"search\""));
        assert!(CLASSIFIER_SYSTEM_PROMPT.contains("\"direct\""));
    }

    #[test]
    fn grounded_prompt_carries_every_rule() {
        assert!(GROUNDED_SYSTEM_PROMPT.contains("only the information"));
        assert!(GROUNDED_SYSTEM_PROMPT.contains("[Product N]"));
        assert!(GROUNDED_SYSTEM_PROMPT.contains("uncertain"));
        assert!(GROUNDED_SYSTEM_PROMPT.contains("differences"));
        assert!(GROUNDED_SYSTEM_PROMPT.contains("consultation"));
    }

    #[test]
    fn grounded_user_prompt_embeds_context_and_question() {
        let prompt = grounded_user_prompt("[1] Doctor Loan", "Doctor loans?");
        assert!(prompt.contains("[1] Doctor Loan"));
        assert!(prompt.contains("Doctor loans?"));
    }
}
