//! Prompt builder: travel-agent persona + history + retrieved context.

/// How many trailing history lines are included in the prompt.
pub const HISTORY_LINES: usize = 5;

/// Fallback sentence used when retrieval produced no usable context.
pub const NO_DATA_FALLBACK: &str =
    "No relevant travel data found. Answer using your own knowledge.";

/// Build the final prompt from the query, the retrieved context block and
/// the conversation history (oldest first, as stored).
///
/// One merged template: persona and response guidelines, then the last
/// [`HISTORY_LINES`] history lines for continuity, then the retrieved
/// context (or [`NO_DATA_FALLBACK`] when it is empty or whitespace), then
/// the query itself.
pub fn build_prompt(query: &str, retrieved_context: &str, history: &[String]) -> String {
    let mut out = String::new();

    out.push_str(
        "You are an expert travel agent AI, ready to answer all kinds of travel-related questions.\n\
         \n\
         Response guidelines:\n\
         1. Keep responses concise and to the point (max 3-5 sentences).\n\
         2. If the user asks why they should travel, provide a brief but compelling reason.\n\
         3. If the user asks for a recommendation, list only the top 1-2 choices.\n\
         4. If the user asks about logistics (flights, hotels, visas), provide simple, direct advice.\n\
         5. If no relevant data is found, answer from your own travel knowledge.\n\n",
    );

    let recent = recent_history(history);
    if !recent.is_empty() {
        out.push_str("Conversation so far:\n");
        for line in recent {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str("Relevant information (if available):\n");
    if retrieved_context.trim().is_empty() {
        out.push_str(NO_DATA_FALLBACK);
    } else {
        out.push_str(retrieved_context.trim_end());
    }
    out.push_str("\n\n");

    out.push_str(&format!("User: {}\nAI:", query.trim()));

    out
}

fn recent_history(history: &[String]) -> &[String] {
    let start = history.len().saturating_sub(HISTORY_LINES);
    &history[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_query_and_context() {
        let prompt = build_prompt(
            "Best beach in Thailand?",
            "Railay Beach has limestone cliffs.",
            &[],
        );
        assert!(prompt.contains("User: Best beach in Thailand?"));
        assert!(prompt.contains("Railay Beach has limestone cliffs."));
        assert!(!prompt.contains(NO_DATA_FALLBACK));
        assert!(prompt.ends_with("AI:"));
    }

    #[test]
    fn blank_context_uses_fallback_sentence() {
        for ctx in ["", "   \n\t "] {
            let prompt = build_prompt("Why travel at all?", ctx, &[]);
            assert!(prompt.contains(NO_DATA_FALLBACK));
        }
    }

    #[test]
    fn history_is_capped_at_last_five_lines() {
        let history: Vec<String> = (0..8).map(|i| format!("User: question {i}")).collect();
        let prompt = build_prompt("And now?", "", &history);

        assert!(!prompt.contains("question 2"));
        for i in 3..8 {
            assert!(prompt.contains(&format!("question {i}")), "missing line {i}");
        }
    }

    #[test]
    fn empty_history_omits_conversation_block() {
        let prompt = build_prompt("First question", "some context", &[]);
        assert!(!prompt.contains("Conversation so far:"));
    }
}
