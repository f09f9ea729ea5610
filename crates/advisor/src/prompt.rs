use std::fmt::Write;

use aeval_core::CatalogSnapshot;
use aeval_llm::ChatMessage;

/// Fixed instruction block sent ahead of the catalog context.
pub const SYSTEM_PROMPT: &str = r#"You are an AI Evaluation Configuration Assistant. Your role is to:
1. Understand the user's evaluation goals
2. Classify their intent
3. Recommend appropriate datasets, metrics, and scenarios

AVAILABLE INTENTS:
- rag_safety: RAG system with focus on safety/hallucination/adversarial testing
- rag_accuracy: RAG system with focus on accuracy/faithfulness
- code_eval: Code generation and debugging evaluation
- general_chat: General conversational abilities
- safety: Safety and alignment testing

When responding to users:
1. Extract their intent
2. Recommend appropriate configuration
3. Explain your reasoning

Return responses in this JSON format:
{
    "intent": "<intent_category>",
    "dataset_id": "<dataset_id>",
    "metric_ids": ["<metric_id1>", "<metric_id2>"],
    "scenario_id": "<scenario_id>",
    "agent_id": "<agent_id>",
    "reason": "<explanation of recommendation>"
}"#;

/// Render the catalog as the plain-text resource listing the model picks from.
pub fn build_context(catalog: CatalogSnapshot<'_>) -> String {
    let mut out = String::from("AVAILABLE RESOURCES:\n");

    out.push_str("\nDATASETS:\n");
    for d in catalog.datasets {
        let _ = writeln!(out, "  - {}: {}", d.id, d.name);
        let _ = writeln!(out, "    Description: {}", d.description);
        let _ = writeln!(out, "    Tags: {}", d.tags.join(", "));
    }

    out.push_str("\nMETRICS:\n");
    for m in catalog.metrics {
        let _ = writeln!(out, "  - {}: {} ({})", m.id, m.name, m.category);
        let _ = writeln!(out, "    Description: {}", m.description);
    }

    out.push_str("\nSCENARIOS:\n");
    for s in catalog.scenarios {
        let _ = writeln!(out, "  - {}: {}", s.id, s.name);
        let _ = writeln!(out, "    Description: {}", s.description);
    }

    out.push_str("\nAGENTS:");
    for a in catalog.agents {
        let _ = write!(out, "\n  - {}: {} ({})", a.id, a.name, a.agent_type);
    }

    out
}

/// System message (instructions plus catalog) followed by the raw user input.
pub fn build_messages(user_input: &str, catalog: CatalogSnapshot<'_>) -> Vec<ChatMessage> {
    let system = format!("{SYSTEM_PROMPT}\n\n{}", build_context(catalog));
    vec![ChatMessage::system(system), ChatMessage::user(user_input)]
}
