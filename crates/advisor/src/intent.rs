use std::fmt;

/// Evaluation goal the model classified the request as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intent {
    /// RAG system, focus on safety, hallucination and adversarial testing.
    RagSafety,
    /// RAG system, focus on accuracy and faithfulness.
    RagAccuracy,
    /// Code generation and debugging.
    CodeEval,
    /// General conversational ability.
    GeneralChat,
    /// Safety and alignment.
    Safety,
    /// Any label outside the five above, kept verbatim.
    Unrecognized(String),
}

const FALLBACK_EXPLANATION: &str = "Based on your request, here's my recommendation.";

impl Intent {
    /// Labels the model is told to choose from, in prompt order.
    pub const LABELS: [&'static str; 5] = [
        "rag_safety",
        "rag_accuracy",
        "code_eval",
        "general_chat",
        "safety",
    ];

    /// Map a model label to an intent. Never fails; unknown labels become
    /// [`Intent::Unrecognized`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "rag_safety" => Self::RagSafety,
            "rag_accuracy" => Self::RagAccuracy,
            "code_eval" => Self::CodeEval,
            "general_chat" => Self::GeneralChat,
            "safety" => Self::Safety,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::RagSafety => "rag_safety",
            Self::RagAccuracy => "rag_accuracy",
            Self::CodeEval => "code_eval",
            Self::GeneralChat => "general_chat",
            Self::Safety => "safety",
            Self::Unrecognized(label) => label,
        }
    }

    /// One-sentence explanation shown to the user for this intent.
    pub fn explanation(&self) -> &'static str {
        match self {
            Self::RagSafety => {
                "Since you're focused on safety for your RAG system, I've prioritized metrics that detect hallucinations, toxicity, and jailbreak attempts."
            }
            Self::RagAccuracy => {
                "For RAG accuracy evaluation, I've selected metrics that measure context adherence and faithfulness to retrieved documents."
            }
            Self::CodeEval => {
                "For coding evaluation, I've chosen execution-based metrics that verify code correctness."
            }
            Self::GeneralChat => {
                "For general conversation capabilities, I've selected metrics that evaluate relevance, coherence, and tone."
            }
            Self::Safety => {
                "For safety testing, I've included comprehensive metrics to detect toxic content and adversarial prompt resistance."
            }
            Self::Unrecognized(_) => FALLBACK_EXPLANATION,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
