use aeval_core::Recommendation;

use crate::intent::Intent;

/// Build the user-facing reply: the intent's explanation, followed by a blank
/// line and the recommendation's reason when there is a non-empty one.
pub fn compose_reply(intent: &Intent, recommendation: Option<&Recommendation>) -> String {
    let base = intent.explanation();
    match recommendation.map(|r| r.reason.as_str()) {
        Some(reason) if !reason.is_empty() => format!("{base}\n\n{reason}"),
        _ => base.to_owned(),
    }
}
