use serde_json::Value;

/// A chat completion response body in the OpenAI-compatible wire format,
/// kept undecoded until [`ChatCompletion::into_reply`] inspects it.
///
/// Holding the raw body means a wrongly shaped envelope (array `content`,
/// string `message`, a body that is not JSON) is reported as a bad reply
/// rather than as a failed call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    body: Result<Value, String>,
}

impl Default for ChatCompletion {
    fn default() -> Self {
        Self::from_value(Value::Null)
    }
}

/// Outcome of inspecting a completion envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionReply {
    /// The first choice carried non-empty text.
    Content(String),
    /// `choices` was absent or empty.
    EmptyChoices,
    /// The first choice had no message.
    NoMessage,
    /// The message text was absent, null, or empty.
    EmptyContent,
    /// The body is not JSON or a level of the envelope has the wrong type.
    Malformed(String),
}

impl ChatCompletion {
    /// Wrap an already decoded body.
    pub fn from_value(body: Value) -> Self {
        Self { body: Ok(body) }
    }

    /// Decode a raw response body. Text that is not JSON is kept as a
    /// malformed reply.
    pub fn parse(raw: &str) -> Self {
        Self {
            body: serde_json::from_str(raw).map_err(|e| e.to_string()),
        }
    }

    /// Build a completion with a single choice carrying `content`.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content.into()}}]
        }))
    }

    /// Reduce the envelope to the text of its first choice.
    pub fn into_reply(self) -> CompletionReply {
        let body = match self.body {
            Ok(body) => body,
            Err(e) => return CompletionReply::Malformed(format!("body is not JSON: {e}")),
        };

        let choices = match body {
            Value::Null => None,
            Value::Object(mut body) => body.remove("choices"),
            other => return malformed("body", &other, "an object"),
        };
        let first = match choices {
            None | Some(Value::Null) => return CompletionReply::EmptyChoices,
            Some(Value::Array(choices)) => match choices.into_iter().next() {
                Some(first) => first,
                None => return CompletionReply::EmptyChoices,
            },
            Some(other) => return malformed("`choices`", &other, "an array"),
        };
        let message = match first {
            Value::Object(mut choice) => choice.remove("message"),
            other => return malformed("`choices[0]`", &other, "an object"),
        };
        let content = match message {
            None | Some(Value::Null) => return CompletionReply::NoMessage,
            Some(Value::Object(mut message)) => message.remove("content"),
            Some(other) => return malformed("`message`", &other, "an object"),
        };
        match content {
            Some(Value::String(text)) if !text.is_empty() => CompletionReply::Content(text),
            None | Some(Value::Null | Value::String(_)) => CompletionReply::EmptyContent,
            Some(other) => malformed("`content`", &other, "a string"),
        }
    }
}

fn malformed(what: &str, found: &Value, expected: &str) -> CompletionReply {
    let kind = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    CompletionReply::Malformed(format!("{what} is {kind}, expected {expected}"))
}
