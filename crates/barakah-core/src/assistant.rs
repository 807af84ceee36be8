//! Conversational assistant boundary.
//!
//! One thin request/response call to an OpenAI-compatible
//! chat-completions endpoint, with a single tool binding: `add_task`.
//! The outbound request carries a system framing string built from the
//! current segment, today's date, and today's incomplete tasks, plus
//! the user's latest message. Every failure on this path collapses to
//! a fixed apologetic reply -- the assistant never surfaces an error to
//! the caller. There is deliberately no timeout: a hung request leaves
//! the caller's "thinking" state active.

use chrono::NaiveDate;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::AssistantConfig;
use crate::error::AssistantError;
use crate::model::{Category, Priority, Task};
use crate::segment::{Segment, SegmentLabel};

/// Reply shown when the request fails for any reason.
pub const FALLBACK_REPLY: &str = "I'm having trouble connecting right now. Please try again.";

/// Reply substituted when a tool call arrives with no prose.
const SILENT_TOOL_REPLY: &str = "I've updated your schedule.";

/// A task the assistant asked to create. The caller stamps today's
/// date and routes it through the normal add command.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    pub segment: SegmentLabel,
}

/// What the assistant said, plus any tasks it asked to add.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub text: String,
    pub drafts: Vec<TaskDraft>,
}

impl AssistantReply {
    fn fallback() -> Self {
        AssistantReply {
            text: FALLBACK_REPLY.to_string(),
            drafts: Vec::new(),
        }
    }
}

/// Build the system framing string for a request.
pub fn system_prompt(segment: Segment, today: NaiveDate, pending: &[&Task]) -> String {
    let task_context = pending
        .iter()
        .map(|t| format!("- {} ({}, {})", t.title, t.category, t.segment))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are Barakah, a wise and calm productivity assistant.\n\
         Current Time Block: {segment}.\n\
         Today's Date: {today}.\n\
         User's Pending Tasks:\n{task_context}\n\n\
         Help the user prioritize, suggest spiritual or learning activities, \
         and add tasks if requested. Keep responses concise, encouraging, and clear."
    )
}

fn add_task_tool() -> Value {
    json!({
        "type": "function",
        "function": {
            "name": "add_task",
            "description": "Add a new task to the user's schedule.",
            "parameters": {
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "The title of the task"
                    },
                    "category": {
                        "type": "string",
                        "description": "Work, Learning, Spiritual, Health, or Open"
                    },
                    "priority": {
                        "type": "string",
                        "description": "Urgent or Normal"
                    },
                    "segment": {
                        "type": "string",
                        "description": "The time block (e.g. 'After Fajr', 'Before Dhuhr')"
                    }
                },
                "required": ["title"]
            }
        }
    })
}

/// Client for the assistant endpoint.
pub struct AssistantClient {
    config: AssistantConfig,
    client: Client,
}

impl AssistantClient {
    pub fn new(config: AssistantConfig) -> Self {
        AssistantClient {
            config,
            client: Client::new(),
        }
    }

    /// Send one user message. Never fails: transport or shape problems
    /// come back as the fallback reply.
    pub async fn chat(
        &self,
        segment: Segment,
        today: NaiveDate,
        pending: &[&Task],
        message: &str,
    ) -> AssistantReply {
        self.request(segment, today, pending, message)
            .await
            .unwrap_or_else(|_| AssistantReply::fallback())
    }

    async fn request(
        &self,
        segment: Segment,
        today: NaiveDate,
        pending: &[&Task],
        message: &str,
    ) -> Result<AssistantReply, AssistantError> {
        if self.config.api_key.is_empty() {
            return Err(AssistantError::NotConfigured);
        }

        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_prompt(segment, today, pending) },
                { "role": "user", "content": message }
            ],
            "tools": [add_task_tool()]
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let value: Value = response.json().await?;
        parse_reply(&value, segment)
    }
}

/// Extract text and tool calls from a chat-completions response.
///
/// One `add_task` call produces exactly one draft and one appended
/// acknowledgement line. Missing optional fields take the defined
/// defaults: Open category, Normal priority, the active segment.
pub fn parse_reply(value: &Value, current: Segment) -> Result<AssistantReply, AssistantError> {
    let message = value
        .pointer("/choices/0/message")
        .ok_or_else(|| AssistantError::BadResponse("no choices[0].message".to_string()))?;

    let mut text = message
        .get("content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut drafts = Vec::new();
    if let Some(calls) = message.get("tool_calls").and_then(Value::as_array) {
        for call in calls {
            if call.pointer("/function/name").and_then(Value::as_str) != Some("add_task") {
                continue;
            }
            let args = match call.pointer("/function/arguments") {
                // Arguments arrive as a JSON-encoded string.
                Some(Value::String(raw)) => serde_json::from_str::<Value>(raw)
                    .map_err(|e| AssistantError::BadResponse(e.to_string()))?,
                Some(other) => other.clone(),
                None => continue,
            };
            let Some(title) = args.get("title").and_then(Value::as_str) else {
                continue;
            };
            let draft = TaskDraft {
                title: title.to_string(),
                category: parse_field(&args, "category").unwrap_or(Category::Open),
                priority: parse_field(&args, "priority").unwrap_or(Priority::Normal),
                segment: args
                    .get("segment")
                    .and_then(Value::as_str)
                    .map(|s| s.parse().unwrap_or_else(|_| SegmentLabel::Custom(s.to_string())))
                    .unwrap_or_else(|| current.into()),
            };
            text.push_str(&format!("\n\n[Task added: {}]", draft.title));
            drafts.push(draft);
        }
    }

    if text.is_empty() && !drafts.is_empty() {
        text = SILENT_TOOL_REPLY.to_string();
    }

    Ok(AssistantReply { text, drafts })
}

fn parse_field<T: std::str::FromStr>(args: &Value, field: &str) -> Option<T> {
    args.get(field)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn today() -> NaiveDate {
        "2024-01-02".parse().unwrap()
    }

    fn pending_task(title: &str) -> Task {
        Task {
            id: "t1".to_string(),
            title: title.to_string(),
            completed: false,
            priority: Priority::Normal,
            category: Category::Work,
            segment: Segment::Asr.into(),
            date: today(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn prompt_lists_pending_tasks_with_segment_and_date() {
        let task = pending_task("Write report");
        let prompt = system_prompt(Segment::Asr, today(), &[&task]);
        assert!(prompt.contains("Current Time Block: After Asr."));
        assert!(prompt.contains("Today's Date: 2024-01-02."));
        assert!(prompt.contains("- Write report (Work, After Asr)"));
    }

    #[test]
    fn plain_text_reply_has_no_drafts() {
        let value = json!({
            "choices": [{ "message": { "content": "Focus on one thing." } }]
        });
        let reply = parse_reply(&value, Segment::Fajr).unwrap();
        assert_eq!(reply.text, "Focus on one thing.");
        assert!(reply.drafts.is_empty());
    }

    #[test]
    fn tool_call_yields_one_draft_and_one_acknowledgement() {
        let value = json!({
            "choices": [{ "message": {
                "content": "Done.",
                "tool_calls": [{
                    "function": {
                        "name": "add_task",
                        "arguments": "{\"title\": \"Read Quran\", \"category\": \"Spiritual\"}"
                    }
                }]
            }}]
        });
        let reply = parse_reply(&value, Segment::Maghrib).unwrap();
        assert_eq!(reply.drafts.len(), 1);
        let draft = &reply.drafts[0];
        assert_eq!(draft.title, "Read Quran");
        assert_eq!(draft.category, Category::Spiritual);
        assert_eq!(draft.priority, Priority::Normal);
        assert_eq!(draft.segment, SegmentLabel::Known(Segment::Maghrib));
        assert!(reply.text.ends_with("[Task added: Read Quran]"));
    }

    #[test]
    fn missing_fields_take_defined_defaults() {
        let value = json!({
            "choices": [{ "message": {
                "content": null,
                "tool_calls": [{
                    "function": {
                        "name": "add_task",
                        "arguments": { "title": "Stretch" }
                    }
                }]
            }}]
        });
        let reply = parse_reply(&value, Segment::Isha).unwrap();
        let draft = &reply.drafts[0];
        assert_eq!(draft.category, Category::Open);
        assert_eq!(draft.priority, Priority::Normal);
        assert_eq!(draft.segment, SegmentLabel::Known(Segment::Isha));
        assert_eq!(reply.text, "I've updated your schedule.");
    }

    #[test]
    fn malformed_response_shape_is_an_error() {
        let value = json!({ "unexpected": true });
        assert!(parse_reply(&value, Segment::Fajr).is_err());
    }

    #[tokio::test]
    async fn http_failure_surfaces_as_fallback_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .create_async()
            .await;

        let config = AssistantConfig {
            endpoint: format!("{}/v1/chat/completions", server.url()),
            api_key: "sk-test".to_string(),
            model: "test-model".to_string(),
        };
        let client = AssistantClient::new(config);
        let reply = client.chat(Segment::Fajr, today(), &[], "salam").await;

        mock.assert_async().await;
        assert_eq!(reply.text, FALLBACK_REPLY);
        assert!(reply.drafts.is_empty());
    }

    #[tokio::test]
    async fn successful_call_returns_text_and_draft() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "choices": [{ "message": {
                "content": "Added it for you.",
                "tool_calls": [{
                    "function": {
                        "name": "add_task",
                        "arguments": "{\"title\": \"Review notes\", \"priority\": \"Urgent\"}"
                    }
                }]
            }}]
        });
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let config = AssistantConfig {
            endpoint: format!("{}/v1/chat/completions", server.url()),
            api_key: "sk-test".to_string(),
            model: "test-model".to_string(),
        };
        let client = AssistantClient::new(config);
        let task = pending_task("Existing");
        let reply = client
            .chat(Segment::Asr, today(), &[&task], "add review notes")
            .await;

        mock.assert_async().await;
        assert_eq!(reply.drafts.len(), 1);
        assert_eq!(reply.drafts[0].priority, Priority::Urgent);
        assert!(reply.text.contains("[Task added: Review notes]"));
    }

    #[tokio::test]
    async fn missing_api_key_falls_back_without_a_request() {
        let client = AssistantClient::new(AssistantConfig::default());
        let reply = client.chat(Segment::Fajr, today(), &[], "salam").await;
        assert_eq!(reply.text, FALLBACK_REPLY);
    }
}
