use serde_json::json;

use crate::errors::ScanError;
use crate::models::alert::PatternMatch;

const MESSAGE_HEADER: &str =
    "\u{1f3af} **DUAL PATTERN DETECTED** \u{1f3af}\n*(Equal Highs/Lows + Color Flip)*\n\n";
const BLOCK_SEPARATOR: &str = "\n----------------\n";
/// Discord caps messages at 2000 characters; truncate with headroom
/// for the marker.
const MESSAGE_LIMIT: usize = 1900;
const TRUNCATION_MARKER: &str = "\n...(truncated)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Nothing to send, or no webhook configured. No network call.
    Skipped,
    Sent,
}

/// Best-effort webhook delivery. Constructed with the endpoint so
/// tests can run it without touching the environment.
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: webhook_url.filter(|url| !url.is_empty()),
        }
    }

    /// Delivers all matches as one POST with a JSON `content` field.
    /// A failure here is the caller's to log; it is never retried.
    pub async fn notify(&self, matches: &[PatternMatch]) -> Result<NotifyOutcome, ScanError> {
        let Some(url) = &self.webhook_url else {
            return Ok(NotifyOutcome::Skipped);
        };
        if matches.is_empty() {
            return Ok(NotifyOutcome::Skipped);
        }

        let content = render_message(matches);
        let response = self
            .client
            .post(url)
            .json(&json!({ "content": content }))
            .send()
            .await
            .map_err(|error| ScanError::Delivery(error.to_string()))?;

        if !response.status().is_success() {
            return Err(ScanError::Delivery(format!(
                "webhook returned {}",
                response.status()
            )));
        }

        Ok(NotifyOutcome::Sent)
    }
}

/// Header plus one block per match, bounded to `MESSAGE_LIMIT`
/// characters (not bytes; blocks carry multi-byte emoji).
pub fn render_message(matches: &[PatternMatch]) -> String {
    let blocks: Vec<String> = matches.iter().map(render_block).collect();
    let message = format!("{}{}", MESSAGE_HEADER, blocks.join(BLOCK_SEPARATOR));

    if message.chars().count() > MESSAGE_LIMIT {
        let mut truncated: String = message.chars().take(MESSAGE_LIMIT).collect();
        truncated.push_str(TRUNCATION_MARKER);
        truncated
    } else {
        message
    }
}

fn render_block(found: &PatternMatch) -> String {
    let marker = if found.pattern.is_bullish() {
        "\u{1f7e2}"
    } else {
        "\u{1f534}"
    };
    format!(
        "{} **{}** [{}]\n`{}`\nPrice: `{}`",
        marker, found.symbol, found.timeframe, found.pattern, found.price
    )
}
