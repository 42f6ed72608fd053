#![forbid(unsafe_code)]

//! Chat widget transport.
//!
//! The transport is an opaque producer of incremental text chunks; the
//! widget does not retry or back off, and a failed exchange surfaces as
//! exactly one fallback message.

use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat service unavailable")]
    Unavailable,
}

/// One request/response exchange. Implementations are called off the
/// UI thread and may block.
pub trait ChatTransport: Send + Sync {
    /// Produce the response to `prompt` as an ordered chunk iterator.
    fn send(&self, prompt: &str) -> Result<Box<dyn Iterator<Item = String> + Send>, ChatError>;
}

/// Canned transport for the demo and tests: replies with a fixed script,
/// one scripted reply per exchange, and can be armed to fail.
pub struct ScriptedTransport {
    replies: Mutex<Vec<Vec<String>>>,
    fail: Mutex<bool>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Vec<String>>) -> Self {
        Self {
            replies: Mutex::new(replies),
            fail: Mutex::new(false),
        }
    }

    /// Default demo script.
    pub fn demo() -> Self {
        Self::new(vec![
            vec![
                "Welcome to Dhaalan 2025! ".into(),
                "Ask me about exhibitors, the schedule, or how to get there.".into(),
            ],
            vec![
                "The expo runs for three days at Central Park, Hulhumale'. ".into(),
                "Doors open at 10:00.".into(),
            ],
        ])
    }

    /// Arm the next `send` to fail.
    pub fn fail_next(&self) {
        *self.fail.lock().unwrap_or_else(|e| e.into_inner()) = true;
    }
}

impl ChatTransport for ScriptedTransport {
    fn send(&self, _prompt: &str) -> Result<Box<dyn Iterator<Item = String> + Send>, ChatError> {
        if std::mem::take(&mut *self.fail.lock().unwrap_or_else(|e| e.into_inner())) {
            return Err(ChatError::Unavailable);
        }
        let mut replies = self.replies.lock().unwrap_or_else(|e| e.into_inner());
        let reply = if replies.is_empty() {
            vec!["That's everything I know for now.".into()]
        } else {
            replies.remove(0)
        };
        Ok(Box::new(reply.into_iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_replies_in_order() {
        let transport = ScriptedTransport::new(vec![
            vec!["a".into(), "b".into()],
            vec!["c".into()],
        ]);
        let first: Vec<String> = transport.send("hi").unwrap().collect();
        assert_eq!(first, ["a", "b"]);
        let second: Vec<String> = transport.send("more").unwrap().collect();
        assert_eq!(second, ["c"]);
    }

    #[test]
    fn armed_failure_fails_once() {
        let transport = ScriptedTransport::demo();
        transport.fail_next();
        assert!(transport.send("hi").is_err());
        assert!(transport.send("hi").is_ok());
    }

    #[test]
    fn exhausted_script_still_answers() {
        let transport = ScriptedTransport::new(vec![]);
        let reply: Vec<String> = transport.send("hi").unwrap().collect();
        assert_eq!(reply.len(), 1);
    }
}
