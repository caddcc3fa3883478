//! Console prompt source with explicit cancellation.
//!
//! All human input flows through the [`PromptSource`] trait so that
//! validators and the elicitation handler can be exercised in tests with
//! scripted input. The production implementation reads stdin on a blocking
//! task and races the read against an interrupt, so the session scheduler
//! is never stalled beyond the single in-flight exchange.

use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a prompt read.
#[derive(Debug, Error)]
pub(crate) enum PromptError {
    /// The user cancelled input (interrupt or end-of-input).
    #[error("input cancelled")]
    Cancelled,
    /// The input channel failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// One human-input channel: write a prompt, read a line.
#[async_trait]
pub(crate) trait PromptSource: Send + Sync {
    /// Print `prompt` and read one line of input.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Cancelled`] on interrupt or end-of-input;
    /// callers must propagate it rather than suppress it.
    async fn read_line(&self, prompt: &str) -> Result<String, PromptError>;

    /// Write one line of output (corrective messages, diagnostics).
    fn say(&self, line: &str);
}

/// Production prompt source backed by stdin/stdout.
pub(crate) struct ConsolePrompt;

impl ConsolePrompt {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PromptSource for ConsolePrompt {
    async fn read_line(&self, prompt: &str) -> Result<String, PromptError> {
        {
            use std::io::Write as _;
            let mut stdout = std::io::stdout();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }

        // The blocking read runs on its own task; Ctrl-C wins the race and
        // surfaces as a typed cancellation instead of a process signal.
        let read = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            let bytes = std::io::stdin().read_line(&mut line)?;
            Ok::<_, std::io::Error>((bytes, line))
        });

        tokio::select! {
            result = read => match result {
                Ok(Ok((0, _))) => Err(PromptError::Cancelled),
                Ok(Ok((_, line))) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
                Ok(Err(e)) => Err(PromptError::Io(e)),
                Err(e) => Err(PromptError::Io(std::io::Error::other(e))),
            },
            _ = tokio::signal::ctrl_c() => Err(PromptError::Cancelled),
        }
    }

    fn say(&self, line: &str) {
        println!("{line}");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex, PoisonError};

    use async_trait::async_trait;

    use super::{PromptError, PromptSource};

    enum Reply {
        Line(String),
        Cancel,
    }

    /// Scripted prompt source for tests: queued replies plus a captured
    /// transcript of every prompt and output line.
    ///
    /// An exhausted queue behaves like end-of-input and yields
    /// [`PromptError::Cancelled`], mirroring the console.
    #[derive(Clone)]
    pub(crate) struct ScriptedPrompt {
        replies: Arc<Mutex<VecDeque<Reply>>>,
        transcript: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedPrompt {
        pub(crate) fn new<I>(lines: I) -> Self
        where
            I: IntoIterator,
            I::Item: Into<String>,
        {
            Self {
                replies: Arc::new(Mutex::new(
                    lines.into_iter().map(|l| Reply::Line(l.into())).collect(),
                )),
                transcript: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Queue an explicit cancellation after the scripted lines.
        pub(crate) fn then_cancel(self) -> Self {
            self.replies
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push_back(Reply::Cancel);
            self
        }

        /// Everything printed so far: prompts and `say` lines, in order.
        pub(crate) fn transcript(&self) -> Vec<String> {
            self.transcript
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// How many transcript lines equal `line`.
        pub(crate) fn count_lines(&self, line: &str) -> usize {
            self.transcript().iter().filter(|l| *l == line).count()
        }
    }

    #[async_trait]
    impl PromptSource for ScriptedPrompt {
        async fn read_line(&self, prompt: &str) -> Result<String, PromptError> {
            self.transcript
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(prompt.to_string());

            let reply = self
                .replies
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front();
            match reply {
                Some(Reply::Line(line)) => Ok(line),
                Some(Reply::Cancel) | None => Err(PromptError::Cancelled),
            }
        }

        fn say(&self, line: &str) {
            self.transcript
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(line.to_string());
        }
    }
}
