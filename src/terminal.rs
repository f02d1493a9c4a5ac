//! Terminal front end
//!
//! Prints the conversation as labelled bubbles and reads questions line by
//! line until EOF or a quit command.

use crate::conversation::{Role, Turn};
use crate::llm::CompletionClient;
use crate::runtime::{ChatSession, ChatView, SubmitOutcome};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];
const CONTINUATION_INDENT: &str = "          ";

/// `ChatView` that writes to any `std::io::Write`, normally stdout
pub struct TerminalView<W> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn write_bubble(&mut self, label: &str, content: &str) -> std::io::Result<()> {
        let mut lines = content.lines();
        writeln!(self.out, "{label:>7} › {}", lines.next().unwrap_or_default())?;
        for line in lines {
            if line.is_empty() {
                writeln!(self.out)?;
            } else {
                writeln!(self.out, "{CONTINUATION_INDENT}{line}")?;
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn render_turn(&mut self, turn: &Turn) {
        let label = match turn.role() {
            Role::User => "you",
            Role::Assistant => "advisor",
            Role::System => return,
        };
        if let Err(e) = self.write_bubble(label, turn.content()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn show_last_question(&mut self, text: &str) {
        let result = writeln!(self.out, "[{text}]").and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn show_prompt(&mut self) {
        let result = write!(self.out, "> ").and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

/// Decode one raw input line; invalid UTF-8 becomes U+FFFD
fn decode_line(raw: &[u8]) -> String {
    let line = String::from_utf8_lossy(raw);
    if matches!(line, std::borrow::Cow::Owned(_)) {
        tracing::warn!(bytes = raw.len(), "Input line was not valid UTF-8, invalid bytes replaced");
    }
    line.trim_end_matches(['\n', '\r']).to_string()
}

/// Feed lines from `input` into the session until EOF or a quit command.
///
/// Returns the number of non-blank submissions handled.
pub async fn run_repl<C, V, R>(session: &mut ChatSession<C, V>, mut input: R) -> std::io::Result<usize>
where
    C: CompletionClient,
    V: ChatView,
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let mut handled = 0;

    loop {
        session.prompt();
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = decode_line(&buf);
        if QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }
        if session.submit(&line).await != SubmitOutcome::Ignored {
            handled += 1;
        }
    }

    tracing::info!(
        session_id = %session.id(),
        handled,
        turns = session.conversation().len(),
        "Input closed"
    );
    Ok(handled)
}
