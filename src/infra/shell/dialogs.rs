use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::application::ui::{ConfirmPrompt, Decision, Dialogs, Notice};

use super::console::Console;

/// Dialogs rendered as console lines. Confirmation reads one answer line;
/// anything other than `y`/`yes` (or end of input) cancels.
pub struct TerminalDialogs {
    console: Arc<Console>,
}

impl TerminalDialogs {
    pub fn new(console: Arc<Console>) -> Self {
        Self { console }
    }

    async fn write(&self, text: &str) {
        if let Err(err) = self.console.write_line(text).await {
            warn!(error = %err, "failed to write dialog");
        }
    }
}

#[async_trait]
impl Dialogs for TerminalDialogs {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Decision {
        self.write(&format!(
            "[{}] {} {}",
            prompt.kind.as_str(),
            prompt.title,
            prompt.text
        ))
        .await;
        if let Err(err) = self
            .console
            .prompt(&format!("{} [y/N]: ", prompt.confirm_label))
            .await
        {
            warn!(error = %err, "failed to write confirmation prompt");
        }

        match self.console.read_line().await {
            Ok(Some(answer)) if is_yes(&answer) => Decision::Confirmed,
            Ok(_) => Decision::Cancelled,
            Err(err) => {
                warn!(error = %err, "failed to read confirmation");
                Decision::Cancelled
            }
        }
    }

    async fn notify(&self, notice: Notice) {
        self.write(&format!(
            "[{}] {} {}",
            notice.kind.as_str(),
            notice.title,
            notice.text
        ))
        .await;
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ui::NoticeKind;
    use crate::infra::shell::console::testing::scripted;

    fn prompt() -> ConfirmPrompt {
        ConfirmPrompt {
            kind: NoticeKind::Warning,
            title: "Sure?".into(),
            text: "Really.".into(),
            confirm_label: "Do it".into(),
        }
    }

    #[tokio::test]
    async fn yes_confirms() {
        let (console, output) = scripted("YES\n");
        let dialogs = TerminalDialogs::new(Arc::new(console));

        assert_eq!(dialogs.confirm(&prompt()).await, Decision::Confirmed);
        assert_eq!(output.contents(), "[warning] Sure? Really.\nDo it [y/N]: ");
    }

    #[tokio::test]
    async fn anything_else_or_eof_cancels() {
        let (console, _) = scripted("nope\n");
        let dialogs = TerminalDialogs::new(Arc::new(console));
        assert_eq!(dialogs.confirm(&prompt()).await, Decision::Cancelled);
        assert_eq!(dialogs.confirm(&prompt()).await, Decision::Cancelled);
    }

    #[tokio::test]
    async fn notices_are_tagged_with_their_kind() {
        let (console, output) = scripted("");
        let dialogs = TerminalDialogs::new(Arc::new(console));
        dialogs.notify(Notice::success("Saved.")).await;
        assert_eq!(output.contents(), "[success] Success! Saved.\n");
    }
}
