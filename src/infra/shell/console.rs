use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

/// Line-oriented terminal shared by the shell loop and its dialogs.
pub struct Console {
    input: Mutex<Box<dyn AsyncBufRead + Send + Unpin>>,
    output: Mutex<Box<dyn AsyncWrite + Send + Unpin>>,
}

impl Console {
    pub fn new(
        input: impl AsyncBufRead + Send + Unpin + 'static,
        output: impl AsyncWrite + Send + Unpin + 'static,
    ) -> Self {
        Self {
            input: Mutex::new(Box::new(input)),
            output: Mutex::new(Box::new(output)),
        }
    }

    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }

    /// Next line without its terminator, or `None` at end of input.
    pub async fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub async fn write_line(&self, text: &str) -> io::Result<()> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await
    }

    pub async fn prompt(&self, text: &str) -> io::Result<()> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        output.flush().await
    }
}


#[cfg(test)]
mod tests {
    use super::testing::scripted;

    #[tokio::test]
    async fn reads_lines_without_terminators() {
        let (console, _) = scripted("first\r\nsecond\n");
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn prompt_and_lines_share_output() {
        let (console, output) = scripted("");
        console.prompt("> ").await.unwrap();
        console.write_line("hello").await.unwrap();
        assert_eq!(output.contents(), "> hello\n");
    }
}
