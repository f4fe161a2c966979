//! Line input on a dedicated thread.
//!
//! rustyline blocks, so the editor runs on its own thread. The event loop
//! hands it one `Prompt` per line it wants; the thread answers with one
//! `Input`. Dropping the `LineReader` stops the thread after it writes the
//! history file.

use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use std::thread::JoinHandle;

use gemchat_common::PlatformError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// What to show before the next line.
///
/// A secret line is read without echo and never enters history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub secret: bool,
}

#[derive(Debug)]
pub enum Input {
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D, or the reader is gone.
    Eof,
    Failed(PlatformError),
}

pub struct LineReader {
    prompts: Option<std_mpsc::Sender<Prompt>>,
    lines: mpsc::UnboundedReceiver<Input>,
    handle: Option<JoinHandle<()>>,
}

impl LineReader {
    pub fn spawn(history: Option<PathBuf>) -> std::io::Result<Self> {
        let (prompt_tx, prompt_rx) = std_mpsc::channel();
        let (line_tx, line_rx) = mpsc::unbounded_channel();
        let handle = std::thread::Builder::new()
            .name("gemchat-input".into())
            .spawn(move || read_loop(history, prompt_rx, line_tx))?;
        Ok(Self {
            prompts: Some(prompt_tx),
            lines: line_rx,
            handle: Some(handle),
        })
    }

    /// Ask the thread to read one more line.
    pub fn request(&self, prompt: Prompt) {
        if let Some(tx) = &self.prompts {
            let _ = tx.send(prompt);
        }
    }

    pub async fn next(&mut self) -> Input {
        self.lines.recv().await.unwrap_or(Input::Eof)
    }

    /// Stop the thread and wait for it to save history.
    ///
    /// Must not be called while a line request is outstanding, or this
    /// waits for that line.
    pub fn finish(mut self) {
        self.prompts.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("input thread panicked");
            }
        }
    }
}

fn read_loop(
    history: Option<PathBuf>,
    prompts: std_mpsc::Receiver<Prompt>,
    lines: mpsc::UnboundedSender<Input>,
) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            let _ = lines.send(Input::Failed(PlatformError::TerminalError(e.to_string())));
            return;
        }
    };

    if let Some(path) = &history {
        if let Err(e) = editor.load_history(path) {
            debug!(path = %path.display(), "no history loaded: {e}");
        }
    }

    while let Ok(prompt) = prompts.recv() {
        let read = if prompt.secret {
            crate::secret::read_secret(&prompt.text)
        } else {
            editor.readline(&prompt.text)
        };
        let input = settle(&prompt, read, |line| {
            let _ = editor.add_history_entry(line);
        });
        let last = matches!(input, Input::Eof | Input::Failed(_));
        if lines.send(input).is_err() || last {
            break;
        }
    }

    if let Some(path) = &history {
        if let Err(e) = editor.save_history(path) {
            warn!(path = %path.display(), "failed to save history: {e}");
        }
    }
}

/// Turn one read into an `Input`, passing the line to `remember` unless
/// it is blank or was read for a secret prompt.
fn settle(
    prompt: &Prompt,
    read: Result<String, ReadlineError>,
    remember: impl FnOnce(&str),
) -> Input {
    match read {
        Ok(line) => {
            if !prompt.secret && !line.trim().is_empty() {
                remember(&line);
            }
            Input::Line(line)
        }
        Err(ReadlineError::Interrupted) => Input::Interrupted,
        Err(ReadlineError::Eof) => Input::Eof,
        Err(e) => Input::Failed(PlatformError::TerminalError(e.to_string())),
    }
}
