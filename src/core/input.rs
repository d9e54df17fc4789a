use crate::config::{GameConfig, InputConfig};
use crate::core::game::{Reply, Session};
use crate::core::messenger::MessageRequest;
use crate::domain::ports::Surface;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

const EOL: &str = "\n";

/// How a batch file replay ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replay {
    /// Every line was processed and the file closed.
    Exhausted { lines: usize },
    /// Reading failed part way; `lines` were processed before the failure.
    Interrupted { lines: usize },
    /// A quit keyword was read from the file.
    Quit,
    /// Neither the path nor the data-directory fallback was readable.
    NotFound,
}

/// Why the whole run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    EndOfInput,
}

/// 找出指令檔：先試原始路徑，再試 `<data_dir>/<name>.<extension>`
pub fn resolve_command_file(file_name: &str, input: &InputConfig) -> Option<PathBuf> {
    let direct = PathBuf::from(file_name);
    if is_readable_file(&direct) {
        return Some(direct);
    }

    let fallback =
        Path::new(&input.data_dir).join(format!("{}.{}", file_name, input.extension));
    tracing::debug!(
        "'{}' not readable, trying {}",
        file_name,
        fallback.display()
    );
    if is_readable_file(&fallback) {
        return Some(fallback);
    }

    None
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

/// 讀取一行，無效的 UTF-8 以替代字元取代
///
/// Returns `None` at end of input. The trailing `\n` or `\r\n` is dropped.
pub fn read_lossy_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Feeds lines to a session and writes replies followed by the prompt.
pub struct Shell<S: Surface, O: Write, E: Write> {
    session: Session<S>,
    out: O,
    err: E,
    prompt: String,
    input: InputConfig,
}

impl<S: Surface, O: Write, E: Write> Shell<S, O, E> {
    pub fn new(session: Session<S>, config: &GameConfig, out: O, err: E) -> Self {
        Self {
            session,
            out,
            err,
            prompt: config.game.prompt.clone(),
            input: config.input.clone(),
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn into_parts(self) -> (Session<S>, O, E) {
        (self.session, self.out, self.err)
    }

    /// Welcome banner, optional file replay, then interactive input.
    pub fn run<R: BufRead>(&mut self, file_name: Option<&str>, input: R) -> Result<Exit> {
        self.welcome()?;

        if let Some(file_name) = file_name {
            if self.replay(file_name)? == Replay::Quit {
                return Ok(Exit::Quit);
            }
        }

        self.interact(input)
    }

    pub fn welcome(&mut self) -> Result<()> {
        let banner = self
            .session
            .messenger()
            .render_with(&MessageRequest::new("welcome").with("eol", EOL));
        write!(self.out, "{}{}{}", banner, EOL, self.prompt)?;
        self.out.flush()?;
        Ok(())
    }

    /// 逐行重播指令檔，每行先回顯再執行
    pub fn replay(&mut self, file_name: &str) -> Result<Replay> {
        let path = match resolve_command_file(file_name, &self.input) {
            Some(path) => path,
            None => {
                tracing::warn!("Command file '{}' not found", file_name);
                let message = self.session.messenger().render_with(
                    &MessageRequest::new("file_not_found").with("file_name", file_name),
                );
                write!(self.err, "{}{}{}", message, EOL, EOL)?;
                self.err.flush()?;
                return Ok(Replay::NotFound);
            }
        };

        tracing::info!("📁 Replaying commands from: {}", path.display());
        let mut reader = BufReader::new(File::open(&path)?);
        let mut buf = Vec::new();
        let mut lines = 0;

        loop {
            let line = match read_lossy_line(&mut reader, &mut buf) {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(
                        "Stopped reading {} after {} lines: {}",
                        path.display(),
                        lines,
                        e
                    );
                    return Ok(Replay::Interrupted { lines });
                }
            };
            lines += 1;

            write!(self.out, "{}{}", line, EOL)?;
            if self.process(&line)?.is_quit() {
                return Ok(Replay::Quit);
            }
        }

        let done = self
            .session
            .messenger()
            .render_with(&MessageRequest::new("file_done").with("file_name", file_name));
        tracing::info!("{} ({} lines)", done, lines);
        Ok(Replay::Exhausted { lines })
    }

    /// Reads lines until a quit keyword or end of input.
    pub fn interact<R: BufRead>(&mut self, mut input: R) -> Result<Exit> {
        let mut buf = Vec::new();
        while let Some(line) = read_lossy_line(&mut input, &mut buf)? {
            if self.process(&line)?.is_quit() {
                return Ok(Exit::Quit);
            }
        }

        tracing::info!("Input closed, leaving");
        Ok(Exit::EndOfInput)
    }

    /// Handles one line and writes its reply plus the prompt.
    pub fn process(&mut self, line: &str) -> Result<Reply> {
        let reply = self.session.handle_line(line);
        if reply.is_quit() {
            return Ok(reply);
        }

        if let Some(text) = reply.text() {
            write!(self.out, "{}{}", text, EOL)?;
        }
        write!(self.out, "{}", self.prompt)?;
        self.out.flush()?;
        Ok(reply)
    }
}
