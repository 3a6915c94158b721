//! The interactive console session.

use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::antenna::{AntennaError, Field, Session};
use crate::console::command::{Command, HELP};
use crate::console::transport::{LineTransport, StdioTransport};

/// Greeting written when the console starts.
pub const GREETING: &str =
    "Patch antenna calculator. Type 'help' for a list of commands.";

/// Console lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleState {
    /// Accepting commands.
    Running,
    /// Quit requested or input closed.
    ShuttingDown,
}

/// Interactive console wrapping a [`Session`].
pub struct Console {
    /// Current console state.
    state: ConsoleState,
    /// Design session state.
    session: Session,
    /// Destination used by `export` without an argument.
    export_path: PathBuf,
}

impl Console {
    /// Creates a console over an existing session.
    #[must_use]
    pub fn new(session: Session, export_path: impl Into<PathBuf>) -> Self {
        Self {
            state: ConsoleState::Running,
            session,
            export_path: export_path.into(),
        }
    }

    /// Returns the current console state.
    #[must_use]
    pub const fn state(&self) -> ConsoleState {
        self.state
    }

    /// Returns the underlying session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Handles one input line and returns the text to display.
    pub fn handle_line(&mut self, line: &str) -> String {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(message) => message,
        }
    }

    /// Executes a parsed command.
    fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Set { field, value } => {
                self.session.set_field(field, value);
                format!("{field} = {}", self.session.inputs().get(field))
            }
            Command::Show => self.show_inputs(),
            Command::Calculate => match self.session.calculate() {
                Ok(report) => report.to_string(),
                Err(e) => e.to_string(),
            },
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| self.export_path.clone());
                match self.session.export(&path) {
                    Ok(()) => format!("Exported to {}", path.display()),
                    Err(e @ AntennaError::FileWrite { .. }) => {
                        tracing::warn!(error = %e, "Export failed");
                        e.to_string()
                    }
                    Err(e) => e.to_string(),
                }
            }
            Command::Reset => {
                self.session.reset();
                "Fields cleared".to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => {
                self.state = ConsoleState::ShuttingDown;
                "Goodbye".to_string()
            }
        }
    }

    fn show_inputs(&self) -> String {
        let mut out = String::new();
        for field in Field::ALL {
            let _ = writeln!(out, "{field}: {}", self.session.inputs().get(field));
        }
        out
    }

    /// Runs the console on stdin/stdout with graceful shutdown handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut transport = StdioTransport::stdio();
        transport.write_text(GREETING).await?;
        self.run_with_shutdown(&mut transport).await
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(unix)]
    async fn run_with_shutdown(&mut self, transport: &mut StdioTransport) -> io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(io::Error::other)?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT, shutting down");
                    self.state = ConsoleState::ShuttingDown;
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, shutting down");
                    self.state = ConsoleState::ShuttingDown;
                    return Ok(());
                }

                line_result = transport.read_line() => {
                    if self.handle_transport_result(transport, line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(windows)]
    async fn run_with_shutdown(&mut self, transport: &mut StdioTransport) -> io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Received Ctrl+C, shutting down");
                    self.state = ConsoleState::ShuttingDown;
                    return Ok(());
                }

                line_result = transport.read_line() => {
                    if self.handle_transport_result(transport, line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Serves commands from any transport until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn serve<R, W>(&mut self, transport: &mut LineTransport<R, W>) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        loop {
            let line_result = transport.read_line().await;
            if self.handle_transport_result(transport, line_result).await? {
                return Ok(());
            }
        }
    }

    /// Handles the result from a transport read.
    ///
    /// Returns `true` if the console should shut down.
    async fn handle_transport_result<R, W>(
        &mut self,
        transport: &mut LineTransport<R, W>,
        line_result: io::Result<Option<String>>,
    ) -> io::Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Some(line) = line_result? else {
            self.state = ConsoleState::ShuttingDown;
            return Ok(true);
        };

        if line.trim().is_empty() {
            return Ok(false);
        }

        let output = self.handle_line(&line);
        transport.write_text(&output).await?;

        Ok(self.state == ConsoleState::ShuttingDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console {
        Console::new(Session::default(), "antenna_output.txt")
    }

    #[test]
    fn calculate_prints_report() {
        let mut console = console();
        let out = console.handle_line("calc");
        assert!(out.contains("Patch Width W: 37.260 mm"));
        assert!(out.contains("Estimated Bandwidth: 455.52 MHz"));
    }

    #[test]
    fn invalid_input_notice() {
        let mut console = console();
        console.handle_line("set er abc");
        let out = console.handle_line("calculate");
        assert!(out.starts_with("Invalid input"));
        assert!(console.session().report().is_none());
    }

    #[test]
    fn export_before_calculation_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut console = Console::new(Session::default(), &path);

        let out = console.handle_line("export");
        assert!(out.starts_with("Nothing to export"));
        assert!(!path.exists());
    }

    #[test]
    fn export_notice_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut console = Console::new(Session::default(), &path);

        console.handle_line("calc");
        let out = console.handle_line("export");
        assert_eq!(out, format!("Exported to {}", path.display()));
    }

    #[test]
    fn show_lists_every_field() {
        let mut console = console();
        console.handle_line("set f 5.8");
        let out = console.handle_line("show");
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("Resonant Frequency (GHz): 5.8"));
    }

    #[test]
    fn quit_stops_console() {
        let mut console = console();
        assert_eq!(console.state(), ConsoleState::Running);
        console.handle_line("quit");
        assert_eq!(console.state(), ConsoleState::ShuttingDown);
    }

    #[test]
    fn reset_clears_report() {
        let mut console = console();
        console.handle_line("calc");
        console.handle_line("reset");
        assert!(console.session().report().is_none());
        assert_eq!(console.session().inputs().get(Field::Frequency), "");
    }
}
