//! Auditor invocation backends.
//!
//! This module provides a unified interface for running the external
//! page-performance auditor:
//! - `SubprocessAuditor` spawns the real auditor executable and blocks
//!   until it exits
//! - `MockAuditor` replays scripted outputs for testing
//!
//! An auditor produces raw bytes and an exit status; interpreting them
//! (exit-code checks, JSON parsing) belongs to the run driver.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Raw result of one auditor invocation, before any parsing
#[derive(Debug, Clone)]
pub struct AuditorOutput {
    /// Child exit code, when the process exited normally
    pub status: Option<i32>,

    /// Captured standard output
    pub stdout: Vec<u8>,
}

impl AuditorOutput {
    /// Whether the invocation reported success (exit code 0)
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Trait for auditor backends
///
/// Implementations provide different ways of obtaining an audit:
/// - `SubprocessAuditor` for the real external tool
/// - `MockAuditor` for scripted test runs
pub trait Auditor {
    /// Run one audit against the target URL and return the raw output.
    ///
    /// A completed invocation with a non-zero exit status is still an `Ok`
    /// value; `Err` is reserved for not getting an invocation to finish at
    /// all (spawn failure, timeout expiry).
    fn invoke(&mut self, url: &str) -> io::Result<AuditorOutput>;

    /// Identifier used in progress lines (e.g. the executable name)
    fn describe(&self) -> String;
}

/// Auditor backend that spawns the external tool as a child process.
///
/// Invocations are synchronous and sequential by design: concurrent audits
/// on the same machine contend for CPU and network and skew the timing
/// metrics being measured.
#[derive(Debug, Clone)]
pub struct SubprocessAuditor {
    /// Path to the auditor executable
    program: PathBuf,

    /// Extra arguments appended after the URL and output flag
    extra_args: Vec<String>,

    /// Optional per-invocation deadline; expiry kills the child
    timeout: Option<Duration>,
}

impl SubprocessAuditor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
            timeout: None,
        }
    }

    pub fn args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(&self, url: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(url)
            .arg("--output=json")
            .args(&self.extra_args)
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        command
    }

    /// Run the child with a deadline, reading stdout from a side thread so
    /// a chatty child never blocks on a full pipe.
    fn invoke_with_deadline(
        &self,
        mut command: Command,
        limit: Duration,
    ) -> io::Result<AuditorOutput> {
        let mut child = command.spawn()?;
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("failed to capture auditor stdout"))?;

        let reader = thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stdout.read_to_end(&mut buf);
            buf
        });

        let deadline = Instant::now() + limit;
        loop {
            if let Some(status) = child.try_wait()? {
                let stdout = reader.join().unwrap_or_default();
                return Ok(AuditorOutput {
                    status: status.code(),
                    stdout,
                });
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                let _ = reader.join();
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("auditor did not finish within {:?}", limit),
                ));
            }
            thread::sleep(Duration::from_millis(50));
        }
    }
}

impl Auditor for SubprocessAuditor {
    fn invoke(&mut self, url: &str) -> io::Result<AuditorOutput> {
        let mut command = self.command(url);

        match self.timeout {
            None => {
                let output = command.output()?;
                Ok(AuditorOutput {
                    status: output.status.code(),
                    stdout: output.stdout,
                })
            }
            Some(limit) => self.invoke_with_deadline(command, limit),
        }
    }

    fn describe(&self) -> String {
        self.program.display().to_string()
    }
}

/// A scripted auditor for testing without the external tool.
///
/// Outputs are replayed in the order they were pushed, one per invocation.
#[derive(Debug, Clone, Default)]
pub struct MockAuditor {
    outputs: Vec<AuditorOutput>,
    next: usize,
}

impl MockAuditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful invocation emitting the given document
    pub fn push_report(mut self, json: &str) -> Self {
        self.outputs.push(AuditorOutput {
            status: Some(0),
            stdout: json.as_bytes().to_vec(),
        });
        self
    }

    /// Queue an invocation that exits with the given non-zero status
    pub fn push_failure(mut self, status: i32) -> Self {
        self.outputs.push(AuditorOutput {
            status: Some(status),
            stdout: Vec::new(),
        });
        self
    }

    /// Queue a successful exit whose stdout is not a valid report
    pub fn push_garbage(mut self, stdout: &str) -> Self {
        self.outputs.push(AuditorOutput {
            status: Some(0),
            stdout: stdout.as_bytes().to_vec(),
        });
        self
    }
}

impl Auditor for MockAuditor {
    fn invoke(&mut self, _url: &str) -> io::Result<AuditorOutput> {
        let output = self
            .outputs
            .get(self.next)
            .cloned()
            .ok_or_else(|| io::Error::other("mock auditor has no more scripted outputs"))?;
        self.next += 1;
        Ok(output)
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
