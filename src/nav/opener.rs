// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

const OPENER_ENV: &str = "NAIAD_OPENER";

/// Performs the navigation side effect of activating a menu item.
pub trait UrlOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError>;
}

impl<O: UrlOpener + ?Sized> UrlOpener for Box<O> {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        (**self).open(url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("nothing to open: empty url")]
    EmptyUrl,
    #[error("refusing to open url starting with '-': {0}")]
    LooksLikeFlag(String),
    #[error("failed to run opener `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Opens URLs with the desktop's handler in a detached process.
///
/// The command comes from `NAIAD_OPENER` when set, otherwise the platform default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl SystemOpener {
    pub fn from_env() -> Self {
        env::var(OPENER_ENV)
            .ok()
            .and_then(|value| Self::parse_command(&value))
            .unwrap_or_else(Self::platform_default)
    }

    /// Splits a whitespace-separated command line; the URL is appended as the last argument.
    pub fn parse_command(value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace().map(str::to_owned);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::parse_command("open")
        } else if cfg!(windows) {
            Self::parse_command("cmd /C start \"\"")
        } else {
            Self::parse_command("xdg-open")
        }
        .unwrap_or_else(|| Self {
            program: "xdg-open".to_owned(),
            args: Vec::new(),
        })
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl SystemOpener {
    /// Starts the opener for `url` and hands the child to a thread that waits for it, so no
    /// zombie is left behind. The handle yields the opener's exit status.
    pub fn launch(&self, url: &str) -> Result<JoinHandle<io::Result<ExitStatus>>, OpenError> {
        let url = check_url(url)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| OpenError::Spawn {
                command: self.command_line(),
                source,
            })?;

        let command = self.command_line();
        Ok(thread::spawn(move || {
            let status = child.wait();
            match &status {
                Ok(status) if !status.success() => {
                    tracing::warn!(%command, %status, "opener exited unsuccessfully");
                }
                Err(err) => tracing::warn!(%command, error = %err, "failed to wait for opener"),
                Ok(_) => {}
            }
            status
        }))
    }
}

impl UrlOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        self.launch(url).map(|_reaper| ())
    }
}

fn check_url(url: &str) -> Result<&str, OpenError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(OpenError::EmptyUrl);
    }
    if url.starts_with('-') {
        return Err(OpenError::LooksLikeFlag(url.to_owned()));
    }
    Ok(url)
}

/// Keeps every URL it was asked to open; for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Vec<String>,
}

impl RecordingOpener {
    pub fn opened(&self) -> &[String] {
        &self.opened
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        self.opened.push(check_url(url)?.to_owned());
        Ok(())
    }
}
