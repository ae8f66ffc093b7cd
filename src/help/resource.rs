use std::fmt;
use std::process::Command;

use url::Url;

use super::{documentation_url, Category};
use crate::error::Result;

/// Help entry for one indicator.
#[derive(Clone, PartialEq, Eq)]
pub struct Resource {
    key: String,
    name: String,
    category: Category,
    path: String,
    url: String,
}

impl Resource {
    pub fn new(key: &str, name: &str, category: Category, path: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            category,
            path: path.to_string(),
            url: documentation_url(path),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The documentation URL, parsed.
    pub fn uri(&self) -> Result<Url> {
        Ok(Url::parse(&self.url)?)
    }

    /// Open the documentation page in the system browser.
    ///
    /// Blocks until the launcher exits. Launch failures, non-zero exits and
    /// unsupported platforms are logged, never raised.
    pub fn open(&self) -> &Self {
        match browser_command(&self.url) {
            Some(mut command) => match command.status() {
                Ok(status) if !status.success() => {
                    tracing::warn!(url = %self.url, %status, "browser launcher failed");
                }
                Ok(_) => tracing::debug!(url = %self.url, "opened documentation"),
                Err(err) => {
                    tracing::warn!(url = %self.url, error = %err, "failed to launch browser");
                }
            },
            None => {
                tracing::warn!(
                    os = std::env::consts::OS,
                    url = %self.url,
                    "cannot open a browser on this platform"
                );
            }
        }
        self
    }

    /// Download the documentation page body.
    pub fn fetch(&self) -> Result<String> {
        tracing::debug!(url = %self.url, "fetching documentation");
        let body = reqwest::blocking::get(self.uri()?)?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}

fn browser_command(url: &str) -> Option<Command> {
    match std::env::consts::OS {
        "macos" => {
            let mut command = Command::new("open");
            command.arg(url);
            Some(command)
        }
        "linux" | "freebsd" | "openbsd" | "netbsd" => {
            let mut command = Command::new("xdg-open");
            command.arg(url);
            Some(command)
        }
        "windows" => {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "", url]);
            Some(command)
        }
        _ => None,
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Indicator: {} ({})", self.key.to_uppercase(), self.name)?;
        writeln!(f, "Category:  {}", self.category.label())?;
        write!(f, "Website:   {}", self.url)
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#<Resource {} ({}) {}>",
            self.key.to_uppercase(),
            self.name,
            self.url
        )
    }
}
