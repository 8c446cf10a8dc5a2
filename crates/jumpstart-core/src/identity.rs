//! Author identity lookup used for default answers
//!
//! The default provider asks git for the global `user.name` / `user.email`.
//! Any failure (git missing, keys unset, non-UTF-8 output) degrades to `None`.

use std::process::Command;

/// Display name and email of the person running the generator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Source of the author identity
pub trait IdentityProvider {
    fn identity(&self) -> Identity;
}

/// Reads the identity from `git config --global`
#[derive(Debug, Clone, Copy, Default)]
pub struct GitIdentity;

impl GitIdentity {
    fn config_value(key: &str) -> Option<String> {
        Command::new("git")
            .args(["config", "--global", key])
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
            .filter(|value| !value.is_empty())
    }
}

impl IdentityProvider for GitIdentity {
    fn identity(&self) -> Identity {
        let identity = Identity {
            name: Self::config_value("user.name"),
            email: Self::config_value("user.email"),
        };
        tracing::debug!(?identity, "read git identity");
        identity
    }
}

/// Fixed identity, for tests and non-interactive runs
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Identity);

impl StaticIdentity {
    pub fn new(name: Option<&str>, email: Option<&str>) -> Self {
        Self(Identity {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        })
    }
}

impl IdentityProvider for StaticIdentity {
    fn identity(&self) -> Identity {
        self.0.clone()
    }
}
