//! Shell dialects for the eval stream
//!
//! Produces the `cd` line a resolved jump point turns into and the wrapper
//! function printed by `--source`.

use std::path::Path;

use crate::error::{JumpError, Result};

/// Shell that evaluates jp's stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ShellKind {
    /// sh, bash, zsh and other POSIX-like shells
    #[default]
    Posix,
    /// fish
    Fish,
}

impl ShellKind {
    /// Quote `text` as a single shell word
    #[must_use]
    pub fn quote(self, text: &str) -> String {
        // Only ASCII is inserted, so valid UTF-8 stays valid
        String::from_utf8_lossy(&self.quote_bytes(text.as_bytes())).into_owned()
    }

    /// Quote raw bytes as a single shell word, keeping every byte as is
    #[must_use]
    pub fn quote_bytes(self, text: &[u8]) -> Vec<u8> {
        let mut quoted = Vec::with_capacity(text.len() + 2);
        quoted.push(b'\'');
        for &byte in text {
            match (self, byte) {
                // '\'' closes the quote, adds an escaped quote and reopens
                (Self::Posix, b'\'') => quoted.extend_from_slice(br"'\''"),
                (Self::Fish, b'\'' | b'\\') => quoted.extend_from_slice(&[b'\\', byte]),
                _ => quoted.push(byte),
            }
        }
        quoted.push(b'\'');
        quoted
    }

    /// Command that changes the evaluating shell into `target`
    ///
    /// Built from the raw path bytes, so targets that are not UTF-8 survive.
    #[must_use]
    pub fn cd_command(self, target: &Path) -> Vec<u8> {
        let mut line = b"cd ".to_vec();
        line.extend(self.quote_bytes(target.as_os_str().as_encoded_bytes()));
        line
    }

    /// Function definition that evals jp's stdout in the calling shell
    ///
    /// # Errors
    /// Returns a usage error if `name` is not a valid function name
    pub fn wrapper_function(self, name: &str, exe: &str) -> Result<String> {
        if !is_function_name(name) {
            return Err(JumpError::Usage(format!("invalid function name: {name:?}")));
        }

        let exe = self.quote(exe);
        Ok(match self {
            Self::Posix => format!("{name}() {{ eval \"$(command {exe} \"$@\")\"; }}"),
            Self::Fish => {
                format!("function {name}; eval (command {exe} --shell fish $argv); end")
            }
        })
    }
}

fn is_function_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}
