use std::env;
use std::fmt;

use owo_colors::OwoColorize;

/// Color mode for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Color when stderr supports it
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve color mode from CLI flag and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. CLI flag (`--color=always|auto|never`)
    /// 2. `NO_COLOR` environment variable
    /// 3. `TERM=dumb` environment variable
    /// 4. Default (Auto)
    #[must_use]
    pub fn resolve(cli_mode: Option<Self>) -> Self {
        if let Some(mode) = cli_mode {
            return mode;
        }

        if env::var_os("NO_COLOR").is_some() {
            return Self::Never;
        }

        if env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::Never;
        }

        Self::Auto
    }

    /// Check if diagnostic output should be colored
    ///
    /// Only stderr is ever colored. stdout carries text the shell evaluates.
    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Auto => supports_color::on_cached(supports_color::Stream::Stderr).is_some(),
            Self::Never => false,
        }
    }

    /// Colorize a jump point name in cyan
    #[must_use]
    pub fn colorize_name(self, text: &str) -> String {
        if self.should_colorize() {
            format!("\x1b[36m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

/// Message style for diagnostic lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// Success message (green ✓)
    Success,
    /// Info message (cyan ℹ)
    Info,
    /// Warning message (yellow ⚠)
    Warn,
}

impl MessageStyle {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "ℹ",
            Self::Warn => "⚠",
        }
    }

    #[allow(clippy::missing_const_for_fn)]
    pub fn format<D: fmt::Display>(self, mode: ColorMode, message: D) -> FormattedMessage<D> {
        FormattedMessage {
            style: self,
            mode,
            message,
        }
    }
}

/// A message prefixed with its style symbol
pub struct FormattedMessage<D> {
    style: MessageStyle,
    mode: ColorMode,
    message: D,
}

impl<D: fmt::Display> fmt::Display for FormattedMessage<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.style.symbol();
        if !self.mode.should_colorize() {
            return write!(f, "{symbol} {}", self.message);
        }

        match self.style {
            MessageStyle::Success => write!(f, "{} {}", symbol.bright_green().bold(), self.message),
            MessageStyle::Info => write!(f, "{} {}", symbol.bright_cyan(), self.message),
            MessageStyle::Warn => write!(f, "{} {}", symbol.bright_yellow(), self.message),
        }
    }
}

/// Format a success message (green ✓)
pub fn success<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Success.format(mode, message)
}

/// Format an info message (cyan ℹ)
pub fn info<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Info.format(mode, message)
}

/// Format a warning message (yellow ⚠)
pub fn warn<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Warn.format(mode, message)
}
