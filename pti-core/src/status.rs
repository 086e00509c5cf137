use std::fmt;

/// Text shown in the status line of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Online,
    Achievement,
    Copied,
    ClipboardBlocked,
}

impl Status {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Achievement => "Achievement Unlocked: Momentum",
            Self::Copied => "Copied to clipboard",
            Self::ClipboardBlocked => "Clipboard blocked",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
