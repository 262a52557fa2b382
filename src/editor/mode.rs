use std::fmt;

/// Editing mode shown on the status line.
///
/// The mode is display-only: typing always inserts, whichever mode is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Insert,
    Overtype,
}

impl EditorMode {
    /// Status-line label (`INS` / `OVR`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Insert => "INS",
            Self::Overtype => "OVR",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Insert => Self::Overtype,
            Self::Overtype => Self::Insert,
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
