//! Planned actions derived from the operator's answers
//!
//! A `Directive` is an atomic action that has been decided on but not yet
//! executed: either a file-system write or an external command. Resolution
//! produces the full ordered list before anything touches the disk, which
//! keeps the decision logic testable without running a single process.

/// How a [`FileDirective`] is applied to the project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMode {
    /// Write `content`, replacing any existing file.
    Overwrite,

    /// Append `content` to the file, creating it if absent.
    Append,

    /// Insert `content` on a new line after the first line containing
    /// `anchor`. Missing anchors are an error at apply time.
    InsertAfter { anchor: String },

    /// Replace every line matching `pattern` (a regex, applied line-wise)
    /// with `content`.
    Substitute { pattern: String },

    /// Delete the file or directory tree at `path`; absence is tolerated.
    Remove,
}

/// One planned file-system action, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDirective {
    pub path: String,
    pub content: String,
    pub mode: FileMode,
}

/// One planned external command, run with the project root as cwd.
///
/// Only the exit status matters; output goes straight to the operator's
/// terminal. A non-zero exit aborts the run unless `may_fail` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDirective {
    pub argv: Vec<String>,
    pub may_fail: bool,
}

impl CommandDirective {
    /// The argv joined for display and error messages.
    pub fn display(&self) -> String {
        self.argv.join(" ")
    }
}

/// A single planned action of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    File(FileDirective),
    Command(CommandDirective),
}

impl Directive {
    pub fn overwrite(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::File(FileDirective {
            path: path.into(),
            content: content.into(),
            mode: FileMode::Overwrite,
        })
    }

    pub fn append(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::File(FileDirective {
            path: path.into(),
            content: content.into(),
            mode: FileMode::Append,
        })
    }

    pub fn insert_after(
        path: impl Into<String>,
        anchor: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::File(FileDirective {
            path: path.into(),
            content: content.into(),
            mode: FileMode::InsertAfter {
                anchor: anchor.into(),
            },
        })
    }

    pub fn substitute(
        path: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self::File(FileDirective {
            path: path.into(),
            content: replacement.into(),
            mode: FileMode::Substitute {
                pattern: pattern.into(),
            },
        })
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self::File(FileDirective {
            path: path.into(),
            content: String::new(),
            mode: FileMode::Remove,
        })
    }

    pub fn command<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Command(CommandDirective {
            argv: argv.into_iter().map(Into::into).collect(),
            may_fail: false,
        })
    }

    /// A command whose non-zero exit is tolerated (logged, not fatal).
    pub fn tolerant_command<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Command(CommandDirective {
            argv: argv.into_iter().map(Into::into).collect(),
            may_fail: true,
        })
    }

    /// The file directive, if this is a file action.
    pub fn as_file(&self) -> Option<&FileDirective> {
        match self {
            Self::File(f) => Some(f),
            Self::Command(_) => None,
        }
    }

    /// The command directive, if this is a command action.
    pub fn as_command(&self) -> Option<&CommandDirective> {
        match self {
            Self::File(_) => None,
            Self::Command(c) => Some(c),
        }
    }
}
