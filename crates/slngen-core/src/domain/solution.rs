//! Solution-file stanzas.
//!
//! The solution file itself is never parsed; stanzas are appended as text.

use std::fmt;

use crate::domain::identity::ProjectGuid;

/// Project-type identifier for SDK-style C# projects.
pub const SDK_PROJECT_TYPE_GUID: &str = "9A19103F-16F7-4668-BE54-9A1E7A4F7556";

/// Line terminator used for appended stanzas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Match whatever the existing solution text already uses.
    pub fn detect(content: &str) -> Self {
        if content.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// The two-line block registering one project in a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionStanza {
    name: String,
    file_name: String,
    guid: ProjectGuid,
}

impl SolutionStanza {
    pub fn new(name: impl Into<String>, file_name: impl Into<String>, guid: ProjectGuid) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            guid,
        }
    }

    pub fn render(&self, line_ending: LineEnding) -> String {
        let nl = line_ending.as_str();
        format!("{self}{nl}EndProject{nl}")
    }
}

/// Opening line only.
impl fmt::Display for SolutionStanza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Project(\"{{{SDK_PROJECT_TYPE_GUID}}}\") = \"{}\", \"{}\", \"{}\"",
            self.name,
            self.file_name,
            self.guid.braced()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_lines() {
        let guid = ProjectGuid::derive("Scripts~");
        let stanza = SolutionStanza::new("Scripts~", "Scripts~.csproj", guid);

        assert_eq!(
            stanza.render(LineEnding::Lf),
            format!(
                "Project(\"{{9A19103F-16F7-4668-BE54-9A1E7A4F7556}}\") = \"Scripts~\", \"Scripts~.csproj\", \"{}\"\nEndProject\n",
                guid.braced()
            )
        );
    }

    #[test]
    fn crlf_is_detected() {
        assert_eq!(LineEnding::detect("Microsoft Visual Studio Solution File\r\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("Microsoft Visual Studio Solution File\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    }

    #[test]
    fn crlf_stanza() {
        let stanza = SolutionStanza::new("A~", "A~.csproj", ProjectGuid::derive("A~"));
        let text = stanza.render(LineEnding::CrLf);
        assert!(text.ends_with("\"\r\nEndProject\r\n"));
        assert_eq!(text.matches("\r\n").count(), 2);
    }
}
