//! Stable project identifiers.
//!
//! A [`ProjectGuid`] is derived from the project's assembly name alone, so
//! regenerating the solution for an unchanged workspace list never produces a
//! "new" project in the eyes of the IDE.
//!
//! Derivation: BLAKE3 of the seed, first eight bytes as a little-endian `u64`,
//! used to seed a ChaCha20 stream from which sixteen bytes are drawn. Both
//! primitives are fully specified, so the output is identical on every
//! platform, process and toolchain.

use std::fmt;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use uuid::{Builder, Uuid};

/// A deterministic 128-bit project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectGuid(Uuid);

impl ProjectGuid {
    /// Derive the identifier for `seed`. Total: every string, including the
    /// empty one, maps to a valid identifier.
    pub fn derive(seed: &str) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed_hash(seed));
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);

        Self(Builder::from_random_bytes(bytes).into_uuid())
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`, the form solution files use.
    pub fn braced(&self) -> String {
        format!("{{{}}}", self)
    }
}

impl fmt::Display for ProjectGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0.hyphenated())
    }
}

impl From<ProjectGuid> for Uuid {
    fn from(guid: ProjectGuid) -> Self {
        guid.0
    }
}

fn seed_hash(seed: &str) -> u64 {
    let digest = blake3::hash(seed.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_seed_same_guid() {
        assert_eq!(
            ProjectGuid::derive("Scripts~"),
            ProjectGuid::derive("Scripts~")
        );
        assert_eq!(
            ProjectGuid::derive("Shaders~.Common").to_string(),
            ProjectGuid::derive("Shaders~.Common").to_string()
        );
    }

    // Identifiers end up in users' solution files; these must never change.
    #[test]
    fn identifiers_are_pinned() {
        assert_eq!(
            ProjectGuid::derive("Scripts~").to_string(),
            "397EB544-B391-4E21-B98D-26DD2325707F"
        );
        assert_eq!(
            ProjectGuid::derive("").to_string(),
            "73C4DF75-9C69-41D4-AFC2-3A5900AE515E"
        );
        assert_eq!(
            ProjectGuid::derive("Shaders.Common~").braced(),
            "{DD9DC98B-7A23-49E0-8EEC-A201D9276487}"
        );
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(ProjectGuid::derive("A~"), ProjectGuid::derive("B~"));
        // Case matters: assembly names are case-sensitive on disk.
        assert_ne!(ProjectGuid::derive("a~"), ProjectGuid::derive("A~"));
    }

    #[test]
    fn empty_seed_is_valid() {
        let guid = ProjectGuid::derive("");
        assert_eq!(guid, ProjectGuid::derive(""));
        assert_eq!(guid.to_string().len(), 36);
    }

    #[test]
    fn no_collisions_over_thousand_names() {
        let guids: HashSet<_> = (0..1000)
            .map(|i| ProjectGuid::derive(&format!("Workspace{i}~")))
            .collect();
        assert_eq!(guids.len(), 1000);
    }

    #[test]
    fn textual_form_is_dashed_upper_hex() {
        let text = ProjectGuid::derive("Scripts~").to_string();
        let groups: Vec<_> = text.split('-').map(str::len).collect();

        assert_eq!(groups, [8, 4, 4, 4, 12]);
        assert!(
            text.chars()
                .all(|c| c == '-' || c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn braced_wraps_display() {
        let guid = ProjectGuid::derive("Scripts~");
        assert_eq!(guid.braced(), format!("{{{guid}}}"));
    }

    #[test]
    fn carries_random_version_bits() {
        let uuid = ProjectGuid::derive("Scripts~").as_uuid();
        assert_eq!(uuid.get_version_num(), 4);
    }
}
