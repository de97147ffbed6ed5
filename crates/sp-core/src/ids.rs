//! Strongly typed identifier wrappers.
//!
//! All IDs wrap a `uuid::Uuid` (random v4) so they are collision-resistant
//! within a roadmap and safe to use as persistence keys.  The inner value is
//! `pub` for direct access in storage backends, but callers should prefer
//! the typed wrapper everywhere else so a `TopicId` can never be handed to
//! an API expecting an `EntryId`.

use std::fmt;

use uuid::Uuid;

/// Generate a typed ID wrapper around a `Uuid`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub Uuid);

        impl $name {
            /// Sentinel meaning "no valid ID" — the all-zero nil UUID.
            pub const NIL: $name = $name(Uuid::nil());

            /// Mint a fresh random (v4) identifier.
            pub fn generate() -> $name {
                $name(Uuid::new_v4())
            }

            /// Parse from the canonical hyphenated string form.
            pub fn parse(s: &str) -> Result<$name, uuid::Error> {
                Uuid::parse_str(s).map($name)
            }
        }

        impl Default for $name {
            /// Returns the `NIL` sentinel so uninitialized IDs are visibly invalid.
            #[inline]
            fn default() -> Self {
                Self::NIL
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(id: Uuid) -> $name {
                $name(id)
            }
        }
    };
}

typed_id! {
    /// Identifies one generated roadmap — the key the storage collaborator
    /// persists the whole aggregate under.
    pub struct RoadmapId;
}

typed_id! {
    /// Identifies a syllabus (one per roadmap).
    pub struct SyllabusId;
}

typed_id! {
    /// Identifies a syllabus module.
    pub struct ModuleId;
}

typed_id! {
    /// Identifies a topic within a module.
    pub struct TopicId;
}

typed_id! {
    /// Identifies one scheduled study-plan entry.
    pub struct EntryId;
}

typed_id! {
    /// Identifies one progress-log record.
    pub struct ProgressId;
}
