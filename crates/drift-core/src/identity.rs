//! Strongly-typed definition identities.
//!
//! An identity is the unique string key derived from a definition's filename
//! (stem without extension). Migration identities sort lexicographically,
//! which coincides with chronological order because of the timestamp prefix.
//! Both newtypes share the non-empty invariant and the same trait surface,
//! generated from a single macro.

macro_rules! define_identity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $Name(String);

        impl $Name {
            /// Create a new identity, panicking if the string is empty.
            ///
            /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
            pub fn new(id: impl Into<String>) -> Self {
                let s = id.into();
                assert!(!s.is_empty(), concat!(stringify!($Name), " must not be empty"));
                Self(s)
            }

            /// Try to create a new identity, returning `None` if the string is empty.
            pub fn try_new(id: impl Into<String>) -> Option<Self> {
                let s = id.into();
                if s.is_empty() { None } else { Some(Self(s)) }
            }

            /// Return the identity as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str { &self.0 }
        }

        impl std::ops::Deref for $Name {
            type Target = str;
            fn deref(&self) -> &str { &self.0 }
        }

        impl std::borrow::Borrow<str> for $Name {
            fn borrow(&self) -> &str { &self.0 }
        }

        impl PartialEq<str> for $Name {
            fn eq(&self, other: &str) -> bool { self.0 == other }
        }

        impl PartialEq<&str> for $Name {
            fn eq(&self, other: &&str) -> bool { self.0 == *other }
        }
    };
}

define_identity! {
    /// Identity of a migration definition, e.g.
    /// `2025_07_21_114952_createairportstable`.
    pub struct MigrationId;
}

define_identity! {
    /// Identity of a seeder definition, conventionally suffixed `Seeder`,
    /// e.g. `AirportSeeder`.
    pub struct SeederId;
}
