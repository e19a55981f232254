//! String-backed identifiers.
//!
//! Dashboard records are keyed by opaque strings (seed data uses UUIDs, tests
//! use short labels like `"c1"`). Each entity wraps its key in a newtype so a
//! customer id can never be passed where an invoice id is expected.

/// Implement the common identifier surface for a `struct Name(String)` newtype.
///
/// The newtype itself is declared by the owning crate (so it can carry its own
/// serde derives); this macro adds constructors, `Display`, conversions and a
/// validating `FromStr` that rejects blank identifiers.
#[macro_export]
macro_rules! impl_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err($crate::DomainError::invalid_id(format!(
                        "{}: must not be empty",
                        $name
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}
