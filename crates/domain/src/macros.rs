//! Macro for implementing string conversions on domain enums
//!
//! Roles, tiers and statuses travel as lowercase strings over HTTP and in
//! SQLite columns. This macro generates `as_str`, `Display` and a
//! case-insensitive `FromStr` from a single variant table.
//!
//! # Example
//!
//! ```rust
//! use familylegacy_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Plan {
//!     Basic,
//!     Premium,
//! }
//!
//! impl_domain_status_conversions!(Plan {
//!     Basic => "basic",
//!     Premium => "premium",
//! });
//!
//! assert_eq!("PREMIUM".parse::<Plan>().unwrap(), Plan::Premium);
//! assert_eq!(Plan::Basic.as_str(), "basic");
//! ```

/// Implements `as_str`, `Display` and `FromStr` for string-backed enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
///
/// Parsing is case-insensitive and surrounding whitespace is ignored. The
/// error is a human-readable `String`; callers turn it into a field-level
/// validation error.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical lowercase representation.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
