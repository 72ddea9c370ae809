//! Macro for implementing string conversions on pipeline status enums
//!
//! Statuses cross the UI boundary as snake_case strings (`"pending_offer"`,
//! `"pending_approval"`). The macro keeps the string table in one place and
//! derives `as_str`, `ALL`, `Display` and a case-insensitive `FromStr` from
//! it.
//!
//! # Example
//!
//! ```rust
//! use proptyos_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum LeadStage {
//!     New,
//!     Contacted,
//!     SiteVisit,
//! }
//!
//! impl_domain_status_conversions!(LeadStage {
//!     New => "new",
//!     Contacted => "contacted",
//!     SiteVisit => "site_visit",
//! });
//!
//! assert_eq!(LeadStage::SiteVisit.to_string(), "site_visit");
//! assert_eq!("SITE_VISIT".parse::<LeadStage>(), Ok(LeadStage::SiteVisit));
//! ```

/// Implements `as_str`, `ALL`, Display and FromStr for status enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase wire
///   representation
///
/// Parsing trims surrounding whitespace and ignores ASCII case. The error
/// value names the enum and echoes the rejected input.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation of the variant.
            #[must_use]
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
                match s.trim().to_ascii_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
