//! Record Tokens
//!
//! Every enum that appears in a menu record carries an upper-case record
//! token (`FAMILY_STYLE`) and a display label (`Family Style`). Parsing is
//! strict and case-sensitive; fallback defaults belong to the ingestion layer.

/// A token that names no variant of the expected enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} token: '{token}'")]
pub struct TokenError {
    /// Which enum was being decoded
    pub kind: &'static str,
    /// The offending text, verbatim
    pub token: String,
}

/// Declares a token enum with `ALL`, `as_token`, `label`, `FromStr` and `Display`
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Upper-case token used in menu records
            #[inline]
            #[must_use]
            pub const fn as_token(self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }

            /// Label used when rendering a dish
            #[inline]
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::token::TokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok($name::$variant), )+
                    other => Err($crate::token::TokenError {
                        kind: $kind,
                        token: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_token())
            }
        }
    };
}

pub(crate) use token_enum;

token_enum! {
    /// Cuisine a dish belongs to
    Cuisine as "cuisine" {
        Italian => "ITALIAN", "Italian",
        Mexican => "MEXICAN", "Mexican",
        Chinese => "CHINESE", "Chinese",
        Indian => "INDIAN", "Indian",
        American => "AMERICAN", "American",
        French => "FRENCH", "French",
        Other => "OTHER", "Other",
    }
}

impl Default for Cuisine {
    fn default() -> Self {
        Self::Other
    }
}

token_enum! {
    /// Course discriminator found in the first field of a record
    DishKind as "dish type" {
        Appetizer => "APPETIZER", "Appetizer",
        MainCourse => "MAINCOURSE", "Main Course",
        Dessert => "DESSERT", "Dessert",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuisine_parse_is_case_sensitive() {
        assert_eq!("ITALIAN".parse::<Cuisine>(), Ok(Cuisine::Italian));
        assert!("italian".parse::<Cuisine>().is_err());
        assert!("VEGAN".parse::<Cuisine>().is_err());
    }

    #[test]
    fn token_error_display() {
        let err = "MAIN".parse::<DishKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown dish type token: 'MAIN'");
    }

    #[test]
    fn every_token_parses_back() {
        for cuisine in Cuisine::ALL {
            assert_eq!(cuisine.as_token().parse::<Cuisine>(), Ok(*cuisine));
        }
        assert_eq!(Cuisine::ALL.len(), 7);
    }
}
