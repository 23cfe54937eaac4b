//! Helper macro for small enums persisted as lowercase keywords.

/// Defines a `Copy` enum with a stable string form.
///
/// The generated type derives serde with the given keywords, implements
/// `Display` and `FromStr`, and exposes `as_str`. Parsing failures return
/// [`crate::domain::ParseKeywordError`].
macro_rules! keyword_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $keyword:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $keyword)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the persisted keyword.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::ParseKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($keyword => Ok(Self::$variant),)+
                    _ => Err($crate::domain::ParseKeywordError::new(
                        stringify!($name),
                        s,
                    )),
                }
            }
        }
    };
}

pub(crate) use keyword_enum;

/// Error returned when parsing an unknown keyword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {input}")]
pub struct ParseKeywordError {
    /// Name of the type being parsed.
    pub kind: &'static str,
    /// The unrecognised input value.
    pub input: String,
}

impl ParseKeywordError {
    pub(crate) fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }
}
