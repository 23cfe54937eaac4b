//! Helper macro for port error enums.
//!
//! Port failures always carry an adapter-supplied detail string. Each variant
//! is declared with a fixed summary; the generated enum stores the detail in a
//! `message` field and renders as `"<summary>: <message>"`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $summary:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{}: {message}", $summary)]
                $variant {
                    /// Detail supplied by the adapter.
                    message: String,
                },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    #[doc = "Construct the `" $variant "` variant."]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                )*
            }

            /// Adapter detail without the variant summary.
            pub fn message(&self) -> &str {
                match self {
                    $(Self::$variant { message } => message,)*
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Offline => "source offline",
            PageRejected => "page rejected",
        }
    }

    #[test]
    fn renders_summary_then_detail() {
        let err = SamplePortError::offline("no route to host");
        assert_eq!(err.to_string(), "source offline: no route to host");
    }

    #[test]
    fn constructors_use_snake_case_names() {
        let err = SamplePortError::page_rejected(format!("page {}", 3));
        assert_eq!(
            err,
            SamplePortError::PageRejected {
                message: "page 3".to_owned()
            }
        );
    }

    #[test]
    fn message_omits_the_summary() {
        let err = SamplePortError::page_rejected("busy");
        assert_eq!(err.message(), "busy");
    }
}
