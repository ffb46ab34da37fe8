//! Generator for port error enums whose variants all carry a message.
//!
//! Each variant gets a snake-case constructor taking its extra fields
//! followed by the message, with `impl Into` conversions for every argument.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $display:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant { $($($field: $ty,)*)? message: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>](
                        $($($field: impl Into<$ty>,)*)?
                        message: impl Into<String>,
                    ) -> Self {
                        Self::$variant {
                            $($($field: $field.into(),)*)?
                            message: message.into(),
                        }
                    }
                }
            )*

            /// Detail text attached when the error was raised.
            pub fn message(&self) -> &str {
                match self {
                    $(Self::$variant { message, .. } => message,)*
                }
            }
        }
    };
}

pub(crate) use define_port_error;
