//! Helper macro for declaring port error enums.
//!
//! Each variant carries named fields and a display template. The macro
//! derives `thiserror::Error` and adds a snake_case constructor per variant
//! whose parameters accept `impl Into<FieldType>`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Construct the `" $variant "` variant."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unreachable { message: String } => "unreachable: {message}",
            Rejected { message: String, attempts: u32 } => "rejected after {attempts}: {message}",
        }
    }

    #[test]
    fn constructors_convert_string_fields() {
        let err = SamplePortError::unreachable("db down");
        assert_eq!(err.to_string(), "unreachable: db down");
    }

    #[test]
    fn constructors_keep_other_field_types() {
        let err = SamplePortError::rejected("timeout", 3_u32);
        assert_eq!(err.to_string(), "rejected after 3: timeout");
        assert_eq!(
            err,
            SamplePortError::Rejected {
                message: "timeout".to_owned(),
                attempts: 3
            }
        );
    }
}
