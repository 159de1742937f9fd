//! Helper macro for declaring port error enums.
//!
//! Each variant carries named fields and gets a snake_case constructor whose
//! parameters accept anything convertible into the field type, so adapters
//! can write `UserPersistenceError::query(err.to_string())` or pass a `&str`.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

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
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoragePortError {
            Unreachable { host: String } => "storage unreachable: {host}",
            Rejected { status: u16 } => "storage rejected request with {status}",
            Timeout { operation: String, millis: u64 } => "{operation} timed out after {millis}ms",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StoragePortError::unreachable("db.internal");
        assert_eq!(err.to_string(), "storage unreachable: db.internal");
    }

    #[test]
    fn constructors_preserve_numeric_fields() {
        let err = StoragePortError::rejected(503_u16);
        assert_eq!(err, StoragePortError::Rejected { status: 503 });
    }

    #[test]
    fn constructors_support_multiple_fields() {
        let err = StoragePortError::timeout("insert", 250_u64);
        assert_eq!(err.to_string(), "insert timed out after 250ms");
    }
}
