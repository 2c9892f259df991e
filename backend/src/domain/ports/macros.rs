//! `define_port_error!`: declares a port error enum with `thiserror`
//! messages and one snake_case constructor per variant.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
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
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor generation for unit, string and mixed variants.
    define_port_error! {
        pub enum StoreProbeError {
            Offline => "store offline",
            Rejected { message: String } => "store rejected write: {message}",
            Stale { message: String, row: i64 } => "row {row} is stale: {message}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(StoreProbeError::offline().to_string(), "store offline");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = StoreProbeError::rejected("duplicate key");
        assert_eq!(err.to_string(), "store rejected write: duplicate key");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = StoreProbeError::stale("reloaded", 12_i64);
        assert_eq!(err, StoreProbeError::Stale { message: "reloaded".into(), row: 12 });
        assert_eq!(err.to_string(), "row 12 is stale: reloaded");
    }
}
