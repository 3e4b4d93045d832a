//! `define_port_error!`: closed error unions for driven ports.
//!
//! Each variant carries at most one field. Every variant gets a snake-case
//! constructor; a field constructor takes `impl Into<FieldType>`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Build [`Self::" $variant "`]."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $field:ident : $ty:ty }) => {
        ::paste::paste! {
            #[doc = "Build [`Self::" $variant "`] from its `" $field "`."]
            pub fn [<$variant:snake>]($field: impl Into<$ty>) -> Self {
                Self::$variant { $field: $field.into() }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $field:ident : $ty:ty } )? => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $field : $ty } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $field : $ty } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;
