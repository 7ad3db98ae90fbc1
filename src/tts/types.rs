use std::fmt::Display;

use crate::value::Value;

macro_rules! decl_clamped_int {
    {$(#[$meta:meta])* $name:ident($base:ty) in $min:literal..$max:literal} => {
        $(#[$meta])*
        #[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
        pub struct $name($base);

        impl $name {
            /// Clamps the given value to the interval
            #[doc = concat!("[", stringify!($min), ", ", stringify!($max), "]")]
            /// and constructs a new instance from it.
            pub fn new(value: $base) -> Self {
                Self(value.clamp($min, $max))
            }

            /// Returns the value encapsulated by this instance.
            pub fn value(&self) -> $base {
                self.0
            }
        }

        impl From<$base> for $name {
            fn from(source: $base) -> Self {
                Self::new(source)
            }
        }

        impl From<$name> for $base {
            fn from(source: $name) -> Self {
                source.0
            }
        }

        impl From<$name> for Value {
            fn from(source: $name) -> Self {
                source.0.into()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

decl_clamped_int! {
    /// Speech rate, represented as a value in the interval [-10, 10], with 0 being normal speed.
    Rate(i32) in -10..10
}

decl_clamped_int! {
    /// Voice volume, represented as a value in the interval [0, 100], with 100 being full volume.
    Volume(i32) in 0..100
}
