/// Defines the constructor functions and the `in_*` accessor trait of a unit family.
///
/// Each `name = CONVERSION;` line expands to `pub fn name(value: f64) -> Quantity` and to a
/// trait method `in_name(self) -> f64`, both going through the same [`Conversion`].
///
/// [`Conversion`]: metron_core::Conversion
macro_rules! units {
    (
        $(#[$trait_meta:meta])*
        $vis:vis trait $trait_name:ident for $quantity:ty {
            $(
                $(#[$meta:meta])*
                $name:ident = $conversion:expr;
            )*
        }
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[inline]
                #[must_use]
                $vis fn $name(value: f64) -> $quantity {
                    $conversion.quantity(value)
                }
            )*

            $(#[$trait_meta])*
            $vis trait $trait_name {
                $(
                    #[doc = concat!("Returns the value in ", stringify!($name), ".")]
                    #[must_use]
                    fn [<in_ $name>](self) -> f64;
                )*
            }

            impl $trait_name for $quantity {
                $(
                    #[inline]
                    fn [<in_ $name>](self) -> f64 {
                        $conversion.value(self)
                    }
                )*
            }
        }
    };
}

pub(crate) use units;
