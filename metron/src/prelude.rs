pub use crate::{
    acceleration::*, angle::*, area::*, duration::*, frequency::*, length::*, pixels::*,
    speed::*, temperature::*,
};

pub use metron_core::{
    Conversion, Cubed, Exact, Fractional, Number, Per, Product, Quantity, QuantityError, Rate,
    Squared, maximum, minimum, sort, sort_by_key, sum,
};
