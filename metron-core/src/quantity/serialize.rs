use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Quantity;

impl<N: Serialize, U> Serialize for Quantity<N, U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, N: Deserialize<'de>, U> Deserialize<'de> for Quantity<N, U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        N::deserialize(deserializer).map(Quantity::new)
    }
}
