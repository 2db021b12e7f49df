//! Deserialization of LayeredNumber.

use core::fmt::Formatter;

use crate::{Context, LayeredNumber};
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct LayeredNumberVisitor {}

impl<'de> Deserialize<'de> for LayeredNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LayeredNumberVisitor {})
    }
}

impl<'de> Visitor<'de> for LayeredNumberVisitor {
    type Value = LayeredNumber;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "except `String`, `Number`")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(LayeredNumber::from_u64(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(LayeredNumber::from_i64(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        match LayeredNumber::from_f64(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    // exact form if it looks like one, any notation otherwise
    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        let res = if v.contains('_') {
            LayeredNumber::from_exact_str(v)
        } else {
            LayeredNumber::parse(v, &Context::new())
        };

        match res {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
