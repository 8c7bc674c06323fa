// ── Persistence boundary ─────────────────────────────────────────────────────
//
// The owning application stores tabulated functions as opaque blobs. The
// blob is the JSON form of `TabulatedFunctionData`; decoding goes through
// a factory so every constructor check runs again. JSON has no literal for
// infinities or NaN, so those travel as the strings "inf", "-inf" and "NaN".

use serde::{
    Deserialize,
    Serialize
};

use super::tabulatedfunction::TabulatedFunction;
use super::tabulatedfunctionerror::{
    TabulatedFunctionError,
    TabulatedFunctionResult
};
use super::tabulatedfunctionfactory::TabulatedFunctionFactory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabulatedFunctionData {
    count: usize,
    #[serde(with = "sample_values")]
    x_values: Vec<f64>,
    #[serde(with = "sample_values")]
    y_values: Vec<f64>,
}

mod sample_values {
    use serde::de::Error;
    use serde::{
        Deserialize,
        Deserializer,
        Serialize,
        Serializer
    };

    const POSITIVE_INFINITY: &str = "inf";
    const NEGATIVE_INFINITY: &str = "-inf";
    const NOT_A_NUMBER: &str = "NaN";

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Sample {
        Finite(f64),
        Special(String),
    }

    fn to_sample(value: f64) -> Sample {
        if value.is_nan() {
            Sample::Special(NOT_A_NUMBER.to_owned())
        } else if value == f64::INFINITY {
            Sample::Special(POSITIVE_INFINITY.to_owned())
        } else if value == f64::NEG_INFINITY {
            Sample::Special(NEGATIVE_INFINITY.to_owned())
        } else {
            Sample::Finite(value)
        }
    }

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|&value| to_sample(value)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let samples: Vec<Sample> = Vec::deserialize(deserializer)?;
        samples
            .into_iter()
            .map(|sample| match sample {
                Sample::Finite(value) => Ok(value),
                Sample::Special(text) => match text.as_str() {
                    POSITIVE_INFINITY => Ok(f64::INFINITY),
                    NEGATIVE_INFINITY => Ok(f64::NEG_INFINITY),
                    NOT_A_NUMBER => Ok(f64::NAN),
                    _ => Err(D::Error::custom(format!("unknown sample value '{}'", text))),
                },
            })
            .collect()
    }
}

impl TabulatedFunctionData {
    pub fn from_function(function: &dyn TabulatedFunction) -> TabulatedFunctionData {
        let points = function.points();
        TabulatedFunctionData {
            count: points.len(),
            x_values: points.iter().map(|pt| pt.x()).collect(),
            y_values: points.iter().map(|pt| pt.y()).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    pub fn into_function(
        self,
        factory: &dyn TabulatedFunctionFactory,
    ) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        if self.count != self.x_values.len() {
            return Err(TabulatedFunctionError::CountMismatch {
                declared: self.count,
                actual: self.x_values.len(),
            });
        }
        factory.create(&self.x_values, &self.y_values)
    }
}

pub fn encode(function: &dyn TabulatedFunction) -> TabulatedFunctionResult<Vec<u8>> {
    let data = TabulatedFunctionData::from_function(function);
    Ok(serde_json::to_vec(&data)?)
}

pub fn decode(
    bytes: &[u8],
    factory: &dyn TabulatedFunctionFactory,
) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
    let data: TabulatedFunctionData = serde_json::from_slice(bytes)?;
    data.into_function(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
    use crate::math::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
    use crate::math::tabulated::tabulatedfunctionfactory::{
        ArrayTabulatedFunctionFactory,
        LinkedListTabulatedFunctionFactory
    };
    use crate::math::tabulated::tabulatedfunctionoperationservice::TabulatedFunctionOperationService;

    #[test]
    fn test_decode_into_other_storage() {
        let original = LinkedListTabulatedFunction::new(&[0.0, 0.5, 2.0], &[1.0, -3.25, 8.0]).unwrap();
        let bytes = encode(&original).unwrap();
        assert_eq!(encode(&original).unwrap(), bytes);

        let restored = decode(&bytes, &ArrayTabulatedFunctionFactory).unwrap();
        assert_eq!(restored.points(), original.points());
    }

    #[test]
    fn test_decode_rejects_bad_blobs() {
        let wrong_count = br#"{"count":3,"x_values":[0.0,1.0],"y_values":[0.0,1.0]}"#;
        assert!(matches!(
            decode(wrong_count, &ArrayTabulatedFunctionFactory),
            Err(TabulatedFunctionError::CountMismatch { declared: 3, actual: 2 })
        ));

        let unsorted = br#"{"count":2,"x_values":[1.0,0.0],"y_values":[0.0,1.0]}"#;
        assert!(matches!(
            decode(unsorted, &ArrayTabulatedFunctionFactory),
            Err(TabulatedFunctionError::NotStrictlyIncreasing { index: 1 })
        ));

        assert!(matches!(
            decode(b"not json", &ArrayTabulatedFunctionFactory),
            Err(TabulatedFunctionError::Codec(_))
        ));
    }

    #[test]
    fn test_non_finite_values_survive() {
        let numerator = ArrayTabulatedFunction::new(&[0.0, 1.0, 2.0], &[1.0, 1.0, -1.0]).unwrap();
        let denominator = ArrayTabulatedFunction::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        let mut quotient = TabulatedFunctionOperationService::default()
            .divide(&numerator, &denominator)
            .unwrap();
        quotient.insert(1.5, f64::NAN).unwrap();

        let bytes = encode(quotient.as_ref()).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains(r#""inf""#) && text.contains(r#""-inf""#) && text.contains(r#""NaN""#));

        let restored = decode(&bytes, &LinkedListTabulatedFunctionFactory).unwrap();
        assert_eq!(restored.x_values(), vec![0.0, 1.0, 1.5, 2.0]);
        let y_values = restored.y_values();
        assert_eq!(y_values[0], f64::INFINITY);
        assert_eq!(y_values[1], 1.0);
        assert!(y_values[2].is_nan());
        assert_eq!(y_values[3], f64::NEG_INFINITY);
    }

    #[test]
    fn test_unknown_special_value_is_rejected() {
        let blob = br#"{"count":1,"x_values":[0.0],"y_values":["infinity"]}"#;
        assert!(matches!(
            decode(blob, &ArrayTabulatedFunctionFactory),
            Err(TabulatedFunctionError::Codec(_))
        ));
    }
}
