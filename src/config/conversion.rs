use std::collections::HashMap;

use crate::{OmflError, Value};

fn type_error(expected: &str, value: &Value) -> OmflError {
    OmflError::TypeError {
        message: format!("Expected {}, got {:?}", expected, value),
        line: 0,
        hint: Some(format!("Use a {} value in your config", expected)),
    }
}

impl TryFrom<Value> for String {
    type Error = OmflError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = OmflError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(type_error("boolean", &value)),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = OmflError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            _ => Err(type_error("integer", &value)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = OmflError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(i64::from(n)),
            _ => Err(type_error("integer", &value)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = OmflError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            _ => Err(type_error("float", &value)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = OmflError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(f64::from(n)),
            _ => Err(type_error("float", &value)),
        }
    }
}

/// Range-checked narrowing from the parsed i32.
macro_rules! unsigned_conversion {
    ($target:ty) => {
        impl TryFrom<Value> for $target {
            type Error = OmflError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::Int(n) => <$target>::try_from(n).map_err(|_| OmflError::TypeError {
                        message: format!(
                            "Number {} out of range for {}",
                            n,
                            stringify!($target)
                        ),
                        line: 0,
                        hint: Some(format!(
                            "Use a number between {} and {}",
                            <$target>::MIN,
                            <$target>::MAX
                        )),
                    }),
                    _ => Err(type_error("integer", &value)),
                }
            }
        }
    };
}

unsigned_conversion!(u8);
unsigned_conversion!(u16);
unsigned_conversion!(u32);
unsigned_conversion!(u64);
unsigned_conversion!(usize);

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = OmflError>,
{
    type Error = OmflError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let mut result = Vec::with_capacity(items.len());
                for item in items {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            _ => Err(OmflError::TypeError {
                message: format!("Expected array, got {:?}", value),
                line: 0,
                hint: Some("Use an array [...] in your config".into()),
            }),
        }
    }
}

impl TryFrom<Value> for HashMap<String, Value> {
    type Error = OmflError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Section(entries) => Ok(entries.into_iter().collect()),
            _ => Err(OmflError::TypeError {
                message: format!("Expected section, got {:?}", value),
                line: 0,
                hint: Some("Use a [section] block in your config".into()),
            }),
        }
    }
}

impl TryFrom<Value> for HashMap<String, String> {
    type Error = OmflError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Section(entries) => {
                let mut map = HashMap::with_capacity(entries.len());
                for (key, val) in entries {
                    map.insert(key, String::try_from(val)?);
                }
                Ok(map)
            }
            _ => Err(OmflError::TypeError {
                message: format!("Expected section, got {:?}", value),
                line: 0,
                hint: Some("Use a [section] block with string values".into()),
            }),
        }
    }
}
