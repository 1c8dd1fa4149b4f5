//! Active value source resolution
//!
//! Precedence: parsed custom text > supplied list > numeric range.

mod fingerprint;

pub use fingerprint::{fingerprint, Fingerprint};

use crate::cursor::{CursorConfig, Domain, Value};
use crate::CursorError;

/// Parse comma-separated numbers.
///
/// Each element is trimmed and parsed as a float; whole numbers collapse
/// to [`Value::Int`]. Any element that is empty, not a number or not finite
/// fails the whole parse.
pub fn parse_custom_values(text: &str) -> Result<Vec<Value>, CursorError> {
    text.split(',')
        .enumerate()
        .map(|(position, raw)| {
            let token = raw.trim();
            let x: f64 = token
                .parse()
                .map_err(|_| CursorError::InvalidCustomValue {
                    position,
                    token: token.to_string(),
                })?;
            if !x.is_finite() {
                return Err(CursorError::NonFiniteCustomValue {
                    position,
                    token: token.to_string(),
                });
            }
            Ok(Value::from_f64(x))
        })
        .collect()
}

/// Source governing index-to-value lookup for one invocation
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveSource<'a> {
    /// List parsed from the custom text
    Parsed(Vec<Value>),

    /// Non-empty list supplied by the caller
    Supplied(&'a [Value]),

    /// Plain integer range; the index is the value
    Range,
}

impl<'a> ActiveSource<'a> {
    /// Resolve the source for `config`.
    ///
    /// Unparseable custom text is logged and skipped; it never fails the call.
    pub fn resolve(config: &'a CursorConfig) -> Self {
        let text = config.custom_values();
        if !text.trim().is_empty() {
            match parse_custom_values(text) {
                Ok(values) => {
                    tracing::info!(values = ?values, "parsed custom values");
                    return ActiveSource::Parsed(values);
                }
                Err(err) => {
                    tracing::warn!(error = %err, text, "ignoring custom values");
                }
            }
        }

        match config.value_list() {
            Some(values) if !values.is_empty() => ActiveSource::Supplied(values),
            _ => ActiveSource::Range,
        }
    }

    /// Backing list, if the source is list-based
    pub fn values(&self) -> Option<&[Value]> {
        match self {
            ActiveSource::Parsed(values) => Some(values.as_slice()),
            ActiveSource::Supplied(values) => Some(*values),
            ActiveSource::Range => None,
        }
    }

    /// Index domain for this source.
    ///
    /// A list source ignores the configured `end`; its upper bound is
    /// `len - 1`.
    pub fn domain(&self, config: &CursorConfig) -> Domain {
        match self.values() {
            Some(values) => Domain::List { len: values.len() },
            None => Domain::range(config.start(), config.end()),
        }
    }

    /// Value at `index`, which must already lie inside [`Self::domain`]
    pub fn value_at(&self, index: i64) -> Value {
        match self.values() {
            Some(values) => values[index.clamp(0, values.len() as i64 - 1) as usize],
            None => Value::Int(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_numbers() {
        let values = parse_custom_values("1, 1.4, 1.9, 2, 5, 11.1").unwrap();
        assert_eq!(
            values,
            vec![
                Value::Int(1),
                Value::Float(1.4),
                Value::Float(1.9),
                Value::Int(2),
                Value::Int(5),
                Value::Float(11.1),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert!(matches!(
            parse_custom_values("1,x,3"),
            Err(CursorError::InvalidCustomValue { position: 1, ref token }) if token == "x"
        ));
        assert!(matches!(
            parse_custom_values("1,,3"),
            Err(CursorError::InvalidCustomValue { position: 1, .. })
        ));
        assert!(matches!(
            parse_custom_values("1, inf"),
            Err(CursorError::NonFiniteCustomValue { position: 1, .. })
        ));
    }

    #[test]
    fn test_custom_text_takes_precedence() {
        let config = CursorConfig::new()
            .with_custom_values("4,5")
            .with_value_list(vec![Value::Int(9)]);
        let source = ActiveSource::resolve(&config);
        assert_eq!(source, ActiveSource::Parsed(vec![Value::Int(4), Value::Int(5)]));
        assert_eq!(source.domain(&config), Domain::List { len: 2 });
        assert_eq!(source.domain(&config).upper(), 1);
    }

    #[test]
    fn test_malformed_text_falls_back_to_supplied_list() {
        let list = vec![Value::Int(9), Value::Int(8)];
        let config = CursorConfig::new()
            .with_custom_values("1,x")
            .with_value_list(list.clone());
        assert_eq!(ActiveSource::resolve(&config), ActiveSource::Supplied(&list));
    }

    #[test]
    fn test_empty_supplied_list_means_range() {
        let config = CursorConfig::new().with_value_list(Vec::new());
        let source = ActiveSource::resolve(&config);
        assert_eq!(source, ActiveSource::Range);
        assert_eq!(source.domain(&config), Domain::range(0, 10));
        assert_eq!(source.value_at(4), Value::Int(4));
    }

    #[test]
    fn test_whitespace_only_text_is_ignored() {
        let config = CursorConfig::new().with_custom_values("   ");
        assert_eq!(ActiveSource::resolve(&config), ActiveSource::Range);
    }
}
