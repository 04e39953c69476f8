//! Placeholder arguments supplied at lookup time.

use std::fmt;

/// A value substituted for a `{ $name }` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl ArgValue {
    /// Interpret command-line style text: integers and finite floats become
    /// numbers, everything else stays a string.
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        if let Ok(int) = raw.parse::<i64>() {
            return Self::Int(int);
        }
        match raw.parse::<f64>() {
            Ok(float) if float.is_finite() => Self::Float(float),
            _ => Self::Str(raw.to_string()),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for ArgValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for ArgValue {
    // Widen through the shortest decimal so 0.1f32 prints as 0.1, not
    // 0.10000000149011612.
    fn from(value: f32) -> Self {
        Self::Float(
            value
                .to_string()
                .parse::<f64>()
                .unwrap_or_else(|_| f64::from(value)),
        )
    }
}

/// Named arguments for placeholder substitution.
///
/// Setting a name twice keeps the last value.
///
/// ```
/// use rokuon_i18n::Args;
///
/// let args = Args::new().with("time", "00:12").with("index", 2);
/// assert_eq!(args.get("index").map(ToString::to_string).as_deref(), Some("2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Vec<(String, ArgValue)>,
}

impl Args {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        let name = name.into();
        let value = value.into();
        match self.values.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.set(name, value);
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_prefers_integers() {
        assert_eq!(ArgValue::infer("44100"), ArgValue::Int(44100));
        assert_eq!(ArgValue::infer("-20"), ArgValue::Int(-20));
        assert_eq!(ArgValue::infer("4.5"), ArgValue::Float(4.5));
        assert_eq!(ArgValue::infer("00:12"), ArgValue::Str("00:12".into()));
        assert_eq!(ArgValue::infer("NaN"), ArgValue::Str("NaN".into()));
        assert_eq!(ArgValue::infer("inf"), ArgValue::Str("inf".into()));
    }

    #[test]
    fn numbers_display_plainly() {
        assert_eq!(ArgValue::from(-20.0_f64).to_string(), "-20");
        assert_eq!(ArgValue::from(0.1_f32).to_string(), "0.1");
        assert_eq!(ArgValue::from(16_u16).to_string(), "16");
        assert_eq!(ArgValue::from(96_000_u32).to_string(), "96000");
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut args = Args::new().with("time", "00:00");
        args.set("time", "01:30");
        assert_eq!(args.len(), 1);
        assert_eq!(args.get("time"), Some(&ArgValue::Str("01:30".into())));
        assert_eq!(args.get("index"), None);
    }

    #[test]
    fn collects_from_pairs() {
        let args: Args = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        let pairs: Vec<(&str, String)> = args.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(pairs, vec![("a", "3".to_string()), ("b", "2".to_string())]);
        assert!(!args.is_empty());
    }
}
