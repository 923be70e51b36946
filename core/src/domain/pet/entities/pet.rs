use std::fmt;

/// A pet record that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PetProfile {
    pub name: String,
    pub breed: String,
    pub age: Measurement,
    pub gender: String,
    pub species: String,
    pub weight: Measurement,
    pub activity_level: String,
    pub health_concerns: String,
}

/// A numeric field together with the text the caller sent for it.
///
/// The prompt repeats the caller's own spelling (`"3"`, `25`, `0.0`), while
/// `value` carries the parsed number.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub display: String,
}

impl Measurement {
    /// Reads a JSON number, or a string that parses as one after trimming.
    pub fn from_json(raw: &serde_json::Value) -> Option<Self> {
        let value = match raw {
            serde_json::Value::Number(number) => number.as_f64()?,
            serde_json::Value::String(text) => text.trim().parse::<f64>().ok()?,
            _ => return None,
        };

        Some(Self {
            value,
            display: json_display(raw),
        })
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Only `dog` and `cat` have reference breed sets.
    pub fn from_normalized(species: &str) -> Option<Self> {
        match species {
            "dog" => Some(Species::Dog),
            "cat" => Some(Species::Cat),
            _ => None,
        }
    }
}

/// Renders a JSON scalar the way it should read inside a prompt: strings
/// without quotes, everything else in its JSON form.
pub fn json_display(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
