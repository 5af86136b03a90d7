//! Three-letter wire names used as graph nodes

use crate::error::WireError;
use std::fmt;
use std::str::FromStr;

/// The three ASCII letters that name a wire in a circuit, e.g. `x00` or `z12`.
///
/// Cheap to copy and hash, so it works well as a [`DiGraph`](crate::DiGraph) node.
///
/// ```
/// use aoc_utils::Wire;
///
/// let wire: Wire = "z05".parse().unwrap();
/// assert_eq!(wire.to_string(), "z05");
/// assert!("z5".parse::<Wire>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Wire([u8; 3]);

impl Wire {
    /// Build a wire from a name that must be exactly three ASCII characters
    pub fn new(name: &str) -> Result<Self, WireError> {
        if name.chars().count() != 3 {
            return Err(WireError::Length(name.to_string()));
        }
        if !name.is_ascii() {
            return Err(WireError::NonAscii(name.to_string()));
        }

        let mut bytes = [0u8; 3];
        bytes.copy_from_slice(name.as_bytes());
        Ok(Self(bytes))
    }

    /// The three ASCII bytes of the name
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// First letter of the name
    pub fn prefix(&self) -> char {
        self.0[0] as char
    }
}

impl FromStr for Wire {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}{}{}", a as char, b as char, c as char)
    }
}

impl fmt::Debug for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wire({:?})", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        let wire = Wire::new("AAA").unwrap();
        assert_eq!(wire.as_bytes(), b"AAA");
        assert_eq!(wire.prefix(), 'A');
        assert_eq!(format!("{}", wire), "AAA");
        assert_eq!(format!("{:?}", wire), "Wire(\"AAA\")");

        let wire: Wire = "x00".parse().unwrap();
        assert_eq!(wire.prefix(), 'x');
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(Wire::new(""), Err(WireError::Length(String::new())));
        assert_eq!(Wire::new("ab"), Err(WireError::Length("ab".to_string())));
        assert_eq!(Wire::new("abcd"), Err(WireError::Length("abcd".to_string())));
        // Counted in characters, not bytes
        assert_eq!(Wire::new("aé"), Err(WireError::Length("aé".to_string())));
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(Wire::new("abé"), Err(WireError::NonAscii("abé".to_string())));
    }

    #[test]
    fn test_ordering_follows_letters() {
        let mut wires: Vec<Wire> = ["z01", "x00", "z00", "y00"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        wires.sort();
        let names: Vec<String> = wires.iter().map(Wire::to_string).collect();
        assert_eq!(names, vec!["x00", "y00", "z00", "z01"]);
    }
}
