use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Korean,
    Latin,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Korean => write!(f, "Korean"),
            Script::Latin => write!(f, "Latin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_display_names() {
        assert_eq!(Script::Korean.to_string(), "Korean");
        assert_eq!(Script::Latin.to_string(), "Latin");
    }

    #[test]
    fn test_script_serialization() {
        let serialized = serde_json::to_string(&Script::Korean).unwrap();
        assert_eq!(serialized, "\"Korean\"");
    }
}
