//! Metro line labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown line name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line: {0}")]
pub struct UnknownLine(String);

/// The line a link belongs to.
///
/// Lines only classify links; they never change the cost of travelling
/// along one. A change of line between consecutive links is a transfer.
///
/// Map files may spell line names in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Line {
    Red,
    Green,
    Blue,
    Black,
}

impl Line {
    /// Every line, in declaration order.
    pub const ALL: [Line; 4] = [Line::Red, Line::Green, Line::Blue, Line::Black];

    /// The line name as written in map files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Line::Red => "Red",
            Line::Green => "Green",
            Line::Blue => "Blue",
            Line::Black => "Black",
        }
    }

    /// Stroke colour used when drawing the line.
    pub fn colour(&self) -> &'static str {
        match self {
            Line::Red => "#ff0000",
            Line::Green => "#00ff00",
            Line::Blue => "#0000ff",
            Line::Black => "#000000",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Line {
    type Err = UnknownLine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Line::ALL
            .into_iter()
            .find(|line| line.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLine(s.to_string()))
    }
}

impl TryFrom<String> for Line {
    type Error = UnknownLine;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_any_case() {
        assert_eq!("red".parse::<Line>(), Ok(Line::Red));
        assert_eq!("GREEN".parse::<Line>(), Ok(Line::Green));
        assert_eq!(" Blue ".parse::<Line>(), Ok(Line::Blue));
        assert_eq!("Black".parse::<Line>(), Ok(Line::Black));
    }

    #[test]
    fn reject_unknown() {
        let err = "Purple".parse::<Line>().unwrap_err();
        assert_eq!(err.to_string(), "unknown line: Purple");
    }

    #[test]
    fn display_matches_serde_name() {
        for line in Line::ALL {
            let json = serde_json::to_string(&line).unwrap();
            assert_eq!(json, format!("\"{line}\""));
        }
    }

    #[test]
    fn deserialize_any_case() {
        let lines: Vec<Line> = serde_json::from_str(r#"["red", "BLUE", "Green"]"#).unwrap();
        assert_eq!(lines, vec![Line::Red, Line::Blue, Line::Green]);
        assert!(serde_json::from_str::<Line>(r#""Purple""#).is_err());
    }

    #[test]
    fn colours_are_distinct() {
        let mut colours: Vec<_> = Line::ALL.iter().map(Line::colour).collect();
        colours.sort();
        colours.dedup();
        assert_eq!(colours.len(), Line::ALL.len());
    }
}
