use crate::error::CatalogError;
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a record renders as a one-line string.
///
/// The style is picked by configuration (or a CLI flag), not by the record:
/// any record can be shown in any style, and new styles mean a new variant
/// here rather than a new record type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// `<title> by <author> (id: <identifier>)`
    #[default]
    Plain,
    /// Same line with a `Special: ` prefix.
    Special,
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayStyle::Plain => write!(f, "plain"),
            DisplayStyle::Special => write!(f, "special"),
        }
    }
}

impl FromStr for DisplayStyle {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(DisplayStyle::Plain),
            "special" => Ok(DisplayStyle::Special),
            other => Err(CatalogError::Config(format!(
                "unknown display style: {} (expected plain or special)",
                other
            ))),
        }
    }
}

/// Renders one record as a display line in the given style.
pub fn format_record(record: &Record, style: DisplayStyle) -> String {
    let line = format!(
        "{} by {} (id: {})",
        record.title(),
        record.author(),
        record.identifier()
    );
    match style {
        DisplayStyle::Plain => line,
        DisplayStyle::Special => format!("Special: {}", line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::builder()
            .title("Dubliners")
            .author("James Joyce")
            .identifier("0987654321")
            .build()
            .unwrap()
    }

    #[test]
    fn plain_style_renders_title_author_identifier() {
        assert_eq!(
            format_record(&sample(), DisplayStyle::Plain),
            "Dubliners by James Joyce (id: 0987654321)"
        );
    }

    #[test]
    fn special_style_adds_a_prefix() {
        assert_eq!(
            format_record(&sample(), DisplayStyle::Special),
            "Special: Dubliners by James Joyce (id: 0987654321)"
        );
    }

    #[test]
    fn parses_style_names_case_insensitively() {
        assert_eq!("plain".parse::<DisplayStyle>().unwrap(), DisplayStyle::Plain);
        assert_eq!(
            "SPECIAL".parse::<DisplayStyle>().unwrap(),
            DisplayStyle::Special
        );
    }

    #[test]
    fn rejects_unknown_style_names() {
        assert!(matches!(
            "fancy".parse::<DisplayStyle>(),
            Err(CatalogError::Config(_))
        ));
    }

    #[test]
    fn display_and_fromstr_round_trip() {
        for style in [DisplayStyle::Plain, DisplayStyle::Special] {
            assert_eq!(style.to_string().parse::<DisplayStyle>().unwrap(), style);
        }
    }
}
