use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Exact match only, used for values read back from storage.
    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Anything that isn't `light` is dark.
    pub fn normalize(s: &str) -> Theme {
        Theme::parse(s).unwrap_or(Theme::Dark)
    }

    pub fn inverse(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct ParseThemeError(String);

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown theme {:?}", self.0)
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::parse(s).ok_or_else(|| ParseThemeError(s.to_owned()))
    }
}

impl AsRef<str> for Theme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[test]
fn test_parse() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Light"), None);
    assert_eq!(Theme::parse(" dark"), None);
    assert_eq!(Theme::parse(""), None);

    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!(
        "sepia".parse::<Theme>(),
        Err(ParseThemeError("sepia".to_string())),
    );
}

#[test]
fn test_normalize() {
    assert_eq!(Theme::normalize("light"), Theme::Light);
    assert_eq!(Theme::normalize("dark"), Theme::Dark);
    assert_eq!(Theme::normalize("LIGHT"), Theme::Dark);
    assert_eq!(Theme::normalize("sepia"), Theme::Dark);
    assert_eq!(Theme::normalize(""), Theme::Dark);
}

#[test]
fn test_inverse() {
    assert_eq!(Theme::Light.inverse(), Theme::Dark);
    assert_eq!(Theme::Dark.inverse(), Theme::Light);
    assert_eq!(Theme::Dark.inverse().inverse(), Theme::Dark);
}
