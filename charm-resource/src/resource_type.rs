use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The kind of artifact a resource declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ResourceType {
    /// No type was given, or the given one wasn't recognized while parsing.
    #[default]
    Unknown,
    File,
    /// A type that was set explicitly but isn't supported.
    Other(String),
}

impl ResourceType {
    pub fn by_name(name: &str) -> Option<Self> {
        let resource_type = match name {
            "file" => ResourceType::File,
            _ => return None,
        };
        Some(resource_type)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::Unknown => "",
            ResourceType::File => "file",
            ResourceType::Other(name) => name,
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, ResourceType::Unknown)
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            ResourceType::Unknown => Err(Error::MissingType),
            ResourceType::File => Ok(()),
            ResourceType::Other(name) => Err(Error::UnsupportedType(name.clone())),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ResourceType::by_name(s).ok_or_else(|| Error::UnsupportedType(s.to_string()))
    }
}

impl From<&str> for ResourceType {
    fn from(name: &str) -> Self {
        if name.is_empty() {
            return ResourceType::Unknown;
        }
        ResourceType::by_name(name).unwrap_or_else(|| ResourceType::Other(name.to_string()))
    }
}

impl From<String> for ResourceType {
    fn from(name: String) -> Self {
        if name.is_empty() {
            return ResourceType::Unknown;
        }
        ResourceType::by_name(&name).unwrap_or(ResourceType::Other(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(ResourceType::by_name("file"), Some(ResourceType::File));
        assert_eq!(ResourceType::by_name("File"), None);
        assert_eq!(ResourceType::by_name(""), None);
        assert_eq!(ResourceType::by_name("repo"), None);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("file".parse::<ResourceType>().unwrap(), ResourceType::File);
        assert!(matches!(
            "repo".parse::<ResourceType>(),
            Err(Error::UnsupportedType(name)) if name == "repo"
        ));
        assert!("".parse::<ResourceType>().is_err());
    }

    #[test]
    fn test_from_is_lenient() {
        assert_eq!(ResourceType::from(""), ResourceType::Unknown);
        assert_eq!(ResourceType::from("file"), ResourceType::File);
        assert_eq!(
            ResourceType::from("repo".to_string()),
            ResourceType::Other("repo".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceType::File.to_string(), "file");
        assert_eq!(ResourceType::Unknown.to_string(), "");
        assert_eq!(ResourceType::from("repo").to_string(), "repo");
    }

    #[test]
    fn test_validate() {
        assert!(ResourceType::File.validate().is_ok());
        assert!(matches!(
            ResourceType::Unknown.validate(),
            Err(Error::MissingType)
        ));
        assert!(matches!(
            ResourceType::from("repo").validate(),
            Err(Error::UnsupportedType(_))
        ));
    }
}
