use crate::error::{Error, Result};
use crate::resource_type::ResourceType;
use crate::source::{Field, MetaSource};

/// A resource declared in charm metadata.
///
/// A `Meta` is whatever could be read from the metadata; call
/// [`Meta::validate`] to find out whether it's usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Meta {
    pub name: String,
    pub resource_type: ResourceType,
    /// The filename the resource is stored under, from `filename`.
    pub path: String,
    pub comment: String,
}

impl Meta {
    pub fn parse(name: impl Into<String>, data: impl MetaSource) -> Self {
        parse_meta(name, data)
    }

    /// Check the resource is complete. Only the first problem found is
    /// reported: name, then type, then filename.
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::debug!(resource = %self.name, error = %err, "resource not valid");
        }
        result
    }

    fn check(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName);
        }
        self.resource_type.validate()?;
        if self.path.is_empty() {
            return Err(Error::MissingFilename);
        }
        if self.resource_type == ResourceType::File && self.path.contains('/') {
            return Err(Error::FilenameContainsSlash(self.path.clone()));
        }
        Ok(())
    }
}

/// Read a resource declaration. This never fails: missing or wrongly
/// typed fields are left at their defaults.
pub fn parse_meta(name: impl Into<String>, data: impl MetaSource) -> Meta {
    let name = name.into();
    let resource_type = match string_field(&name, &data, "type") {
        Some(value) => ResourceType::by_name(value).unwrap_or_else(|| {
            tracing::debug!(resource = %name, resource_type = value, "unrecognized resource type");
            ResourceType::Unknown
        }),
        None => ResourceType::Unknown,
    };
    let path = string_field(&name, &data, "filename").unwrap_or_default();
    let comment = string_field(&name, &data, "comment").unwrap_or_default();
    Meta {
        resource_type,
        path: path.to_string(),
        comment: comment.to_string(),
        name,
    }
}

/// Decode a JSON object and read it as a resource declaration.
pub fn parse_meta_json(name: impl Into<String>, text: &str) -> Result<Meta> {
    let data = json::parse(text)?;
    Ok(parse_meta(name, &data))
}

fn string_field<'a>(name: &str, data: &'a impl MetaSource, key: &str) -> Option<&'a str> {
    let field = data.field(key);
    if field == Field::Other {
        tracing::debug!(resource = %name, key, "ignoring non-string field");
    }
    field.as_str()
}
