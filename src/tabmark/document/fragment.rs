//! Fragments and paragraphs
//!
//!     A fragment is the smallest typed unit of paragraph content. Its type is
//!     written as a `/`-delimited path, which other tools match on:
//!
//!         text/normal              plain text
//!         text/line-break          the join between two source lines
//!         text/emphasis/<n>        emphasis of weight 1, 2 or 3
//!         reference/hyperlink      &<target>
//!         reference/section        &[Title >> Path]
//!         reference/ambiguous      &name
//!         literal/grave-accent     `code`
//!
//!     A cast is appended as one more component, so `` `x`(python) `` has the type
//!     string `literal/grave-accent/python`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentType {
    Normal,
    LineBreak,
    Emphasis(u8),
    Hyperlink,
    SectionReference,
    AmbiguousReference,
    Literal,
}

const TYPE_NAMES: &[(&str, FragmentType)] = &[
    ("text/normal", FragmentType::Normal),
    ("text/line-break", FragmentType::LineBreak),
    ("text/emphasis/1", FragmentType::Emphasis(1)),
    ("text/emphasis/2", FragmentType::Emphasis(2)),
    ("text/emphasis/3", FragmentType::Emphasis(3)),
    ("reference/hyperlink", FragmentType::Hyperlink),
    ("reference/section", FragmentType::SectionReference),
    ("reference/ambiguous", FragmentType::AmbiguousReference),
    ("literal/grave-accent", FragmentType::Literal),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fragment type '{0}'")]
pub struct UnknownFragmentType(pub String);

impl FragmentType {
    pub fn as_str(&self) -> &'static str {
        TYPE_NAMES
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("text/emphasis/3")
    }

    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            FragmentType::Hyperlink | FragmentType::SectionReference | FragmentType::AmbiguousReference
        )
    }

    /// Split a full type string into its type and cast.
    ///
    /// ```text
    /// text/emphasis/2        -> (Emphasis(2), None)
    /// reference/section/see  -> (SectionReference, Some("see"))
    /// ```
    pub fn split_type_string(value: &str) -> Result<(FragmentType, Option<String>), UnknownFragmentType> {
        for (name, kind) in TYPE_NAMES {
            if value == *name {
                return Ok((*kind, None));
            }
            if let Some(cast) = value.strip_prefix(name).and_then(|rest| rest.strip_prefix('/')) {
                if !cast.is_empty() {
                    return Ok((*kind, Some(cast.to_string())));
                }
            }
        }
        Err(UnknownFragmentType(value.to_string()))
    }
}

impl fmt::Display for FragmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FragmentType {
    type Err = UnknownFragmentType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TYPE_NAMES
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| UnknownFragmentType(value.to_string()))
    }
}

impl Serialize for FragmentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    #[serde(rename = "type")]
    pub kind: FragmentType,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
    /// Set for references written with `&*`.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include: bool,
}

impl Fragment {
    pub fn new(kind: FragmentType, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
            cast: None,
            include: false,
        }
    }

    pub fn with_cast(mut self, cast: Option<String>) -> Self {
        self.cast = cast;
        self
    }

    pub fn with_include(mut self, include: bool) -> Self {
        self.include = include;
        self
    }

    pub fn type_string(&self) -> String {
        match &self.cast {
            Some(cast) => format!("{}/{}", self.kind, cast),
            None => self.kind.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub fragments: Vec<Fragment>,
}

impl Paragraph {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Plain text of the paragraph, markup removed.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|fragment| fragment.data.as_str()).collect()
    }

    pub fn type_strings(&self) -> Vec<String> {
        self.fragments.iter().map(Fragment::type_string).collect()
    }
}
