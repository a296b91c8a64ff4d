use std::fmt;

/// Identifies one asset: the package it is loaded with plus its name inside it.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct AssetTag {
    pub package: String,
    pub name: String,
}

impl AssetTag {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self { package: package.into(), name: name.into() }
    }
}

impl fmt::Display for AssetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.package, self.name)
    }
}
