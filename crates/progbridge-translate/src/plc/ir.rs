//! Intermediate model for PLC structured text.

/// One variable declaration.
///
/// Holds source-dialect values after extraction and target-dialect values
/// after [`super::transform`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct VarDecl {
    pub name: String,
    pub ty: String,
    /// Located address (`AT ...`), if one was declared.
    pub address: Option<String>,
    /// Provenance comment recording the original address.
    pub comment: Option<String>,
}

impl VarDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            address: None,
            comment: None,
        }
    }

    pub fn at(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// A PLC program: declarations in source order plus the statement body.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct PlcProgram {
    pub variables: Vec<VarDecl>,
    pub body: String,
}
