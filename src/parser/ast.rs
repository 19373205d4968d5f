// Parsed form of a single declaration

/// One formal parameter: an atomic type token and the parameter name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub ty: String,
    pub name: String,
}

impl Argument {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Argument {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A declaration split into its parts.
///
/// `arguments[0]` is always the handle parameter; the parser rejects any
/// declaration where it is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSignature {
    pub return_type: String,
    pub full_name: String,
    pub arguments: Vec<Argument>,
}

impl ParsedSignature {
    /// Parameters visible in the wrapper (everything after the handle)
    pub fn forwarded_arguments(&self) -> &[Argument] {
        self.arguments.get(1..).unwrap_or(&[])
    }

    pub fn returns_void(&self) -> bool {
        self.return_type == crate::constants::VOID_TYPE
    }
}
