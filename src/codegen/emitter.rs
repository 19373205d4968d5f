// Wrapper declaration text

use crate::constants::{HANDLE_IDENT, INDENT};
use crate::parser::ast::ParsedSignature;

/// One generated line and the wrapper name it declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperDecl {
    pub name: String,
    pub text: String,
}

/// Build the wrapper line for `signature` under the mapped `name`:
///
/// ```text
///     RET NAME(TYPE ARG, ...) { [return ]FULL_NAME(L, ARG, ...); }
/// ```
pub fn emit_wrapper(signature: &ParsedSignature, name: &str) -> WrapperDecl {
    let forwarded = signature.forwarded_arguments();

    let formals = forwarded
        .iter()
        .map(|arg| format!("{} {}", arg.ty, arg.name))
        .collect::<Vec<_>>()
        .join(", ");

    let actuals = std::iter::once(HANDLE_IDENT)
        .chain(forwarded.iter().map(|arg| arg.name.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    let ret = if signature.returns_void() {
        ""
    } else {
        "return "
    };

    let text = format!(
        "{INDENT}{} {}({}) {{ {}{}({}); }}",
        signature.return_type, name, formals, ret, signature.full_name, actuals
    );

    WrapperDecl {
        name: name.to_string(),
        text,
    }
}
