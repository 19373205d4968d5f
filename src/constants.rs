// Naming constants for the generated wrappers

/// Base type of the implicit first argument every signature must declare.
pub const HANDLE_TYPE: &str = "lua_State";

/// Identifier the wrappers forward as the implicit first argument.
pub const HANDLE_IDENT: &str = "L";

/// Prefix of core API functions (`lua_pop` becomes `pop`)
pub const CORE_PREFIX: &str = "lua_";

/// Prefix of auxiliary library functions (`luaL_ref` becomes `L_ref`)
pub const AUX_PREFIX: &str = "luaL_";

/// Tag prepended to auxiliary wrapper names after the prefix is removed
pub const AUX_TAG: &str = "L_";

/// Return type whose forwarding call is emitted without `return`
pub const VOID_TYPE: &str = "void";

/// Leading margin of every generated line
pub const INDENT: &str = "    ";

/// Default input file when no path is given on the command line
pub const DEFAULT_INPUT: &str = "lua.api";

/// Multi-word base types rewritten into single tokens before parsing.
///
/// Any other multi-word type is rejected by the structural parser. Add a
/// row here to accept a new one.
pub const TYPE_PHRASES: &[(&str, &str)] = &[
    ("const char", "cchar"),
    ("const void", "const_void"),
    ("const lua_Number", "const_lua_Number"),
    ("const lua_Debug", "const_lua_Debug"),
    ("const luaL_Reg", "const_luaL_Reg"),
];
