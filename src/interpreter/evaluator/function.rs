/// The built-in registry.
///
/// Declares the default built-ins with their arities and holds the table
/// that user code and embedders extend by name.
pub mod builtin;
/// Call resolution and user-defined calls.
///
/// Resolves a call against the registry and the scope's table, builds the
/// callee's local table and enforces the call-depth limit.
pub mod core;
/// `napisi`: writes its arguments to standard output.
pub mod print;
/// `unos`: reads a line from standard input.
pub mod io;
/// `tip`, `pretvori` and `duzina`.
pub mod convert;
/// `nasumican`: a random whole number from an inclusive range.
pub mod random;
/// `izadji`: ends the program with a status code.
pub mod exit;
