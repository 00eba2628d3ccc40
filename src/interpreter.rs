/// The environment module holds the variable bindings of a running program.
///
/// The environment maps variable names to integers, remembers the order in
/// which names were first assigned, and renders the end-of-run report.
pub mod environment;
/// The evaluator module executes a parsed program.
///
/// The evaluator walks the AST, evaluates arithmetic and boolean expressions,
/// executes statements against the environment, and produces the final
/// bindings.
///
/// # Responsibilities
/// - Evaluates expressions with truncating division and short-circuiting
///   conjunction.
/// - Executes assignments, conditionals and loops.
/// - Reports runtime errors such as unbound variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// tagged with the line it appeared on. It also defines the [`TokenSource`]
/// contract the parser consumes.
///
/// [`TokenSource`]: lexer::TokenSource
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a predictive recursive-descent parser driven by the parse
/// table in [`crate::grammar`]. It reads one token of lookahead, selects a
/// production, and never backtracks.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting the first error with its line.
pub mod parser;
