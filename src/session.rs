use crate::{
    ast::Statement,
    interpreter::{
        analyzer::SymbolTable,
        evaluator::core::Environment,
        lexer::tokenize,
        parser::statement::parse,
        value::Value,
    },
};

/// One analysis and execution session.
///
/// A session owns exactly one symbol type table and one runtime environment;
/// both persist across the lines fed to it and are never shared with another
/// session. Hosts embedding several sessions concurrently must create one
/// `Session` per unit of concurrency.
///
/// Every statement goes through check-then-evaluate: the evaluator is only
/// invoked after the type checker accepted the statement, so an ill-typed
/// statement can never touch the environment.
#[derive(Debug, Default)]
pub struct Session {
    symbols: SymbolTable,
    env:     Environment,
}

impl Session {
    /// Creates a session with an empty symbol table and environment.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: SymbolTable::new(),
               env:     Environment::new(), }
    }

    /// The session's symbol type table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The session's runtime environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Checks and then evaluates one parsed statement.
    ///
    /// The statement is first type checked against the symbol table; only on
    /// success is it evaluated against the environment. A failure in either
    /// stage leaves both tables unchanged for this statement.
    ///
    /// # Parameters
    /// - `statement`: The statement to run.
    ///
    /// # Returns
    /// The value of the statement's value expression.
    ///
    /// # Errors
    /// Returns the boxed `SemanticError` or `RuntimeError` of the failing
    /// stage.
    pub fn run_statement(&mut self,
                         statement: &Statement)
                         -> Result<Value, Box<dyn std::error::Error>> {
        self.symbols.check_statement(statement)?;
        Ok(self.env.eval_statement(statement)?)
    }

    /// Runs one source line through the full pipeline.
    ///
    /// The line is tokenized and parsed, then every statement found is
    /// checked and evaluated in order. Processing stops at the first error.
    ///
    /// # Parameters
    /// - `line`: One raw source line.
    ///
    /// # Returns
    /// The value of the last statement on the line, or `None` if the line
    /// held no statement (blank or comment-only).
    ///
    /// # Errors
    /// Returns the boxed error of the first failing stage.
    ///
    /// # Example
    /// ```
    /// use minilang::{interpreter::value::Value, session::Session};
    ///
    /// let mut session = Session::new();
    /// session.run_line("x = 7;").unwrap();
    ///
    /// let result = session.run_line("z = x + 3;").unwrap();
    /// assert_eq!(result, Some(Value::Integer(10)));
    /// ```
    pub fn run_line(&mut self, line: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
        let tokens = tokenize(line)?;
        let statements = parse(&tokens)?;

        let mut result = None;
        for statement in &statements {
            result = Some(self.run_statement(statement)?);
        }
        Ok(result)
    }
}

/// The processing outcome of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStatus {
    /// Every statement on the line checked and evaluated successfully.
    Ok,
    /// Some stage failed; the payload is the human-readable error message.
    Error(String),
}

impl LineStatus {
    /// Whether the line was processed without errors.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl std::fmt::Display for LineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

/// Everything a presentation layer needs to display one processed line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineReport {
    /// 1-based line number within the script.
    pub number:     usize,
    /// The trimmed source text of the line.
    pub source:     String,
    /// The rendered text of every token on the line. Empty when tokenization
    /// failed.
    pub tokens:     Vec<String>,
    /// The parsed statement trees. Empty when parsing failed.
    pub statements: Vec<Statement>,
    /// `Ok`, or the first error the line produced.
    pub status:     LineStatus,
}

/// Runs a whole script, collecting a report per non-empty line.
///
/// This is the error-tolerant driver: an error is recorded in the line's
/// report and processing continues with the next line, sharing the same
/// session throughout. Blank lines are skipped entirely.
///
/// # Parameters
/// - `source`: The script text.
///
/// # Returns
/// The per-line reports in source order, plus the session holding the final
/// symbol table and runtime environment.
///
/// # Example
/// ```
/// use minilang::session::run_report;
///
/// let (reports, session) = run_report("x = 1;\nbad = \"a\" + 1;\ny = x + 1;");
///
/// assert!(reports[0].status.is_ok());
/// assert!(!reports[1].status.is_ok());
/// assert!(reports[2].status.is_ok());
/// assert!(session.environment().get("y").is_some());
/// ```
#[must_use]
pub fn run_report(source: &str) -> (Vec<LineReport>, Session) {
    let mut session = Session::new();
    let mut reports = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let number = index + 1;

        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => {
                reports.push(LineReport { number,
                                          source: line.to_string(),
                                          tokens: Vec::new(),
                                          statements: Vec::new(),
                                          status: LineStatus::Error(e.to_string()) });
                continue;
            },
        };
        let token_texts = tokens.iter().map(ToString::to_string).collect();

        let statements = match parse(&tokens) {
            Ok(statements) => statements,
            Err(e) => {
                reports.push(LineReport { number,
                                          source: line.to_string(),
                                          tokens: token_texts,
                                          statements: Vec::new(),
                                          status: LineStatus::Error(e.to_string()) });
                continue;
            },
        };

        let mut status = LineStatus::Ok;
        for statement in &statements {
            if let Err(e) = session.run_statement(statement) {
                status = LineStatus::Error(e.to_string());
                break;
            }
        }

        reports.push(LineReport { number,
                                  source: line.to_string(),
                                  tokens: token_texts,
                                  statements,
                                  status });
    }

    (reports, session)
}
