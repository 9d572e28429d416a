use crate::ast::{Expr, Statement};

/// Renders a statement tree as a Graphviz DOT digraph.
///
/// Every tree node becomes one graph node labeled with its kind and scalar
/// payload (`Assign` plus the target name, `BinOp` plus the operator,
/// `Number`/`String`/`Var` plus their value), and every child relationship
/// becomes one edge. The rendering is purely observational and has no effect
/// on checking or evaluation.
///
/// # Parameters
/// - `statement`: The statement tree to render.
///
/// # Returns
/// The DOT source text, ready to be fed to `dot`.
///
/// # Example
/// ```
/// use minilang::{
///     graph::statement_to_dot,
///     interpreter::{lexer::tokenize, parser::statement::parse},
/// };
///
/// let statements = parse(&tokenize("x = 5 + 2;").unwrap()).unwrap();
/// let dot = statement_to_dot(&statements[0]);
///
/// assert!(dot.contains("Assign\\nx"));
/// assert!(dot.contains("BinOp\\n+"));
/// ```
#[must_use]
pub fn statement_to_dot(statement: &Statement) -> String {
    let mut graph = String::from("digraph ast {\n");
    let mut next_id = 0;

    match statement {
        Statement::Assignment { name, value } => {
            let id = fresh_id(&mut next_id);
            graph.push_str(&format!("    n{id} [label=\"Assign\\n{name}\"];\n"));
            let child = write_expr(value, &mut graph, &mut next_id);
            graph.push_str(&format!("    n{id} -> n{child};\n"));
        },
    }

    graph.push_str("}\n");
    graph
}

/// Writes one expression node (and, recursively, its children) into the
/// graph and returns the node's id.
fn write_expr(expr: &Expr, graph: &mut String, next_id: &mut usize) -> usize {
    let id = fresh_id(next_id);
    match expr {
        Expr::Number { value } => {
            graph.push_str(&format!("    n{id} [label=\"Number\\n{value}\"];\n"));
        },
        Expr::Str { value } => {
            graph.push_str(&format!("    n{id} [label=\"String\\n\\\"{value}\\\"\"];\n"));
        },
        Expr::Variable { name } => {
            graph.push_str(&format!("    n{id} [label=\"Var\\n{name}\"];\n"));
        },
        Expr::BinaryOp { left, op, right } => {
            graph.push_str(&format!("    n{id} [label=\"BinOp\\n{op}\"];\n"));
            let left_id = write_expr(left, graph, next_id);
            graph.push_str(&format!("    n{id} -> n{left_id};\n"));
            let right_id = write_expr(right, graph, next_id);
            graph.push_str(&format!("    n{id} -> n{right_id};\n"));
        },
    }
    id
}

/// Hands out pre-order node ids.
fn fresh_id(next_id: &mut usize) -> usize {
    let id = *next_id;
    *next_id += 1;
    id
}
