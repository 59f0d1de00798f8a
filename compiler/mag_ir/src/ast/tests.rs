use super::*;

#[test]
fn test_precedence_ordering() {
    assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
    assert!(BinaryOp::Add.precedence() > BinaryOp::Lt.precedence());
    assert!(BinaryOp::Lt.precedence() > BinaryOp::Eq.precedence());
    assert!(BinaryOp::Eq.precedence() > BinaryOp::And.precedence());
    assert!(BinaryOp::And.precedence() > BinaryOp::Or.precedence());
}

#[test]
fn test_operator_symbols() {
    assert_eq!(BinaryOp::Div.to_string(), "/");
    assert_eq!(BinaryOp::GtEq.to_string(), ">=");
    assert_eq!(UnaryOp::Not.to_string(), "!");
}

#[test]
fn test_empty_program() {
    assert!(Program::default().is_empty());
    let program = Program::new(vec![Stmt::new(
        StmtKind::Expr(Expr::new(ExprKind::Nil, Span::new(0, 3))),
        Span::new(0, 3),
    )]);
    assert!(!program.is_empty());
}
