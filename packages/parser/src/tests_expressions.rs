#[cfg(test)]
mod expression_tests {
    use crate::ast::*;
    use crate::color::Rgba;
    use crate::{parse, ParseError};

    fn expr_of(source: &str) -> Expr {
        let sheet = parse(&format!("v = {source}")).unwrap_or_else(|e| panic!("Failed to parse {source}: {e}"));
        sheet.variables.into_iter().next().unwrap().expr
    }

    fn uint(value: u32) -> Expr {
        Expr::value(Value::Uint { value })
    }

    fn var(name: &str) -> UnaryOrAtomExpr {
        UnaryOrAtomExpr::atom(ExprOrValue::Value(Value::VariableRef {
            name: name.to_string(),
        }))
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        assert_eq!(
            expr_of("1+2*3"),
            Expr::binary(
                BinaryOp::Add,
                uint(1),
                Expr::binary(BinaryOp::Multiply, uint(2), uint(3))
            )
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        assert_eq!(
            expr_of("1-2-3"),
            Expr::binary(
                BinaryOp::Subtract,
                Expr::binary(BinaryOp::Subtract, uint(1), uint(2)),
                uint(3)
            )
        );
    }

    #[test]
    fn test_all_six_levels() {
        // a || b && c == d + e * f
        let expr = expr_of("a || b && c == d + e * f");
        let v = |n: &str| Expr::from(var(n));

        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Or,
                v("a"),
                Expr::binary(
                    BinaryOp::And,
                    v("b"),
                    Expr::binary(
                        BinaryOp::Eq,
                        v("c"),
                        Expr::binary(
                            BinaryOp::Add,
                            v("d"),
                            Expr::binary(BinaryOp::Multiply, v("e"), v("f"))
                        )
                    )
                )
            )
        );
    }

    #[test]
    fn test_comparison_operators_share_a_level() {
        assert_eq!(
            expr_of("1 < 2 != 3 >= 4"),
            Expr::binary(
                BinaryOp::Ge,
                Expr::binary(
                    BinaryOp::Ne,
                    Expr::binary(BinaryOp::Lt, uint(1), uint(2)),
                    uint(3)
                ),
                uint(4)
            )
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            expr_of("(1 + 2) % 3"),
            Expr::binary(
                BinaryOp::Remainder,
                Expr::group(Expr::binary(BinaryOp::Add, uint(1), uint(2))),
                uint(3)
            )
        );
    }

    #[test]
    fn test_unary_nesting_order() {
        assert_eq!(
            expr_of("!-x"),
            Expr::from(UnaryOrAtomExpr::unary(
                UnaryOp::Not,
                UnaryOrAtomExpr::unary(UnaryOp::Negative, var("x"))
            ))
        );
    }

    #[test]
    fn test_unary_plus_is_dropped() {
        assert_eq!(expr_of("+x"), Expr::from(var("x")));
        assert_eq!(
            expr_of("-+x"),
            Expr::from(UnaryOrAtomExpr::unary(UnaryOp::Negative, var("x")))
        );
    }

    #[test]
    fn test_unary_binds_tighter_than_binary() {
        assert_eq!(
            expr_of("-1 * 2"),
            Expr::binary(
                BinaryOp::Multiply,
                Expr::from(UnaryOrAtomExpr::unary(
                    UnaryOp::Negative,
                    UnaryOrAtomExpr::atom(ExprOrValue::Value(Value::Uint { value: 1 }))
                )),
                uint(2)
            )
        );
    }

    #[test]
    fn test_literal_kinds() {
        assert_eq!(expr_of("2.5"), Expr::value(Value::Double { value: 2.5 }));
        assert_eq!(expr_of("true"), Expr::value(Value::Bool { value: true }));
        assert_eq!(
            expr_of("50vw"),
            Expr::value(Value::Size {
                magnitude: 50.0,
                unit: SizeUnit::Vw
            })
        );
        assert_eq!(
            expr_of("#FF000080"),
            Expr::value(Value::Color {
                rgba: Rgba::rgba(255, 0, 0, 128)
            })
        );
    }

    #[test]
    fn test_call_arguments_keep_order() {
        assert_eq!(
            expr_of("mix(a, 2 + 3, 1em)"),
            Expr::value(Value::Call {
                name: "mix".to_string(),
                args: Args::new(vec![
                    Expr::from(var("a")),
                    Expr::binary(BinaryOp::Add, uint(2), uint(3)),
                    Expr::value(Value::Size {
                        magnitude: 1.0,
                        unit: SizeUnit::Em
                    }),
                ]),
            })
        );
        assert_eq!(
            expr_of("now()"),
            Expr::value(Value::Call {
                name: "now".to_string(),
                args: Args::default(),
            })
        );
    }

    #[test]
    fn test_malformed_literal_aborts_build() {
        let err = parse("ok = 1\nbad = 3pt\nlater = 2").unwrap_err();

        match err {
            ParseError::MalformedLiteral { text, span, .. } => {
                assert_eq!(text, "3pt");
                assert_eq!(span.start, 13);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_builds_are_deterministic() {
        let source = "v(a = 1, b = -a) = a * (b + 2) / 3 % 4 <= 5 && !c || d";

        assert_eq!(parse(source).unwrap(), parse(source).unwrap());
    }

    #[test]
    fn test_remainder_after_a_number_needs_whitespace() {
        assert_eq!(
            expr_of("10 % 3"),
            Expr::binary(BinaryOp::Remainder, uint(10), uint(3))
        );
        assert_eq!(
            expr_of("n%3"),
            Expr::binary(BinaryOp::Remainder, Expr::from(var("n")), uint(3))
        );

        // `10%` is a percentage size, which leaves `3` dangling
        assert_eq!(
            expr_of("10%"),
            Expr::value(Value::Size {
                magnitude: 10.0,
                unit: SizeUnit::Percent
            })
        );
        assert!(parse("x = 10%3").is_err());
    }
}
