#[cfg(test)]
mod selector_tests {
    use crate::ast::*;
    use crate::parse;

    fn chain_of(source: &str) -> SelectorChain {
        let sheet = parse(&format!("{source} {{}}")).unwrap_or_else(|e| panic!("Failed to parse {source}: {e}"));
        sheet.anonymous_classes.into_iter().next().unwrap().selector_chain
    }

    fn ui(name: &str) -> SelectorExpr {
        SelectorExpr::selector(Selector::Ui {
            ident: name.to_string(),
        })
    }

    fn uint(value: u32) -> Expr {
        Expr::value(Value::Uint { value })
    }

    #[test]
    fn test_single_children_step() {
        let chain = chain_of(">");

        assert_eq!(chain.steps.len(), 1);
        assert_eq!(
            chain.steps[0],
            SelectorExpr::selector(Selector::Axes(AxesSelector::Children { range: None }))
        );
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let chain = chain_of("a && b || c");

        assert_eq!(
            chain.steps,
            vec![SelectorExpr::binary(
                BinarySelectorOp::Or,
                SelectorExpr::binary(BinarySelectorOp::And, ui("a"), ui("b")),
                ui("c")
            )]
        );
    }

    #[test]
    fn test_or_chain_is_left_associative() {
        let chain = chain_of("a || b || c");

        assert_eq!(
            chain.steps[0],
            SelectorExpr::binary(
                BinarySelectorOp::Or,
                SelectorExpr::binary(BinarySelectorOp::Or, ui("a"), ui("b")),
                ui("c")
            )
        );
    }

    #[test]
    fn test_not_has_no_identity_exception() {
        let chain = chain_of("!!Button");

        let button = UnaryOrAtomSelectorExpr::atom(SelectorExprOrSelector::Selector(Selector::Ui {
            ident: "Button".to_string(),
        }));
        assert_eq!(
            chain.steps[0],
            SelectorExpr::from(UnaryOrAtomSelectorExpr::unary(
                UnarySelectorOp::Not,
                UnaryOrAtomSelectorExpr::unary(UnarySelectorOp::Not, button)
            ))
        );
    }

    #[test]
    fn test_steps_are_a_pipeline() {
        let chain = chain_of("Panel > Button && !@primary");

        assert_eq!(chain.steps.len(), 3);
        assert_eq!(chain.steps[0], ui("Panel"));
        assert_eq!(
            chain.steps[1],
            SelectorExpr::selector(Selector::Axes(AxesSelector::Children { range: None }))
        );
        assert!(matches!(
            &chain.steps[2],
            SelectorExpr::Binary(BinarySelectorExpr {
                op: BinarySelectorOp::And,
                ..
            })
        ));
    }

    #[test]
    fn test_parenthesized_group_holds_a_chain() {
        let chain = chain_of("(Panel > Label) || Button");

        let group = SelectorExpr::from(UnaryOrAtomSelectorExpr::atom(
            SelectorExprOrSelector::SelectorExpr(SelectorExpr::Chain(SelectorChain {
                steps: vec![
                    ui("Panel"),
                    SelectorExpr::selector(Selector::Axes(AxesSelector::Children { range: None })),
                    ui("Label"),
                ],
            })),
        ));
        assert_eq!(
            chain.steps,
            vec![SelectorExpr::binary(BinarySelectorOp::Or, group, ui("Button"))]
        );
    }

    #[test]
    fn test_state_map() {
        let chain = chain_of("[hover, index = 2 + 1]");

        assert_eq!(
            chain.steps[0],
            SelectorExpr::selector(Selector::StateMap {
                states: vec![
                    State {
                        name: "hover".to_string(),
                        value: None,
                    },
                    State {
                        name: "index".to_string(),
                        value: Some(Expr::binary(BinaryOp::Add, uint(2), uint(1))),
                    },
                ],
            })
        );
    }

    #[test]
    fn test_ranges_stay_expressions() {
        let chain = chain_of(":[n] :[1..n - 1] :[..3] :[2..]");
        let n = || {
            Expr::value(Value::VariableRef {
                name: "n".to_string(),
            })
        };

        assert_eq!(
            chain.steps,
            vec![
                SelectorExpr::selector(Selector::Slice {
                    range: Range::Point { expr: n() }
                }),
                SelectorExpr::selector(Selector::Slice {
                    range: Range::Bounded {
                        low: uint(1),
                        high: Expr::binary(BinaryOp::Subtract, n(), uint(1)),
                    }
                }),
                SelectorExpr::selector(Selector::Slice {
                    range: Range::LeftUnbounded { expr: uint(3) }
                }),
                SelectorExpr::selector(Selector::Slice {
                    range: Range::RightUnbounded { expr: uint(2) }
                }),
            ]
        );
    }

    #[test]
    fn test_axes_with_slices() {
        let chain = chain_of("> :[0] < <~ ~> :[..2]");

        assert_eq!(
            chain.steps,
            vec![
                SelectorExpr::selector(Selector::Axes(AxesSelector::Children {
                    range: Some(Range::Point { expr: uint(0) })
                })),
                SelectorExpr::selector(Selector::Axes(AxesSelector::Parent)),
                SelectorExpr::selector(Selector::Axes(AxesSelector::RightSiblings { range: None })),
                SelectorExpr::selector(Selector::Axes(AxesSelector::LeftSiblings {
                    range: Some(Range::LeftUnbounded { expr: uint(2) })
                })),
            ]
        );
    }

    #[test]
    fn test_markers_reverse_and_unique() {
        let chain = chain_of("@header ~ $");

        assert_eq!(
            chain.steps,
            vec![
                SelectorExpr::selector(Selector::Marker {
                    ident: "header".to_string()
                }),
                SelectorExpr::selector(Selector::Reverse),
                SelectorExpr::selector(Selector::Unique),
            ]
        );
    }

    #[test]
    fn test_custom_selector_params_keep_defaults() {
        let chain = chain_of("%within(radius = 2 * 8px, axis = horizontal) [focused]");

        assert_eq!(
            chain.steps,
            vec![
                SelectorExpr::selector(Selector::Custom {
                    ident: "within".to_string(),
                    params: vec![
                        Param {
                            name: "radius".to_string(),
                            default_value: Expr::binary(
                                BinaryOp::Multiply,
                                uint(2),
                                Expr::value(Value::Size {
                                    magnitude: 8.0,
                                    unit: SizeUnit::Px
                                })
                            ),
                        },
                        Param {
                            name: "axis".to_string(),
                            default_value: Expr::value(Value::VariableRef {
                                name: "horizontal".to_string()
                            }),
                        },
                    ],
                }),
                SelectorExpr::selector(Selector::StateMap {
                    states: vec![State {
                        name: "focused".to_string(),
                        value: None,
                    }],
                }),
            ]
        );
    }

    #[test]
    fn test_custom_selector_without_params() {
        let empty = Selector::Custom {
            ident: "visible".to_string(),
            params: vec![],
        };

        assert_eq!(chain_of("%visible()").steps, vec![SelectorExpr::selector(empty.clone())]);
        assert_eq!(
            chain_of("!%visible || Label").steps,
            vec![SelectorExpr::binary(
                BinarySelectorOp::Or,
                SelectorExpr::from(UnaryOrAtomSelectorExpr::unary(
                    UnarySelectorOp::Not,
                    UnaryOrAtomSelectorExpr::atom(SelectorExprOrSelector::Selector(empty))
                )),
                ui("Label")
            )]
        );
    }

    #[test]
    fn test_malformed_custom_selector_default_aborts() {
        assert!(matches!(
            crate::parse("%near(distance = 3pt) {}"),
            Err(crate::ParseError::MalformedLiteral { .. })
        ));
    }
}
