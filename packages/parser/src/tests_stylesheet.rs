#[cfg(test)]
mod stylesheet_tests {
    use crate::ast::*;
    use crate::parse;

    fn uint(value: u32) -> Expr {
        Expr::value(Value::Uint { value })
    }

    fn px(magnitude: f64) -> Expr {
        Expr::value(Value::Size {
            magnitude,
            unit: SizeUnit::Px,
        })
    }

    #[test]
    fn test_top_level_variable() {
        let sheet = parse("x = 1 + 2 * 3").unwrap();

        assert_eq!(
            sheet,
            Stylesheet {
                variables: vec![Variable {
                    name: "x".to_string(),
                    params: vec![],
                    expr: Expr::binary(
                        BinaryOp::Add,
                        uint(1),
                        Expr::binary(BinaryOp::Multiply, uint(2), uint(3))
                    ),
                }],
                anonymous_classes: vec![],
                named_classes: vec![],
            }
        );
    }

    #[test]
    fn test_variable_params_have_defaults() {
        let sheet = parse("pad(scale = 2, base = 4px) = base * scale").unwrap();

        let variable = sheet.variable("pad").unwrap();
        assert_eq!(
            variable.params,
            vec![
                Param {
                    name: "scale".to_string(),
                    default_value: uint(2),
                },
                Param {
                    name: "base".to_string(),
                    default_value: px(4.0),
                },
            ]
        );
    }

    #[test]
    fn test_statements_are_bucketed() {
        let sheet = parse(
            r#"
            gap = 8px
            .card { padding: gap }
            Panel { }
            spacing() = gap * 2;
            .flat;
            "#,
        )
        .unwrap();

        assert_eq!(sheet.variables.len(), 2);
        assert_eq!(sheet.named_classes.len(), 2);
        assert_eq!(sheet.anonymous_classes.len(), 1);
        assert_eq!(sheet.variables[1].name, "spacing");
        assert!(sheet.named_class("flat").is_some());
    }

    #[test]
    fn test_named_class_parents_and_properties() {
        let sheet = parse(
            r#"
            .primary extends base(4px, #000000), rounded {
                color: #3366FF;
                opacity: 0.5
            }
            "#,
        )
        .unwrap();

        let class = sheet.named_class("primary").unwrap();
        assert_eq!(
            class.content.parents,
            vec![
                Parent {
                    ident: "base".to_string(),
                    args: Args::new(vec![
                        px(4.0),
                        Expr::value(Value::Color {
                            rgba: crate::color::Rgba::rgb(0, 0, 0)
                        }),
                    ]),
                },
                Parent {
                    ident: "rounded".to_string(),
                    args: Args::default(),
                },
            ]
        );

        let names: Vec<_> = class.content.properties.iter().map(|p| p.ident.as_str()).collect();
        assert_eq!(names, vec!["color", "opacity"]);
        assert!(class.content.sub_classes.is_empty());
    }

    #[test]
    fn test_sub_classes_nest() {
        let sheet = parse(
            r#"
            Panel {
                width: 100%;
                > {
                    Button [pressed] extends pressed_look {
                        scale: 0.95
                    }
                }
                @title;
            }
            "#,
        )
        .unwrap();

        let panel = &sheet.anonymous_classes[0];
        assert_eq!(panel.content.properties.len(), 1);
        assert_eq!(panel.content.sub_classes.len(), 2);

        let children = &panel.content.sub_classes[0];
        assert_eq!(
            children.selector_chain.steps,
            vec![SelectorExpr::selector(Selector::Axes(AxesSelector::Children {
                range: None
            }))]
        );

        let button = &children.content.sub_classes[0];
        assert_eq!(button.selector_chain.steps.len(), 2);
        assert_eq!(button.content.parents[0].ident, "pressed_look");
        assert_eq!(button.content.properties[0].ident, "scale");

        let title = &panel.content.sub_classes[1];
        assert_eq!(
            title.selector_chain.steps,
            vec![SelectorExpr::selector(Selector::Marker {
                ident: "title".to_string()
            })]
        );
        assert_eq!(title.content, ClassContent::default());
    }

    #[test]
    fn test_class_view_over_both_kinds() {
        let sheet = parse(".a { x: 1 } B { y: 2 z: 3 }").unwrap();

        let counts: Vec<_> = sheet.classes().map(|c| c.properties().len()).collect();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn test_syntax_error_yields_no_stylesheet() {
        assert!(parse("Panel { width: 1px ").is_err());
        assert!(parse("x = (1 + 2").is_err());
        assert!(parse(".card extends { }").is_err());
    }

    #[test]
    fn test_block_comments_are_ignored() {
        let source = r#"
            /*
             * Spacing scale
             */
            gap = 8px /* inline */ * 2

            /** Panel rules **/
            Panel /* children */ > {
                width: gap /***/
            }
        "#;

        let sheet = parse(source).unwrap();
        assert_eq!(
            sheet.variable("gap").map(|v| &v.expr),
            Some(&Expr::binary(BinaryOp::Multiply, px(8.0), uint(2)))
        );
        assert_eq!(sheet.anonymous_classes[0].selector_chain.steps.len(), 2);
        assert_eq!(sheet.anonymous_classes[0].content.properties.len(), 1);
    }

    #[test]
    fn test_unterminated_block_comment_is_a_lex_error() {
        let err = parse("Panel { width: 1px } /* trailing").unwrap_err();
        assert!(matches!(err, crate::ParseError::LexError { .. }), "got {err:?}");
    }
}
