use crate::ast::{
    AnonymousClass, ClassContent, NamedClass, Param, Parent, Property, Stylesheet, Variable,
};
use crate::build::{build_args, build_expr, build_selector_chain};
use crate::cst::{
    AnonymousClassDef, ClassBodyItem, ClassContentNode, File, NamedClassDef, ParamDef,
    ParentNode, Statement, VariableDef,
};
use crate::error::ParseResult;
use tracing::{debug, info, instrument};

/// Build the stylesheet root from a parsed file
#[instrument(skip_all, fields(statements = file.statements.len()))]
pub fn build_stylesheet(file: &File) -> ParseResult<Stylesheet> {
    let mut sheet = Stylesheet::new();

    for statement in &file.statements {
        match statement {
            Statement::Variable(def) => {
                let variable = build_variable(def)?;
                debug!(variable = %variable.name, params = variable.params.len(), "Built variable");
                sheet.variables.push(variable);
            }
            Statement::NamedClass(def) => {
                let class = build_named_class(def)?;
                debug!(
                    class = %class.name,
                    properties = class.content.properties.len(),
                    sub_classes = class.content.sub_classes.len(),
                    "Built named class"
                );
                sheet.named_classes.push(class);
            }
            Statement::AnonymousClass(def) => {
                let class = build_anonymous_class(def)?;
                debug!(
                    steps = class.selector_chain.steps.len(),
                    properties = class.content.properties.len(),
                    sub_classes = class.content.sub_classes.len(),
                    "Built anonymous class"
                );
                sheet.anonymous_classes.push(class);
            }
        }
    }

    info!(
        variables = sheet.variables.len(),
        named_classes = sheet.named_classes.len(),
        anonymous_classes = sheet.anonymous_classes.len(),
        "Stylesheet built"
    );

    Ok(sheet)
}

pub fn build_variable(def: &VariableDef) -> ParseResult<Variable> {
    Ok(Variable {
        name: def.name.text.clone(),
        params: def.params.iter().map(build_param).collect::<ParseResult<_>>()?,
        expr: build_expr(&def.expr)?,
    })
}

pub(crate) fn build_param(def: &ParamDef) -> ParseResult<Param> {
    Ok(Param {
        name: def.name.text.clone(),
        default_value: build_expr(&def.default_value)?,
    })
}

pub fn build_named_class(def: &NamedClassDef) -> ParseResult<NamedClass> {
    Ok(NamedClass {
        name: def.name.text.clone(),
        content: build_class_content(&def.content)?,
    })
}

pub fn build_anonymous_class(def: &AnonymousClassDef) -> ParseResult<AnonymousClass> {
    Ok(AnonymousClass {
        selector_chain: build_selector_chain(&def.selector)?,
        content: build_class_content(&def.content)?,
    })
}

/// Split a class body into parents, properties and nested classes.
/// Nested classes are built depth-first before their owner is returned.
fn build_class_content(node: &ClassContentNode) -> ParseResult<ClassContent> {
    let mut content = ClassContent {
        parents: node.parents.iter().map(build_parent).collect::<ParseResult<_>>()?,
        ..ClassContent::default()
    };

    for item in node.body.iter().flatten() {
        match item {
            ClassBodyItem::Property(property) => content.properties.push(Property {
                ident: property.name.text.clone(),
                expr: build_expr(&property.expr)?,
            }),
            ClassBodyItem::SubClass(def) => content.sub_classes.push(build_anonymous_class(def)?),
        }
    }

    Ok(content)
}

fn build_parent(node: &ParentNode) -> ParseResult<Parent> {
    let args = match &node.args {
        Some(args) => build_args(args)?,
        None => Default::default(),
    };

    Ok(Parent {
        ident: node.name.text.clone(),
        args,
    })
}
