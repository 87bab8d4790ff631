//! Loading a designer script back into a widget tree.
//!
//! The script is parsed line by line into a closed set of statements, then
//! executed by a small interpreter that knows nothing except widget
//! construction, property assignment, `Add`, and the final root expression.
//! Loading replaces the whole tree; it never merges. Anything the
//! interpreter does not recognize is an error carrying the line number.

use indexmap::IndexMap;

use crate::{
    app::tree::{WidgetNode, WidgetTree},
    constraints::{Dim, Pos},
    utils::error::{DesignerError, Result},
    widgets::{
        properties::{enum_from_symbol, PropertyKind, PropertyValue},
        WidgetKind,
    },
};

/// A literal on the right-hand side of an assignment.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Str(String),
    Bool(bool),
    Number(f32),
    List(Vec<String>),
    Pos(Pos),
    Dim(Dim),
}

/// One executable statement of a designer script.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Construct { var: String, kind: String },
    SetProperty { var: String, name: String, value: Literal },
    AddChild { parent: String, child: String },
    Expr { var: String },
}

/// Execute a script and produce the tree it describes.
pub fn load_script(contents: &str) -> Result<WidgetTree> {
    let mut env: IndexMap<String, WidgetNode> = IndexMap::new();
    let mut result_var: Option<String> = None;

    for (index, raw_line) in contents.lines().enumerate() {
        let number = index + 1;
        let Some(statement) = parse_statement(raw_line, number)? else {
            continue;
        };

        match statement {
            Statement::Construct { var, kind } => {
                let kind = WidgetKind::from_name(&kind).ok_or_else(|| {
                    DesignerError::script(number, format!("'{kind}' is not a known widget kind"))
                })?;
                env.insert(var.clone(), WidgetNode::with_defaults(var, kind));
            }
            Statement::SetProperty { var, name, value } => {
                let node = env.get_mut(&var).ok_or_else(|| {
                    DesignerError::script(number, format!("'{var}' has not been constructed"))
                })?;
                apply_property(node, &name, value, number)?;
            }
            Statement::AddChild { parent, child } => {
                if !env.contains_key(&child) {
                    return Err(DesignerError::script(
                        number,
                        format!("'{child}' has not been constructed"),
                    ));
                }
                let parent_node = env.get_mut(&parent).ok_or_else(|| {
                    DesignerError::script(number, format!("'{parent}' has not been constructed"))
                })?;
                if !parent_node.kind.is_container() {
                    return Err(DesignerError::script(
                        number,
                        format!("'{parent}' is not a container"),
                    ));
                }
                parent_node.children.push(child);
            }
            Statement::Expr { var } => {
                if result_var.is_none() {
                    result_var = Some(var);
                }
            }
        }
    }

    let root_var = result_var.ok_or_else(|| {
        DesignerError::GenericError(
            "the script does not end with an expression yielding the root widget".to_owned(),
        )
    })?;

    let is_container = env
        .get(&root_var)
        .map(|node| node.kind.is_container())
        .unwrap_or(false);
    if !is_container {
        return Err(DesignerError::GenericError(format!(
            "'{root_var}' is not a container that can act as the window"
        )));
    }

    let mut nodes = IndexMap::new();
    let root_id = collect(&root_var, &mut env, &mut nodes)?;

    // Edge-relative constraints must point at widgets that made it into the
    // tree; dangling references are a load-time error.
    for node in nodes.values() {
        for pos in [&node.x, &node.y] {
            if let Pos::Edge(_, target) = pos {
                if !nodes.contains_key(target) {
                    return Err(DesignerError::UnknownReference(target.clone()));
                }
            }
        }
    }

    Ok(WidgetTree::from_loaded(root_id, nodes))
}

/// Move a node and its subtree out of the interpreter environment, in
/// depth-first pre-order, rewriting child links to final ids.
fn collect(
    var: &str, env: &mut IndexMap<String, WidgetNode>, out: &mut IndexMap<String, WidgetNode>,
) -> Result<String> {
    let mut node = env.shift_remove(var).ok_or_else(|| {
        DesignerError::GenericError(format!("'{var}' was never constructed, or added twice"))
    })?;

    let child_vars = std::mem::take(&mut node.children);
    let id = node.id.clone();
    out.insert(id.clone(), node);

    let mut child_ids = Vec::with_capacity(child_vars.len());
    for child_var in child_vars {
        let child_id = collect(&child_var, env, out)?;
        if let Some(child) = out.get_mut(&child_id) {
            child.parent = Some(id.clone());
        }
        child_ids.push(child_id);
    }

    if let Some(node) = out.get_mut(&id) {
        node.children = child_ids;
    }

    Ok(id)
}

fn apply_property(node: &mut WidgetNode, name: &str, value: Literal, line: usize) -> Result<()> {
    match name {
        "Id" => match value {
            Literal::Str(id) => node.id = id,
            _ => return Err(type_error(line, name)),
        },
        "X" => node.x = coerce_pos(value, line)?,
        "Y" => node.y = coerce_pos(value, line)?,
        "Width" => node.width = coerce_dim(value, line)?,
        "Height" => node.height = coerce_dim(value, line)?,
        _ => {
            let spec = node.kind.spec(name).ok_or_else(|| {
                DesignerError::script(
                    line,
                    format!("'{name}' is not a property of {}", node.kind.name()),
                )
            })?;

            let value = match (spec.kind, value) {
                (PropertyKind::Text, Literal::Str(text)) => PropertyValue::Text(text),
                (PropertyKind::Bool, Literal::Bool(value)) => PropertyValue::Bool(value),
                (PropertyKind::Enum(choices), Literal::Str(symbol)) => {
                    enum_from_symbol(choices, &symbol).ok_or_else(|| {
                        DesignerError::script(
                            line,
                            format!("'{symbol}' is not a value of '{name}'"),
                        )
                    })?
                }
                (PropertyKind::StringList, Literal::List(lines)) => {
                    PropertyValue::StringList(lines)
                }
                (PropertyKind::ItemList, Literal::List(lines)) => PropertyValue::ItemList(lines),
                (PropertyKind::Number, Literal::Number(value)) => PropertyValue::Number(value),
                _ => return Err(type_error(line, name)),
            };

            node.props.insert(spec.name, value);
        }
    }

    Ok(())
}

fn type_error(line: usize, name: &str) -> DesignerError {
    DesignerError::script(line, format!("the value does not fit property '{name}'"))
}

fn coerce_pos(value: Literal, line: usize) -> Result<Pos> {
    match value {
        Literal::Pos(pos) => Ok(pos),
        // Bare numbers convert implicitly, like `Window.X = 0`.
        Literal::Number(value) => Ok(Pos::At(value as i32)),
        _ => Err(DesignerError::script(
            line,
            "expected a position constraint",
        )),
    }
}

fn coerce_dim(value: Literal, line: usize) -> Result<Dim> {
    match value {
        Literal::Dim(dim) => Ok(dim),
        Literal::Number(value) => Ok(Dim::Sized(value as i32)),
        _ => Err(DesignerError::script(line, "expected a size constraint")),
    }
}

/// Parse one line into a statement. Blank lines and comments are skipped.
pub fn parse_statement(line: &str, number: usize) -> Result<Option<Statement>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    if let Some((lhs, rhs)) = line.split_once('=') {
        let (lhs, rhs) = (lhs.trim(), rhs.trim());

        if let Some((var, name)) = lhs.split_once('.') {
            if !is_ident(var) || !is_ident(name) {
                return Err(unrecognized(number, line));
            }
            let value = parse_literal(rhs, number)?;
            return Ok(Some(Statement::SetProperty {
                var: var.to_owned(),
                name: name.to_owned(),
                value,
            }));
        }

        if !is_ident(lhs) {
            return Err(unrecognized(number, line));
        }
        let Some(kind) = rhs.strip_suffix("::new()") else {
            return Err(DesignerError::script(
                number,
                format!("expected a constructor, found '{rhs}'"),
            ));
        };
        return Ok(Some(Statement::Construct {
            var: lhs.to_owned(),
            kind: kind.trim().to_owned(),
        }));
    }

    if let Some((parent, rest)) = line.split_once(".Add(") {
        let Some(child) = rest.strip_suffix(')') else {
            return Err(unrecognized(number, line));
        };
        if !is_ident(parent) || !is_ident(child.trim()) {
            return Err(unrecognized(number, line));
        }
        return Ok(Some(Statement::AddChild {
            parent: parent.to_owned(),
            child: child.trim().to_owned(),
        }));
    }

    if is_ident(line) {
        return Ok(Some(Statement::Expr {
            var: line.to_owned(),
        }));
    }

    Err(unrecognized(number, line))
}

fn unrecognized(number: usize, line: &str) -> DesignerError {
    DesignerError::script(number, format!("unrecognized statement '{line}'"))
}

fn is_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_literal(s: &str, number: usize) -> Result<Literal> {
    if s.starts_with('\'') {
        let (text, rest) = parse_quoted(s)
            .ok_or_else(|| DesignerError::script(number, format!("malformed string '{s}'")))?;
        if !rest.trim().is_empty() {
            return Err(DesignerError::script(
                number,
                format!("trailing input after string '{s}'"),
            ));
        }
        return Ok(Literal::Str(text));
    }

    match s {
        "true" => return Ok(Literal::Bool(true)),
        "false" => return Ok(Literal::Bool(false)),
        _ => {}
    }

    if let Some(inner) = s.strip_prefix('[') {
        let inner = inner
            .strip_suffix(']')
            .ok_or_else(|| DesignerError::script(number, format!("malformed list '{s}'")))?;
        return parse_list(inner, number);
    }

    if s.starts_with("Pos::") {
        return Pos::parse(s).map(Literal::Pos).ok_or_else(|| {
            DesignerError::script(number, format!("malformed position constraint '{s}'"))
        });
    }

    if s.starts_with("Dim::") {
        return Dim::parse(s).map(Literal::Dim).ok_or_else(|| {
            DesignerError::script(number, format!("malformed size constraint '{s}'"))
        });
    }

    s.parse::<f32>()
        .map(Literal::Number)
        .map_err(|_| DesignerError::script(number, format!("unrecognized literal '{s}'")))
}

fn parse_list(mut inner: &str, number: usize) -> Result<Literal> {
    let mut items = Vec::new();

    loop {
        inner = inner.trim_start();
        if inner.is_empty() {
            break;
        }

        let (item, rest) = parse_quoted(inner).ok_or_else(|| {
            DesignerError::script(number, format!("malformed list entry near '{inner}'"))
        })?;
        items.push(item);

        let rest = rest.trim_start();
        match rest.strip_prefix(',') {
            Some(next) => inner = next,
            None => {
                if !rest.is_empty() {
                    return Err(DesignerError::script(
                        number,
                        format!("expected ',' near '{rest}'"),
                    ));
                }
                break;
            }
        }
    }

    Ok(Literal::List(items))
}

/// Parse a leading single-quoted string, returning it and the remainder.
fn parse_quoted(s: &str) -> Option<(String, &str)> {
    let mut chars = s.char_indices();
    let (_, quote) = chars.next()?;
    if quote != '\'' {
        return None;
    }

    let mut out = String::new();
    let mut escaped = false;
    for (index, c) in chars {
        if escaped {
            match c {
                'n' => out.push('\n'),
                other => out.push(other),
            }
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '\'' {
            return Some((out, &s[index + 1..]));
        } else {
            out.push(c);
        }
    }

    None
}
