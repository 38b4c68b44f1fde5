//! Expression projector

use super::errors::{Malformed, ProjectionError};
use super::Projector;
use crate::language::*;
use crate::presentation::{Node, Syntax, Tag};

impl<'i> Projector<'i> {
    pub fn project_expression(
        &mut self,
        expression: &'i Expression,
    ) -> Result<Node, ProjectionError> {
        let syntax = Syntax::Expression(expression);

        match expression {
            Expression::BoolOp { op, values } => {
                let separator = match op {
                    BooleanOperator::And => Tag::AndSep,
                    BooleanOperator::Or => Tag::OrSep,
                };
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::Row, Tag::Gap, separator]).with_operator(op.symbol()),
                );
                for value in values {
                    let operand = self.project_expression(value)?;
                    node.append(Self::wrapped(&[Tag::Row, Tag::Gap], operand));
                }
                Ok(node)
            }
            Expression::BinOp { left, op, right } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::Operation, Tag::Row, Tag::Gap])
                        .with_operator(op.symbol()),
                );
                let left = self.project_expression(left)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], left));
                let right = self.project_expression(right)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], right));
                Ok(node)
            }
            Expression::UnaryOp { op, operand } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::Unary, Tag::Row]).with_operator(op.symbol()),
                );
                node.append(self.project_expression(operand)?);
                Ok(node)
            }
            Expression::IfExp { test, body, orelse } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::Ternary, Tag::Row, Tag::Gap]),
                );
                let body = self.project_expression(body)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], body));
                let test = self.project_expression(test)?;
                node.append(Self::wrapped(
                    &[Tag::IfPrefix, Tag::Row, Tag::Gap],
                    test,
                ));
                let orelse = self.project_expression(orelse)?;
                node.append(Self::wrapped(
                    &[Tag::ElsePrefix, Tag::Row, Tag::Gap],
                    orelse,
                ));
                Ok(node)
            }
            Expression::Dict { keys, values } => {
                if keys.len() != values.len() {
                    return Err(Malformed::DictMismatch {
                        keys: keys.len(),
                        values: values.len(),
                    }
                    .into());
                }

                let mut node = self.register(syntax, Node::container(&[Tag::Braces, Tag::Row]));
                let mut items = Node::container(&[Tag::CommaSep, Tag::Row]);
                for (key, value) in keys
                    .iter()
                    .zip(values)
                {
                    let item = match key {
                        Some(key) => {
                            let key = self.project_expression(key)?;
                            let value = self.project_expression(value)?;
                            Node::container(&[Tag::Row, Tag::Gap])
                                .with(Self::wrapped(&[Tag::Row, Tag::ColonSuffix], key))
                                .with(Self::wrapped(&[Tag::Row], value))
                        }
                        None => {
                            let value = self.project_expression(value)?;
                            Self::wrapped(
                                &[Tag::Row, Tag::Gap],
                                Self::wrapped(&[Tag::DoubleStarPrefix, Tag::Row], value),
                            )
                        }
                    };
                    items.append(item);
                }
                node.append(items);
                Ok(node)
            }
            Expression::Set { elts } => {
                let mut node = self.register(syntax, Node::container(&[Tag::Braces, Tag::Row]));
                node.append(self.project_sequence(elts)?);
                Ok(node)
            }
            Expression::ListComp { elt, generators } => {
                let mut node = self.register(syntax, Node::container(&[Tag::Brackets, Tag::Row]));
                let mut inner = Node::container(&[Tag::Row, Tag::Gap]);
                inner.append(self.project_expression(elt)?);
                for generator in generators {
                    inner.append(self.project_comprehension(generator)?);
                }
                node.append(inner);
                Ok(node)
            }
            Expression::Yield { value } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::YieldPrefix, Tag::Row, Tag::Gap]),
                );
                if let Some(value) = value {
                    node.append(self.project_expression(value)?);
                }
                Ok(node)
            }
            Expression::YieldFrom { value } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::YieldFromPrefix, Tag::Row, Tag::Gap]),
                );
                node.append(self.project_expression(value)?);
                Ok(node)
            }
            Expression::Compare {
                left,
                ops,
                comparators,
            } => {
                if ops.is_empty() || ops.len() != comparators.len() {
                    return Err(Malformed::CompareMismatch {
                        operators: ops.len(),
                        comparators: comparators.len(),
                    }
                    .into());
                }

                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::Compare, Tag::Row, Tag::Gap]),
                );
                let left = self.project_expression(left)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], left));
                for (op, comparator) in ops
                    .iter()
                    .zip(comparators)
                {
                    let comparator = self.project_expression(comparator)?;
                    node.append(
                        Node::container(&[Tag::Comparator, Tag::Row, Tag::Gap])
                            .with_operator(op.symbol())
                            .with(comparator),
                    );
                }
                Ok(node)
            }
            Expression::Call {
                func,
                args,
                keywords,
            } => {
                let mut node = self.register(syntax, Node::container(&[Tag::Call, Tag::Row]));
                node.append(self.project_expression(func)?);

                let mut arguments = Node::container(&[Tag::CommaSep, Tag::Row]);
                for arg in args {
                    let arg = self.project_expression(arg)?;
                    arguments.append(Self::wrapped(&[Tag::Row, Tag::Gap], arg));
                }
                for keyword in keywords {
                    let keyword = self.project_keyword(keyword)?;
                    arguments.append(Self::wrapped(&[Tag::Row, Tag::Gap], keyword));
                }
                node.append(Self::wrapped(&[Tag::Parens, Tag::Row], arguments));
                Ok(node)
            }
            Expression::FormattedValue {
                value,
                conversion,
                format_spec,
            } => {
                if format_spec.is_some() {
                    return Err(self.reject("FormattedValue", Some("format specifications")));
                }
                let conversion = match conversion {
                    -1 => None,
                    115 => Some(Tag::StrConversion),
                    114 => Some(Tag::ReprConversion),
                    97 => Some(Tag::AsciiConversion),
                    other => return Err(Malformed::Conversion(*other).into()),
                };

                let mut node = self.register(syntax, Node::container(&[Tag::Formatted]));
                if let Some(conversion) = conversion {
                    node.tag(conversion);
                }
                node.append(self.project_expression(value)?);
                Ok(node)
            }
            Expression::JoinedStr { values } => {
                let mut node = self.register(syntax, Node::container(&[Tag::FPrefix, Tag::Row]));
                let mut quotes = Node::container(&[Tag::Quotes, Tag::Row]);
                for piece in values {
                    let piece = match piece {
                        Expression::FormattedValue { .. } => {
                            let formatted = self.project_expression(piece)?;
                            Self::wrapped(&[Tag::Braces, Tag::Row], formatted)
                        }
                        Expression::Constant {
                            value: Literal::String(text),
                            ..
                        } => {
                            let text = self
                                .encoder
                                .fragment(text);
                            self.register(
                                Syntax::Expression(piece),
                                Node::leaf(&[Tag::Fragment], text),
                            )
                        }
                        other => return Err(Malformed::JoinedStrPiece(other.kind()).into()),
                    };
                    quotes.append(piece);
                }
                node.append(quotes);
                Ok(node)
            }
            Expression::Constant { value, kind } => {
                if kind.is_some() {
                    return Err(self.reject("Constant", Some("string prefixes")));
                }
                let category = match value {
                    Literal::String(_) => Tag::String,
                    Literal::Integer(_) | Literal::Float(_) => Tag::Number,
                    Literal::Bool(_) => Tag::Boolean,
                    Literal::None => Tag::None,
                };
                let text = self
                    .encoder
                    .literal(value);
                Ok(self.register(syntax, Node::leaf(&[Tag::Literal, category], text)))
            }
            Expression::Attribute { value, attr } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::Attribute, Tag::Row, Tag::DotSep]),
                );
                node.append(self.project_expression(value)?);
                node.append(Self::wrapped(
                    &[Tag::Row],
                    Node::leaf(&[Tag::Symbol], attr.as_str()),
                ));
                Ok(node)
            }
            Expression::Subscript { value, slice } => {
                let mut node = self.register(syntax, Node::container(&[Tag::Subscript, Tag::Row]));
                node.append(self.project_expression(value)?);
                let slice = self.project_expression(slice)?;
                node.append(Self::wrapped(&[Tag::Brackets, Tag::Row], slice));
                Ok(node)
            }
            Expression::Starred { value } => {
                let mut node = self.register(syntax, Node::container(&[Tag::StarPrefix, Tag::Row]));
                node.append(self.project_expression(value)?);
                Ok(node)
            }
            Expression::Name { id } => {
                Ok(self.register(syntax, Node::leaf(&[Tag::Symbol], id.as_str())))
            }
            Expression::List { elts } => {
                let mut node = self.register(syntax, Node::container(&[Tag::Brackets, Tag::Row]));
                node.append(self.project_sequence(elts)?);
                Ok(node)
            }
            Expression::Tuple { elts } => match elts.as_slice() {
                [] => Ok(self.register(
                    syntax,
                    Node::container(&[Tag::Parens, Tag::Row, Tag::Empty]),
                )),
                [only] => {
                    let mut node = self.register(syntax, Node::container(&[Tag::Parens, Tag::Row]));
                    let only = self.project_expression(only)?;
                    node.append(
                        Node::container(&[Tag::CommaSep, Tag::Row])
                            .with(Self::wrapped(&[Tag::Row], only))
                            .with(Node::container(&[Tag::Empty])),
                    );
                    Ok(node)
                }
                _ => {
                    let mut node = self.register(syntax, Node::container(&[Tag::Parens, Tag::Row]));
                    node.append(self.project_sequence(elts)?);
                    Ok(node)
                }
            },
            Expression::Slice { lower, upper, step } => {
                let mut node = self.register(syntax, Node::container(&[Tag::Slice]));
                let mut bounds = Node::container(&[Tag::Row, Tag::ColonSep]);
                bounds.append(self.project_bound(lower.as_deref())?);
                bounds.append(self.project_bound(upper.as_deref())?);
                if step.is_some() {
                    bounds.append(self.project_bound(step.as_deref())?);
                }
                node.append(bounds);
                Ok(node)
            }
            Expression::NamedExpr { .. }
            | Expression::Lambda { .. }
            | Expression::SetComp { .. }
            | Expression::DictComp { .. }
            | Expression::GeneratorExp { .. }
            | Expression::Await { .. } => Err(self.reject(expression.kind(), None)),
        }
    }

    /// Comma separated elements, each in its own spaced row.
    pub(super) fn project_sequence(
        &mut self,
        elements: &'i [Expression],
    ) -> Result<Node, ProjectionError> {
        let mut node = Node::container(&[Tag::CommaSep, Tag::Row]);
        for element in elements {
            let element = self.project_expression(element)?;
            node.append(Self::wrapped(&[Tag::Row, Tag::Gap], element));
        }
        Ok(node)
    }

    // an absent slice bound still holds its place between the colons
    fn project_bound(
        &mut self,
        bound: Option<&'i Expression>,
    ) -> Result<Node, ProjectionError> {
        let mut node = Node::container(&[Tag::Row]);
        if let Some(bound) = bound {
            node.append(self.project_expression(bound)?);
        }
        Ok(node)
    }

    fn project_comprehension(
        &mut self,
        generator: &'i Comprehension,
    ) -> Result<Node, ProjectionError> {
        if generator.is_async != 0 {
            return Err(self.reject("comprehension", Some("async comprehensions")));
        }

        let mut node = self.register(
            Syntax::Comprehension(generator),
            Node::container(&[Tag::Comprehension, Tag::ForPrefix, Tag::Row, Tag::Gap]),
        );

        let target = self.project_expression(&generator.target)?;
        let iter = self.project_expression(&generator.iter)?;
        node.append(
            Node::container(&[Tag::InSep, Tag::Row, Tag::Gap])
                .with(Self::wrapped(&[Tag::Row], target))
                .with(Self::wrapped(&[Tag::Row], iter)),
        );

        for condition in &generator.ifs {
            let condition = self.project_expression(condition)?;
            node.append(Self::wrapped(
                &[Tag::IfPrefix, Tag::Row, Tag::Gap],
                condition,
            ));
        }

        Ok(node)
    }

    pub(super) fn project_keyword(&mut self, keyword: &'i Keyword) -> Result<Node, ProjectionError> {
        let syntax = Syntax::Keyword(keyword);

        match &keyword.arg {
            Some(name) => {
                let mut node = self.register(syntax, Node::container(&[Tag::EqualSep, Tag::Row]));
                node.append(Node::leaf(&[Tag::Symbol], name.as_str()));
                let value = self.project_expression(&keyword.value)?;
                node.append(Self::wrapped(&[Tag::Row], value));
                Ok(node)
            }
            None => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::DoubleStarPrefix, Tag::Row]),
                );
                node.append(self.project_expression(&keyword.value)?);
                Ok(node)
            }
        }
    }
}
