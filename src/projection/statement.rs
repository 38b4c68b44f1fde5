//! Statement projector

use tracing::debug;

use super::branches::collect_branches;
use super::errors::{Malformed, ProjectionError};
use super::Projector;
use crate::language::*;
use crate::presentation::{Node, Syntax, Tag};

impl<'i> Projector<'i> {
    pub fn project_statement(&mut self, statement: &'i Statement) -> Result<Node, ProjectionError> {
        let syntax = Syntax::Statement(statement);

        match statement {
            Statement::FunctionDef(definition) => self.project_function(statement, definition),
            Statement::ClassDef {
                name,
                bases,
                keywords,
                body,
                decorator_list,
                type_params,
            } => {
                if !decorator_list.is_empty() {
                    return Err(self.reject("ClassDef", Some("decorators")));
                }
                if !type_params.is_empty() {
                    return Err(self.reject("ClassDef", Some("type parameters")));
                }

                let mut node = self.register(syntax, Node::container(&[Tag::ClassDef]));

                let mut title = Node::container(&[Tag::Row]);
                title.append(Node::leaf(&[Tag::Symbol], name.as_str()));
                if !bases.is_empty() || !keywords.is_empty() {
                    let mut arguments = Node::container(&[Tag::CommaSep, Tag::Row]);
                    for base in bases {
                        let base = self.project_expression(base)?;
                        arguments.append(Self::wrapped(&[Tag::Row, Tag::Gap], base));
                    }
                    for keyword in keywords {
                        let keyword = self.project_keyword(keyword)?;
                        arguments.append(Self::wrapped(&[Tag::Row, Tag::Gap], keyword));
                    }
                    title.append(Self::wrapped(&[Tag::Parens, Tag::Row], arguments));
                }

                node.append(Self::wrapped(
                    &[Tag::Row, Tag::ColonSuffix],
                    Self::wrapped(&[Tag::ClassPrefix, Tag::Row, Tag::Gap], title),
                ));
                node.append(self.project_block(body)?);
                Ok(node)
            }
            Statement::Return { value } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::ReturnPrefix, Tag::Row, Tag::Gap]),
                );
                if let Some(value) = value {
                    node.append(self.project_expression(value)?);
                }
                Ok(node)
            }
            Statement::Delete { targets } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::DelPrefix, Tag::Row, Tag::Gap]),
                );
                node.append(self.project_sequence(targets)?);
                Ok(node)
            }
            Statement::Assign {
                targets,
                value,
                type_comment,
            } => {
                if type_comment.is_some() {
                    return Err(self.reject("Assign", Some("type comments")));
                }
                let [target] = targets.as_slice() else {
                    return Err(self.reject("Assign", Some("multiple targets")));
                };

                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::Assign, Tag::Row, Tag::EqualSep, Tag::Gap]),
                );
                let target = self.project_expression(target)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], target));
                let value = self.project_expression(value)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], value));
                Ok(node)
            }
            Statement::AugAssign { target, op, value } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::AugAssign, Tag::Row, Tag::Gap])
                        .with_operator(op.symbol()),
                );
                let target = self.project_expression(target)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], target));
                let value = self.project_expression(value)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], value));
                Ok(node)
            }
            Statement::For(looping) => {
                if !looping
                    .orelse
                    .is_empty()
                {
                    return Err(self.reject("For", Some("loop else")));
                }
                if looping
                    .type_comment
                    .is_some()
                {
                    return Err(self.reject("For", Some("type comments")));
                }

                let mut node = self.register(syntax, Node::container(&[Tag::For]));
                let target = self.project_expression(&looping.target)?;
                let iter = self.project_expression(&looping.iter)?;
                node.append(Self::wrapped(
                    &[Tag::Row, Tag::ColonSuffix],
                    Node::container(&[Tag::ForPrefix, Tag::InSep, Tag::Row, Tag::Gap])
                        .with(Self::wrapped(&[Tag::Row], target))
                        .with(Self::wrapped(&[Tag::Row], iter)),
                ));
                node.append(self.project_block(&looping.body)?);
                Ok(node)
            }
            Statement::While { test, body, orelse } => {
                if !orelse.is_empty() {
                    return Err(self.reject("While", Some("loop else")));
                }

                let mut node = self.register(syntax, Node::container(&[Tag::While]));
                let test = self.project_expression(test)?;
                node.append(Self::wrapped(
                    &[Tag::Row, Tag::ColonSuffix],
                    Self::wrapped(&[Tag::WhilePrefix, Tag::Row, Tag::Gap], test),
                ));
                node.append(self.project_block(body)?);
                Ok(node)
            }
            Statement::If { .. } => self.project_conditional(statement),
            Statement::With(with) => {
                if with
                    .type_comment
                    .is_some()
                {
                    return Err(self.reject("With", Some("type comments")));
                }
                let [item] = with
                    .items
                    .as_slice()
                else {
                    return Err(self.reject("With", Some("multiple context managers")));
                };

                let mut node = self.register(syntax, Node::container(&[Tag::With]));
                let item = self.project_with_item(item)?;
                node.append(Self::wrapped(
                    &[Tag::Row, Tag::ColonSuffix],
                    Self::wrapped(&[Tag::WithPrefix, Tag::Row, Tag::Gap], item),
                ));
                node.append(self.project_block(&with.body)?);
                Ok(node)
            }
            Statement::Match { subject, cases } => {
                let mut node = self.register(syntax, Node::container(&[Tag::Match]));
                let subject = self.project_expression(subject)?;
                node.append(Self::wrapped(
                    &[Tag::Row, Tag::ColonSuffix],
                    Self::wrapped(&[Tag::MatchPrefix, Tag::Row, Tag::Gap], subject),
                ));

                let mut block = Node::container(&[Tag::Block]);
                for case in cases {
                    block.append(self.project_case(case)?);
                }
                node.append(block);
                Ok(node)
            }
            Statement::Raise { exc, cause } => {
                if cause.is_some() {
                    return Err(self.reject("Raise", Some("exception chaining")));
                }

                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::RaisePrefix, Tag::Row, Tag::Gap]),
                );
                if let Some(exc) = exc {
                    node.append(self.project_expression(exc)?);
                }
                Ok(node)
            }
            Statement::Assert { test, msg } => {
                if msg.is_some() {
                    return Err(self.reject("Assert", Some("messages")));
                }

                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::AssertPrefix, Tag::Row, Tag::Gap]),
                );
                node.append(self.project_expression(test)?);
                Ok(node)
            }
            Statement::Import { names } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::Import, Tag::ImportPrefix, Tag::Row]),
                );
                node.append(self.project_aliases(names));
                Ok(node)
            }
            Statement::ImportFrom {
                module,
                names,
                level,
            } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::ImportFrom, Tag::Row, Tag::Gap]),
                );

                let mut source = Node::container(&[Tag::Row]);
                if *level > 0 {
                    source.append(Node::leaf(&[Tag::Symbol], ".".repeat(*level as usize)));
                }
                if let Some(module) = module {
                    source.append(Node::leaf(&[Tag::Symbol], module.as_str()));
                }
                node.append(Self::wrapped(
                    &[Tag::FromPrefix, Tag::Row, Tag::Gap],
                    source,
                ));

                let aliases = self.project_aliases(names);
                node.append(Self::wrapped(
                    &[Tag::ImportPrefix, Tag::Row, Tag::Gap],
                    aliases,
                ));
                Ok(node)
            }
            Statement::Global { names } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::GlobalPrefix, Tag::Row, Tag::Gap]),
                );
                node.append(Self::project_names(names));
                Ok(node)
            }
            Statement::Nonlocal { names } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::NonlocalPrefix, Tag::Row, Tag::Gap]),
                );
                node.append(Self::project_names(names));
                Ok(node)
            }
            Statement::Expr { value } => {
                let mut node = self.register(syntax, Node::container(&[Tag::Expression, Tag::Row]));
                node.append(self.project_expression(value)?);
                Ok(node)
            }
            Statement::Pass => Ok(self.register(syntax, Node::leaf(&[Tag::Keyword], "pass"))),
            Statement::Break => Ok(self.register(syntax, Node::leaf(&[Tag::Keyword], "break"))),
            Statement::Continue => {
                Ok(self.register(syntax, Node::leaf(&[Tag::Keyword], "continue")))
            }
            Statement::AsyncFunctionDef(_)
            | Statement::TypeAlias { .. }
            | Statement::AnnAssign { .. }
            | Statement::AsyncFor(_)
            | Statement::AsyncWith(_)
            | Statement::Try(_)
            | Statement::TryStar(_) => Err(self.reject(statement.kind(), None)),
        }
    }

    /// A statement sequence, one child per statement in source order.
    pub fn project_block(&mut self, body: &'i [Statement]) -> Result<Node, ProjectionError> {
        let mut block = Node::container(&[Tag::Block]);
        for statement in body {
            block.append(self.project_statement(statement)?);
        }
        Ok(block)
    }

    /// A bare string statement shown line by line as text, between triple
    /// quote guards.
    pub(super) fn project_docstring(&mut self, statement: &'i Statement, text: &str) -> Node {
        let mut node = self.register(
            Syntax::Statement(statement),
            Node::container(&[Tag::Docstring]),
        );

        let lines: Vec<&str> = text
            .split('\n')
            .collect();
        let last = lines.len() - 1;

        for (index, line) in lines
            .iter()
            .enumerate()
        {
            let mut line = line.to_string();
            if index == 0 {
                line.insert_str(0, "\"\"\"");
            }
            if index == last {
                line.push_str("\"\"\"");
            }

            let child = if line.is_empty() {
                Node::leaf(&[Tag::Line, Tag::EmptyLine], "")
            } else {
                Node::leaf(
                    &[Tag::Line],
                    self.encoder
                        .verbatim(&line),
                )
            };
            node.append(child);
        }

        node
    }

    /// An `if` with all of its `elif` and `else` branches as one flat run of
    /// header and block pairs.
    fn project_conditional(&mut self, statement: &'i Statement) -> Result<Node, ProjectionError> {
        let chain = collect_branches(statement)?;

        let mut node = self.register(Syntax::Statement(statement), Node::container(&[Tag::If]));

        for (index, branch) in chain
            .branches
            .iter()
            .enumerate()
        {
            let prefix = if index == 0 {
                Tag::IfPrefix
            } else {
                Tag::ElifPrefix
            };

            // an elif header stands for the nested If it came from
            let mut header = Node::container(&[Tag::Row, Tag::ColonSuffix]);
            if index > 0 {
                header = self.register(Syntax::Statement(branch.node), header);
            }
            let test = self.project_expression(branch.test)?;
            header.append(Self::wrapped(&[Tag::Row, Tag::Gap, prefix], test));

            node.append(header);
            node.append(self.project_block(branch.body)?);
        }

        if chain.has_else() {
            node.append(Self::wrapped(
                &[Tag::Row, Tag::ColonSuffix],
                Node::container(&[Tag::Row, Tag::Gap, Tag::ElsePrefix]),
            ));
            node.append(self.project_block(chain.otherwise)?);
        }

        debug!("Conditional projected with {} headers", chain.len());
        Ok(node)
    }

    fn project_function(
        &mut self,
        statement: &'i Statement,
        definition: &'i FunctionDef,
    ) -> Result<Node, ProjectionError> {
        const KIND: &str = "FunctionDef";

        if !definition
            .decorator_list
            .is_empty()
        {
            return Err(self.reject(KIND, Some("decorators")));
        }
        if definition
            .type_comment
            .is_some()
        {
            return Err(self.reject(KIND, Some("type comments")));
        }
        if !definition
            .type_params
            .is_empty()
        {
            return Err(self.reject(KIND, Some("type parameters")));
        }

        let arguments = &definition.args;
        if !arguments
            .posonlyargs
            .is_empty()
        {
            return Err(self.reject(KIND, Some("positional-only parameters")));
        }
        if !arguments
            .kwonlyargs
            .is_empty()
        {
            return Err(self.reject(KIND, Some("keyword-only parameters")));
        }
        if arguments
            .vararg
            .is_some()
        {
            return Err(self.reject(KIND, Some("*args parameters")));
        }
        if arguments
            .kwarg
            .is_some()
        {
            return Err(self.reject(KIND, Some("**kwargs parameters")));
        }

        let count = arguments
            .args
            .len();
        let defaults = &arguments.defaults;
        if defaults.len() > count {
            return Err(Malformed::DefaultsMismatch {
                defaults: defaults.len(),
                parameters: count,
            }
            .into());
        }
        // defaults belong to the trailing parameters
        let first_default = count - defaults.len();

        let mut node = self.register(
            Syntax::Statement(statement),
            Node::container(&[Tag::FunctionDef]),
        );

        let mut parameters = Node::container(&[Tag::CommaSep, Tag::Row]);
        for (index, arg) in arguments
            .args
            .iter()
            .enumerate()
        {
            let parameter = self.project_parameter(arg)?;
            let item = if index >= first_default {
                let default = self.project_expression(&defaults[index - first_default])?;
                Node::container(&[Tag::EqualSep, Tag::Row, Tag::Gap])
                    .with(parameter)
                    .with(Self::wrapped(&[Tag::Row, Tag::Gap], default))
            } else {
                parameter
            };
            parameters.append(Self::wrapped(&[Tag::Row, Tag::Gap], item));
        }

        let mut signature = Node::container(&[Tag::Row, Tag::Gap, Tag::ReturnTypeArrowSep]);
        signature.append(
            Node::container(&[Tag::Row])
                .with(Node::leaf(
                    &[Tag::DefPrefix, Tag::Symbol],
                    definition
                        .name
                        .as_str(),
                ))
                .with(Self::wrapped(&[Tag::Parens, Tag::Row], parameters)),
        );
        if let Some(returns) = &definition.returns {
            let returns = self.project_expression(returns)?;
            signature.append(Self::wrapped(&[Tag::Row, Tag::Gap], returns));
        }

        node.append(Self::wrapped(&[Tag::Row, Tag::ColonSuffix], signature));
        node.append(self.project_block(&definition.body)?);
        Ok(node)
    }

    fn project_parameter(&mut self, arg: &'i Arg) -> Result<Node, ProjectionError> {
        if arg
            .type_comment
            .is_some()
        {
            return Err(self.reject("arg", Some("type comments")));
        }

        let syntax = Syntax::Arg(arg);
        match &arg.annotation {
            None => Ok(self.register(
                syntax,
                Node::leaf(&[Tag::Parameter, Tag::Symbol], arg.arg.as_str()),
            )),
            Some(annotation) => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::Parameter, Tag::Row, Tag::Gap]),
                );
                node.append(Node::leaf(
                    &[Tag::ColonSuffix, Tag::Symbol],
                    arg.arg.as_str(),
                ));
                let annotation = self.project_expression(annotation)?;
                node.append(Self::wrapped(&[Tag::Row], annotation));
                Ok(node)
            }
        }
    }

    fn project_with_item(&mut self, item: &'i WithItem) -> Result<Node, ProjectionError> {
        let syntax = Syntax::WithItem(item);
        match &item.optional_vars {
            Some(name) => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::AsSep, Tag::Row, Tag::Gap]),
                );
                let context = self.project_expression(&item.context_expr)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], context));
                let name = self.project_expression(name)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], name));
                Ok(node)
            }
            None => {
                let mut node = self.register(syntax, Node::container(&[Tag::Row]));
                node.append(self.project_expression(&item.context_expr)?);
                Ok(node)
            }
        }
    }

    fn project_case(&mut self, case: &'i MatchCase) -> Result<Node, ProjectionError> {
        if case
            .guard
            .is_some()
        {
            return Err(self.reject("match_case", Some("guards")));
        }

        let mut node = self.register(Syntax::MatchCase(case), Node::container(&[Tag::Case]));
        let pattern = self.project_pattern(&case.pattern)?;
        node.append(Self::wrapped(
            &[Tag::Row, Tag::ColonSuffix],
            Self::wrapped(&[Tag::CasePrefix, Tag::Row, Tag::Gap], pattern),
        ));
        node.append(self.project_block(&case.body)?);
        Ok(node)
    }

    fn project_pattern(&mut self, pattern: &'i Pattern) -> Result<Node, ProjectionError> {
        let syntax = Syntax::Pattern(pattern);

        match pattern {
            Pattern::MatchValue { value } => {
                let mut node = self.register(syntax, Node::container(&[Tag::Row]));
                node.append(self.project_expression(value)?);
                Ok(node)
            }
            Pattern::MatchSingleton { value } => {
                let category = match value {
                    Literal::Bool(_) => Tag::Boolean,
                    _ => Tag::None,
                };
                let text = self
                    .encoder
                    .literal(value);
                Ok(self.register(syntax, Node::leaf(&[Tag::Literal, category], text)))
            }
            Pattern::MatchSequence { patterns } => {
                let mut node = self.register(syntax, Node::container(&[Tag::Brackets, Tag::Row]));
                let mut items = Node::container(&[Tag::CommaSep, Tag::Row]);
                for pattern in patterns {
                    let pattern = self.project_pattern(pattern)?;
                    items.append(Self::wrapped(&[Tag::Row, Tag::Gap], pattern));
                }
                node.append(items);
                Ok(node)
            }
            Pattern::MatchAs {
                pattern: None,
                name,
            } => {
                // a missing name is the wildcard
                let name = name
                    .as_deref()
                    .unwrap_or("_");
                Ok(self.register(syntax, Node::leaf(&[Tag::Symbol], name)))
            }
            Pattern::MatchAs {
                pattern: Some(inner),
                name,
            } => {
                let Some(name) = name else {
                    return Err(Malformed::AnonymousCapture.into());
                };

                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::AsSep, Tag::Row, Tag::Gap]),
                );
                let inner = self.project_pattern(inner)?;
                node.append(Self::wrapped(&[Tag::Row, Tag::Gap], inner));
                node.append(Self::wrapped(
                    &[Tag::Row, Tag::Gap],
                    Node::leaf(&[Tag::Symbol], name.as_str()),
                ));
                Ok(node)
            }
            Pattern::MatchOr { patterns } => {
                let mut node = self.register(
                    syntax,
                    Node::container(&[Tag::Row, Tag::Gap, Tag::PipeSep]),
                );
                for pattern in patterns {
                    let pattern = self.project_pattern(pattern)?;
                    node.append(Self::wrapped(&[Tag::Row, Tag::Gap], pattern));
                }
                Ok(node)
            }
            Pattern::MatchMapping { .. } | Pattern::MatchClass { .. } | Pattern::MatchStar { .. } => {
                Err(self.reject(pattern.kind(), None))
            }
        }
    }

    fn project_aliases(&mut self, names: &'i [Alias]) -> Node {
        let mut node = Node::container(&[Tag::Aliases, Tag::Row, Tag::CommaSep]);
        for alias in names {
            let syntax = Syntax::Alias(alias);
            let child = match &alias.asname {
                Some(asname) => {
                    let named = Node::container(&[
                        Tag::Alias,
                        Tag::NamedAlias,
                        Tag::AsSep,
                        Tag::Row,
                        Tag::Gap,
                    ]);
                    let mut named = self.register(syntax, named);
                    named.append(Self::wrapped(
                        &[Tag::Row, Tag::Gap],
                        Node::leaf(
                            &[Tag::Symbol],
                            alias
                                .name
                                .as_str(),
                        ),
                    ));
                    named.append(Self::wrapped(
                        &[Tag::Row, Tag::Gap],
                        Node::leaf(&[Tag::Symbol], asname.as_str()),
                    ));
                    named
                }
                None => self.register(
                    syntax,
                    Node::leaf(
                        &[Tag::Alias, Tag::UnnamedAlias, Tag::Symbol],
                        alias
                            .name
                            .as_str(),
                    ),
                ),
            };
            node.append(Self::wrapped(&[Tag::Row, Tag::Gap], child));
        }
        node
    }

    // bare identifiers are not nodes of the tree and get no identity
    fn project_names(names: &[String]) -> Node {
        let mut node = Node::container(&[Tag::Row, Tag::CommaSep]);
        for name in names {
            node.append(Self::wrapped(
                &[Tag::Row, Tag::Gap],
                Node::leaf(&[Tag::Symbol], name.as_str()),
            ));
        }
        node
    }
}
