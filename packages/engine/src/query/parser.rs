//! Query expression compiler

use super::ast::{Axis, CompiledQuery, Step, StepTest};
use crate::error::{QueryResult, invalid_query_error};
use crate::path::parser::scan_quoted;

impl CompiledQuery {
    /// Compiles a query expression
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::QueryError`] if the expression does not start
    /// with `/`, ends in a bare `//`, or carries a filter other than an
    /// integer position.
    pub fn compile(expression: &str) -> QueryResult<Self> {
        if !expression.starts_with('/') {
            return Err(invalid_query_error(
                expression,
                "expressions must start with '/'",
                0,
            ));
        }
        if expression == "/" {
            return Ok(Self {
                expression: expression.to_owned(),
                steps: Vec::new(),
            });
        }

        let mut steps = Vec::new();
        let mut pos = 0;

        while pos < expression.len() {
            let axis = if expression[pos..].starts_with("//") {
                pos += 2;
                Axis::DescendantOrSelf
            } else {
                pos += 1;
                Axis::Child
            };

            let rest = &expression[pos..];
            if rest.is_empty() && axis == Axis::DescendantOrSelf {
                return Err(invalid_query_error(expression, "expected step after '//'", pos));
            }

            let test = if rest.starts_with('"')
                && let Some(close) = scan_quoted(expression, pos, &['/', '['])
            {
                let key = expression[pos + 1..close].to_owned();
                pos = close + 1;
                StepTest::Key(key)
            } else {
                let end = rest.find(['/', '[']).unwrap_or(rest.len());
                let name = &rest[..end];
                pos += end;
                if name == "*" {
                    StepTest::Wildcard
                } else {
                    StepTest::Key(name.to_owned())
                }
            };

            let position = if expression[pos..].starts_with('[') {
                let (position, consumed) = parse_position(expression, pos)?;
                pos += consumed;
                Some(position)
            } else {
                None
            };

            if pos < expression.len() && !expression[pos..].starts_with('/') {
                return Err(invalid_query_error(expression, "expected '/' after step", pos));
            }

            steps.push(Step {
                axis,
                test,
                position,
            });
        }

        Ok(Self {
            expression: expression.to_owned(),
            steps,
        })
    }
}

/// Parses `[n]` at `open`, returning the position and the bytes consumed
fn parse_position(expression: &str, open: usize) -> QueryResult<(i64, usize)> {
    let body = &expression[open + 1..];
    let close = body
        .find(']')
        .ok_or_else(|| invalid_query_error(expression, "unterminated filter", open))?;
    let text = body[..close].trim();
    let position = text.parse::<i64>().map_err(|_| {
        invalid_query_error(
            expression,
            format!("unsupported filter '[{text}]': only integer positions are supported"),
            open + 1,
        )
    })?;
    Ok((position, close + 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> StepTest {
        StepTest::Key(name.to_owned())
    }

    #[test]
    fn test_compile_root() {
        let query = CompiledQuery::compile("/").expect("root query compiles");
        assert!(query.is_root());
    }

    #[test]
    fn test_compile_structural_path() {
        let query = CompiledQuery::compile("/F/*[1]").expect("structural path compiles");
        assert_eq!(
            query.steps(),
            &[
                Step {
                    axis: Axis::Child,
                    test: key("F"),
                    position: None
                },
                Step {
                    axis: Axis::Child,
                    test: StepTest::Wildcard,
                    position: Some(1)
                },
            ]
        );
    }

    #[test]
    fn test_compile_quoted_and_descendant_steps() {
        let query = CompiledQuery::compile("//\"a[0]\"[-1]/b").expect("query compiles");
        assert_eq!(query.steps().len(), 2);
        assert_eq!(query.steps()[0].axis, Axis::DescendantOrSelf);
        assert_eq!(query.steps()[0].test, key("a[0]"));
        assert_eq!(query.steps()[0].position, Some(-1));
        assert_eq!(query.steps()[1].test, key("b"));
    }

    #[test]
    fn test_compile_errors_carry_position() {
        let error = CompiledQuery::compile("A").expect_err("missing leading slash");
        assert_eq!(error.position(), Some(0));

        let error = CompiledQuery::compile("/a[x > 1]").expect_err("predicate filter");
        assert_eq!(error.position(), Some(3));

        assert!(CompiledQuery::compile("/a//").is_err());
        assert!(CompiledQuery::compile("/a[1").is_err());
        assert!(CompiledQuery::compile("/a[1]b").is_err());
    }
}
