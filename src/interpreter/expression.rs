use super::{
    environment::Environment,
    error::{RuntimeError, RuntimeErrorKind},
    library::{Imports, Library},
    value::{Value, ValueError},
};
use crate::token::{Position, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::Minus => Some(Operator::Subtract),
            TokenKind::Star => Some(Operator::Multiply),
            TokenKind::Slash => Some(Operator::Divide),
            TokenKind::Percent => Some(Operator::Remainder),
            _ => None,
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide | Operator::Remainder => 2,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Remainder => '%',
        }
    }

    fn apply(&self, lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
        match self {
            Operator::Add => lhs.add(rhs),
            Operator::Subtract => lhs.subtract(rhs),
            Operator::Multiply => lhs.multiply(rhs),
            Operator::Divide => lhs.divide(rhs),
            Operator::Remainder => lhs.remainder(rhs),
        }
    }
}

/// Evaluates a flat token slice with an operand stack and an operator stack.
///
/// Tokens that are neither operands nor arithmetic operators (parentheses,
/// dots, keywords) are skipped.
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    pub fn evaluate(
        tokens: &[Token],
        environment: &Environment,
        imports: &Imports,
    ) -> Result<Value, RuntimeError> {
        let mut values: Vec<Value> = Vec::new();
        let mut operators: Vec<(Operator, Position)> = Vec::new();

        for token in tokens {
            if let Some(operator) = Operator::from_kind(token.kind) {
                // Equal precedence is applied first: left associative.
                while let Some(&(pending, position)) = operators.last() {
                    if pending.precedence() < operator.precedence() {
                        break;
                    }
                    operators.pop();
                    Self::apply(&mut values, pending, position)?;
                }
                operators.push((operator, token.position));
            } else if let Some(value) = Self::evaluate_operand(token, environment, imports)? {
                values.push(value);
            }
        }

        while let Some((operator, position)) = operators.pop() {
            Self::apply(&mut values, operator, position)?;
        }

        let position = tokens.first().map(|token| token.position);
        if values.len() > 1 {
            return Err(RuntimeError {
                kind: RuntimeErrorKind::DanglingOperands(values.len()),
                position,
            });
        }
        values.pop().ok_or(RuntimeError {
            kind: RuntimeErrorKind::EmptyExpression,
            position,
        })
    }

    fn apply(
        values: &mut Vec<Value>,
        operator: Operator,
        position: Position,
    ) -> Result<(), RuntimeError> {
        let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
            return Err(RuntimeError::new(
                RuntimeErrorKind::MissingOperand(operator.symbol()),
                position,
            ));
        };
        let result = operator
            .apply(&lhs, &rhs)
            .map_err(|error| RuntimeError::new(error.into(), position))?;
        values.push(result);
        Ok(())
    }

    fn evaluate_operand(
        token: &Token,
        environment: &Environment,
        imports: &Imports,
    ) -> Result<Option<Value>, RuntimeError> {
        let fail = |kind: RuntimeErrorKind| RuntimeError::new(kind, token.position);
        let literal = &token.literal;

        let value = match token.kind {
            TokenKind::NumericLiteral => literal
                .parse::<i32>()
                .map(Value::Int)
                .map_err(|_| fail(RuntimeErrorKind::InvalidIntegerLiteral(literal.clone())))?,
            TokenKind::FloatLiteral => literal
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| fail(RuntimeErrorKind::InvalidFloatLiteral(literal.clone())))?,
            TokenKind::StringLiteral => Value::Text(literal.clone()),
            TokenKind::CharLiteral => {
                let mut chars = literal.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Value::Char(c),
                    _ => Value::Text(literal.clone()),
                }
            }
            TokenKind::Boolean => Value::Bool(literal == "true"),
            TokenKind::Ident => {
                let output = Library::Output;
                if literal == output.name() {
                    let kind = if imports.contains(output) {
                        RuntimeErrorKind::LibraryAsValue(output.name())
                    } else {
                        RuntimeErrorKind::NotImported(output.name())
                    };
                    return Err(fail(kind));
                }
                environment
                    .value(literal)
                    .cloned()
                    .ok_or_else(|| fail(RuntimeErrorKind::UndefinedReference(literal.clone())))?
            }
            _ => return Ok(None),
        };
        Ok(Some(value))
    }
}
