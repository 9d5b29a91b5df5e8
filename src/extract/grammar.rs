use winnow::combinator::{alt, cut_err, delimited, separated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use crate::{Argument, Expression, FunctionCall, Segment};

// -- Whitespace & identifiers -----------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .context(StrContext::Expected(StrContextValue::Description(
            "function name",
        )))
        .parse_next(input)
}

// -- Arguments --------------------------------------------------------------

fn single_quoted<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('\'', take_till(0.., '\''), cut_err('\'')).parse_next(input)
}

fn double_quoted<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('"', take_till(0.., '"'), cut_err('"')).parse_next(input)
}

fn bare<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !matches!(c, ',' | '(' | ')' | '\'' | '"'))
        .map(str::trim)
        .parse_next(input)
}

fn argument(input: &mut &str) -> ModalResult<Argument> {
    ws.parse_next(input)?;
    alt((
        single_quoted.map(|s: &str| Argument::String(s.to_owned())),
        double_quoted.map(|s: &str| Argument::String(s.to_owned())),
        bare.map(Argument::from_bare),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "argument",
    )))
    .parse_next(input)
}

fn arguments(input: &mut &str) -> ModalResult<Vec<Argument>> {
    ws.parse_next(input)?;
    if input.starts_with(')') {
        return Ok(Vec::new());
    }
    separated(1.., argument, (ws, ',')).parse_next(input)
}

// -- Calls and operators (precedence: OR < AND < call) ----------------------

fn call(input: &mut &str) -> ModalResult<FunctionCall> {
    ws.parse_next(input)?;
    let ((name, args), text) = (ident, ws, '(', cut_err(arguments), ws, cut_err(')'))
        .map(|(name, _, _, args, _, _)| (name, args))
        .with_taken()
        .parse_next(input)?;
    Ok(FunctionCall {
        name: name.to_owned(),
        args,
        text: text.to_owned(),
    })
}

fn and_segment(input: &mut &str) -> ModalResult<Segment> {
    let calls: Vec<FunctionCall> = separated(1.., call, (ws, "&&")).parse_next(input)?;
    Ok(Segment::new(calls))
}

fn or_expr(input: &mut &str) -> ModalResult<Expression> {
    let segments: Vec<Segment> = separated(1.., and_segment, (ws, "||")).parse_next(input)?;
    Ok(Expression::new(segments))
}

// -- Top-level parser -------------------------------------------------------

pub fn expression(input: &mut &str) -> ModalResult<Expression> {
    let expr = or_expr(input)?;
    ws.parse_next(input)?;
    Ok(expr)
}
