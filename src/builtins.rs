//! Built-in branch predicates and the table they are registered from.
//!
//! Every predicate takes the branch name and the call's arguments. String
//! comparisons are case-sensitive. An empty branch name fails every predicate
//! except `equalTo('')`.
//!
//! String arguments of the matching predicates may contain glob tokens:
//! `#` matches one or more digits and `*` matches one or more of any character.

use regex::Regex;

use crate::types::{Args, DataType, FunctionSignature};

const STRING: &[DataType] = &[DataType::String];
const NUMBER: &[DataType] = &[DataType::Number];
const STRING_NUMBER: &[DataType] = &[DataType::String, DataType::Number];
const STRING_STRING: &[DataType] = &[DataType::String, DataType::String];
const NUMBER_NUMBER: &[DataType] = &[DataType::Number, DataType::Number];
const NUMBER_STRING: &[DataType] = &[DataType::Number, DataType::String];

/// One entry per overload, in registration order.
pub(crate) const TABLE: &[FunctionSignature] = &[
    FunctionSignature::new("equalTo", &["value"], STRING, equal_to),
    FunctionSignature::new("contains", &["value"], STRING, contains),
    FunctionSignature::new("notContains", &["value"], STRING, not_contains),
    FunctionSignature::new("startsWith", &["value"], STRING, starts_with),
    FunctionSignature::new("notStartsWith", &["value"], STRING, not_starts_with),
    FunctionSignature::new("endsWith", &["value"], STRING, ends_with),
    FunctionSignature::new("notEndsWith", &["value"], STRING, not_ends_with),
    FunctionSignature::new("existsTotal", &["value", "total"], STRING_NUMBER, exists_total),
    FunctionSignature::new("existsLessThan", &["value", "total"], STRING_NUMBER, exists_less_than),
    FunctionSignature::new(
        "existsGreaterThan",
        &["value", "total"],
        STRING_NUMBER,
        exists_greater_than,
    ),
    FunctionSignature::new("lenLessThan", &["length"], NUMBER, len_less_than),
    FunctionSignature::new("lenGreaterThan", &["length"], NUMBER, len_greater_than),
    FunctionSignature::new("isBefore", &["first", "second"], STRING_STRING, is_before),
    FunctionSignature::new("isAfter", &["first", "second"], STRING_STRING, is_after),
    FunctionSignature::new("isCharNum", &["position"], NUMBER, char_is_num),
    FunctionSignature::new("charIsNum", &["position"], NUMBER, char_is_num),
    FunctionSignature::new("isSectionNum", &["start", "end"], NUMBER_NUMBER, section_is_num),
    FunctionSignature::new(
        "isSectionNum",
        &["start", "upToChar"],
        NUMBER_STRING,
        section_is_num_until,
    ),
    FunctionSignature::new("allUpperCase", &[], &[], all_upper_case),
    FunctionSignature::new("allLowerCase", &[], &[], all_lower_case),
];

// -- Glob matching ----------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Anchor {
    Whole,
    Start,
    End,
    Anywhere,
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(|c: char| c == '#' || c == '*')
}

fn glob_regex(pattern: &str, anchor: Anchor) -> Option<Regex> {
    let mut source = String::new();
    if matches!(anchor, Anchor::Whole | Anchor::Start) {
        source.push('^');
    }
    for c in pattern.chars() {
        match c {
            '#' => source.push_str(r"\d+"),
            '*' => source.push_str(".+"),
            other => source.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    if matches!(anchor, Anchor::Whole | Anchor::End) {
        source.push('$');
    }
    Regex::new(&source).ok()
}

fn glob_match(branch: &str, pattern: &str, anchor: Anchor) -> Option<bool> {
    if is_glob(pattern) {
        return glob_regex(pattern, anchor).map(|re| re.is_match(branch));
    }
    Some(match anchor {
        Anchor::Whole => branch == pattern,
        Anchor::Start => branch.starts_with(pattern),
        Anchor::End => branch.ends_with(pattern),
        Anchor::Anywhere => branch.contains(pattern),
    })
}

fn non_empty(branch: &str) -> Option<&str> {
    (!branch.is_empty()).then_some(branch)
}

// -- Text predicates --------------------------------------------------------

fn equal_to(branch: &str, args: &Args<'_>) -> Option<bool> {
    let value = args.string(0)?;
    if branch.is_empty() || value.is_empty() {
        return Some(branch.is_empty() && value.is_empty());
    }
    glob_match(branch, value, Anchor::Whole)
}

fn contains(branch: &str, args: &Args<'_>) -> Option<bool> {
    glob_match(non_empty(branch)?, args.string(0)?, Anchor::Anywhere)
}

fn not_contains(branch: &str, args: &Args<'_>) -> Option<bool> {
    contains(branch, args).map(|found| !found)
}

fn starts_with(branch: &str, args: &Args<'_>) -> Option<bool> {
    glob_match(non_empty(branch)?, args.string(0)?, Anchor::Start)
}

fn not_starts_with(branch: &str, args: &Args<'_>) -> Option<bool> {
    starts_with(branch, args).map(|found| !found)
}

fn ends_with(branch: &str, args: &Args<'_>) -> Option<bool> {
    glob_match(non_empty(branch)?, args.string(0)?, Anchor::End)
}

fn not_ends_with(branch: &str, args: &Args<'_>) -> Option<bool> {
    ends_with(branch, args).map(|found| !found)
}

// -- Occurrence counts ------------------------------------------------------

fn occurrences(branch: &str, args: &Args<'_>) -> Option<(usize, usize)> {
    let branch = non_empty(branch)?;
    let value = args.string(0)?;
    let total = usize::try_from(args.number(1)?).ok()?;
    if value.is_empty() {
        return None;
    }
    let re = Regex::new(&regex::escape(value)).ok()?;
    Some((re.find_iter(branch).count(), total))
}

fn exists_total(branch: &str, args: &Args<'_>) -> Option<bool> {
    occurrences(branch, args).map(|(found, total)| found == total)
}

fn exists_less_than(branch: &str, args: &Args<'_>) -> Option<bool> {
    occurrences(branch, args).map(|(found, total)| found < total)
}

fn exists_greater_than(branch: &str, args: &Args<'_>) -> Option<bool> {
    occurrences(branch, args).map(|(found, total)| found > total)
}

// -- Length and ordering ----------------------------------------------------

fn length(branch: &str, args: &Args<'_>) -> Option<(usize, usize)> {
    let branch = non_empty(branch)?;
    let limit = usize::try_from(args.number(0)?).ok()?;
    Some((branch.chars().count(), limit))
}

fn len_less_than(branch: &str, args: &Args<'_>) -> Option<bool> {
    length(branch, args).map(|(len, limit)| len < limit)
}

fn len_greater_than(branch: &str, args: &Args<'_>) -> Option<bool> {
    length(branch, args).map(|(len, limit)| len > limit)
}

fn first_positions(branch: &str, args: &Args<'_>) -> Option<(usize, usize)> {
    let branch = non_empty(branch)?;
    let first = branch.find(args.string(0)?)?;
    let second = branch.find(args.string(1)?)?;
    Some((first, second))
}

fn is_before(branch: &str, args: &Args<'_>) -> Option<bool> {
    first_positions(branch, args).map(|(first, second)| first < second)
}

fn is_after(branch: &str, args: &Args<'_>) -> Option<bool> {
    first_positions(branch, args).map(|(first, second)| first > second)
}

// -- Digit checks -----------------------------------------------------------

fn char_is_num(branch: &str, args: &Args<'_>) -> Option<bool> {
    let position = usize::try_from(args.number(0)?).ok()?;
    let c = non_empty(branch)?.chars().nth(position)?;
    Some(c.is_ascii_digit())
}

fn section_is_num(branch: &str, args: &Args<'_>) -> Option<bool> {
    let chars: Vec<char> = non_empty(branch)?.chars().collect();
    let start = usize::try_from(args.number(0)?).ok()?;
    let end = usize::try_from(args.number(1)?).ok()?.min(chars.len() - 1);
    if start > end {
        return None;
    }
    Some(chars[start..=end].iter().all(char::is_ascii_digit))
}

fn section_is_num_until(branch: &str, args: &Args<'_>) -> Option<bool> {
    let start = usize::try_from(args.number(0)?).ok()?;
    let delimiter = args.string(1)?;
    if delimiter.is_empty() {
        return None;
    }
    let tail: String = non_empty(branch)?.chars().skip(start).collect();
    let section = &tail[..tail.find(delimiter)?];
    Some(!section.is_empty() && section.chars().all(|c| c.is_ascii_digit()))
}

// -- Letter case ------------------------------------------------------------

fn letters_all(branch: &str, pred: fn(&char) -> bool) -> Option<bool> {
    let mut letters = non_empty(branch)?.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek()?;
    Some(letters.all(|c| pred(&c)))
}

fn all_upper_case(branch: &str, _args: &Args<'_>) -> Option<bool> {
    letters_all(branch, |c| c.is_uppercase())
}

fn all_lower_case(branch: &str, _args: &Args<'_>) -> Option<bool> {
    letters_all(branch, |c| c.is_lowercase())
}
