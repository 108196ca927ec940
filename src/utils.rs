use std::cmp::Ordering;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

static TARGET_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Za-z0-9_.:+-]+$").unwrap());

pub fn is_valid_target_name(name: &str) -> bool {
    TARGET_NAME_REGEX.is_match(name)
}

/// The canonical "false" spellings shared with the scripting language's
/// boolean coercion.
pub fn is_off(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let upper = value.to_ascii_uppercase();
    matches!(
        upper.as_str(),
        "0" | "OFF" | "NO" | "FALSE" | "N" | "IGNORE" | "NOTFOUND"
    ) || upper.ends_with("-NOTFOUND")
}

/// Splits a `;`-list, dropping empty elements.
pub fn expand_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .filter(|element| !element.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Splits a `;`-list keeping empty elements; the empty string is the
/// empty list.
pub fn list_elements(value: &str) -> Vec<&str> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(';').collect()
}

/// Collapses `;;` runs and strips leading/trailing separators.
pub fn strip_empty_list_elements(value: &str) -> String {
    if !value.contains(";;") && !value.starts_with(';') && !value.ends_with(';') {
        return value.to_owned();
    }
    value.split(';').filter(|element| !element.is_empty()).join(";")
}

/// Parses an integer the way the C runtime does with automatic base
/// detection (`0x` hex, leading-`0` octal, decimal), extended with a
/// `0b`/`0B` binary prefix. Trailing junk and overflow are `None`.
pub fn parse_integer(text: &str) -> Option<i64> {
    let mut rest = text;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    let (digits, radix) = if let Some(stripped) =
        rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))
    {
        (stripped, 16)
    } else if let Some(stripped) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
        (stripped, 2)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (&rest[1..], 8)
    } else {
        (rest, 10)
    };

    if digits.is_empty() {
        return None;
    }
    let value = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -value } else { value })
}

fn version_component(component: &str) -> u64 {
    let digits: String = component.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Compares dot-separated version strings component-wise; missing
/// components read as zero.
pub fn version_compare(lhs: &str, rhs: &str) -> Ordering {
    let lhs: Vec<u64> = lhs.split('.').map(version_component).collect();
    let rhs: Vec<u64> = rhs.split('.').map(version_component).collect();
    for i in 0..lhs.len().max(rhs.len()) {
        let l = lhs.get(i).copied().unwrap_or(0);
        let r = rhs.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

/// Maps every byte outside `[A-Za-z0-9_]` to `_`, prefixing an
/// underscore when the result would start with a digit.
pub fn make_c_identifier(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 1);
    if input.starts_with(|c: char| c.is_ascii_digit()) {
        out.push('_');
    }
    for c in input.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    out
}

fn last_separator(path: &str) -> Option<usize> {
    path.rfind(['/', '\\'])
}

/// The component after the last path separator.
pub fn file_name_component(path: &str) -> String {
    match last_separator(path) {
        Some(pos) => path[pos + 1..].to_owned(),
        None => path.to_owned(),
    }
}

/// The directory part before the last path separator.
pub fn file_path_component(path: &str) -> String {
    match last_separator(path) {
        Some(pos) => path[..pos].to_owned(),
        None => String::new(),
    }
}
