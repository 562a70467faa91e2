//! Naming utilities
//!
//! Derives the usual identifier spellings from a user supplied name:
//!
//! | input     | file name | class name | property name | constant name |
//! |-----------|-----------|------------|---------------|---------------|
//! | `myApp`   | `my-app`  | `MyApp`    | `myApp`       | `MY_APP`      |
//! | `my-app`  | `my-app`  | `MyApp`    | `myApp`       | `MY_APP`      |

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static CAMEL_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("camel boundary regex is valid"));
static SEPARATOR_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+(.)?").expect("separator regex is valid"));
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\d]").expect("non-alphanumeric regex is valid"));

/// All spellings of a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Names {
    pub name: String,
    pub class_name: String,
    pub property_name: String,
    pub constant_name: String,
    pub file_name: String,
}

/// Compute every spelling of `name`
pub fn names(name: &str) -> Names {
    Names {
        name: name.to_string(),
        class_name: to_class_name(name),
        property_name: to_property_name(name),
        constant_name: to_constant_name(name),
        file_name: to_file_name(name),
    }
}

/// `myApp` / `my_app` / `My App` → `my-app`. Slashes are kept.
pub fn to_file_name(s: &str) -> String {
    CAMEL_BOUNDARY_RE
        .replace_all(s, "$1-$2")
        .to_lowercase()
        .replace([' ', '_'], "-")
}

/// `my-app` → `myApp`
pub fn to_property_name(s: &str) -> String {
    let joined = SEPARATOR_RUN_RE.replace_all(s, |caps: &regex::Captures<'_>| {
        caps.get(1)
            .map(|c| c.as_str().to_uppercase())
            .unwrap_or_default()
    });
    let cleaned = NON_ALNUM_RE.replace_all(&joined, "");

    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            first.to_ascii_lowercase().to_string() + chars.as_str()
        }
        _ => cleaned.into_owned(),
    }
}

/// `my-app` → `MyApp`
pub fn to_class_name(s: &str) -> String {
    let property = to_property_name(s);
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// `myApp` → `MY_APP`. Already upper-case input is kept as is.
pub fn to_constant_name(s: &str) -> String {
    let normalized = if s.to_uppercase() == s {
        s.to_string()
    } else {
        to_file_name(s)
    };
    normalized
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .to_uppercase()
}
