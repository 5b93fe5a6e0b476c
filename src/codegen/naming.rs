//! Identifier helpers for generated C#.

/// Converts a name to PascalCase.
///
/// Words are separated by whitespace, `-` or `_`. The first character of each
/// word is upper-cased and the rest is kept as written, so `onNewItem` becomes
/// `OnNewItem` and `HTTP` stays `HTTP`.
pub fn to_pascal_case(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Removes every character outside `[A-Za-z0-9_]`.
pub fn remove_invalid_characters(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Makes a logic app name usable as a C# namespace segment.
pub fn sanitize_namespace(name: &str) -> String {
    name.replace('-', "_")
}
