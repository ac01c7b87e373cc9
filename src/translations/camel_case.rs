/// Convert a namespace or key cell into camel case.
///
/// A run of separators (whitespace, `-`, `_`) followed by a word character
/// (ASCII letter or digit) is dropped and that character is uppercased. Runs
/// that are not followed by a word character, including trailing ones, are
/// kept as they are. Every other character passes through unchanged.
///
/// # Examples
///
/// ```
/// use sheetlocales::translations::to_camel_case;
///
/// assert_eq!(to_camel_case("sub-title"), "subTitle");
/// assert_eq!(to_camel_case("sign out_button"), "signOutButton");
/// assert_eq!(to_camel_case("trailing-"), "trailing-");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut pending = String::new();

    for c in input.chars() {
        if is_separator(c) {
            pending.push(c);
            continue;
        }

        if !pending.is_empty() {
            if c.is_ascii_alphanumeric() {
                pending.clear();
                output.push(c.to_ascii_uppercase());
                continue;
            }
            output.push_str(&pending);
            pending.clear();
        }
        output.push(c);
    }

    output.push_str(&pending);
    output
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}
