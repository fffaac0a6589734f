// Small text helpers shared by the engine and any presentation layer.

/// Uppercases the first character and lowercases the remainder.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("success"), "Success");
        assert_eq!(capitalize("FAILURE"), "Failure");
        assert_eq!(capitalize("f"), "F");
        assert_eq!(capitalize(""), "");
    }
}
