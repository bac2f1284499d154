use uuid::Uuid;

/// Derive a short human-friendly code from a fresh random UUID: the first
/// `letters_count` ASCII letters (uppercased) followed by the first
/// `digits_count` digits of its hyphenated form. Not guaranteed unique at
/// this length; the output is shorter in the unlikely case the UUID text
/// holds fewer letters or digits than requested.
pub fn generate_custom_uuid(letters_count: usize, digits_count: usize) -> String {
    let id = Uuid::new_v4().to_string();

    let letters = id
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(letters_count)
        .map(|letter| letter.to_ascii_uppercase())
        .collect::<String>();
    let digits = id
        .chars()
        .filter(char::is_ascii_digit)
        .take(digits_count)
        .collect::<String>();

    format!("{letters}{digits}")
}

#[cfg(test)]
mod tests {
    use super::generate_custom_uuid;

    #[test]
    fn two_letters_then_six_digits() {
        for _ in 0..16 {
            let id = generate_custom_uuid(2, 6);

            assert_eq!(id.len(), 8);
            assert!(id[..2].chars().all(|c| c.is_ascii_uppercase()));
            assert!(id[2..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn zero_counts_yield_an_empty_code() {
        assert_eq!(generate_custom_uuid(0, 0), "");
    }

    #[test]
    fn codes_differ_across_calls() {
        let first = generate_custom_uuid(2, 12);
        let second = generate_custom_uuid(2, 12);

        assert_ne!(first, second);
    }
}
