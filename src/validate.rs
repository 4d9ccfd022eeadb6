use crate::catalog::RequestType;

/// Accepts a generated payload iff it still has content after trimming.
/// Recognition of the request type is already guaranteed by the enum, so
/// emptiness is the only thing left to check; the length caps live in the
/// prompt wording and are not enforced here.
pub fn validate(_request_type: RequestType, text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_text() {
        assert!(!validate(RequestType::Intro, ""));
    }

    #[test]
    fn test_rejects_whitespace_only_text() {
        assert!(!validate(RequestType::Damage, " \n\t "));
    }

    #[test]
    fn test_accepts_real_text_for_every_type() {
        for ty in RequestType::ALL {
            assert!(validate(ty, "GRONKARR: algo aconteceu"));
        }
    }
}
