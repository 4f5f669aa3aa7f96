use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating product SKUs
    /// Must be uppercase alphanumeric groups separated by hyphens
    /// - Valid: "KID-TEE-001", "SALE2024", "NA-JKT-RED"
    /// - Invalid: "-KID", "KID-", "kid-tee", "KID--TEE", "KID TEE"
    pub static ref SKU_REGEX: Regex = Regex::new(r"^[A-Z0-9]+(?:-[A-Z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_regex_valid() {
        assert!(SKU_REGEX.is_match("KID-TEE-001"));
        assert!(SKU_REGEX.is_match("SALE2024"));
        assert!(SKU_REGEX.is_match("NA-JKT-RED"));
        assert!(SKU_REGEX.is_match("A"));
    }

    #[test]
    fn test_sku_regex_invalid() {
        assert!(!SKU_REGEX.is_match("-KID")); // starts with hyphen
        assert!(!SKU_REGEX.is_match("KID-")); // ends with hyphen
        assert!(!SKU_REGEX.is_match("kid-tee")); // lowercase
        assert!(!SKU_REGEX.is_match("KID--TEE")); // double hyphen
        assert!(!SKU_REGEX.is_match("KID TEE")); // space
        assert!(!SKU_REGEX.is_match("")); // empty
    }
}
