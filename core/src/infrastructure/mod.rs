pub mod account;
pub mod badge;
pub mod db;
pub mod health;
pub mod identity;
pub mod library;
pub mod llm;
pub mod object_storage;
pub mod user_recipe;

/// `%term%` for ILIKE, with the wildcard characters of `term` escaped.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn escapes_wildcards() {
        assert_eq!(like_pattern(" bolo "), "%bolo%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }
}
