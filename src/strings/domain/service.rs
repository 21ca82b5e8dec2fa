use async_trait::async_trait;
use crate::core::errors::{ServiceError, ServiceResult};
use crate::strings::domain::StringService;

pub(crate) struct StringServiceImpl {}

impl StringServiceImpl {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl StringService for StringServiceImpl {
    async fn uppercase(&self, s: &str) -> ServiceResult<String> {
        if s.is_empty() {
            return Err(ServiceError::empty_input());
        }
        Ok(s.chars().map(upper_char).collect())
    }

    // length in UTF-8 code units, not visible characters
    async fn count(&self, s: &str) -> usize {
        s.len()
    }
}

// upper_char maps one char to one char; a char whose upper case spans several chars
// (e.g. 'ß' -> "SS") is left unchanged.
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use crate::core::errors::ServiceError;
    use crate::strings::domain::service::StringServiceImpl;
    use crate::strings::domain::StringService;

    #[tokio::test]
    async fn test_should_uppercase() {
        let svc = StringServiceImpl::new();
        assert_eq!("ABC", svc.uppercase("abc").await.expect("should uppercase"));
        assert_eq!("HELLO, WORLD 42", svc.uppercase("Hello, World 42").await.expect("should uppercase"));
        assert_eq!("ÉCOLE", svc.uppercase("école").await.expect("should uppercase"));
    }

    #[tokio::test]
    async fn test_should_keep_chars_without_single_char_upper_case() {
        let svc = StringServiceImpl::new();
        let upper = svc.uppercase("straße").await.expect("should uppercase");
        assert_eq!("STRAßE", upper.as_str());
        assert_eq!(svc.count("straße").await, svc.count(upper.as_str()).await);
        assert_eq!("ŉ", svc.uppercase("ŉ").await.expect("should uppercase"));
    }

    #[tokio::test]
    async fn test_should_reject_empty_uppercase() {
        let svc = StringServiceImpl::new();
        let err = svc.uppercase("").await.expect_err("should reject empty string");
        assert_eq!(ServiceError::empty_input(), err);
    }

    #[tokio::test]
    async fn test_should_count() {
        let svc = StringServiceImpl::new();
        assert_eq!(5, svc.count("hello").await);
        assert_eq!(0, svc.count("").await);
        assert_eq!(2, svc.count("é").await);
    }
}
