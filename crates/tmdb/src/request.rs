//! Endpoint request description: a path plus query parameters.

use entities::AppendToResponse;

pub const PARAM_APPEND_TO_RESPONSE: &str = "append_to_response";
pub const PARAM_LANGUAGE: &str = "language";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_QUERY: &str = "query";

/// A GET request against one endpoint.
///
/// Parameters keep insertion order. Optional parameters given as `None` are
/// never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    path: String,
    query: Vec<(String, String)>,
    localized: bool,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            localized: false,
        }
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn opt_param<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Mark the endpoint as localized and attach the requested language.
    ///
    /// With `None`, the client's default language (if any) is used instead.
    pub fn language(mut self, language: Option<&str>) -> Self {
        self.localized = true;
        self.opt_param(PARAM_LANGUAGE, language)
    }

    pub fn page(self, page: Option<u32>) -> Self {
        self.opt_param(PARAM_PAGE, page)
    }

    /// Attach `append_to_response`; an empty set is not sent
    pub fn append(self, append: Option<&AppendToResponse>) -> Self {
        let value = append.filter(|a| !a.is_empty());
        self.opt_param(PARAM_APPEND_TO_RESPONSE, value)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn is_localized(&self) -> bool {
        self.localized
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.query.iter().any(|(k, _)| k == key)
    }

    pub(crate) fn into_query(self) -> Vec<(String, String)> {
        self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities::AppendToResponseItem;

    #[test]
    fn test_none_params_are_omitted() {
        let request = ApiRequest::new("movie/550/similar")
            .page(None)
            .language(None)
            .opt_param("country", None::<&str>);

        assert!(request.query().is_empty());
        assert!(request.is_localized());
    }

    #[test]
    fn test_params_keep_order() {
        let append = AppendToResponse::new([AppendToResponseItem::Credits, AppendToResponseItem::Videos]);
        let request = ApiRequest::new("movie/550")
            .language(Some("pt"))
            .append(Some(&append))
            .page(Some(3));

        assert_eq!(
            request.query(),
            &[
                ("language".to_string(), "pt".to_string()),
                ("append_to_response".to_string(), "credits,videos".to_string()),
                ("page".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_append_is_not_sent() {
        let request = ApiRequest::new("movie/550").append(Some(&AppendToResponse::default()));
        assert!(!request.has_param(PARAM_APPEND_TO_RESPONSE));
        assert!(!request.is_localized());
    }
}
