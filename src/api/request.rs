use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// POST/PUT carry parameters as a JSON body, GET/DELETE as the query string
    pub fn sends_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Per-request switches understood by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    /// Attach the session credential
    pub token: bool,
    /// Count towards the global loading indicator
    pub loading: bool,
    /// Route through the mock server while in development
    pub custom_dev: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            token: true,
            loading: true,
            custom_dev: false,
        }
    }
}

/// A logical API operation resolved to method + path + parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub params: Option<Value>,
    pub options: RequestOptions,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: None,
            options: RequestOptions::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach caller parameters verbatim; `null` means no parameters
    pub fn params(mut self, params: Value) -> Self {
        self.params = if params.is_null() { None } else { Some(params) };
        self
    }

    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Flatten object parameters into query pairs. Arrays repeat the key,
    /// nested objects are sent as JSON text.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let Some(Value::Object(map)) = &self.params else {
            return pairs;
        };

        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        pairs.push((key.clone(), scalar_to_string(item)));
                    }
                }
                other => pairs.push((key.clone(), scalar_to_string(other))),
            }
        }
        pairs
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options_attach_token() {
        let request = ApiRequest::get("/v1/admin/roles");
        assert!(request.options.token);
        assert!(request.options.loading);
        assert!(!request.options.custom_dev);
    }

    #[test]
    fn test_null_params_are_dropped() {
        let request = ApiRequest::get("/v1/menus").params(Value::Null);
        assert_eq!(request.params, None);
    }

    #[test]
    fn test_query_pairs() {
        let request = ApiRequest::get("/v1/admin/users").params(json!({
            "page": 1,
            "username": "admin",
            "skip": null,
            "roles": ["admin", "ops"]
        }));

        let pairs = request.query_pairs();
        assert!(pairs.contains(&("page".to_string(), "1".to_string())));
        assert!(pairs.contains(&("username".to_string(), "admin".to_string())));
        assert!(pairs.contains(&("roles".to_string(), "admin".to_string())));
        assert!(pairs.contains(&("roles".to_string(), "ops".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "skip"));
    }
}
