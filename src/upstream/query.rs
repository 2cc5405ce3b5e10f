//! Upstream query descriptors

/// One logical upstream query: the provider `function`, its parameters in
/// insertion order, and the response datatype. Built once per field
/// resolution and never mutated afterwards.
///
/// The descriptor only ever carries real query parameters; the credential is
/// injected at send time and internal control values (validation types, the
/// request context) have no way in.
#[derive(Debug, Clone)]
pub struct QueryDescriptor {
    function: &'static str,
    datatype: &'static str,
    params: Vec<(&'static str, String)>,
}

impl QueryDescriptor {
    pub fn new(function: &'static str) -> Self {
        Self {
            function,
            datatype: "json",
            params: Vec::new(),
        }
    }

    /// Append a parameter; order of `with` calls is the order on the wire.
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Assemble the query string: `apikey` first, then `function`, then the
    /// parameters in insertion order, `datatype` last. Values are
    /// percent-encoded.
    pub fn to_query_string(&self, api_key: &str) -> String {
        let mut query = format!("apikey={}", urlencoding::encode(api_key));
        query.push_str(&format!("&function={}", self.function));
        for (name, value) in &self.params {
            query.push_str(&format!("&{}={}", name, urlencoding::encode(value)));
        }
        query.push_str(&format!("&datatype={}", self.datatype));
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_order() {
        let descriptor = QueryDescriptor::new("TIME_SERIES_INTRADAY")
            .with("symbol", "AAPL")
            .with("interval", "15min")
            .with("outputsize", "compact");

        assert_eq!(
            descriptor.to_query_string("demo"),
            "apikey=demo&function=TIME_SERIES_INTRADAY\
             &symbol=AAPL&interval=15min&outputsize=compact&datatype=json"
        );
    }

    #[test]
    fn test_query_string_contains_apikey_once() {
        let descriptor = QueryDescriptor::new("GLOBAL_QUOTE").with("symbol", "IBM");
        let query = descriptor.to_query_string("secret");
        assert_eq!(query.matches("apikey=").count(), 1);
        assert!(query.starts_with("apikey=secret&"));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let descriptor = QueryDescriptor::new("GLOBAL_QUOTE").with("symbol", "BRK A");
        let query = descriptor.to_query_string("k y");
        assert!(query.contains("symbol=BRK%20A"));
        assert!(query.starts_with("apikey=k%20y&"));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        // deliberately out of alphabetical order
        let descriptor = QueryDescriptor::new("TREASURY_YIELD")
            .with("maturity", "10year")
            .with("interval", "monthly");
        let query = descriptor.to_query_string("demo");
        let maturity = query.find("maturity=").unwrap();
        let interval = query.find("interval=").unwrap();
        assert!(maturity < interval);
    }
}
