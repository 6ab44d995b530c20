mod query;

pub use query::BrowserQuery;
