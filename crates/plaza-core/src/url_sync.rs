//! Keeps the room query parameter in step with the session.

/// Access to the page's query parameters.
///
/// Implementations replace the current history entry on write; they never
/// push a new one or navigate.
pub trait QueryParams {
    fn get(&self, key: &str) -> Option<String>;
    fn replace(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Reads the deep-linked room on startup and writes back confirmed rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSync {
    param: String,
    last_reflected: Option<String>,
}

impl UrlSync {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            last_reflected: None,
        }
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    /// Room id carried by the URL, if any. Blank values count as absent.
    pub fn read_room(&self, query: &impl QueryParams) -> Option<String> {
        query
            .get(&self.param)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Writes `current_room_id` into the URL when it differs from the last
    /// value written. Returns whether the URL was touched.
    pub fn reflect(&mut self, query: &mut impl QueryParams, current_room_id: Option<&str>) -> bool {
        let Some(room_id) = current_room_id.filter(|id| !id.is_empty()) else {
            return false;
        };
        if self.last_reflected.as_deref() == Some(room_id) {
            return false;
        }

        tracing::debug!(room_id, param = %self.param, "Reflecting room into URL");
        query.replace(&self.param, room_id);
        self.last_reflected = Some(room_id.to_string());
        true
    }

    /// Drops the room from the URL and forgets the last written value, so a
    /// reload does not deep-link back and a later rejoin is written again.
    pub fn forget(&mut self, query: &mut impl QueryParams) {
        tracing::debug!(param = %self.param, "Removing room from URL");
        query.remove(&self.param);
        self.last_reflected = None;
    }
}
