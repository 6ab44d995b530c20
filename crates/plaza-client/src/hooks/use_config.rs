//! Hook for loading client configuration.

use std::rc::Rc;

use plaza_core::PlazaConfig;
use yew::prelude::*;

use crate::storage::load_config;

/// Configuration, read once per mount.
#[hook]
pub fn use_config() -> Rc<PlazaConfig> {
    use_memo((), |_| load_config())
}
