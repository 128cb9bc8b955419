//! What the controller needs from its environment. Implementations must not
//! fail outward: errors are absorbed into the defaults documented on each
//! method.

/// Persistent key-value store for the saved preference.
pub trait Store {
    /// `None` when the key is unset or the store can't be read.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes that fail are discarded.
    fn set(&self, key: &str, value: &str);
}

/// OS-level color-scheme signal.
pub trait ColorScheme {
    /// `false` when the signal is unavailable.
    fn prefers_light(&self) -> bool;
}

/// Anything carrying string attributes: the document root and the toggle.
pub trait Node {
    fn attr(&self, name: &str) -> Option<String>;

    fn set_attr(&self, name: &str, value: &str);

    fn set_text(&self, text: &str);
}
