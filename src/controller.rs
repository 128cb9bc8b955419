use crate::config::Config;
use crate::host::{ColorScheme, Node, Store};
use crate::theme::Theme;

/// Owns handles to everything the toggle touches. Holds no state of its own:
/// the applied theme lives on the root node, the saved one in the store.
pub struct ThemeController<S, M, N> {
    config: Config,
    store: S,
    scheme: M,
    root: N,
    control: N,
}

impl<S, M, N> ThemeController<S, M, N>
where
    S: Store,
    M: ColorScheme,
    N: Node,
{
    pub fn new(config: Config, store: S, scheme: M, root: N, control: N) -> Self {
        ThemeController {
            config,
            store,
            scheme,
            root,
            control,
        }
    }

    /// Builds the controller and runs the initial load. Without a control the
    /// page has no way to toggle, so nothing is touched and `None` comes back.
    pub fn mount(
        config: Config,
        store: S,
        scheme: M,
        root: N,
        control: Option<N>,
    ) -> Option<Self> {
        let Some(control) = control else {
            tracing::debug!("no #{} on this page", config.toggle_id);
            return None;
        };
        let controller = ThemeController::new(config, store, scheme, root, control);
        controller.load();
        Some(controller)
    }

    pub fn control(&self) -> &N {
        &self.control
    }

    pub fn saved_theme(&self) -> Option<Theme> {
        let saved = self.store.get(&self.config.storage_key)?;
        match saved.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::debug!("ignoring saved preference: {e}");
                None
            }
        }
    }

    pub fn system_theme(&self) -> Theme {
        if self.scheme.prefers_light() {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Theme as currently shown by the document.
    pub fn current_theme(&self) -> Theme {
        self.root
            .attr(&self.config.root_attribute)
            .map(|s| Theme::normalize(&s))
            .unwrap_or(Theme::Dark)
    }

    pub fn resolve_initial_theme(&self) -> Theme {
        self.saved_theme().unwrap_or_else(|| self.system_theme())
    }

    pub fn apply_theme(&self, theme: impl AsRef<str>) -> Theme {
        let theme = Theme::normalize(theme.as_ref());
        self.root
            .set_attr(&self.config.root_attribute, theme.as_str());
        theme
    }

    pub fn update_toggle_ui(&self, theme: Theme) {
        tracing::trace!("update_toggle_ui({theme})");
        let labels = &self.config.labels;
        let pressed = if theme.is_light() { "true" } else { "false" };
        self.control.set_text(labels.action(theme));
        self.control.set_attr("aria-pressed", pressed);
        self.control.set_attr("aria-label", &labels.aria(theme));
        self.control
            .set_attr(&self.config.control_attribute, theme.as_str());
    }

    /// Initial load: resolve, apply and sync.
    pub fn load(&self) -> Theme {
        let theme = self.apply_theme(self.resolve_initial_theme());
        self.update_toggle_ui(theme);
        tracing::info!("initial theme: {theme}");
        theme
    }

    /// Flips whatever the document currently shows and saves the result.
    pub fn toggle(&self) -> Theme {
        let next = self.current_theme().inverse();
        let applied = self.apply_theme(next);
        self.store.set(&self.config.storage_key, applied.as_str());
        self.update_toggle_ui(applied);
        tracing::info!("toggled theme: {applied}");
        applied
    }

    /// Follows the system signal unless the user has saved a choice.
    /// Returns the newly applied theme, or `None` if the event was ignored.
    pub fn system_changed(&self) -> Option<Theme> {
        if let Some(saved) = self.saved_theme() {
            tracing::debug!("system scheme changed, keeping saved {saved}");
            return None;
        }
        let applied = self.apply_theme(self.system_theme());
        self.update_toggle_ui(applied);
        tracing::info!("system theme: {applied}");
        Some(applied)
    }
}
