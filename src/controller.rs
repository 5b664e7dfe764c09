//! The owner of a session's pattern list.
//!
//! Every accepted edit re-derives the CSS variables immediately and
//! (re)schedules persistence of the share string. Persistence is debounced:
//! only the state that has been left alone for a full window is written.

use std::time::{Duration, Instant};

use url::Url;

use crate::debounce::Debouncer;
use crate::error::UpdateError;
use crate::pattern::{normalize, sanitize_name, MAX_PATTERNS};
use crate::shades::{stylesheet, CssVariables};
use crate::{compact, share, Component, Components, Pattern, PatternId, Space};

/// Settings of a [`PatternController`].
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    /// How long the pattern list must be left alone before it is persisted.
    pub debounce: Duration,
    /// Query parameter the share string is stored in.
    pub query_param: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(1000),
            query_param: share::QUERY_PARAM.to_string(),
        }
    }
}

/// An edit to a single field of a pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum PatternUpdate {
    /// Rename the pattern. The name is sanitized and must be unique.
    Name(String),
    /// Switch color space, resetting the values to the new space's defaults.
    ColorSpace(Space),
    /// Replace all values.
    ColorValues(Components),
    /// Set the value of one component, addressed by its key.
    ColorValue {
        /// Component key, e.g. `"h"`.
        key: String,
        /// The new value.
        value: Component,
    },
    /// Set the base modifier.
    BaseModifier(Component),
}

/// Owns and edits the pattern list of a session.
#[derive(Debug)]
pub struct PatternController {
    config: ControllerConfig,
    patterns: Vec<Pattern>,
    active: Option<PatternId>,
    last_id: PatternId,
    name_error: Option<UpdateError>,
    variables: CssVariables,
    stylesheet: String,
    debouncer: Debouncer,
    persisted: Option<String>,
}

impl PatternController {
    /// Start a session with `patterns`, normalized to the list invariants.
    pub fn new(patterns: Vec<Pattern>, config: ControllerConfig) -> Self {
        let patterns = normalize(patterns);
        let active = patterns.first().map(|p| p.id);
        let last_id = patterns.iter().map(|p| p.id).max().unwrap_or_default();
        let debouncer = Debouncer::new(config.debounce);
        let mut controller = Self {
            config,
            patterns,
            active,
            last_id,
            name_error: None,
            variables: CssVariables::default(),
            stylesheet: String::new(),
            debouncer,
            persisted: None,
        };
        controller.derive();
        controller
    }

    /// Start a session from a page URL, see [`share::load_from_url`].
    pub fn from_url(url: &Url, config: ControllerConfig) -> Self {
        let (patterns, source) = share::load_from_url(url, &config.query_param);
        tracing::debug!(?source, count = patterns.len(), "loaded patterns");
        Self::new(patterns, config)
    }

    /// The settings in use.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The current patterns, in display order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Look up a pattern by id.
    pub fn pattern(&self, id: PatternId) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// The id of the selected pattern.
    pub fn active(&self) -> Option<PatternId> {
        self.active
    }

    /// The selected pattern.
    pub fn active_pattern(&self) -> Option<&Pattern> {
        self.active.and_then(|id| self.pattern(id))
    }

    /// Select a pattern. Returns `false` if there is no pattern with `id`.
    pub fn select(&mut self, id: PatternId) -> bool {
        if self.pattern(id).is_none() {
            return false;
        }
        self.active = Some(id);
        true
    }

    /// The error of the last rejected name edit, cleared by the next accepted
    /// one.
    pub fn name_error(&self) -> Option<&UpdateError> {
        self.name_error.as_ref()
    }

    /// CSS variables of the current patterns.
    pub fn variables(&self) -> &CssVariables {
        &self.variables
    }

    /// Copyable stylesheet of the current patterns.
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// True if a pattern can still be added.
    pub fn can_add(&self) -> bool {
        self.patterns.len() < MAX_PATTERNS
    }

    /// Add a pattern with default values and select it. Returns `None` if the
    /// list is full or no unused id is left.
    pub fn add(&mut self) -> Option<PatternId> {
        self.add_at(Instant::now())
    }

    /// [`add`](Self::add), with the edit happening at `now`.
    pub fn add_at(&mut self, now: Instant) -> Option<PatternId> {
        if !self.can_add() {
            return None;
        }

        // Ids of removed patterns are never handed out again.
        let id = self
            .patterns
            .iter()
            .map(|p| p.id)
            .chain([self.last_id])
            .max()
            .unwrap_or_default()
            .next()?;
        self.last_id = id;
        let name = self.unused_name(self.patterns.len() + 1);
        self.patterns.push(Pattern::new(id, name, Space::Oklch));
        self.active = Some(id);

        self.changed(now);
        Some(id)
    }

    /// Remove a pattern. The last remaining pattern can't be removed.
    /// Returns whether a pattern was removed.
    pub fn remove(&mut self, id: PatternId) -> bool {
        self.remove_at(id, Instant::now())
    }

    /// [`remove`](Self::remove), with the edit happening at `now`.
    pub fn remove_at(&mut self, id: PatternId, now: Instant) -> bool {
        if self.patterns.len() <= 1 {
            return false;
        }
        let Some(index) = self.patterns.iter().position(|p| p.id == id) else {
            return false;
        };

        self.patterns.remove(index);
        if self.active == Some(id) {
            self.active = self.patterns.first().map(|p| p.id);
        }

        self.changed(now);
        true
    }

    /// Apply an edit to one field of a pattern.
    pub fn update(&mut self, id: PatternId, update: PatternUpdate) -> Result<(), UpdateError> {
        self.update_at(id, update, Instant::now())
    }

    /// [`update`](Self::update), with the edit happening at `now`.
    pub fn update_at(
        &mut self,
        id: PatternId,
        update: PatternUpdate,
        now: Instant,
    ) -> Result<(), UpdateError> {
        let index = self
            .patterns
            .iter()
            .position(|p| p.id == id)
            .ok_or(UpdateError::UnknownPattern(id))?;

        match update {
            PatternUpdate::Name(name) => {
                let name = match self.validate_name(id, &name) {
                    Ok(name) => name,
                    Err(err) => {
                        self.name_error = Some(err.clone());
                        return Err(err);
                    }
                };
                self.name_error = None;
                self.patterns[index].name = name;
            }
            PatternUpdate::ColorSpace(space) => self.patterns[index].set_space(space),
            PatternUpdate::ColorValues(values) => self.patterns[index].values = values,
            PatternUpdate::ColorValue { key, value } => {
                let pattern = &mut self.patterns[index];
                let Some(component) = pattern.space.index_of(&key) else {
                    return Err(UpdateError::UnknownComponent {
                        space: pattern.space,
                        key,
                    });
                };
                pattern.values.set(component, value);
            }
            PatternUpdate::BaseModifier(base) => self.patterns[index].base_modifier = base,
        }

        self.changed(now);
        Ok(())
    }

    /// Drive persistence. Returns the share string to write once the
    /// debounce window of the last edit has passed, and `None` otherwise.
    pub fn tick(&mut self) -> Option<String> {
        self.tick_at(Instant::now())
    }

    /// [`tick`](Self::tick) at `now`.
    pub fn tick_at(&mut self, now: Instant) -> Option<String> {
        if !self.debouncer.fire_at(now) {
            return None;
        }
        Some(self.persist())
    }

    /// True while an edit is waiting to be persisted.
    pub fn has_pending_write(&self) -> bool {
        self.debouncer.pending().is_some()
    }

    /// Time until the pending write fires, if there is one.
    pub fn time_until_write(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_fire(now)
    }

    /// Persist right away, cancelling any pending write.
    pub fn share_now(&mut self) -> String {
        self.debouncer.cancel();
        self.persist()
    }

    /// The last persisted share string.
    pub fn persisted(&self) -> Option<&str> {
        self.persisted.as_deref()
    }

    /// The share string of the current patterns.
    pub fn encoded(&self) -> String {
        compact::encode(&self.patterns)
    }

    /// `base` with the current patterns stored in its query.
    pub fn share_url(&self, base: &Url) -> Url {
        share::share_url(base, &self.config.query_param, &self.patterns)
    }

    fn validate_name(&self, id: PatternId, name: &str) -> Result<String, UpdateError> {
        let name = sanitize_name(name);
        if name.is_empty() {
            return Err(UpdateError::EmptyName);
        }
        if self.patterns.iter().any(|p| p.id != id && p.name == name) {
            return Err(UpdateError::DuplicateName);
        }
        Ok(name)
    }

    /// `color{n}`, skipping numbers whose name is already taken.
    fn unused_name(&self, mut n: usize) -> String {
        loop {
            let name = format!("color{n}");
            if self.patterns.iter().all(|p| p.name != name) {
                return name;
            }
            n += 1;
        }
    }

    fn changed(&mut self, now: Instant) {
        self.derive();
        let deadline = self.debouncer.schedule_at(now);
        tracing::trace!(?deadline, "scheduled write");
    }

    fn derive(&mut self) {
        self.variables = CssVariables::derive(&self.patterns);
        self.stylesheet = stylesheet(&self.patterns);
    }

    fn persist(&mut self) -> String {
        let encoded = self.encoded();
        tracing::debug!(encoded = %encoded, "persisting patterns");
        self.persisted = Some(encoded.clone());
        encoded
    }
}

impl Default for PatternController {
    fn default() -> Self {
        Self::new(vec![Pattern::fallback()], ControllerConfig::default())
    }
}
