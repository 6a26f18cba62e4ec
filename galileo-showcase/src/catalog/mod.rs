//! Ordered registry of example screens.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::ShowcaseError;

pub mod registry;

/// One row of the catalog.
///
/// The `screen` handle is never inspected by the catalog. It is handed back to the caller when
/// the entry is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry<S> {
    screen: S,
    title: String,
    alternate_compatible: bool,
    extra_label: Option<String>,
}

impl<S> CatalogEntry<S> {
    /// Creates an entry that is not marked as compatible with the alternate provider.
    pub fn new(screen: S, title: impl Into<String>) -> Self {
        Self {
            screen,
            title: title.into(),
            alternate_compatible: false,
            extra_label: None,
        }
    }

    /// Marks the entry as verified against the alternate provider.
    pub fn with_alternate_support(mut self) -> Self {
        self.alternate_compatible = true;
        self
    }

    /// Sets the label appended to the title while the alternate provider is active.
    pub fn with_extra_label(mut self, label: impl Into<String>) -> Self {
        self.extra_label = Some(label.into());
        self
    }

    /// Screen handle of the entry.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Title of the entry. Unique within a [`Catalog`].
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the entry is shown while the alternate provider is active.
    pub fn is_alternate_compatible(&self) -> bool {
        self.alternate_compatible
    }

    /// Label appended to the title while the alternate provider is active.
    pub fn extra_label(&self) -> Option<&str> {
        self.extra_label.as_deref()
    }

    /// Title with the extra label appended, separated by a single space.
    pub fn labeled_title(&self) -> Cow<'_, str> {
        match &self.extra_label {
            Some(label) => Cow::Owned(format!("{} {label}", self.title)),
            None => Cow::Borrowed(&self.title),
        }
    }
}

/// Catalog entry as it is presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleEntry<'a, S> {
    /// Text displayed for the entry.
    pub title: Cow<'a, str>,
    /// Title of the catalog entry, used to select it.
    pub key: &'a str,
    /// Screen activated by the entry.
    pub screen: S,
}

/// Static ordered list of catalog entries with unique titles.
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    entries: Vec<CatalogEntry<S>>,
}

impl<S> Catalog<S> {
    /// Creates a catalog, keeping the order of the given entries.
    ///
    /// Returns [`ShowcaseError::DuplicateTitle`] if two entries have the same title.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry<S>>) -> Result<Self, ShowcaseError> {
        let entries: Vec<_> = entries.into_iter().collect();

        let mut titles = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !titles.insert(entry.title()) {
                return Err(ShowcaseError::DuplicateTitle(entry.title().to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// Iterates over entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry<S>> {
        self.entries.iter()
    }

    /// Finds an entry by its title.
    pub fn find(&self, title: &str) -> Option<&CatalogEntry<S>> {
        self.entries.iter().find(|entry| entry.title() == title)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
