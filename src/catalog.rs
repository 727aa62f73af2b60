//! The catalog of reference models, keyed by stable integer identifiers.
//!
//! [`Catalog::standard`] holds the fourteen reference families under ids
//! `1..=14`. A catalog may also reserve ids for models that are announced but
//! not yet available; looking one up is reported as
//! [`CatalogError::NotImplemented`], distinct from an id that was never
//! assigned.
//!
//! # Example
//!
//! ```
//! use pidsim_models::{
//!     catalog::{Availability, Catalog, ModelId},
//!     models::Params,
//!     support::i18n::Locale,
//! };
//!
//! let catalog = Catalog::standard();
//! assert!(catalog.list().all(|(_, availability)| availability == Availability::Implemented));
//!
//! let model = catalog.instantiate(ModelId::new(1), Locale::EN_US)?;
//! assert_eq!(model.name(), "First order model");
//! assert_eq!(model.args(), ["k", "Tau"]);
//!
//! let tf = model.transfer_function(&Params::from([("k", 2.0), ("Tau", 5.0)]))?;
//! assert_eq!(tf.dc_gain(), 2.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{collections::HashSet, fmt, sync::LazyLock};

use thiserror::Error;

use crate::{
    models::{Process, ProcessModel, SignatureError},
    support::i18n::Locale,
};

/// A stable catalog identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelId(u32);

impl ModelId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ModelId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What a catalog holds under an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Implemented(Process),

    /// The id is assigned but the model is not available yet.
    Reserved,
}

impl Entry {
    #[must_use]
    pub fn availability(&self) -> Availability {
        match self {
            Self::Implemented(_) => Availability::Implemented,
            Self::Reserved => Availability::Reserved,
        }
    }
}

/// Whether a listed id can be instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Implemented,
    Reserved,
}

/// Errors returned when looking up a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown model id {0}")]
    Unknown(ModelId),

    #[error("model {0} is not implemented")]
    NotImplemented(ModelId),
}

/// Defects that prevent a catalog from being loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("model ids must be positive")]
    ZeroId,

    #[error("model id {0} is assigned more than once")]
    DuplicateId(ModelId),

    #[error("model {id} declares an invalid parameter list")]
    Signature {
        id: ModelId,
        #[source]
        source: SignatureError,
    },
}

/// An immutable mapping from ids to model families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Sorted by id, ids unique.
    entries: Vec<(ModelId, Entry)>,
}

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| {
    let entries = (1..).map(ModelId::new).zip(Process::ALL.map(Entry::Implemented));
    match Catalog::new(entries) {
        Ok(catalog) => catalog,
        Err(err) => panic!("standard model catalog is misconfigured: {err}"),
    }
});

impl Catalog {
    /// Loads a catalog, validating every entry.
    ///
    /// Entries may be given in any order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if an id is zero or repeated, or an
    /// implemented family declares unusable parameter names.
    pub fn new(
        entries: impl IntoIterator<Item = (ModelId, Entry)>,
    ) -> Result<Self, ConfigurationError> {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by_key(|(id, _)| *id);

        let mut seen = HashSet::with_capacity(entries.len());
        for &(id, entry) in &entries {
            if id.get() == 0 {
                return Err(ConfigurationError::ZeroId);
            }
            if !seen.insert(id) {
                return Err(ConfigurationError::DuplicateId(id));
            }
            if let Entry::Implemented(process) = entry {
                process
                    .routine()
                    .validate()
                    .map_err(|source| ConfigurationError::Signature { id, source })?;
            }
        }

        log::debug!("loaded model catalog with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Returns the reference catalog.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in entries are misconfigured.
    #[must_use]
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Lists every id with its availability, in ascending id order.
    ///
    /// The iterator can be cloned to walk the listing again.
    pub fn list(&self) -> impl Iterator<Item = (ModelId, Availability)> + Clone + '_ {
        self.entries
            .iter()
            .map(|(id, entry)| (*id, entry.availability()))
    }

    /// Looks up the family registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unknown`] if no entry has this id, or
    /// [`CatalogError::NotImplemented`] if the id is only reserved.
    pub fn get(&self, id: ModelId) -> Result<Process, CatalogError> {
        let index = self
            .entries
            .binary_search_by_key(&id, |(id, _)| *id)
            .map_err(|_| CatalogError::Unknown(id))?;

        match self.entries[index].1 {
            Entry::Implemented(process) => Ok(process),
            Entry::Reserved => {
                log::debug!("model {id} is reserved but not implemented");
                Err(CatalogError::NotImplemented(id))
            }
        }
    }

    /// Looks up `id` and binds the family to `locale`.
    ///
    /// # Errors
    ///
    /// Fails in the same cases as [`get`](Self::get).
    pub fn instantiate(&self, id: ModelId, locale: Locale) -> Result<ProcessModel, CatalogError> {
        let process = self.get(id)?;
        Ok(ProcessModel::new(id, process, locale))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Params;

    use super::*;

    fn with_placeholder() -> Catalog {
        Catalog::new([
            (ModelId::new(3), Entry::Reserved),
            (ModelId::new(1), Entry::Implemented(Process::FirstOrder)),
            (ModelId::new(2), Entry::Implemented(Process::Unstable)),
        ])
        .unwrap()
    }

    #[test]
    fn standard_catalog_lists_every_family() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 14);

        let ids: Vec<_> = catalog.list().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, (1..=14).collect::<Vec<u32>>());

        for (id, process) in (1..).map(ModelId::new).zip(Process::ALL) {
            assert_eq!(catalog.get(id), Ok(process));
        }
    }

    #[test]
    fn lookup_outcomes_are_distinct() {
        let catalog = with_placeholder();

        assert_eq!(catalog.get(ModelId::new(1)), Ok(Process::FirstOrder));
        assert_eq!(
            catalog.get(ModelId::new(3)),
            Err(CatalogError::NotImplemented(ModelId::new(3)))
        );
        assert_eq!(catalog.get(ModelId::new(4)), Err(CatalogError::Unknown(ModelId::new(4))));
        assert_eq!(catalog.get(ModelId::new(0)), Err(CatalogError::Unknown(ModelId::new(0))));
    }

    #[test]
    fn listing_is_sorted_and_restartable() {
        let catalog = with_placeholder();
        let listing = catalog.list();

        let expected = vec![
            (ModelId::new(1), Availability::Implemented),
            (ModelId::new(2), Availability::Implemented),
            (ModelId::new(3), Availability::Reserved),
        ];
        assert_eq!(listing.clone().collect::<Vec<_>>(), expected);
        assert_eq!(listing.collect::<Vec<_>>(), expected);
    }

    #[test]
    fn instances_are_usable() {
        let model = Catalog::standard()
            .instantiate(ModelId::new(5), Locale::EN_US)
            .unwrap();

        assert_eq!(model.id(), ModelId::new(5));
        assert_eq!(model.name(), "Model with multiple equal poles");
        assert_eq!(model.args(), ["n"]);

        let tf = model
            .transfer_function(&Params::from([("n", 3.0)]))
            .unwrap();
        assert_eq!(tf.denominator().coefficients(), &[1.0, 3.0, 3.0, 1.0]);
    }

    #[test]
    fn looking_up_every_listed_id_reports_each_outcome() {
        let catalog = with_placeholder();
        let outcomes: Vec<_> = catalog
            .list()
            .map(|(id, availability)| (availability, catalog.get(id).is_ok()))
            .collect();

        assert_eq!(
            outcomes,
            [
                (Availability::Implemented, true),
                (Availability::Implemented, true),
                (Availability::Reserved, false),
            ]
        );
    }

    #[test]
    fn placeholders_cannot_be_instantiated() {
        assert_eq!(
            with_placeholder().instantiate(ModelId::new(3), Locale::PT_BR),
            Err(CatalogError::NotImplemented(ModelId::new(3)))
        );
    }

    #[test]
    fn rejects_configuration_defects() {
        let first = Entry::Implemented(Process::FirstOrder);

        assert_eq!(
            Catalog::new([(ModelId::new(0), first)]),
            Err(ConfigurationError::ZeroId)
        );
        assert_eq!(
            Catalog::new([(ModelId::new(7), first), (ModelId::new(7), Entry::Reserved)]),
            Err(ConfigurationError::DuplicateId(ModelId::new(7)))
        );
        assert!(Catalog::new([]).unwrap().is_empty());
    }
}
