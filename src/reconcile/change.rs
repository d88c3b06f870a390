/// Classification of a single item by the reconciliation scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Change<M, S> {
    /// Master item with no counterpart in the slave collection.
    Create(M),
    /// Matched master/slave pair.
    Update(M, S),
    /// Slave item left unmatched after every master item was scanned.
    Delete(S),
}

/// Discriminant of a [`Change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChangeKind {
    /// See [`Change::Delete`].
    Delete,
    /// See [`Change::Update`].
    Update,
    /// See [`Change::Create`].
    Create,
}

impl<M, S> Change<M, S> {
    /// Which category this change belongs to.
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Create(_) => ChangeKind::Create,
            Change::Update(..) => ChangeKind::Update,
            Change::Delete(_) => ChangeKind::Delete,
        }
    }

    /// Whether this is a [`Change::Create`].
    pub fn is_create(&self) -> bool {
        matches!(self, Change::Create(_))
    }

    /// Whether this is a [`Change::Update`].
    pub fn is_update(&self) -> bool {
        matches!(self, Change::Update(..))
    }

    /// Whether this is a [`Change::Delete`].
    pub fn is_delete(&self) -> bool {
        matches!(self, Change::Delete(_))
    }

    /// The master side, if any.
    pub fn master(&self) -> Option<&M> {
        match self {
            Change::Create(m) | Change::Update(m, _) => Some(m),
            Change::Delete(_) => None,
        }
    }

    /// The slave side, if any.
    pub fn slave(&self) -> Option<&S> {
        match self {
            Change::Update(_, s) | Change::Delete(s) => Some(s),
            Change::Create(_) => None,
        }
    }
}
