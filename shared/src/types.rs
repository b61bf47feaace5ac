use std::fmt;

// EntityId
/// Network identifier of a tracked entity, stable for the entity's lifetime.
/// The value `0` is reserved by hosts to mean "no valid identifier".
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    pub const INVALID: EntityId = EntityId(0);

    pub fn from_u64(value: u64) -> Self {
        EntityId(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }

    /// Returns false for the sentinel identifier
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ObserverKey
/// Identifies a connected observer session (a player who can see the map).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ObserverKey(u64);

impl ObserverKey {
    pub fn from_u64(value: u64) -> Self {
        ObserverKey(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}
