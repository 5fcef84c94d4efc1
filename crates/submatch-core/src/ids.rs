//! Integer identifier newtypes.
//!
//! All identifiers are assigned by the external derivation step. Group and
//! pool ids come from a deterministic sequential generator (see
//! [`IdInterner`](crate::interner::IdInterner)), so they are dense and small;
//! system, product and subscription ids are inventory keys and may be sparse.

use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident($repr:ty)) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $repr);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$repr> for $name {
            fn from(raw: $repr) -> Self {
                $name(raw)
            }
        }
    };
}

id_type! {
    /// Identifier of a computing system.
    SystemId(i64)
}

id_type! {
    /// Identifier of an installable product.
    ProductId(i64)
}

id_type! {
    /// Identifier of a subscription.
    SubscriptionId(i64)
}

id_type! {
    /// Identifier of a capacity pool shared by candidate matches.
    PoolId(u32)
}

id_type! {
    /// Identifier of a match group, the atomic planning unit.
    GroupId(u32)
}
