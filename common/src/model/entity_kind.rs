use std::fmt;

/// The closed set of back-office entities that can be exchanged as CSV.
///
/// Each kind has its own column contract on the backend side; the names used
/// here double as file-name prefixes (`apartment_template.csv`) and, in plural
/// form, as URL resource segments (`/api/apartments/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customer,
    Apartment,
    Contract,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Customer,
        EntityKind::Apartment,
        EntityKind::Contract,
        EntityKind::User,
    ];

    /// Singular lowercase name, e.g. `apartment`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Apartment => "apartment",
            EntityKind::Contract => "contract",
            EntityKind::User => "user",
        }
    }

    /// Plural resource name used in URL paths, e.g. `apartments`.
    pub fn resource(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customers",
            EntityKind::Apartment => "apartments",
            EntityKind::Contract => "contracts",
            EntityKind::User => "users",
        }
    }

    pub fn from_resource(segment: &str) -> Option<EntityKind> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.resource().eq_ignore_ascii_case(segment.trim()))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
