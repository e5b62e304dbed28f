use crate::csv_exchange::schema::{descriptor_for, SchemaDescriptor};
use common::model::apartment::ApartmentRecord;
use common::model::contract::ContractRecord;
use common::model::customer::CustomerRecord;
use common::model::entity_kind::EntityKind;
use common::model::user::UserRecord;

/// Maps a record type onto the columns of its `SchemaDescriptor`.
///
/// `from_values` receives exactly one value per declared column, in declared
/// order, and `values` must hand them back in that same order.
pub trait TabularRecord: Sized {
    const KIND: EntityKind;

    fn descriptor() -> &'static SchemaDescriptor {
        descriptor_for(Self::KIND)
    }

    fn from_values(values: Vec<String>) -> Self;

    fn id(&self) -> Option<&str>;

    fn values(&self) -> Vec<&str>;
}

impl TabularRecord for CustomerRecord {
    const KIND: EntityKind = EntityKind::Customer;

    fn from_values(values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), Self::descriptor().columns.len());
        let mut values = values.into_iter();
        CustomerRecord {
            id: None,
            full_name: values.next().unwrap_or_default(),
            citizen_id: values.next().unwrap_or_default(),
            address: values.next().unwrap_or_default(),
            dob: values.next().unwrap_or_default(),
            phone_number: values.next().unwrap_or_default(),
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.full_name.as_str(),
            self.citizen_id.as_str(),
            self.address.as_str(),
            self.dob.as_str(),
            self.phone_number.as_str(),
        ]
    }
}

impl TabularRecord for ApartmentRecord {
    const KIND: EntityKind = EntityKind::Apartment;

    fn from_values(values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), Self::descriptor().columns.len());
        let mut values = values.into_iter();
        ApartmentRecord {
            id: None,
            address: values.next().unwrap_or_default(),
            number_of_room: values.next().unwrap_or_default(),
            retail_price: values.next().unwrap_or_default(),
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.address.as_str(),
            self.number_of_room.as_str(),
            self.retail_price.as_str(),
        ]
    }
}

impl TabularRecord for ContractRecord {
    const KIND: EntityKind = EntityKind::Contract;

    fn from_values(values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), Self::descriptor().columns.len());
        let mut values = values.into_iter();
        ContractRecord {
            id: None,
            customer_id: values.next().unwrap_or_default(),
            apartment_id: values.next().unwrap_or_default(),
            start_date: values.next().unwrap_or_default(),
            end_date: values.next().unwrap_or_default(),
            create_date: values.next().unwrap_or_default(),
            retail_price: values.next().unwrap_or_default(),
            total: values.next().unwrap_or_default(),
            user_id: values.next().unwrap_or_default(),
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.customer_id.as_str(),
            self.apartment_id.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.create_date.as_str(),
            self.retail_price.as_str(),
            self.total.as_str(),
            self.user_id.as_str(),
        ]
    }
}

impl TabularRecord for UserRecord {
    const KIND: EntityKind = EntityKind::User;

    fn from_values(values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), Self::descriptor().columns.len());
        let mut values = values.into_iter();
        UserRecord {
            id: None,
            full_name: values.next().unwrap_or_default(),
            username: values.next().unwrap_or_default(),
            email: values.next().unwrap_or_default(),
            create_date: values.next().unwrap_or_default(),
            role: values.next().unwrap_or_default(),
            active: values.next().unwrap_or_default(),
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.full_name.as_str(),
            self.username.as_str(),
            self.email.as_str(),
            self.create_date.as_str(),
            self.role.as_str(),
            self.active.as_str(),
        ]
    }
}
