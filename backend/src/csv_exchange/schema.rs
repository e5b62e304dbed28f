//! Static column contracts for every exchangeable entity.
//!
//! A `SchemaDescriptor` lists the columns an uploaded file must carry (in any
//! order, any letter case) and the exact header written on export. The sample
//! row is what template downloads show to users as an example of valid input.

use chrono::NaiveDate;
use common::model::entity_kind::EntityKind;

/// Column header prepended to full exports.
pub const ID_COLUMN: &str = "ID";

#[derive(Debug)]
pub struct SchemaDescriptor {
    pub kind: EntityKind,
    pub columns: &'static [&'static str],
    pub sample_row: &'static [&'static str],
}

static CUSTOMER: SchemaDescriptor = SchemaDescriptor {
    kind: EntityKind::Customer,
    columns: &[
        "Full name",
        "Citizen id",
        "Address",
        "Date of birth",
        "Phone number",
    ],
    sample_row: &[
        "Nguyễn Văn A",
        "082333999",
        "147 Trieu Khuc, Tan Trieu, Ha Noi",
        "2003-01-12",
        "082333888",
    ],
};

static APARTMENT: SchemaDescriptor = SchemaDescriptor {
    kind: EntityKind::Apartment,
    columns: &["Address", "Number of room", "Retail price"],
    sample_row: &[
        "130 Pham Ngu Lao, An Binh, Bien Hoa, Dong Nai",
        "4",
        "3500000",
    ],
};

static CONTRACT: SchemaDescriptor = SchemaDescriptor {
    kind: EntityKind::Contract,
    columns: &[
        "Customer ID",
        "Apartment ID",
        "Start Date",
        "End Date",
        "Create date",
        "Retail price",
        "Total",
        "User ID",
    ],
    sample_row: &[
        "4683fef4-61f1-4186-8fab-be6855f164f5",
        "ea05f3a6-e8f6-4da7-9535-064aeaf2a9f9",
        "2023-04-17",
        "2025-04-17",
        "2025-04-15",
        "2300000",
        "43000000",
        "7c9081fe-41ef-4a6f-89e0-c371afdc694f",
    ],
};

static USER: SchemaDescriptor = SchemaDescriptor {
    kind: EntityKind::User,
    columns: &[
        "Full name",
        "Username",
        "Email",
        "Create date",
        "Role",
        "Is Active",
    ],
    sample_row: &[
        "Hoàng Gia Kiệt",
        "example@gmail.com",
        "example@gmail.com",
        "2024-03-12",
        "STAFF",
        "True",
    ],
};

/// Looks up the column contract of an entity kind.
pub fn descriptor_for(kind: EntityKind) -> &'static SchemaDescriptor {
    match kind {
        EntityKind::Customer => &CUSTOMER,
        EntityKind::Apartment => &APARTMENT,
        EntityKind::Contract => &CONTRACT,
        EntityKind::User => &USER,
    }
}

impl SchemaDescriptor {
    /// Header of a full export: `ID` followed by the declared columns.
    pub fn export_header(&self) -> Vec<&'static str> {
        std::iter::once(ID_COLUMN)
            .chain(self.columns.iter().copied())
            .collect()
    }

    pub fn expected_columns(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.to_string()).collect()
    }

    /// Stable name shared by every template download of this kind.
    pub fn template_file_name(&self) -> String {
        format!("{}_template.csv", self.kind)
    }

    /// Name of a full export taken on `date`; same-day exports share it.
    pub fn dated_file_name(&self, date: NaiveDate) -> String {
        format!("{}_{}.csv", self.kind, date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_sample_row_matching_its_columns() {
        for kind in EntityKind::ALL {
            let descriptor = descriptor_for(kind);
            assert_eq!(descriptor.kind, kind);
            assert_eq!(descriptor.columns.len(), descriptor.sample_row.len());
        }
    }

    #[test]
    fn apartment_contract_is_declared_in_order() {
        assert_eq!(
            descriptor_for(EntityKind::Apartment).columns,
            &["Address", "Number of room", "Retail price"]
        );
        assert_eq!(
            descriptor_for(EntityKind::Apartment).export_header(),
            vec!["ID", "Address", "Number of room", "Retail price"]
        );
    }

    #[test]
    fn file_names_embed_kind_and_date() {
        let descriptor = descriptor_for(EntityKind::Contract);
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(descriptor.template_file_name(), "contract_template.csv");
        assert_eq!(descriptor.dated_file_name(date), "contract_2024-03-09.csv");
    }
}
