use super::amount::deserialize_raw;
use super::{Bedroom, LivingRoom, WorkCategory, WorkItem};
use crate::error::{InputError, QuoteError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of bedrooms in the flat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum BhkType {
    #[default]
    One,
    Two,
    Three,
}

impl BhkType {
    pub const ALL: [BhkType; 3] = [BhkType::One, BhkType::Two, BhkType::Three];

    #[must_use]
    pub fn bedroom_count(self) -> usize {
        match self {
            BhkType::One => 1,
            BhkType::Two => 2,
            BhkType::Three => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BhkType::One => "1 BHK",
            BhkType::Two => "2 BHK",
            BhkType::Three => "3 BHK",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            BhkType::One => BhkType::Two,
            BhkType::Two | BhkType::Three => BhkType::Three,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            BhkType::One | BhkType::Two => BhkType::One,
            BhkType::Three => BhkType::Two,
        }
    }
}

impl TryFrom<usize> for BhkType {
    type Error = QuoteError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(BhkType::One),
            2 => Ok(BhkType::Two),
            3 => Ok(BhkType::Three),
            other => Err(QuoteError::InvalidBhk(other)),
        }
    }
}

/// Free-form client fields. None of these enter the total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetails {
    #[serde(default)]
    pub client_name: String,
    #[serde(default, deserialize_with = "deserialize_raw")]
    pub contact_number: String,
    #[serde(default)]
    pub city: String,
    /// Informational only.
    #[serde(default, deserialize_with = "deserialize_raw")]
    pub carpet_area: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Name,
    Contact,
    City,
    CarpetArea,
}

impl ClientField {
    pub const ALL: [ClientField; 4] = [
        ClientField::Name,
        ClientField::Contact,
        ClientField::City,
        ClientField::CarpetArea,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ClientField::Name => "Client Name",
            ClientField::Contact => "Contact Number",
            ClientField::City => "City",
            ClientField::CarpetArea => "Total Carpet Area (sqft)",
        }
    }
}

impl ClientDetails {
    #[must_use]
    pub fn field(&self, field: ClientField) -> &str {
        match field {
            ClientField::Name => &self.client_name,
            ClientField::Contact => &self.contact_number,
            ClientField::City => &self.city,
            ClientField::CarpetArea => &self.carpet_area,
        }
    }

    pub fn set_field(&mut self, field: ClientField, value: String) {
        match field {
            ClientField::Name => self.client_name = value,
            ClientField::Contact => self.contact_number = value,
            ClientField::City => self.city = value,
            ClientField::CarpetArea => self.carpet_area = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    #[serde(flatten)]
    pub client: ClientDetails,
    pub bedrooms: Vec<Bedroom>,
    #[serde(default)]
    pub living_room: LivingRoom,
    #[serde(default)]
    pub kitchen: WorkItem,
    #[serde(default)]
    pub painting: WorkItem,
    #[serde(default)]
    pub false_ceiling: WorkItem,
    #[serde(default)]
    pub electrical: WorkItem,
    #[serde(default)]
    pub plumbing: WorkItem,
}

impl Default for Quotation {
    fn default() -> Self {
        Self {
            client: ClientDetails::default(),
            bedrooms: vec![Bedroom::new(1)],
            living_room: LivingRoom::default(),
            kitchen: WorkItem::default(),
            painting: WorkItem::default(),
            false_ceiling: WorkItem::default(),
            electrical: WorkItem::default(),
            plumbing: WorkItem::default(),
        }
    }
}

impl Quotation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current BHK type, derived from the bedroom count.
    #[must_use]
    pub fn bhk_type(&self) -> BhkType {
        BhkType::try_from(self.bedrooms.len()).unwrap_or_default()
    }

    /// Resize the bedroom list to match `bhk`, keeping existing rooms by position.
    pub fn resize_bedrooms(&mut self, bhk: BhkType) {
        let count = bhk.bedroom_count();
        self.bedrooms.truncate(count);
        while self.bedrooms.len() < count {
            let id = self.bedrooms.len() + 1;
            self.bedrooms.push(Bedroom::new(id));
        }
    }

    pub fn bedroom_mut(&mut self, index: usize) -> Result<&mut Bedroom, QuoteError> {
        let len = self.bedrooms.len();
        self.bedrooms
            .get_mut(index)
            .ok_or(QuoteError::InvalidIndex { index, len })
    }

    #[must_use]
    pub fn work_item(&self, category: WorkCategory) -> &WorkItem {
        match category {
            WorkCategory::Kitchen => &self.kitchen,
            WorkCategory::Painting => &self.painting,
            WorkCategory::FalseCeiling => &self.false_ceiling,
            WorkCategory::Electrical => &self.electrical,
            WorkCategory::Plumbing => &self.plumbing,
        }
    }

    pub fn work_item_mut(&mut self, category: WorkCategory) -> &mut WorkItem {
        match category {
            WorkCategory::Kitchen => &mut self.kitchen,
            WorkCategory::Painting => &mut self.painting,
            WorkCategory::FalseCeiling => &mut self.false_ceiling,
            WorkCategory::Electrical => &mut self.electrical,
            WorkCategory::Plumbing => &mut self.plumbing,
        }
    }

    /// Sum of area × rate over all rooms and quantity × rate over all work
    /// categories. Blank or unparseable inputs count as zero.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        let bedrooms: f64 = self.bedrooms.iter().map(Bedroom::cost).sum();
        let work: f64 = WorkCategory::ALL
            .iter()
            .map(|&category| self.work_item(category).cost())
            .sum();
        bedrooms + self.living_room.cost() + work
    }

    /// Export needs a client name, a contact number and a non-zero total.
    pub fn ready_for_export(&self) -> Result<(), QuoteError> {
        if self.client.client_name.trim().is_empty() {
            return Err(QuoteError::NotReady("client name is required"));
        }
        if self.client.contact_number.trim().is_empty() {
            return Err(QuoteError::NotReady("contact number is required"));
        }
        if self.total_cost() == 0.0 {
            return Err(QuoteError::NotReady("total cost is zero"));
        }
        Ok(())
    }

    /// Freeze the quotation for export.
    #[must_use]
    pub fn snapshot(&self, date: NaiveDate) -> QuoteSnapshot {
        QuoteSnapshot {
            quotation: self.clone(),
            total_cost: self.total_cost(),
            date,
        }
    }

    /// Check model invariants on a deserialized quotation and renumber bedrooms.
    pub fn validated(mut self) -> Result<Self, QuoteError> {
        BhkType::try_from(self.bedrooms.len())?;
        for (i, bedroom) in self.bedrooms.iter_mut().enumerate() {
            bedroom.id = i + 1;
        }
        Ok(self)
    }

    /// Parse a quotation from JSON text.
    pub fn from_json(path: &Path, content: &str) -> Result<Self, InputError> {
        let quotation: Quotation =
            serde_json::from_str(content).map_err(|source| InputError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(quotation.validated()?)
    }
}

/// Load a saved quotation: either a JSON export or bare form data.
pub fn load_quotation<P: AsRef<Path>>(path: P) -> Result<Quotation, InputError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let quotation = Quotation::from_json(path, &content)?;
    tracing::info!(
        path = %path.display(),
        bedrooms = quotation.bedrooms.len(),
        "loaded quotation"
    );
    Ok(quotation)
}

/// Immutable export input: the quotation plus its computed total and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    #[serde(flatten)]
    pub quotation: Quotation,
    pub total_cost: f64,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BedroomItem, RoomField, WorkField};
    use pretty_assertions::assert_eq;

    #[test]
    fn new_quotation_has_one_empty_bedroom() {
        let quotation = Quotation::new();
        assert_eq!(quotation.bedrooms, vec![Bedroom::new(1)]);
        assert_eq!(quotation.bhk_type(), BhkType::One);
        assert_eq!(quotation.total_cost(), 0.0);
    }

    #[test]
    fn bhk_from_number() {
        assert_eq!(BhkType::try_from(2), Ok(BhkType::Two));
        assert_eq!(BhkType::try_from(0), Err(QuoteError::InvalidBhk(0)));
        assert_eq!(BhkType::try_from(4), Err(QuoteError::InvalidBhk(4)));
    }

    #[test]
    fn total_bedroom_and_living_room() {
        let mut quotation = Quotation::new();
        quotation.bedrooms[0].set_field(RoomField::Area, "100".into());
        quotation.bedrooms[0].set_field(RoomField::Rate, "50".into());
        quotation.living_room.set_field(RoomField::Area, "200".into());
        quotation.living_room.set_field(RoomField::Rate, "30".into());

        assert_eq!(quotation.total_cost(), 11_000.0);
    }

    #[test]
    fn total_with_work_categories() {
        let mut quotation = Quotation::new();
        quotation.resize_bedrooms(BhkType::Two);
        for bedroom in &mut quotation.bedrooms {
            bedroom.set_field(RoomField::Area, "0".into());
            bedroom.set_field(RoomField::Rate, "0".into());
        }
        let painting = quotation.work_item_mut(WorkCategory::Painting);
        painting.set_field(WorkField::Quantity, "500".into());
        painting.set_field(WorkField::Rate, "20".into());
        let electrical = quotation.work_item_mut(WorkCategory::Electrical);
        electrical.set_field(WorkField::Quantity, "10".into());
        electrical.set_field(WorkField::Rate, "100".into());

        assert_eq!(quotation.total_cost(), 11_000.0);
    }

    #[test]
    fn false_ceiling_and_negative_rates_are_summed() {
        let mut quotation = Quotation::new();
        let ceiling = quotation.work_item_mut(WorkCategory::FalseCeiling);
        ceiling.set_field(WorkField::Quantity, "10".into());
        ceiling.set_field(WorkField::Rate, "-5".into());

        assert_eq!(quotation.total_cost(), -50.0);
    }

    #[test]
    fn flags_do_not_affect_total() {
        let mut quotation = Quotation::new();
        quotation.bedrooms[0].set_field(RoomField::Area, "10".into());
        quotation.bedrooms[0].set_field(RoomField::Rate, "10".into());
        let before = quotation.total_cost();

        quotation.bedrooms[0].items.toggle(BedroomItem::Bed);
        quotation
            .living_room
            .items
            .toggle(crate::model::LivingRoomItem::SofaSet);

        assert_eq!(quotation.total_cost(), before);
    }

    #[test]
    fn resize_keeps_existing_by_position() {
        let mut quotation = Quotation::new();
        quotation.resize_bedrooms(BhkType::Three);
        quotation.bedrooms[1].set_field(RoomField::Area, "70".into());

        quotation.resize_bedrooms(BhkType::Two);
        assert_eq!(quotation.bedrooms.len(), 2);
        assert_eq!(quotation.bedrooms[1].area, "70");

        quotation.resize_bedrooms(BhkType::Three);
        assert_eq!(quotation.bedrooms[2], Bedroom::new(3));
    }

    #[test]
    fn bedroom_mut_rejects_out_of_range() {
        let mut quotation = Quotation::new();
        assert_eq!(
            quotation.bedroom_mut(1).map(|_| ()),
            Err(QuoteError::InvalidIndex { index: 1, len: 1 })
        );
    }

    #[test]
    fn parses_bare_form_data() {
        let json = r#"{
            "clientName": "Asha Rao",
            "contactNumber": "98200 00000",
            "city": "Pune",
            "carpetArea": 950,
            "bedrooms": [
                {"id": 1, "items": {"bed": true, "sideTable": false, "dressingTable": false, "wardrobe": true}, "area": "120", "rate": "800"},
                {"id": 7, "items": {}, "area": "", "rate": ""}
            ],
            "livingRoom": {"items": {"safetyDoor": true}, "area": "", "rate": ""},
            "kitchen": {"area": "60", "rate": "1500"},
            "electrical": {"units": "12", "rate": "350"}
        }"#;

        let quotation = Quotation::from_json(Path::new("quote.json"), json).unwrap();
        assert_eq!(quotation.client.client_name, "Asha Rao");
        assert_eq!(quotation.client.carpet_area, "950");
        assert_eq!(quotation.bhk_type(), BhkType::Two);
        assert_eq!(quotation.bedrooms[1].id, 2);
        assert!(quotation.living_room.items.safety_door);
        assert_eq!(quotation.total_cost(), 96_000.0 + 90_000.0 + 4_200.0);
    }

    #[test]
    fn rejects_too_many_bedrooms() {
        let json = r#"{"bedrooms": [{}, {}, {}, {}]}"#;
        let err = Quotation::from_json(Path::new("quote.json"), json).unwrap_err();
        assert!(matches!(
            err,
            InputError::Invalid {
                source: QuoteError::InvalidBhk(4)
            }
        ));
    }

    #[test]
    fn snapshot_carries_total() {
        let mut quotation = Quotation::new();
        quotation.kitchen.set_field(WorkField::Quantity, "10".into());
        quotation.kitchen.set_field(WorkField::Rate, "25".into());
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let snapshot = quotation.snapshot(date);
        assert_eq!(snapshot.total_cost, 250.0);
        assert_eq!(snapshot.quotation, quotation);
    }

    fn ready_quotation() -> Quotation {
        let mut quotation = Quotation::new();
        quotation.client.client_name = "Asha Rao".into();
        quotation.client.contact_number = "98200 00000".into();
        quotation.bedrooms[0].area = "100".into();
        quotation.bedrooms[0].rate = "50".into();
        quotation
    }

    #[test]
    fn complete_quotation_is_ready_for_export() {
        assert_eq!(ready_quotation().ready_for_export(), Ok(()));
    }

    #[test]
    fn export_needs_client_name() {
        let mut quotation = ready_quotation();
        quotation.client.client_name = "   ".into();
        assert_eq!(
            quotation.ready_for_export(),
            Err(QuoteError::NotReady("client name is required"))
        );
    }

    #[test]
    fn export_needs_contact_number() {
        let mut quotation = ready_quotation();
        quotation.client.contact_number = String::new();
        assert_eq!(
            quotation.ready_for_export(),
            Err(QuoteError::NotReady("contact number is required"))
        );
    }

    #[test]
    fn export_needs_non_zero_total() {
        let mut quotation = ready_quotation();
        quotation.bedrooms[0].rate = "abc".into();
        assert_eq!(
            quotation.ready_for_export(),
            Err(QuoteError::NotReady("total cost is zero"))
        );

        // Negative totals are still priced
        quotation.bedrooms[0].rate = "-5".into();
        assert_eq!(quotation.ready_for_export(), Ok(()));
    }
}
