use super::amount::{deserialize_raw, parse_amount};
use serde::{Deserialize, Serialize};

/// Furniture a bedroom can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BedroomItem {
    Bed,
    SideTable,
    DressingTable,
    Wardrobe,
}

impl BedroomItem {
    /// Form order.
    pub const ALL: [BedroomItem; 4] = [
        BedroomItem::Bed,
        BedroomItem::SideTable,
        BedroomItem::DressingTable,
        BedroomItem::Wardrobe,
    ];

    /// Order in the exported work details (wardrobe before dressing table).
    pub const DOCUMENT_ORDER: [BedroomItem; 4] = [
        BedroomItem::Bed,
        BedroomItem::SideTable,
        BedroomItem::Wardrobe,
        BedroomItem::DressingTable,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BedroomItem::Bed => "Bed",
            BedroomItem::SideTable => "Side Table",
            BedroomItem::DressingTable => "Dressing Table",
            BedroomItem::Wardrobe => "Wardrobe",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BedroomItems {
    pub bed: bool,
    pub side_table: bool,
    pub dressing_table: bool,
    pub wardrobe: bool,
}

impl BedroomItems {
    #[must_use]
    pub fn get(&self, item: BedroomItem) -> bool {
        match item {
            BedroomItem::Bed => self.bed,
            BedroomItem::SideTable => self.side_table,
            BedroomItem::DressingTable => self.dressing_table,
            BedroomItem::Wardrobe => self.wardrobe,
        }
    }

    pub fn toggle(&mut self, item: BedroomItem) {
        let flag = match item {
            BedroomItem::Bed => &mut self.bed,
            BedroomItem::SideTable => &mut self.side_table,
            BedroomItem::DressingTable => &mut self.dressing_table,
            BedroomItem::Wardrobe => &mut self.wardrobe,
        };
        *flag = !*flag;
    }

    #[must_use]
    pub fn any(&self) -> bool {
        BedroomItem::ALL.iter().any(|&item| self.get(item))
    }
}

/// Area or rate of a priced room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomField {
    Area,
    Rate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bedroom {
    /// 1-based sequence number.
    #[serde(default)]
    pub id: usize,
    #[serde(default)]
    pub items: BedroomItems,
    #[serde(default, deserialize_with = "deserialize_raw")]
    pub area: String,
    #[serde(default, deserialize_with = "deserialize_raw")]
    pub rate: String,
}

impl Bedroom {
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self {
            id,
            items: BedroomItems::default(),
            area: String::new(),
            rate: String::new(),
        }
    }

    #[must_use]
    pub fn field(&self, field: RoomField) -> &str {
        match field {
            RoomField::Area => &self.area,
            RoomField::Rate => &self.rate,
        }
    }

    pub fn set_field(&mut self, field: RoomField, value: String) {
        match field {
            RoomField::Area => self.area = value,
            RoomField::Rate => self.rate = value,
        }
    }

    #[must_use]
    pub fn cost(&self) -> f64 {
        parse_amount(&self.area) * parse_amount(&self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_twice_restores_flag() {
        let mut items = BedroomItems::default();
        items.toggle(BedroomItem::Wardrobe);
        assert!(items.get(BedroomItem::Wardrobe));
        items.toggle(BedroomItem::Wardrobe);
        assert_eq!(items, BedroomItems::default());
    }

    #[test]
    fn cost_is_area_times_rate() {
        let mut bedroom = Bedroom::new(1);
        bedroom.set_field(RoomField::Area, "100".to_string());
        bedroom.set_field(RoomField::Rate, "50".to_string());
        assert_eq!(bedroom.cost(), 5000.0);

        bedroom.set_field(RoomField::Rate, String::new());
        assert_eq!(bedroom.cost(), 0.0);
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let bedroom: Bedroom = serde_json::from_str(
            r#"{"id":1,"items":{"bed":true,"sideTable":false},"area":120,"rate":"45"}"#,
        )
        .unwrap();
        assert_eq!(bedroom.area, "120");
        assert_eq!(bedroom.rate, "45");
        assert!(bedroom.items.bed);
        assert!(!bedroom.items.wardrobe);
    }
}
