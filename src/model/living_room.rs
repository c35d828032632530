use super::amount::{deserialize_raw, parse_amount};
use super::bedroom::RoomField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LivingRoomItem {
    TvUnit,
    SofaSet,
    DiningTable,
    SafetyDoor,
    FalseCeiling,
}

impl LivingRoomItem {
    pub const ALL: [LivingRoomItem; 5] = [
        LivingRoomItem::TvUnit,
        LivingRoomItem::SofaSet,
        LivingRoomItem::DiningTable,
        LivingRoomItem::SafetyDoor,
        LivingRoomItem::FalseCeiling,
    ];

    /// Label shown on the form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LivingRoomItem::TvUnit => "TV Unit",
            LivingRoomItem::SofaSet => "Sofa Set",
            LivingRoomItem::DiningTable => "Dining Table",
            LivingRoomItem::SafetyDoor => "Safety Door",
            LivingRoomItem::FalseCeiling => "False Ceiling",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LivingRoomItems {
    pub tv_unit: bool,
    pub sofa_set: bool,
    pub dining_table: bool,
    pub safety_door: bool,
    pub false_ceiling: bool,
}

impl LivingRoomItems {
    #[must_use]
    pub fn get(&self, item: LivingRoomItem) -> bool {
        match item {
            LivingRoomItem::TvUnit => self.tv_unit,
            LivingRoomItem::SofaSet => self.sofa_set,
            LivingRoomItem::DiningTable => self.dining_table,
            LivingRoomItem::SafetyDoor => self.safety_door,
            LivingRoomItem::FalseCeiling => self.false_ceiling,
        }
    }

    pub fn toggle(&mut self, item: LivingRoomItem) {
        let flag = match item {
            LivingRoomItem::TvUnit => &mut self.tv_unit,
            LivingRoomItem::SofaSet => &mut self.sofa_set,
            LivingRoomItem::DiningTable => &mut self.dining_table,
            LivingRoomItem::SafetyDoor => &mut self.safety_door,
            LivingRoomItem::FalseCeiling => &mut self.false_ceiling,
        };
        *flag = !*flag;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivingRoom {
    #[serde(default)]
    pub items: LivingRoomItems,
    #[serde(default, deserialize_with = "deserialize_raw")]
    pub area: String,
    #[serde(default, deserialize_with = "deserialize_raw")]
    pub rate: String,
}

impl LivingRoom {
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
