use crate::model::{is_present, parse_amount, BedroomItem, Quotation, WorkCategory};
use serde::Serialize;

/// One titled group in the "Work Details" block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkSection {
    pub name: String,
    pub items: Vec<&'static str>,
}

/// Build the itemized work details for a quotation.
///
/// Order: bedrooms by index, Living Room, Kitchen, Additional Work. Sections
/// without items are left out. The living room's safety door and dining table
/// flags are reported under Additional Work, the dining table as
/// "Lights & Accessories".
#[must_use]
pub fn work_details(quotation: &Quotation) -> Vec<WorkSection> {
    let mut sections = Vec::new();

    for (index, bedroom) in quotation.bedrooms.iter().enumerate() {
        let items: Vec<&'static str> = BedroomItem::DOCUMENT_ORDER
            .iter()
            .filter(|&&item| bedroom.items.get(item))
            .map(|item| item.label())
            .collect();

        if !items.is_empty() {
            let name = if index == 0 {
                "Bedroom".to_string()
            } else {
                format!("Bedroom {}", index + 1)
            };
            sections.push(WorkSection { name, items });
        }
    }

    let living = &quotation.living_room.items;
    let living_items: Vec<&'static str> = [
        (living.tv_unit, "TV Unit"),
        (living.sofa_set, "Sofa Set"),
        (living.false_ceiling, "False Ceiling"),
    ]
    .into_iter()
    .filter_map(|(selected, label)| selected.then_some(label))
    .collect();
    if !living_items.is_empty() {
        sections.push(WorkSection {
            name: "Living Room".to_string(),
            items: living_items,
        });
    }

    if is_present(&quotation.kitchen.quantity) {
        sections.push(WorkSection {
            name: "Kitchen".to_string(),
            items: vec!["Modular Kitchen"],
        });
    }

    let additional: Vec<&'static str> = [
        (is_present(&quotation.painting.quantity), "Painting"),
        (is_present(&quotation.electrical.quantity), "Electrical Work"),
        (is_present(&quotation.plumbing.quantity), "Plumbing Work"),
        (living.safety_door, "Safety Door"),
        (living.dining_table, "Lights & Accessories"),
    ]
    .into_iter()
    .filter_map(|(selected, label)| selected.then_some(label))
    .collect();
    if !additional.is_empty() {
        sections.push(WorkSection {
            name: "Additional Work".to_string(),
            items: additional,
        });
    }

    sections
}

/// One priced line of the quotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    pub line: String,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64,
}

impl CostLine {
    fn new(line: impl Into<String>, quantity: &str, rate: &str) -> Self {
        let quantity = parse_amount(quantity);
        let rate = parse_amount(rate);
        Self {
            line: line.into(),
            quantity,
            rate,
            amount: quantity * rate,
        }
    }
}

/// Every line that has a quantity or a rate filled in, in form order.
///
/// The amounts add up to [`Quotation::total_cost`].
#[must_use]
pub fn cost_breakdown(quotation: &Quotation) -> Vec<CostLine> {
    let mut lines = Vec::new();

    for (index, bedroom) in quotation.bedrooms.iter().enumerate() {
        if is_present(&bedroom.area) || is_present(&bedroom.rate) {
            lines.push(CostLine::new(
                format!("Bedroom {}", index + 1),
                &bedroom.area,
                &bedroom.rate,
            ));
        }
    }

    let living = &quotation.living_room;
    if is_present(&living.area) || is_present(&living.rate) {
        lines.push(CostLine::new("Living Room", &living.area, &living.rate));
    }

    for category in WorkCategory::ALL {
        let item = quotation.work_item(category);
        if is_present(&item.quantity) || is_present(&item.rate) {
            lines.push(CostLine::new(category.name(), &item.quantity, &item.rate));
        }
    }

    lines
}
