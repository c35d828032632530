use super::QuoteForm;
use crate::error::QuoteError;
use crate::model::{
    BedroomItem, BhkType, ClientField, LivingRoomItem, RoomField, WorkCategory, WorkField,
};

/// A single user edit to the quotation form.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetClientField {
        field: ClientField,
        value: String,
    },
    SetBhkType(BhkType),
    SelectBedroom(usize),
    ToggleBedroomItem {
        index: usize,
        item: BedroomItem,
    },
    UpdateBedroomField {
        index: usize,
        field: RoomField,
        value: String,
    },
    ToggleLivingRoomItem(LivingRoomItem),
    UpdateLivingRoomField {
        field: RoomField,
        value: String,
    },
    UpdateCategoryField {
        category: WorkCategory,
        field: WorkField,
        value: String,
    },
}

/// Apply `action` to `state`, returning the next state.
///
/// The input state is never modified; on error it remains the current state.
/// Only bedroom indices can fail.
pub fn reduce(state: &QuoteForm, action: Action) -> Result<QuoteForm, QuoteError> {
    let mut next = state.clone();

    match action {
        Action::SetClientField { field, value } => {
            next.quotation.client.set_field(field, value);
        }
        Action::SetBhkType(bhk) => {
            next.quotation.resize_bedrooms(bhk);
            let last = bhk.bedroom_count() - 1;
            if next.active_bedroom > last {
                next.active_bedroom = last;
            }
            tracing::debug!(
                bhk = bhk.bedroom_count(),
                active = next.active_bedroom,
                "bedrooms resized"
            );
        }
        Action::SelectBedroom(index) => {
            let len = next.quotation.bedrooms.len();
            if index >= len {
                return Err(QuoteError::InvalidIndex { index, len });
            }
            next.active_bedroom = index;
        }
        Action::ToggleBedroomItem { index, item } => {
            next.quotation.bedroom_mut(index)?.items.toggle(item);
        }
        Action::UpdateBedroomField {
            index,
            field,
            value,
        } => {
            next.quotation.bedroom_mut(index)?.set_field(field, value);
        }
        Action::ToggleLivingRoomItem(item) => {
            next.quotation.living_room.items.toggle(item);
        }
        Action::UpdateLivingRoomField { field, value } => {
            next.quotation.living_room.set_field(field, value);
        }
        Action::UpdateCategoryField {
            category,
            field,
            value,
        } => {
            next.quotation.work_item_mut(category).set_field(field, value);
        }
    }

    Ok(next)
}
