pub mod amount;
pub mod bedroom;
pub mod living_room;
pub mod quotation;
pub mod work;

pub use amount::{is_present, parse_amount};
pub use bedroom::{Bedroom, BedroomItem, BedroomItems, RoomField};
pub use living_room::{LivingRoom, LivingRoomItem, LivingRoomItems};
pub use quotation::{
    load_quotation, BhkType, ClientDetails, ClientField, QuoteSnapshot, Quotation,
};
pub use work::{WorkCategory, WorkField, WorkItem};
