mod draft_record;
mod form_field;
mod number;
mod product_type;
mod region;
mod wire_payload;

pub use draft_record::DraftRecord;
pub use form_field::{FormField, UnknownFieldError};
pub use number::coerce_number;
pub use product_type::ProductType;
pub use region::Region;
pub use wire_payload::{WIRE_FIELDS, to_wire_payload, wire_number};
