mod lookup;
mod nomination;

pub use lookup::Lookup;
pub use nomination::NominationRecord;
