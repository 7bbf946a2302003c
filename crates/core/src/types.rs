/// Movie identifiers are opaque strings. Generated ids are UUID v4, seeded
/// ids are taken verbatim from the dataset.
pub type MovieId = String;
