// Admin CMS catalog endpoints. Storage lives behind `store::ProjectStore`.

pub mod handlers;
