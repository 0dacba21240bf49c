mod edit;
mod operation;

pub use edit::Edit;
pub use operation::Operation;
