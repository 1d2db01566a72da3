mod labelled_input;
mod spinner;

pub use labelled_input::LabelledInput;
pub use spinner::Spinner;
