pub mod button;
pub mod field;
pub mod input;
pub mod radio;
pub mod textarea;

pub use button::Button;
pub use field::FieldFooter;
pub use input::Input;
pub use radio::{Radio, RadioGroup, RadioOption};
pub use textarea::Textarea;
