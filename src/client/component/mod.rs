pub mod layout;
pub mod page;
pub mod text_input;

pub use layout::Layout;
pub use page::Page;
pub use text_input::TextInput;
