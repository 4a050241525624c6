pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod code_block;
pub mod code_tabs;
pub mod input;
pub mod select;
pub mod tabs;

pub use badge::{Badge, RequirementBadge};
pub use button::Button;
pub use card::Card;
pub use checkbox::Checkbox;
pub use code_block::CodeBlock;
pub use code_tabs::{CodeTabItem, CodeTabs};
pub use input::Input;
pub use select::Select;
pub use tabs::{TabItem, Tabs, TabsController};
