mod coming_soon;
mod soon_button;
mod token_icon;
mod token_selector;

pub use coming_soon::ComingSoon;
pub use soon_button::SoonButton;
pub use token_icon::TokenIcon;
pub use token_selector::TokenSelector;
