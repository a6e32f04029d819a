//! Central button construction helpers ensuring consistent padding and style.
use crate::ui::style::pad_nav;
use serenity::builder::CreateButton;
use serenity::model::application::ButtonStyle;

pub struct Btn;
impl Btn {
    pub fn nav(id: &str, label: &str, disabled: bool) -> CreateButton {
        CreateButton::new(id)
            .label(pad_nav(label))
            .style(ButtonStyle::Primary)
            .disabled(disabled)
    }
}
