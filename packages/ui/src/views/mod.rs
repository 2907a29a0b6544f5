mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod prompt_card;
pub use prompt_card::PromptCard;

mod prompt_detail;
pub use prompt_detail::PromptDetail;

mod add_prompt_dialog;
pub use add_prompt_dialog::AddPromptDialog;

mod prompt_browser;
pub use prompt_browser::PromptBrowser;
