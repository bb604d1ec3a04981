mod copy_button;
mod icons;
mod section_view;
mod tab_switcher;

pub use copy_button::CopyButton;
pub use icons::{IconBookOpen, IconClipboard, IconClipboardCheck, IconCode, IconEye, IconTerminal};
pub use section_view::SectionView;
pub use tab_switcher::TabSwitcher;
