mod card;
mod chart_card;
mod notification_stack;
mod quick_actions;
mod sidebar;
mod top_bar;

pub use card::Card;
pub use chart_card::ChartCard;
pub use notification_stack::NotificationStack;
pub use quick_actions::QuickActions;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
