//! Dashboard quick-action buttons. Only the press feedback and logging exist so far.

use tracing::info;

/// How long a pressed button stays scaled down (ms).
pub const PRESS_FEEDBACK_MS: u64 = 150;
pub const PRESSED_TRANSFORM: &str = "scale(0.95)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuickAction {
    NewAppointment,
    NewCustomer,
    RecordPayment,
    ViewInventory,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::NewAppointment,
        QuickAction::NewCustomer,
        QuickAction::RecordPayment,
        QuickAction::ViewInventory,
    ];

    /// Button caption; also the key the action is looked up by.
    pub fn label(self) -> &'static str {
        match self {
            QuickAction::NewAppointment => "نوبت جدید",
            QuickAction::NewCustomer => "مشتری جدید",
            QuickAction::RecordPayment => "ثبت پرداخت",
            QuickAction::ViewInventory => "مشاهده انبار",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            QuickAction::NewAppointment => "bi-calendar-plus",
            QuickAction::NewCustomer => "bi-person-plus",
            QuickAction::RecordPayment => "bi-credit-card",
            QuickAction::ViewInventory => "bi-box-seam",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label.trim())
    }

    /// Log line written when the action fires.
    pub fn log_message(self) -> &'static str {
        match self {
            QuickAction::NewAppointment => "ایجاد نوبت جدید",
            QuickAction::NewCustomer => "ایجاد مشتری جدید",
            QuickAction::RecordPayment => "ثبت پرداخت",
            QuickAction::ViewInventory => "مشاهده انبار",
        }
    }

    pub fn run(self) {
        info!(action = ?self, "{}", self.log_message());
        match self {
            // TODO: open the new-appointment modal once appointment booking exists
            QuickAction::NewAppointment => {}
            // TODO: open the new-customer modal
            QuickAction::NewCustomer => {}
            // TODO: open the payment modal
            QuickAction::RecordPayment => {}
            // TODO: navigate to inventory.html when the inventory page ships
            QuickAction::ViewInventory => {}
        }
    }
}
