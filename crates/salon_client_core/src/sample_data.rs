//! Illustrative dashboard data shown by the template.

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "تایید شده",
            AppointmentStatus::Pending => "در انتظار",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Staff {
    pub name: &'static str,
    /// Single letter shown in the avatar circle.
    pub avatar: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Appointment {
    pub time: &'static str,
    pub customer: &'static str,
    pub service: &'static str,
    pub status: AppointmentStatus,
    pub staff: Staff,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub today_appointments: u32,
    pub today_revenue: u64,
    pub total_customers: u32,
    pub satisfaction: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    Birthday,
    Inventory,
    Appointment,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Reminder {
    #[serde(rename = "type")]
    pub reminder_type: ReminderType,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Bootstrap contextual color: `warning`, `danger`, `info`.
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleData {
    pub appointments: Vec<Appointment>,
    pub stats: Stats,
    pub reminders: Vec<Reminder>,
}

static SAMPLE_DATA: Lazy<SampleData> = Lazy::new(|| SampleData {
    appointments: vec![
        Appointment {
            time: "09:00",
            customer: "سارا احمدی",
            service: "کوتاهی مو + میکاپ",
            status: AppointmentStatus::Confirmed,
            staff: Staff { name: "مریم کریمی", avatar: "م" },
        },
        Appointment {
            time: "10:30",
            customer: "فاطمه رضایی",
            service: "ناخن + ابرو",
            status: AppointmentStatus::Pending,
            staff: Staff { name: "زهرا احمدی", avatar: "ز" },
        },
        Appointment {
            time: "14:00",
            customer: "مینا حسینی",
            service: "رنگ مو + فر",
            status: AppointmentStatus::Confirmed,
            staff: Staff { name: "مریم کریمی", avatar: "م" },
        },
    ],
    stats: Stats {
        today_appointments: 12,
        today_revenue: 2_450_000,
        total_customers: 234,
        satisfaction: 4.8,
    },
    reminders: vec![
        Reminder {
            reminder_type: ReminderType::Birthday,
            icon: "bi-gift",
            title: "تولد مشتری",
            description: "سارا احمدی - امروز",
            color: "warning",
        },
        Reminder {
            reminder_type: ReminderType::Inventory,
            icon: "bi-exclamation-triangle",
            title: "کمبود موجودی",
            description: "شامپو کراتینه",
            color: "danger",
        },
        Reminder {
            reminder_type: ReminderType::Appointment,
            icon: "bi-clock",
            title: "نوبت فردا",
            description: "مینا حسینی - 10:00",
            color: "info",
        },
    ],
});

pub fn sample_data() -> &'static SampleData {
    &SAMPLE_DATA
}
