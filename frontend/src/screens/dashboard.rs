use crate::widgets::{Card, ChartCard, QuickActions};
use dioxus::prelude::*;
use salon_client_core::format::{format_currency, format_number, to_persian_digits};
use salon_client_core::sample_data::sample_data;
use salon_client_core::ChartKind;

#[component]
fn StatCard(icon: String, label: String, value: String) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-title",
                i { class: "bi {icon}" }
                span { class: "stat-label", "{label}" }
            }
            div { class: "stat-value", "{value}" }
        }
    }
}

#[component]
pub fn DashboardScreen() -> Element {
    let data = sample_data();
    let stats = &data.stats;

    rsx! {
        div { class: "content",
            div { class: "stats",
                StatCard {
                    icon: "bi-calendar-check",
                    label: "نوبت‌های امروز",
                    value: format_number(stats.today_appointments as f64),
                }
                StatCard {
                    icon: "bi-cash-coin",
                    label: "درآمد امروز",
                    value: format_currency(stats.today_revenue as f64),
                }
                StatCard {
                    icon: "bi-people",
                    label: "کل مشتریان",
                    value: format_number(stats.total_customers as f64),
                }
                StatCard {
                    icon: "bi-star",
                    label: "رضایت مشتریان",
                    value: format_number(stats.satisfaction),
                }
            }
            div { class: "grid-2",
                ChartCard { kind: ChartKind::Revenue, title: "درآمد هفتگی", icon: "bi-graph-up" }
                ChartCard { kind: ChartKind::Services, title: "خدمات پرطرفدار", icon: "bi-pie-chart" }
            }
            div { class: "grid-2",
                Card { title: "نوبت‌های امروز", icon: "bi-clock",
                    table { class: "appointments",
                        thead {
                            tr {
                                th { "ساعت" }
                                th { "مشتری" }
                                th { "خدمات" }
                                th { "آرایشگر" }
                                th { "وضعیت" }
                            }
                        }
                        tbody {
                            for appt in data.appointments.iter() {
                                tr { key: "{appt.time}",
                                    td { "{to_persian_digits(appt.time)}" }
                                    td { "{appt.customer}" }
                                    td { "{appt.service}" }
                                    td {
                                        span { class: "avatar", "{appt.staff.avatar}" }
                                        "{appt.staff.name}"
                                    }
                                    td {
                                        span {
                                            class: "status status-{appt.status.as_str()}",
                                            "{appt.status.label()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    Card { title: "یادآوری‌ها", icon: "bi-bell",
                        for reminder in data.reminders.iter() {
                            div { key: "{reminder.title}", class: "reminder reminder-{reminder.color}",
                                i { class: "bi {reminder.icon}" }
                                div {
                                    strong { "{reminder.title}" }
                                    div { class: "stat-label", "{to_persian_digits(reminder.description)}" }
                                }
                            }
                        }
                    }
                    Card { title: "دسترسی سریع", icon: "bi-lightning", class: "mt",
                        QuickActions {}
                    }
                }
            }
        }
    }
}
