pub mod aqi_card;
pub mod aqi_dashboard;
pub mod dashboard_panel;
pub mod gauge;

pub use aqi_card::AqiCard;
pub use aqi_dashboard::AqiDashboard;
pub use dashboard_panel::DashboardPanel;
pub use gauge::Gauge;
